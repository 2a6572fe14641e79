//! Legal move generation and move application for backgammon positions.
//!
//! The engine works on immutable [`backgammon::Board`] values: generate the moves for one
//! die with [`backgammon::Board::legal_moves`], every way of playing a roll with
//! [`backgammon::Board::legal_rolls`], and play a move with [`backgammon::Board::apply`].
//! [`api`] wraps these behind the serialized board format.

pub mod api;
pub mod backgammon;
pub mod config;
pub mod error;
pub mod misc;

pub use error::{EngineError, IllegalMoveReason, Result};
