use thiserror::Error;

use crate::backgammon::{Move, Player};

pub type Result<T> = std::result::Result<T, EngineError>;

/// Everything the engine can reject. An empty move list is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The serialized board does not decode to a structurally valid position.
    #[error("malformed board: {0}")]
    MalformedBoard(String),

    /// The move breaks a rule of the position it was applied to.
    #[error("illegal move {mv} for {player}: {reason}")]
    IllegalMove {
        mv: Move,
        player: Player,
        reason: IllegalMoveReason,
    },

    #[error("invalid die value {0}, expected 1..=6")]
    InvalidDie(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMoveReason {
    #[error("checkers on the bar must enter first")]
    MustEnterFromBar,
    #[error("no checker on the bar")]
    EmptyBar,
    #[error("no own checker on the origin point")]
    NoCheckerOnOrigin,
    #[error("origin or destination does not fit the move type")]
    WrongGeometry,
    #[error("destination is blocked")]
    Blocked,
    #[error("not all checkers are in the home quadrant")]
    NotAllHome,
}
