//! String-in, value-out entry points for a request/response layer.
//!
//! Every function takes a serialized board (see [`Board::serialize`]), decodes it, runs
//! one engine operation and returns plain values. Nothing is cached between calls, so
//! the functions can be called from any number of threads at once.

use hashbrown::HashSet;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    backgammon::{Board, DieRoll, Move, MoveSequence, die_value},
    config::GeneratorConfig,
    error::Result,
};

/// Legal moves for one die.
pub fn moves_for_die(serialized_board: &str, die: u8) -> Result<Vec<Move>> {
    let board = Board::deserialize(serialized_board)?;
    let die = die_value(die)?;
    Ok(board.legal_moves(die))
}

/// Every move that appears in some legal way of playing the roll, each listed once.
/// Which moves belong together is dropped here; use [`sequences_for_roll`] to keep it.
pub fn moves_for_roll(serialized_board: &str, die1: u8, die2: u8) -> Result<Vec<Move>> {
    moves_for_roll_with(serialized_board, die1, die2, &GeneratorConfig::default())
}

pub fn moves_for_roll_with(
    serialized_board: &str,
    die1: u8,
    die2: u8,
    config: &GeneratorConfig,
) -> Result<Vec<Move>> {
    let sequences = sequences_for_roll_with(serialized_board, die1, die2, config)?;
    let mut seen = HashSet::new();
    let moves: Vec<Move> = sequences
        .iter()
        .flat_map(|sequence| sequence.iter().copied())
        .filter(|mv| seen.insert(*mv))
        .collect();
    debug!("flattened {} sequences into {} moves", sequences.len(), moves.len());
    Ok(moves)
}

/// Every complete way of playing the roll, in order.
pub fn sequences_for_roll(serialized_board: &str, die1: u8, die2: u8) -> Result<Vec<MoveSequence>> {
    sequences_for_roll_with(serialized_board, die1, die2, &GeneratorConfig::default())
}

pub fn sequences_for_roll_with(
    serialized_board: &str,
    die1: u8,
    die2: u8,
    config: &GeneratorConfig,
) -> Result<Vec<MoveSequence>> {
    let board = Board::deserialize(serialized_board)?;
    let roll = DieRoll::new(die1, die2)?;
    Ok(board.legal_rolls_with(roll, config))
}

/// Plays `mv` on the serialized board and returns the new serialized board.
pub fn apply_move(serialized_board: &str, mv: Move, advance_turn: bool) -> Result<String> {
    let board = Board::deserialize(serialized_board)?;
    Ok(board.apply(mv, advance_turn)?.serialize())
}

/// Body of a move request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub board_str: String,
    #[serde(rename = "move")]
    pub mv: Move,
    #[serde(default)]
    pub end_of_turn: bool,
}

impl MoveRequest {
    pub fn apply(&self) -> Result<BoardResponse> {
        let board = apply_move(&self.board_str, self.mv, self.end_of_turn)?;
        Ok(BoardResponse { board })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovesResponse {
    pub moves: Vec<Move>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequencesResponse {
    pub sequences: Vec<MoveSequence>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardResponse {
    pub board: String,
}
