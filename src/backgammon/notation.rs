//! Canonical text form of a [`Board`].
//!
//! 29 comma separated tokens: the signed checker counts of points 1 to 24 (positive for
//! White, negative for Black), White's and Black's bar counts, White's and Black's off
//! counts, and the turn marker `W` or `B`. The starting position reads
//!
//! ```text
//! -2,0,0,0,0,5,0,3,0,0,0,-5,5,0,0,0,-3,0,-5,0,0,0,0,2,0,0,0,0,W
//! ```
//!
//! Parsing tolerates whitespace around tokens, a leading `+` and a lower case turn marker.
//! Serialization always produces the canonical spelling.

use std::{fmt::Write, str::FromStr};

use crate::{
    backgammon::{Board, CHECKERS, POINTS, Player},
    error::{EngineError, Result},
};

pub const TOKEN_COUNT: usize = POINTS as usize + 5;

const SEPARATOR: char = ',';

impl Board {
    /// Decodes a serialized board, rejecting anything that is not a structurally valid,
    /// checker-conserving position.
    pub fn deserialize(input: &str) -> Result<Board> {
        let tokens: Vec<&str> = input.split(SEPARATOR).map(str::trim).collect();
        if tokens.len() != TOKEN_COUNT {
            return Err(malformed(format!(
                "expected {TOKEN_COUNT} tokens, found {}",
                tokens.len()
            )));
        }

        let turn = Player::from_marker(tokens[TOKEN_COUNT - 1])
            .ok_or_else(|| malformed(format!("unknown turn marker {:?}", tokens[TOKEN_COUNT - 1])))?;
        let mut board = Board::empty(turn);

        for (point, token) in (1..=POINTS).zip(&tokens) {
            let value: i8 = parse_token(token, point as usize)?;
            if value.unsigned_abs() > CHECKERS {
                return Err(malformed(format!("point {point} holds {value} checkers")));
            }
            board.set_signed(point, value);
        }

        let counts = &tokens[POINTS as usize..TOKEN_COUNT - 1];
        let mut slots = [0u8; 4];
        for (i, token) in counts.iter().enumerate() {
            let value: u8 = parse_token(token, POINTS as usize + i + 1)?;
            if value > CHECKERS {
                return Err(malformed(format!("token {} holds {value} checkers", POINTS as usize + i + 1)));
            }
            slots[i] = value;
        }
        board.set_bar(Player::White, slots[0]);
        board.set_bar(Player::Black, slots[1]);
        board.set_off(Player::White, slots[2]);
        board.set_off(Player::Black, slots[3]);

        for player in Player::BOTH {
            let total = board.checker_total(player);
            if total != CHECKERS as u32 {
                return Err(malformed(format!("{player} has {total} checkers, expected {CHECKERS}")));
            }
        }

        Ok(board)
    }

    /// Canonical serialized form. Equal boards always serialize identically.
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(TOKEN_COUNT * 3);
        for point in 1..=POINTS {
            let value = self.signed_at(point).unwrap_or(0);
            let _ = write!(out, "{value}{SEPARATOR}");
        }
        let _ = write!(
            out,
            "{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}",
            self.bar(Player::White),
            self.bar(Player::Black),
            self.off(Player::White),
            self.off(Player::Black),
            self.turn().marker(),
        );
        out
    }
}

impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Board::deserialize(s)
    }
}

fn parse_token<T: FromStr>(token: &str, position: usize) -> Result<T> {
    token
        .parse()
        .map_err(|_| malformed(format!("token {position} ({token:?}) is not a valid count")))
}

fn malformed(reason: String) -> EngineError {
    EngineError::MalformedBoard(reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "-2,0,0,0,0,5,0,3,0,0,0,-5,5,0,0,0,-3,0,-5,0,0,0,0,2,0,0,0,0,W";

    #[test]
    fn test_starting_position_round_trip() {
        let board = Board::deserialize(START).unwrap();
        assert_eq!(board, Board::starting_position());
        assert_eq!(board.serialize(), START);
    }

    #[test]
    fn test_non_canonical_input_is_normalised() {
        let loose = " -2, 0,0,0,0,+5,0,3,0,0,0,-5,5,0,0,0,-3,0,-5,0,0,0,0,2 ,0,0,0,0,w ";
        let board: Board = loose.parse().unwrap();
        assert_eq!(board.serialize(), START);
    }

    #[test]
    fn test_bar_and_off_tokens() {
        let board = Board::starting_position()
            .with_checkers(24, Player::White, 1)
            .with_bar(Player::White, 1)
            .with_checkers(19, Player::Black, 3)
            .with_off(Player::Black, 2)
            .with_turn(Player::Black);
        let text = board.serialize();
        assert!(text.ends_with(",1,0,0,2,B"));
        assert_eq!(Board::deserialize(&text).unwrap(), board);
    }

    #[test]
    fn test_wrong_token_count() {
        let short = "0,0,W";
        assert!(matches!(Board::deserialize(short), Err(EngineError::MalformedBoard(_))));
        let long = format!("{START},0");
        assert!(matches!(Board::deserialize(&long), Err(EngineError::MalformedBoard(_))));
        assert!(matches!(Board::deserialize(""), Err(EngineError::MalformedBoard(_))));
    }

    #[test]
    fn test_checker_sum_must_be_fifteen() {
        // White short one checker on point 24.
        let fourteen = "-2,0,0,0,0,5,0,3,0,0,0,-5,5,0,0,0,-3,0,-5,0,0,0,0,1,0,0,0,0,W";
        let err = Board::deserialize(fourteen).unwrap_err();
        assert!(matches!(err, EngineError::MalformedBoard(ref reason) if reason.contains("14")));
    }

    #[test]
    fn test_large_totals_are_rejected() {
        // Every token is in range, but White owns 18 * 15 + 1 checkers.
        let mut tokens = vec!["15"; 18];
        tokens.extend(["0"; 5]);
        tokens.extend(["-15", "1", "0", "0", "0", "W"]);
        let crowded = tokens.join(",");
        let err = Board::deserialize(&crowded).unwrap_err();
        assert!(matches!(err, EngineError::MalformedBoard(ref reason) if reason.contains("271")));

        let all_max = format!("{}15,15,15,15,W", "15,".repeat(POINTS as usize));
        assert!(matches!(Board::deserialize(&all_max), Err(EngineError::MalformedBoard(_))));
    }

    #[test]
    fn test_out_of_range_and_garbage_tokens() {
        let huge = "-2,0,0,0,0,16,0,3,0,0,0,-5,5,0,0,0,-3,0,-5,0,0,0,0,2,0,0,0,0,W";
        assert!(Board::deserialize(huge).is_err());
        let overflow = "-2,0,0,0,0,500,0,3,0,0,0,-5,5,0,0,0,-3,0,-5,0,0,0,0,2,0,0,0,0,W";
        assert!(Board::deserialize(overflow).is_err());
        let negative_bar = "-2,0,0,0,0,5,0,3,0,0,0,-5,5,0,0,0,-3,0,-5,0,0,0,0,2,-1,0,0,0,W";
        assert!(Board::deserialize(negative_bar).is_err());
        let garbage = "-2,0,0,0,0,x,0,3,0,0,0,-5,5,0,0,0,-3,0,-5,0,0,0,0,2,0,0,0,0,W";
        assert!(Board::deserialize(garbage).is_err());
    }

    #[test]
    fn test_unknown_turn_marker() {
        let bad = "-2,0,0,0,0,5,0,3,0,0,0,-5,5,0,0,0,-3,0,-5,0,0,0,0,2,0,0,0,0,X";
        let err = Board::deserialize(bad).unwrap_err();
        assert!(err.to_string().contains("turn marker"));
    }
}
