use std::fmt::Display;

/// The two sides of the board.
///
/// [`Player::White`] travels from point 24 down to point 1 and bears off below it,
/// [`Player::Black`] travels from point 1 up to point 24 and bears off above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::White, Player::Black];

    pub fn opposite(&self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Index into per-player arrays (bar, off).
    pub fn index(&self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    /// Sign of this player's checkers in the signed point representation.
    pub fn sign(&self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    pub fn marker(&self) -> char {
        match self {
            Player::White => 'W',
            Player::Black => 'B',
        }
    }

    pub fn from_marker(marker: &str) -> Option<Player> {
        match marker {
            "W" | "w" => Some(Player::White),
            "B" | "b" => Some(Player::Black),
            _ => None,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}
