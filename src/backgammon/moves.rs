use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

/// What a single checker move does. Origin and destination semantics differ per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MoveKind {
    /// Point to point.
    #[default]
    #[serde(rename = "NORMAL_MOVE")]
    Normal,
    /// Bar to point.
    #[serde(rename = "CHECKER_ON_BAR_MOVE")]
    FromBar,
    /// Point to off.
    #[serde(rename = "BEARING_OFF_MOVE")]
    BearOff,
}

/// One checker moved by one die.
///
/// `from` and `to` use wire indices (see [`crate::backgammon::Position`]): points are
/// `1..=24`, the mover's bar and off slot are the player-relative sentinels `0` and `25`.
/// Two moves are the same move when the triple `(from, to, kind)` matches; which checker
/// of a stack is picked up is irrelevant.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub from: u8,
    pub to: u8,
    #[serde(rename = "move_type", alias = "moveType")]
    pub kind: MoveKind,
}

impl Move {
    pub fn new(from: u8, to: u8, kind: MoveKind) -> Self {
        Move { from, to, kind }
    }

    pub fn normal(from: u8, to: u8) -> Self {
        Move::new(from, to, MoveKind::Normal)
    }

    pub fn from_bar(bar: u8, to: u8) -> Self {
        Move::new(bar, to, MoveKind::FromBar)
    }

    pub fn bear_off(from: u8, off: u8) -> Self {
        Move::new(from, off, MoveKind::BearOff)
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({:?})", self.from, self.to, self.kind)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            MoveKind::Normal => write!(f, "{}/{}", self.from, self.to),
            MoveKind::FromBar => write!(f, "bar/{}", self.to),
            MoveKind::BearOff => write!(f, "{}/off", self.from),
        }
    }
}
