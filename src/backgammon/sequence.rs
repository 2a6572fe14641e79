use std::{fmt::{Debug, Display}, ops::Deref};

use serde::{Serialize, Serializer, ser::SerializeSeq};

use crate::{backgammon::Move, misc::TinyVec};

/// Most moves a single turn can contain (doubles).
pub const MAX_SEQUENCE_LEN: usize = 4;

/// One complete way of playing a roll: the ordered list of checker moves.
///
/// Equality and hashing are by the ordered list of `(from, to, kind)` triples, so the
/// same moves played in a different order form a different sequence.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MoveSequence {
    moves: TinyVec<Move, MAX_SEQUENCE_LEN>,
}

impl MoveSequence {
    pub fn new() -> Self {
        MoveSequence { moves: TinyVec::new() }
    }

    /// Returns a copy of this sequence with `mv` appended, or `None` when it already
    /// holds four moves.
    pub fn extended(&self, mv: Move) -> Option<Self> {
        let mut next = *self;
        next.moves.push(mv).ok()?;
        Some(next)
    }
}

impl Deref for MoveSequence {
    type Target = [Move];

    fn deref(&self) -> &Self::Target {
        &self.moves
    }
}

impl FromIterator<Move> for MoveSequence {
    /// Collects at most [`MAX_SEQUENCE_LEN`] moves; extra moves are dropped.
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut sequence = MoveSequence::new();
        for mv in iter.into_iter().take(MAX_SEQUENCE_LEN) {
            let _ = sequence.moves.push(mv);
        }
        sequence
    }
}

impl Serialize for MoveSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for mv in self.iter() {
            seq.serialize_element(mv)?;
        }
        seq.end()
    }
}

impl Debug for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sequence: ")?;
        for (i, mv) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", mv)?;
        }
        Ok(())
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, mv) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", mv)?;
        }
        Ok(())
    }
}
