use std::fmt::Display;

use rand::random_range;

use crate::{
    backgammon::QUADRANT,
    error::{EngineError, Result},
};

/// Checks that `value` is a face of a six-sided die.
pub fn die_value(value: u8) -> Result<u8> {
    if (1..=QUADRANT).contains(&value) {
        Ok(value)
    } else {
        Err(EngineError::InvalidDie(value))
    }
}

/// An unordered pair of die values. Stored with the smaller value first so that
/// `3-5` and `5-3` are the same roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DieRoll {
    low: u8,
    high: u8,
}

impl DieRoll {
    pub fn new(die1: u8, die2: u8) -> Result<Self> {
        let die1 = die_value(die1)?;
        let die2 = die_value(die2)?;
        Ok(DieRoll::from_numbers(die1, die2))
    }

    const fn from_numbers(die1: u8, die2: u8) -> Self {
        if die1 <= die2 {
            DieRoll { low: die1, high: die2 }
        } else {
            DieRoll { low: die2, high: die1 }
        }
    }

    pub fn roll() -> Self {
        let die1 = random_range(1..=6);
        let die2 = random_range(1..=6);
        DieRoll::from_numbers(die1, die2)
    }

    pub fn low(&self) -> u8 {
        self.low
    }

    pub fn high(&self) -> u8 {
        self.high
    }

    pub fn is_double(&self) -> bool {
        self.low == self.high
    }

    /// Number of single-die steps this roll grants.
    pub fn steps(&self) -> usize {
        if self.is_double() { 4 } else { 2 }
    }

    /// Usage state for a fresh turn with this roll.
    pub fn remaining(&self) -> RemainingDice {
        if self.is_double() {
            RemainingDice::Double { value: self.low, used: 0 }
        } else {
            RemainingDice::Single {
                value_1: self.high,
                value_2: self.low,
                used: DiceUsage::BothAvailable,
            }
        }
    }

    pub const ALL: [DieRoll; 21] = [
        DieRoll::from_numbers(1, 1),
        DieRoll::from_numbers(1, 2),
        DieRoll::from_numbers(1, 3),
        DieRoll::from_numbers(1, 4),
        DieRoll::from_numbers(1, 5),
        DieRoll::from_numbers(1, 6),
        DieRoll::from_numbers(2, 2),
        DieRoll::from_numbers(2, 3),
        DieRoll::from_numbers(2, 4),
        DieRoll::from_numbers(2, 5),
        DieRoll::from_numbers(2, 6),
        DieRoll::from_numbers(3, 3),
        DieRoll::from_numbers(3, 4),
        DieRoll::from_numbers(3, 5),
        DieRoll::from_numbers(3, 6),
        DieRoll::from_numbers(4, 4),
        DieRoll::from_numbers(4, 5),
        DieRoll::from_numbers(4, 6),
        DieRoll::from_numbers(5, 5),
        DieRoll::from_numbers(5, 6),
        DieRoll::from_numbers(6, 6),
    ];
}

impl Display for DieRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.high, self.low)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiceUsage {
    BothAvailable,
    OnlyFirstAvailable,
    OnlySecondAvailable,
    BothUsed,
}

/// Which dice of a roll are still unplayed during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemainingDice {
    Double { value: u8, used: u8 },
    Single { value_1: u8, value_2: u8, used: DiceUsage },
}

impl RemainingDice {
    pub fn is_used(&self) -> bool {
        match self {
            RemainingDice::Double { used, .. } => *used >= 4,
            RemainingDice::Single { used, .. } => *used == DiceUsage::BothUsed,
        }
    }

    /// Distinct die values that can still be played, higher die first.
    pub fn available(&self) -> impl Iterator<Item = u8> + use<> {
        let values = match *self {
            RemainingDice::Double { value, used } if used < 4 => [Some(value), None],
            RemainingDice::Double { .. } => [None, None],
            RemainingDice::Single { value_1, value_2, used } => match used {
                DiceUsage::BothAvailable => [Some(value_1), Some(value_2)],
                DiceUsage::OnlyFirstAvailable => [Some(value_1), None],
                DiceUsage::OnlySecondAvailable => [Some(value_2), None],
                DiceUsage::BothUsed => [None, None],
            },
        };
        values.into_iter().flatten()
    }

    /// Marks one die showing `die` as played. Playing a die that is not available
    /// leaves the state unchanged.
    pub fn use_die(&self, die: u8) -> RemainingDice {
        let mut next = *self;
        match &mut next {
            RemainingDice::Double { value, used } => {
                if *value == die && *used < 4 {
                    *used += 1;
                }
            }
            RemainingDice::Single { value_1, value_2, used } => {
                if *value_1 == die {
                    *used = match *used {
                        DiceUsage::BothAvailable => DiceUsage::OnlySecondAvailable,
                        DiceUsage::OnlyFirstAvailable => DiceUsage::BothUsed,
                        other => other,
                    };
                } else if *value_2 == die {
                    *used = match *used {
                        DiceUsage::BothAvailable => DiceUsage::OnlyFirstAvailable,
                        DiceUsage::OnlySecondAvailable => DiceUsage::BothUsed,
                        other => other,
                    };
                }
            }
        }
        next
    }
}
