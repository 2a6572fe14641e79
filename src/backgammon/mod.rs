mod board;
pub use board::{Board, CHECKERS};

mod player;
pub use player::Player;

mod position;
pub use position::{BAR_PIPS, POINTS, Position, QUADRANT};

mod moves;
pub use moves::{Move, MoveKind};

mod sequence;
pub use sequence::{MAX_SEQUENCE_LEN, MoveSequence};

mod dice;
pub use dice::{DiceUsage, DieRoll, RemainingDice, die_value};

mod notation;
pub use notation::TOKEN_COUNT;

mod movegen;

mod rolls;

mod apply;
