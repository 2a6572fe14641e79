use std::fmt::Debug;

use crate::backgammon::Player;

/// Number of ordinary points on the board.
pub const POINTS: u8 = 24;

/// Points per quadrant; also the highest die value.
pub const QUADRANT: u8 = 6;

/// Pip distance of the bar. Entering checkers count as being one step behind the farthest point.
pub const BAR_PIPS: u8 = 25;

/// A location on the board as seen by one player.
///
/// The wire form of a location is an integer in `0..=25`: the 24 points keep their numbers,
/// and the two slots outside the board are player relative. A player's bar sits behind
/// its starting edge and its off slot past its bear-off edge, so White (moving down) has
/// bar = 25 and off = 0 while Black (moving up) has bar = 0 and off = 25.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    Bar,
    Off,
    Point(u8),
}

impl Position {
    /// Decodes a wire index for `player`. Returns `None` for indices outside `0..=25`.
    pub fn from_index(index: u8, player: Player) -> Option<Self> {
        match index {
            1..=POINTS => Some(Position::Point(index)),
            _ if index == player.bar_index() => Some(Position::Bar),
            _ if index == player.off_index() => Some(Position::Off),
            _ => None,
        }
    }

    pub fn to_index(&self, player: Player) -> u8 {
        match *self {
            Position::Bar => player.bar_index(),
            Position::Off => player.off_index(),
            Position::Point(n) => n,
        }
    }
}

impl Debug for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Bar => write!(f, "Bar"),
            Position::Off => write!(f, "Off"),
            Position::Point(n) => write!(f, "Point({})", n),
        }
    }
}

/// Direction-of-play geometry. Every rule is expressed in pips (distance to the
/// player's bear-off edge) so both players share one code path.
impl Player {
    /// Distance from `index` to this player's bear-off edge. Works for sentinels too:
    /// the bar is 25 pips away and the off slot 0.
    pub fn pips(&self, index: u8) -> u8 {
        match self {
            Player::White => index,
            Player::Black => BAR_PIPS - index,
        }
    }

    /// Inverse of [`Player::pips`].
    pub fn index_at(&self, pips: u8) -> u8 {
        match self {
            Player::White => pips,
            Player::Black => BAR_PIPS - pips,
        }
    }

    pub fn bar_index(&self) -> u8 {
        self.index_at(BAR_PIPS)
    }

    pub fn off_index(&self) -> u8 {
        self.index_at(0)
    }

    /// Whether `point` lies in this player's home quadrant.
    pub fn is_home(&self, point: u8) -> bool {
        (1..=POINTS).contains(&point) && self.pips(point) <= QUADRANT
    }

    /// The point a checker reaches when entering from the bar with `die`.
    pub fn entry_point(&self, die: u8) -> u8 {
        self.index_at(BAR_PIPS - die)
    }

    /// Points ordered from the farthest (24 pips) to the nearest (1 pip).
    pub fn points_farthest_first(&self) -> impl Iterator<Item = u8> + use<> {
        let player = *self;
        (1..=POINTS).rev().map(move |pips| player.index_at(pips))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_player_relative() {
        assert_eq!(Player::White.bar_index(), 25);
        assert_eq!(Player::White.off_index(), 0);
        assert_eq!(Player::Black.bar_index(), 0);
        assert_eq!(Player::Black.off_index(), 25);
    }

    #[test]
    fn test_position_index_conversion() {
        assert_eq!(Position::from_index(25, Player::White), Some(Position::Bar));
        assert_eq!(Position::from_index(25, Player::Black), Some(Position::Off));
        assert_eq!(Position::from_index(0, Player::Black), Some(Position::Bar));
        assert_eq!(Position::from_index(13, Player::Black), Some(Position::Point(13)));
        assert_eq!(Position::from_index(26, Player::White), None);
        for player in Player::BOTH {
            for index in 0..=25 {
                let position = Position::from_index(index, player).unwrap();
                assert_eq!(position.to_index(player), index);
            }
        }
    }

    #[test]
    fn test_home_and_entry() {
        assert!(Player::White.is_home(6));
        assert!(!Player::White.is_home(7));
        assert!(Player::Black.is_home(19));
        assert!(!Player::Black.is_home(18));
        assert!(!Player::White.is_home(0));
        assert_eq!(Player::White.entry_point(1), 24);
        assert_eq!(Player::White.entry_point(6), 19);
        assert_eq!(Player::Black.entry_point(1), 1);
        assert_eq!(Player::Black.entry_point(6), 6);
    }

    #[test]
    fn test_points_farthest_first() {
        let white: Vec<u8> = Player::White.points_farthest_first().collect();
        let black: Vec<u8> = Player::Black.points_farthest_first().collect();
        assert_eq!(white.first(), Some(&24));
        assert_eq!(white.last(), Some(&1));
        assert_eq!(black.first(), Some(&1));
        assert_eq!(black.last(), Some(&24));
    }
}
