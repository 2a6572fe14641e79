use std::fmt::Display;

use crate::backgammon::{BAR_PIPS, POINTS, Player, QUADRANT};

/// Checkers each player owns.
pub const CHECKERS: u8 = 15;

/// A full backgammon position: checkers per point, bar and off counts for both
/// players, and whose turn it is.
///
/// Points are stored as signed counts, positive for [`Player::White`] and negative for
/// [`Player::Black`], so a point can never be shared. Boards are values: every move
/// produces a new board and the original stays untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    points: [i8; POINTS as usize],
    bar: [u8; 2],
    off: [u8; 2],
    turn: Player,
}

impl Board {
    /// The standard starting position with White on turn.
    pub fn starting_position() -> Self {
        Board {
            points: [-2, 0, 0, 0, 0, 5, 0, 3, 0, 0, 0, -5, 5, 0, 0, 0, -3, 0, -5, 0, 0, 0, 0, 2],
            bar: [0, 0],
            off: [0, 0],
            turn: Player::White,
        }
    }

    /// A board without any checkers. Only useful as a starting point for
    /// [`Board::with_checkers`] and friends.
    pub fn empty(turn: Player) -> Self {
        Board {
            points: [0; POINTS as usize],
            bar: [0, 0],
            off: [0, 0],
            turn,
        }
    }

    /// Places `count` checkers of `player` on `point`, replacing whatever was there.
    ///
    /// The `with_*` builders do not check the checker count; use [`Board::deserialize`]
    /// for untrusted input.
    pub fn with_checkers(mut self, point: u8, player: Player, count: u8) -> Self {
        self.set_point(point, player, count);
        self
    }

    pub fn with_bar(mut self, player: Player, count: u8) -> Self {
        self.bar[player.index()] = count;
        self
    }

    pub fn with_off(mut self, player: Player, count: u8) -> Self {
        self.off[player.index()] = count;
        self
    }

    pub fn with_turn(mut self, turn: Player) -> Self {
        self.turn = turn;
        self
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn bar(&self, player: Player) -> u8 {
        self.bar[player.index()]
    }

    pub fn off(&self, player: Player) -> u8 {
        self.off[player.index()]
    }

    /// Owner and size of the stack on `point` (1..=24), `None` when it is empty or
    /// `point` is not on the board.
    pub fn checkers_at(&self, point: u8) -> Option<(Player, u8)> {
        let value = self.signed_at(point)?;
        match value {
            0 => None,
            v if v > 0 => Some((Player::White, v.unsigned_abs())),
            v => Some((Player::Black, v.unsigned_abs())),
        }
    }

    /// Number of `player`'s checkers on `point`; zero for sentinels and foreign stacks.
    pub fn count_for(&self, player: Player, point: u8) -> u8 {
        match self.checkers_at(point) {
            Some((owner, count)) if owner == player => count,
            _ => 0,
        }
    }

    /// Whether `point` holds two or more checkers of `player`'s opponent.
    /// The bar and off slots are never blocked.
    pub fn is_blocked(&self, player: Player, point: u8) -> bool {
        self.count_for(player.opposite(), point) >= 2
    }

    /// Checkers of `player` on points, bar and off combined.
    pub fn checker_total(&self, player: Player) -> u32 {
        let on_points: u32 = (1..=POINTS).map(|point| self.count_for(player, point) as u32).sum();
        on_points + self.bar(player) as u32 + self.off(player) as u32
    }

    /// Pip distance of `player`'s checker farthest from bearing off, counting the bar.
    pub fn farthest_pips(&self, player: Player) -> Option<u8> {
        if self.bar(player) > 0 {
            return Some(BAR_PIPS);
        }
        player
            .points_farthest_first()
            .find(|&point| self.count_for(player, point) > 0)
            .map(|point| player.pips(point))
    }

    /// True when every checker of `player` not yet borne off sits in its home quadrant.
    pub fn can_bear_off(&self, player: Player) -> bool {
        self.farthest_pips(player).is_none_or(|pips| pips <= QUADRANT)
    }

    /// Total pips `player` still has to travel; checkers on the bar count 25 each.
    pub fn pip_count(&self, player: Player) -> u32 {
        let on_points: u32 = (1..=POINTS)
            .map(|point| self.count_for(player, point) as u32 * player.pips(point) as u32)
            .sum();
        on_points + self.bar(player) as u32 * BAR_PIPS as u32
    }

    pub(crate) fn signed_at(&self, point: u8) -> Option<i8> {
        if (1..=POINTS).contains(&point) {
            Some(self.points[point as usize - 1])
        } else {
            None
        }
    }

    pub(crate) fn set_point(&mut self, point: u8, player: Player, count: u8) {
        if let Some(slot) = self.points.get_mut((point as usize).wrapping_sub(1)) {
            *slot = player.sign() * count.min(i8::MAX as u8) as i8;
        }
    }

    pub(crate) fn set_signed(&mut self, point: u8, value: i8) {
        if let Some(slot) = self.points.get_mut((point as usize).wrapping_sub(1)) {
            *slot = value;
        }
    }

    pub(crate) fn set_bar(&mut self, player: Player, count: u8) {
        self.bar[player.index()] = count;
    }

    pub(crate) fn set_off(&mut self, player: Player, count: u8) {
        self.off[player.index()] = count;
    }

    pub(crate) fn switch_turn(&mut self) {
        self.turn = self.turn.opposite();
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl Display for Board {
    /// White's view: points 13..24 on top, 12..1 at the bottom. White checkers are
    /// positive, Black checkers negative.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = |point: u8| self.points[point as usize - 1];
        writeln!(f, "13  14  15  16  17  18  |bar|  19  20  21  22  23  24  |off|")?;
        for point in 13..=18 {
            write!(f, "{:<4}", p(point))?;
        }
        write!(f, "| {:1} |  ", self.bar(Player::Black))?;
        for point in 19..=24 {
            write!(f, "{:<4}", p(point))?;
        }
        writeln!(f, "| {:2}| B", self.off(Player::Black))?;
        writeln!(f, "=============================================================")?;
        for point in (7..=12).rev() {
            write!(f, "{:<4}", p(point))?;
        }
        write!(f, "| {:1} |  ", self.bar(Player::White))?;
        for point in (1..=6).rev() {
            write!(f, "{:<4}", p(point))?;
        }
        writeln!(f, "| {:2}| W", self.off(Player::White))?;
        writeln!(f, "12  11  10   9   8   7  |bar|   6   5   4   3   2   1  |off|")?;
        write!(f, "{} to move", self.turn)
    }
}
