use log::debug;

use crate::{
    backgammon::{Board, Move, MoveKind, POINTS, Player, Position, QUADRANT},
    error::{EngineError, IllegalMoveReason, Result},
};

impl Board {
    /// Plays `mv` for the player on turn and returns the resulting board.
    ///
    /// Legality is re-derived from the position, the caller does not need to have asked
    /// the generator first. A checker landing on a single opposing checker sends it to
    /// the opponent's bar. With `advance_turn` the other player is on turn afterwards,
    /// otherwise the same player keeps moving (for the remaining dice of a turn).
    pub fn apply(&self, mv: Move, advance_turn: bool) -> Result<Board> {
        let player = self.turn();
        self.check_move(mv).map_err(|reason| {
            debug!("{player} rejected {mv}: {reason}");
            EngineError::IllegalMove { mv, player, reason }
        })?;

        let mut next = *self;
        next.apply_in_place(mv);
        if advance_turn {
            next.switch_turn();
        }
        debug!("{player} played {mv}{}", if advance_turn { ", turn passes" } else { "" });
        Ok(next)
    }

    /// Plays a whole sequence, passing the turn after the last move when `advance_turn`
    /// is set. An empty sequence only passes the turn.
    pub fn play(&self, sequence: &[Move], advance_turn: bool) -> Result<Board> {
        let mut board = *self;
        for mv in sequence {
            board = board.apply(*mv, false)?;
        }
        if advance_turn {
            board.switch_turn();
        }
        Ok(board)
    }

    fn check_move(&self, mv: Move) -> std::result::Result<(), IllegalMoveReason> {
        let player = self.turn();
        let from = Position::from_index(mv.from, player);
        let to = Position::from_index(mv.to, player);

        match (mv.kind, from, to) {
            (MoveKind::FromBar, Some(Position::Bar), Some(Position::Point(to))) => {
                if self.bar(player) == 0 {
                    return Err(IllegalMoveReason::EmptyBar);
                }
                // Entry lands in the opponent's home quadrant.
                if player.pips(to) <= POINTS - QUADRANT {
                    return Err(IllegalMoveReason::WrongGeometry);
                }
                if self.is_blocked(player, to) {
                    return Err(IllegalMoveReason::Blocked);
                }
            }
            (MoveKind::Normal, Some(Position::Point(from)), Some(Position::Point(to))) => {
                if self.bar(player) > 0 {
                    return Err(IllegalMoveReason::MustEnterFromBar);
                }
                if self.count_for(player, from) == 0 {
                    return Err(IllegalMoveReason::NoCheckerOnOrigin);
                }
                let step = player.pips(from) as i16 - player.pips(to) as i16;
                if !(1..=QUADRANT as i16).contains(&step) {
                    return Err(IllegalMoveReason::WrongGeometry);
                }
                if self.is_blocked(player, to) {
                    return Err(IllegalMoveReason::Blocked);
                }
            }
            (MoveKind::BearOff, Some(Position::Point(from)), Some(Position::Off)) => {
                if self.bar(player) > 0 {
                    return Err(IllegalMoveReason::MustEnterFromBar);
                }
                if self.count_for(player, from) == 0 {
                    return Err(IllegalMoveReason::NoCheckerOnOrigin);
                }
                if !self.can_bear_off(player) {
                    return Err(IllegalMoveReason::NotAllHome);
                }
            }
            _ => return Err(IllegalMoveReason::WrongGeometry),
        }
        Ok(())
    }

    /// Moves a checker without any legality check. Only used on moves produced by the
    /// generator for this very board.
    pub(crate) fn apply_in_place(&mut self, mv: Move) {
        let player = self.turn();
        match mv.kind {
            MoveKind::FromBar => self.set_bar(player, self.bar(player).saturating_sub(1)),
            MoveKind::Normal | MoveKind::BearOff => {
                let count = self.count_for(player, mv.from);
                self.set_point(mv.from, player, count.saturating_sub(1));
            }
        }
        match mv.kind {
            MoveKind::BearOff => self.set_off(player, self.off(player).saturating_add(1)),
            MoveKind::Normal | MoveKind::FromBar => self.land(player, mv.to),
        }
    }

    fn land(&mut self, player: Player, point: u8) {
        let opponent = player.opposite();
        if self.count_for(opponent, point) == 1 {
            self.set_bar(opponent, self.bar(opponent).saturating_add(1));
            self.set_point(point, player, 0);
        }
        let count = self.count_for(player, point);
        self.set_point(point, player, count.saturating_add(1));
    }
}
