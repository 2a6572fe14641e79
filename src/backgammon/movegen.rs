use log::trace;

use crate::backgammon::{Board, Move, QUADRANT};

impl Board {
    /// Every legal single checker move for the player on turn with one die.
    ///
    /// Checkers on the bar must enter before anything else moves, so a player with bar
    /// checkers gets at most one move (the entry). Otherwise points are scanned from the
    /// farthest to the nearest and each occupied point yields at most one move, a
    /// [`MoveKind::Normal`](crate::backgammon::MoveKind::Normal) step or a bear-off.
    /// Bearing off needs all checkers home and either an exact die or, for a larger die,
    /// the origin being the farthest occupied point.
    ///
    /// An empty result means the die cannot be played. Values outside `1..=6` never
    /// produce moves.
    pub fn legal_moves(&self, die: u8) -> Vec<Move> {
        let player = self.turn();
        let mut moves = Vec::new();
        if !(1..=QUADRANT).contains(&die) {
            return moves;
        }

        if self.bar(player) > 0 {
            let to = player.entry_point(die);
            if !self.is_blocked(player, to) {
                moves.push(Move::from_bar(player.bar_index(), to));
            }
            trace!("{player} die {die}: {} bar entries", moves.len());
            return moves;
        }

        let can_bear_off = self.can_bear_off(player);
        let farthest = self.farthest_pips(player);

        for from in player.points_farthest_first() {
            if self.count_for(player, from) == 0 {
                continue;
            }
            let pips = player.pips(from);
            if pips > die {
                let to = player.index_at(pips - die);
                if !self.is_blocked(player, to) {
                    moves.push(Move::normal(from, to));
                }
            } else if can_bear_off && (pips == die || Some(pips) == farthest) {
                moves.push(Move::bear_off(from, player.off_index()));
            }
        }

        trace!("{player} die {die}: {} moves", moves.len());
        moves
    }
}

#[cfg(test)]
mod tests {
    use crate::backgammon::{MoveKind, Player};

    use super::*;

    #[test]
    fn test_starting_position_six() {
        let board = Board::starting_position();
        let moves = board.legal_moves(6);
        assert!(moves.contains(&Move::normal(24, 18)));
        assert!(moves.contains(&Move::normal(13, 7)));
        assert!(moves.contains(&Move::normal(8, 2)));
        // 6 -> off is out of reach while checkers are outside home.
        assert!(moves.iter().all(|mv| mv.kind == MoveKind::Normal));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn test_blocked_points_are_skipped() {
        let board = Board::starting_position();
        // Black holds 19 and 1.
        let moves = board.legal_moves(5);
        assert!(!moves.contains(&Move::normal(24, 19)));
        assert!(!moves.contains(&Move::normal(6, 1)));
        assert_eq!(moves, vec![Move::normal(13, 8), Move::normal(8, 3)]);
        for mv in &moves {
            assert!(!board.is_blocked(Player::White, mv.to));
        }
    }

    #[test]
    fn test_black_moves_up() {
        let board = Board::starting_position().with_turn(Player::Black);
        let moves = board.legal_moves(6);
        assert_eq!(moves, vec![Move::normal(1, 7), Move::normal(12, 18), Move::normal(17, 23)]);
    }

    #[test]
    fn test_bar_entry_only_and_deduplicated() {
        let board = Board::starting_position()
            .with_checkers(24, Player::White, 0)
            .with_checkers(13, Player::White, 4)
            .with_bar(Player::White, 3);
        for die in 1..=6 {
            let moves = board.legal_moves(die);
            assert!(moves.len() <= 1);
            assert!(moves.iter().all(|mv| mv.kind == MoveKind::FromBar));
        }
        assert_eq!(board.legal_moves(3), vec![Move::from_bar(25, 22)]);
        // Black holds point 19 with five checkers.
        assert!(board.legal_moves(6).is_empty());
    }

    #[test]
    fn test_black_bar_entry() {
        let board = Board::empty(Player::Black)
            .with_bar(Player::Black, 2)
            .with_checkers(24, Player::Black, 13)
            .with_checkers(3, Player::White, 2)
            .with_checkers(6, Player::White, 13);
        assert_eq!(board.legal_moves(2), vec![Move::from_bar(0, 2)]);
        assert!(board.legal_moves(3).is_empty());
        assert!(board.legal_moves(6).is_empty());
    }

    #[test]
    fn test_bear_off_exact_and_farthest() {
        let board = Board::empty(Player::White)
            .with_checkers(5, Player::White, 2)
            .with_checkers(3, Player::White, 3)
            .with_checkers(1, Player::White, 1)
            .with_off(Player::White, 9)
            .with_checkers(24, Player::Black, 15);

        // The checker on 1 may not use the three while 5 is still occupied.
        assert_eq!(board.legal_moves(3), vec![Move::normal(5, 2), Move::bear_off(3, 0)]);
        // A six bears off the farthest checker only.
        assert_eq!(board.legal_moves(6), vec![Move::bear_off(5, 0)]);
        // A four moves inside home or bears off nothing smaller than the farthest.
        assert_eq!(board.legal_moves(4), vec![Move::normal(5, 1)]);
        assert_eq!(board.legal_moves(1), vec![Move::normal(5, 4), Move::normal(3, 2), Move::bear_off(1, 0)]);
    }

    #[test]
    fn test_no_bear_off_with_checker_outside_home() {
        let board = Board::empty(Player::White)
            .with_checkers(7, Player::White, 1)
            .with_checkers(2, Player::White, 14)
            .with_checkers(24, Player::Black, 15);
        assert!(board.legal_moves(2).iter().all(|mv| mv.kind != MoveKind::BearOff));
        assert_eq!(board.legal_moves(6), vec![Move::normal(7, 1)]);
    }

    #[test]
    fn test_black_bears_off_towards_twenty_five() {
        let board = Board::empty(Player::Black)
            .with_checkers(20, Player::Black, 15)
            .with_checkers(1, Player::White, 15);
        assert_eq!(board.legal_moves(5), vec![Move::bear_off(20, 25)]);
        assert_eq!(board.legal_moves(6), vec![Move::bear_off(20, 25)]);
        assert_eq!(board.legal_moves(2), vec![Move::normal(20, 22)]);
    }

    #[test]
    fn test_no_moves_is_empty_not_error() {
        let board = Board::empty(Player::White)
            .with_checkers(8, Player::White, 15)
            .with_checkers(2, Player::Black, 15);
        assert!(board.legal_moves(6).is_empty());
        assert!(board.legal_moves(0).is_empty());
        assert!(board.legal_moves(7).is_empty());
    }
}
