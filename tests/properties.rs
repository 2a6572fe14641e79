use backgammon_movegen::backgammon::{Board, CHECKERS, DieRoll, MoveKind, Player};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

const GAMES: u64 = 12;
const MAX_TURNS: usize = 400;

/// Plays random legal turns from the starting position and hands every board reached
/// (including the intermediate ones inside a turn) to `check`.
fn random_walk(seed: u64, mut check: impl FnMut(&Board, DieRoll)) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::starting_position();

    for _ in 0..MAX_TURNS {
        if Player::BOTH.iter().any(|&player| board.off(player) == CHECKERS) {
            break;
        }
        let roll = DieRoll::new(rng.random_range(1..=6), rng.random_range(1..=6)).unwrap();
        check(&board, roll);

        let sequences = board.legal_rolls(roll);
        let Some(sequence) = sequences.choose(&mut rng) else {
            board = board.play(&[], true).unwrap();
            continue;
        };
        let mut next = board;
        for (i, mv) in sequence.iter().enumerate() {
            next = next.apply(*mv, i + 1 == sequence.len()).unwrap();
            check(&next, roll);
        }
        board = next;
    }
}

#[test]
fn checkers_are_conserved() {
    for seed in 0..GAMES {
        random_walk(seed, |board, _| {
            for player in Player::BOTH {
                assert_eq!(board.checker_total(player), CHECKERS as u32, "{board}");
            }
        });
    }
}

#[test]
fn serialization_round_trips() {
    for seed in 0..GAMES {
        random_walk(seed, |board, _| {
            let text = board.serialize();
            assert_eq!(Board::deserialize(&text).unwrap(), *board);
            assert_eq!(Board::deserialize(&text).unwrap().serialize(), text);
        });
    }
}

#[test]
fn single_die_moves_obey_the_rules() {
    for seed in 0..GAMES {
        random_walk(seed, |board, _| {
            let player = board.turn();
            for die in 1..=6 {
                for mv in board.legal_moves(die) {
                    match mv.kind {
                        MoveKind::Normal | MoveKind::FromBar => {
                            assert!(!board.is_blocked(player, mv.to), "{mv} on {board}");
                        }
                        MoveKind::BearOff => {
                            assert!(board.can_bear_off(player), "{mv} on {board}");
                        }
                    }
                    if board.bar(player) > 0 {
                        assert_eq!(mv.kind, MoveKind::FromBar);
                    }
                    assert!(board.apply(mv, false).is_ok(), "{mv} on {board}");
                }
            }
        });
    }
}

#[test]
fn doubles_play_as_many_steps_as_possible() {
    for seed in 0..GAMES {
        random_walk(seed, |board, roll| {
            if !roll.is_double() {
                return;
            }
            for sequence in board.legal_rolls(roll) {
                assert!(sequence.len() <= 4);
                if sequence.len() < 4 {
                    let reached = board.play(&sequence, false).unwrap();
                    assert!(reached.legal_moves(roll.low()).is_empty(), "{sequence} on {board}");
                }
            }
        });
    }
}

#[test]
fn rolls_never_leave_a_playable_die_unused() {
    for seed in 0..GAMES {
        random_walk(seed, |board, roll| {
            let sequences = board.legal_rolls(roll);
            let longest = sequences.iter().map(|sequence| sequence.len()).max().unwrap_or(0);
            assert!(sequences.iter().all(|sequence| sequence.len() == longest));
            if sequences.is_empty() {
                assert!(board.legal_moves(roll.low()).is_empty());
                assert!(board.legal_moves(roll.high()).is_empty());
            }
        });
    }
}
