use hashbrown::HashSet;
use log::debug;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::{
    backgammon::{Board, DieRoll, MoveSequence, RemainingDice},
    config::GeneratorConfig,
};

/// One open branch of the turn search: the dice still to play, the board reached so far
/// and the moves that led there.
#[derive(Clone, Copy)]
struct Node {
    dice: RemainingDice,
    board: Board,
    sequence: MoveSequence,
}

impl Node {
    fn expand(&self) -> Vec<Node> {
        let mut children = Vec::new();
        for die in self.dice.available() {
            for mv in self.board.legal_moves(die) {
                let Some(sequence) = self.sequence.extended(mv) else {
                    continue;
                };
                let mut board = self.board;
                board.apply_in_place(mv);
                children.push(Node { dice: self.dice.use_die(die), board, sequence });
            }
        }
        children
    }
}

impl Board {
    /// Every complete way of playing `roll` for the player on turn.
    ///
    /// Non-doubles are tried in both orders, doubles up to four times. Only sequences of
    /// the greatest playable length are returned, so a die is left unplayed only when no
    /// sequence can use it. Sequences are unique by their ordered move list and come out
    /// in a fixed order (higher die first). An empty result means nothing can be played.
    pub fn legal_rolls(&self, roll: DieRoll) -> Vec<MoveSequence> {
        self.legal_rolls_with(roll, &GeneratorConfig::default())
    }

    pub fn legal_rolls_with(&self, roll: DieRoll, config: &GeneratorConfig) -> Vec<MoveSequence> {
        let root = Node { dice: roll.remaining(), board: *self, sequence: MoveSequence::new() };
        let mut layer = vec![root];
        let mut depth = 0;

        loop {
            let next: Vec<Node> = if layer.len() >= config.parallel_threshold {
                layer.par_iter().flat_map_iter(Node::expand).collect()
            } else {
                layer.iter().flat_map(Node::expand).collect()
            };
            if next.is_empty() {
                break;
            }

            // The same move list can leave different dice behind (an oversized die
            // bearing off), so branches are only merged when both match.
            let mut seen = HashSet::with_capacity(next.len());
            layer = next
                .into_iter()
                .filter(|node| seen.insert((node.sequence, node.dice)))
                .collect();
            depth += 1;
        }

        if depth == 0 {
            debug!("{} roll {roll}: no playable move", self.turn());
            return Vec::new();
        }

        let mut seen = HashSet::with_capacity(layer.len());
        let sequences: Vec<MoveSequence> = layer
            .into_iter()
            .map(|node| node.sequence)
            .filter(|sequence| seen.insert(*sequence))
            .collect();
        debug!(
            "{} roll {roll}: {} sequences of {depth} moves",
            self.turn(),
            sequences.len()
        );
        sequences
    }
}
