use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use triad::{Board, Card, Cell, Move, Player, Strategy};

/// Plays a uniformly random legal move.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

fn possible_moves(board: &Board, hand: &[Card]) -> Vec<(usize, Cell)> {
    let mut moves = Vec::new();
    for card_idx in 0..hand.len() {
        moves.extend(board.empty_cells().map(|cell| (card_idx, cell)));
    }
    moves
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, board: &Board, hand: &[Card], _owner: Player) -> Option<Move> {
        possible_moves(board, hand)
            .choose(&mut self.rng)
            .map(|&(card_idx, cell)| Move {
                card_id: hand[card_idx].id.clone(),
                cell,
            })
    }
}
