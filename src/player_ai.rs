use crate::board::Board;
use crate::common::Player;
use crate::player::MoveSelector;
use rand::rngs::SmallRng;
use rand::Rng;

/// Computer opponent that picks uniformly at random among the legal moves.
pub struct RandomAi;

impl RandomAi {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomAi {
    fn default() -> Self {
        RandomAi::new()
    }
}

impl MoveSelector for RandomAi {
    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        player: Player,
    ) -> Option<(usize, usize)> {
        let moves = board.legal_moves(player);
        if moves.is_empty() {
            return None;
        }
        Some(moves[rng.random_range(0..moves.len())])
    }
}
