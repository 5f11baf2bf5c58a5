use crate::board::Board;
use crate::common::Player;
use rand::rngs::SmallRng;

/// Move-selection strategy for one side. Implemented by the random AI, the
/// CLI player, and deterministic doubles in tests.
pub trait MoveSelector {
    /// Choose a placement for `player` on the given board. `None` when the
    /// side has no legal move (the caller treats this as a pass).
    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        player: Player,
    ) -> Option<(usize, usize)>;
}
