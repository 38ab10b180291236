//! Target selection for the computer side.

use crate::board::Board;
use rand::Rng;

/// Choose a target uniformly among the untried cells of `board`. Candidates
/// are enumerated and indexed once, so a lone remaining cell is returned
/// deterministically rather than re-sampled for. Returns `None` only when
/// every cell has been tried.
pub fn choose_target<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> Option<(usize, usize)> {
    let untried = board.untried();
    let remaining = untried.count_ones();
    if remaining == 0 {
        return None;
    }
    let pick = rng.random_range(0..remaining);
    untried.iter_set().nth(pick)
}
