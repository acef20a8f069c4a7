// Random product sampling
//
// Picks distinct indices by rejection sampling: draw uniformly from the whole
// range and discard repeats until enough unique indices are collected. The
// order of the result is the order indices were first drawn.

use crate::error::{Error, Result};
use rand::Rng;

/// Picks `count` distinct indices in `0..available`, in draw order.
///
/// Fails with [`Error::NotEnoughProducts`] when `count > available`.
pub fn pick_distinct_indices<R>(rng: &mut R, count: usize, available: usize) -> Result<Vec<usize>>
where
    R: Rng + ?Sized,
{
    if count > available {
        return Err(Error::NotEnoughProducts {
            requested: count,
            available,
        });
    }

    let mut picked = Vec::with_capacity(count);
    while picked.len() < count {
        let candidate = rng.gen_range(0..available);
        if !picked.contains(&candidate) {
            picked.push(candidate);
        }
    }
    Ok(picked)
}
