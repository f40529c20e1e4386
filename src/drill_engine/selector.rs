use rand::Rng;

use crate::drill_engine::error::SelectError;

/// Uniform index in `[0, len)`.
pub fn pick_index<R: Rng>(rng: &mut R, len: usize) -> Result<usize, SelectError> {
    if len == 0 {
        return Err(SelectError::EmptyPool);
    }
    Ok(rng.gen_range(0..len))
}

/// Uniformly random element of a non-empty slice.
pub fn pick_random<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> Result<&'a T, SelectError> {
    let idx = pick_index(rng, items.len())?;
    Ok(&items[idx])
}

/// Random index different from `current`, by rejection sampling.
///
/// A pool of one has nothing else to offer, so `current` comes back.
pub fn pick_different_index<R: Rng>(
    rng: &mut R,
    len: usize,
    current: usize,
) -> Result<usize, SelectError> {
    if len == 1 {
        return Ok(current);
    }
    loop {
        let idx = pick_index(rng, len)?;
        if idx != current {
            return Ok(idx);
        }
    }
}
