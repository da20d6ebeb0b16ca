//! Order-level slice helpers
//!
//! Neither function needs to compare elements, so they only require `Clone`.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Return a shuffled copy of `items`.
///
/// The generator is seeded from the current wall-clock time, so two calls
/// in quick succession may still produce different orders. Use
/// [`shuffle_with`] when the order must be reproducible.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    let mut rng = StdRng::seed_from_u64(clock_seed());
    shuffle_with(items, &mut rng)
}

/// Return a copy of `items` shuffled with the caller's generator.
pub fn shuffle_with<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Split `items` into consecutive chunks of `size` elements.
///
/// The last chunk holds the remainder and may be shorter. A size that is
/// zero or negative (anything that does not convert to a positive `usize`)
/// yields no chunks at all.
///
/// ```
/// use ukit_array::chunk;
///
/// assert_eq!(chunk(&['a', 'b', 'c'], 2), vec![vec!['a', 'b'], vec!['c']]);
/// assert!(chunk(&[1, 2, 3], 0).is_empty());
/// assert!(chunk(&[1, 2, 3], -1).is_empty());
/// ```
pub fn chunk<T, S>(items: &[T], size: S) -> Vec<Vec<T>>
where
    T: Clone,
    S: TryInto<usize>,
{
    let size: Result<usize, _> = size.try_into();
    match size {
        Ok(size) if size > 0 => items.chunks(size).map(<[T]>::to_vec).collect(),
        _ => Vec::new(),
    }
}

fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();
    // Keep the fast-moving low bits; truncation is intended.
    #[allow(clippy::cast_possible_truncation)]
    let seed = nanos as u64;
    seed
}
