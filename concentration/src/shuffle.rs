use rand::Rng;

/// A source of uniformly distributed indices, as needed by [`shuffle()`].
///
/// Every [`Rng`] is one. Implementing it directly is mostly useful for
/// tests that need to control exactly which swaps happen.
pub trait IndexSource {
    /// Returns an index in `0..=upper`.
    fn index_up_to(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> IndexSource for R {
    fn index_up_to(&mut self, upper: usize) -> usize {
        self.gen_range(0..=upper)
    }
}

/// Puts the items into a uniformly random order, in place.
///
/// This is the backward Fisher-Yates (Durstenfeld) shuffle: for each
/// position from the last down to the second, swap it with a position
/// drawn from the not yet shuffled prefix, itself included.
///
/// ```
/// use concentration::shuffle;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut items = [1, 2, 3, 4, 5];
/// shuffle(&mut items, &mut StdRng::seed_from_u64(0));
/// items.sort();
/// assert_eq!(items, [1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T, S: IndexSource + ?Sized>(items: &mut [T], source: &mut S) {
    for i in (1..items.len()).rev() {
        let j = source.index_up_to(i);
        debug_assert!(j <= i, "index source returned {} for upper bound {}", j, i);
        items.swap(i, j);
    }
}
