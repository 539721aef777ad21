//! Shuffling and reordering through a minimal length-and-swap contract.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::group::Group;

/// Anything whose elements can be rearranged by swapping positions.
///
/// The utilities in this module only rely on this trait, so they work for
/// [`Group`] and plain slices alike.
pub trait Arrange {
    /// Number of positions.
    fn len(&self) -> usize;

    /// Returns whether there are no positions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exchanges the elements at positions `a` and `b`.
    fn swap(&mut self, a: usize, b: usize);
}

impl Arrange for Group {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.swap_positions(a, b);
    }
}

impl<T> Arrange for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

/// Shuffles `pile` with the Fisher-Yates algorithm, drawing from `rng`.
///
/// Each swap index is sampled uniformly from `0..=i` without modulo
/// reduction, so every permutation is equally likely given a uniform source.
pub fn shuffle_with<A, R>(pile: &mut A, rng: &mut R)
where
    A: Arrange + ?Sized,
    R: Rng + ?Sized,
{
    log::trace!("shuffling {} positions", pile.len());
    for i in (1..pile.len()).rev() {
        pile.swap(i, rng.random_range(0..=i));
    }
}

/// Shuffles `pile` with the thread-local cryptographically secure generator.
///
/// # Example
///
/// ```
/// use cardpile::{Group, perfect_shuffle};
///
/// let mut deck = Group::standard_deck();
/// perfect_shuffle(&mut deck);
/// assert_eq!(deck.len(), 52);
/// ```
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn perfect_shuffle<A: Arrange + ?Sized>(pile: &mut A) {
    shuffle_with(pile, &mut rand::rng());
}

/// Shuffles `pile` deterministically from `seed`.
///
/// The same seed always produces the same order, which makes this suitable
/// for replays and tests but not for play against an adversary.
pub fn shuffle_seeded<A: Arrange + ?Sized>(pile: &mut A, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    shuffle_with(pile, &mut rng);
}

/// Reverses the order of `pile` by swapping from both ends toward the middle.
pub fn reverse<A: Arrange + ?Sized>(pile: &mut A) {
    let len = pile.len();
    for i in 0..len / 2 {
        pile.swap(i, len - 1 - i);
    }
}

