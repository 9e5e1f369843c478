//! Optional shuffling of password parts.
use rand::{seq::SliceRandom, Rng};

/// Shuffle the parts of a password in place.
///
/// Uses an unbiased Fisher-Yates shuffle so every permutation
/// of the parts is equally likely.
pub fn mix<R: Rng + ?Sized>(rng: &mut R, parts: &mut [String]) {
    parts.shuffle(rng);
}
