//! Symbol and digit affixes.
use rand::Rng;

use crate::{CharacterCategory, Sampler};

/// Append symbols then digits to the parts of a password.
///
/// Each character is sampled independently and pushed as its
/// own part so that mixing can move it anywhere.
pub fn append_affixes<R: Rng + ?Sized>(
    rng: &mut R,
    sampler: &Sampler<'_>,
    parts: &mut Vec<String>,
    symbols: usize,
    numbers: usize,
) {
    parts.reserve(symbols + numbers);
    for _ in 0..symbols {
        parts.push(
            sampler.character(rng, CharacterCategory::Symbols).to_owned(),
        );
    }
    for _ in 0..numbers {
        parts.push(
            sampler.character(rng, CharacterCategory::Numbers).to_owned(),
        );
    }
}
