//! Weighted random sampling of phonemes.
//!
//! Letters are chosen by rejection sampling: a uniformly random
//! candidate is accepted when a roll of a twenty sided die is
//! greater than or equal to the candidate's weight, otherwise
//! another candidate is drawn. Lower weights are accepted more
//! often so common phonemes appear more frequently.
//!
//! The loop is unbounded but terminates with probability one
//! because library weights never exceed [MAX_WEIGHT] and the
//! die can always roll [MAX_WEIGHT].
use rand::Rng;

use crate::{
    CharacterCategory, LetterCategory, PhonemeLibrary, MAX_WEIGHT,
};

/// Policy for weight checks when sampling letters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    /// Honor phoneme weights.
    #[default]
    Weighted,
    /// Accept every candidate on the first draw.
    Unweighted,
}

impl From<bool> for Weighting {
    fn from(unweighted: bool) -> Self {
        if unweighted {
            Self::Unweighted
        } else {
            Self::Weighted
        }
    }
}

/// Accepted sample and the number of candidates drawn to find it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw<'a> {
    /// Display value of the accepted phoneme.
    pub value: &'a str,
    /// Number of candidates drawn, including the accepted one.
    pub attempts: usize,
}

/// Draws phonemes from a library.
#[derive(Debug, Clone, Copy)]
pub struct Sampler<'a> {
    library: &'a PhonemeLibrary,
    weighting: Weighting,
}

impl<'a> Sampler<'a> {
    /// Create a sampler for a library.
    pub fn new(library: &'a PhonemeLibrary, weighting: Weighting) -> Self {
        Self { library, weighting }
    }

    /// Sample a letter from a category.
    pub fn letter<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        category: LetterCategory,
    ) -> &'a str {
        self.draw(rng, category).value
    }

    /// Sample a letter and report how many candidates were drawn.
    pub fn draw<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        category: LetterCategory,
    ) -> Draw<'a> {
        let letters = self.library.letters(category);
        let mut attempts = 0;
        loop {
            attempts += 1;
            let candidate = &letters[rng.gen_range(0..letters.len())];
            if self.accept(rng, candidate.weight()) {
                return Draw {
                    value: candidate.value(),
                    attempts,
                };
            }
        }
    }

    /// Sample a plain character from a category.
    ///
    /// Characters carry no weight so the first draw is always accepted.
    pub fn character<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        category: CharacterCategory,
    ) -> &'a str {
        let characters = self.library.characters(category);
        &characters[rng.gen_range(0..characters.len())]
    }

    fn accept<R: Rng + ?Sized>(&self, rng: &mut R, weight: u8) -> bool {
        match self.weighting {
            Weighting::Unweighted => true,
            Weighting::Weighted => rng.gen_range(1..=MAX_WEIGHT) >= weight,
        }
    }
}
