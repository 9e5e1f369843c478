//! Consonant and vowel segments.
use rand::Rng;

use crate::{LetterCategory, Sampler};

/// Order of consonant and vowel within every segment of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Consonant before vowel.
    ConsonantFirst,
    /// Vowel before consonant.
    VowelFirst,
}

impl Precedence {
    /// Flip a fair coin for the precedence.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_range(0..2) == 0 {
            Self::VowelFirst
        } else {
            Self::ConsonantFirst
        }
    }
}

/// Shapes of consonant and vowel segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentShape {
    /// Single consonant and single vowel.
    Double,
    /// Double consonant and single vowel.
    Triple,
    /// Double consonant and double vowel.
    Quadruple,
}

impl SegmentShape {
    /// Category the consonant is drawn from.
    pub fn consonants(&self) -> LetterCategory {
        match self {
            Self::Double => LetterCategory::SingleConsonants,
            Self::Triple | Self::Quadruple => LetterCategory::DoubleConsonants,
        }
    }

    /// Category the vowel is drawn from.
    pub fn vowels(&self) -> LetterCategory {
        match self {
            Self::Double | Self::Triple => LetterCategory::SingleVowels,
            Self::Quadruple => LetterCategory::DoubleVowels,
        }
    }

    /// Number of letters in a segment of this shape.
    pub fn width(&self) -> usize {
        self.consonants().width() + self.vowels().width()
    }
}

/// Builds segments for a single password.
#[derive(Debug, Clone, Copy)]
pub struct SegmentBuilder<'a> {
    sampler: Sampler<'a>,
    precedence: Precedence,
    caps: bool,
}

impl<'a> SegmentBuilder<'a> {
    /// Create a segment builder.
    pub fn new(
        sampler: Sampler<'a>,
        precedence: Precedence,
        caps: bool,
    ) -> Self {
        Self {
            sampler,
            precedence,
            caps,
        }
    }

    /// Build a segment of the given shape.
    ///
    /// The consonant is always sampled before the vowel regardless
    /// of precedence.
    pub fn build<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        shape: SegmentShape,
    ) -> String {
        let consonant = self.sampler.letter(rng, shape.consonants());
        let consonant = if self.caps {
            capitalize(consonant)
        } else {
            consonant.to_owned()
        };
        let vowel = self.sampler.letter(rng, shape.vowels());

        let mut segment = String::with_capacity(shape.width());
        match self.precedence {
            Precedence::ConsonantFirst => {
                segment.push_str(&consonant);
                segment.push_str(vowel);
            }
            Precedence::VowelFirst => {
                segment.push_str(vowel);
                segment.push_str(&consonant);
            }
        }
        segment
    }

    /// Sample a lone vowel, never capitalized.
    pub fn vowel<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        category: LetterCategory,
    ) -> String {
        debug_assert!(!category.is_consonant());
        self.sampler.letter(rng, category).to_owned()
    }
}

/// Upper case the first character of a consonant.
///
/// A single consonant is therefore upper cased entirely
/// while only the leading letter of a cluster is changed.
pub fn capitalize(consonant: &str) -> String {
    let mut chars = consonant.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
