//! Plans the pronounceable body of a password.
//!
//! The planner walks a cursor over the target word length and at
//! each position picks a segment by the distance left to the end
//! of the word. The first two and the last three positions always
//! receive a short consonant and vowel pair; positions in between
//! prefer longer segments that divide the remaining distance.
//!
//! Cursor advances do not always match the letters emitted at the
//! end of the word so the body may be one letter longer than the
//! target.
use rand::Rng;

use crate::{
    segment::{SegmentBuilder, SegmentShape},
    LetterCategory,
};

/// Rule selected for a cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Near either edge of the word; a double segment.
    Boundary,
    /// Remaining distance divisible by three; a triple segment.
    Triple,
    /// Remaining distance divisible by four; two double
    /// segments or a quadruple segment.
    DoubleOrQuadruple,
    /// Remaining distance even; a double segment or a lone
    /// double vowel.
    DoubleOrVowels,
    /// Remaining distance odd; a lone single vowel.
    Filler,
}

impl Rule {
    /// Distance the cursor moves after this rule is applied.
    pub fn advance(&self) -> usize {
        match self {
            Self::Boundary => 2,
            Self::Triple => 3,
            Self::DoubleOrQuadruple => 4,
            Self::DoubleOrVowels => 2,
            Self::Filler => 1,
        }
    }
}

/// Classify a cursor position within a word.
pub fn classify(cursor: usize, word: usize) -> Rule {
    // Interior positions satisfy 2 <= cursor <= word - 4.
    if cursor < 2 || cursor + 4 > word {
        return Rule::Boundary;
    }
    let remaining = word - cursor;
    if remaining % 3 == 0 {
        Rule::Triple
    } else if remaining % 4 == 0 {
        Rule::DoubleOrQuadruple
    } else if remaining % 2 == 0 {
        Rule::DoubleOrVowels
    } else {
        Rule::Filler
    }
}

/// Output of a single planner step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Rule that was applied.
    pub rule: Rule,
    /// Letters emitted by the step.
    pub segment: String,
    /// Distance the cursor moves.
    pub advance: usize,
}

/// Fills a word with segments.
#[derive(Debug, Clone, Copy)]
pub struct WordPlanner<'a> {
    builder: SegmentBuilder<'a>,
}

impl<'a> WordPlanner<'a> {
    /// Create a planner.
    pub fn new(builder: SegmentBuilder<'a>) -> Self {
        Self { builder }
    }

    /// Apply the rule for a cursor position.
    pub fn step<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        cursor: usize,
        word: usize,
    ) -> Step {
        let rule = classify(cursor, word);
        let segment = match rule {
            Rule::Boundary => self.builder.build(rng, SegmentShape::Double),
            Rule::Triple => self.builder.build(rng, SegmentShape::Triple),
            Rule::DoubleOrQuadruple => {
                if rng.gen_range(0..2) == 0 {
                    let mut segment =
                        self.builder.build(rng, SegmentShape::Double);
                    let next = self.builder.build(rng, SegmentShape::Double);
                    segment.push_str(&next);
                    segment
                } else {
                    self.builder.build(rng, SegmentShape::Quadruple)
                }
            }
            Rule::DoubleOrVowels => {
                if rng.gen_range(0..2) == 0 {
                    self.builder.build(rng, SegmentShape::Double)
                } else {
                    self.builder.vowel(rng, LetterCategory::DoubleVowels)
                }
            }
            Rule::Filler => {
                self.builder.vowel(rng, LetterCategory::SingleVowels)
            }
        };
        Step {
            rule,
            segment,
            advance: rule.advance(),
        }
    }

    /// Plan every segment of a word.
    pub fn plan<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        word: usize,
    ) -> Vec<String> {
        let mut segments = Vec::new();
        let mut cursor = 0;
        while cursor < word {
            let step = self.step(rng, cursor, word);
            cursor += step.advance;
            segments.push(step.segment);
        }
        segments
    }
}
