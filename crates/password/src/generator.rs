//! Batch generation of pronounceable passwords.
use rand::Rng;

use crate::{
    affix::append_affixes,
    mixer::mix,
    planner::WordPlanner,
    segment::{Precedence, SegmentBuilder},
    GenerationOptions, PhonemeLibrary, Sampler,
};

/// Ordered fragments of a single password.
///
/// Body segments come first followed by symbols and then digits
/// unless the parts have been mixed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordParts {
    parts: Vec<String>,
    body_len: usize,
}

impl PasswordParts {
    /// Fragments in order.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Number of letters in the pronounceable body.
    pub fn body_len(&self) -> usize {
        self.body_len
    }

    /// Join the fragments into a password.
    pub fn join(&self) -> String {
        self.parts.concat()
    }
}

/// Generates passwords from a library and options.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    library: &'a PhonemeLibrary,
    options: GenerationOptions,
}

impl<'a> Generator<'a> {
    /// Create a generator.
    pub fn new(
        library: &'a PhonemeLibrary,
        options: GenerationOptions,
    ) -> Self {
        Self { library, options }
    }

    /// Compose the parts of a single password.
    pub fn parts<R: Rng + ?Sized>(&self, rng: &mut R) -> PasswordParts {
        let sampler = Sampler::new(self.library, self.options.weighting());
        let precedence = Precedence::random(rng);
        let builder =
            SegmentBuilder::new(sampler, precedence, self.options.use_caps());
        let word = self.options.word_length();

        let mut parts = WordPlanner::new(builder).plan(rng, word);
        let body_len: usize =
            parts.iter().map(|p| p.chars().count()).sum();
        tracing::debug!(
            word = %word,
            body_len = %body_len,
            precedence = ?precedence,
            "generator::body",
        );

        append_affixes(
            rng,
            &sampler,
            &mut parts,
            self.options.symbol_count(),
            self.options.number_count(),
        );

        if self.options.mix_affixes() {
            mix(rng, &mut parts);
        }

        PasswordParts { parts, body_len }
    }

    /// Generate a single password.
    pub fn one<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.parts(rng).join()
    }

    /// Generate the configured number of passwords.
    pub fn many<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let count = self.options.password_count();
        let mut passwords = Vec::with_capacity(count);
        for _ in 0..count {
            passwords.push(self.one(rng));
        }
        passwords
    }

    /// Generate the configured number of passwords, one per line.
    ///
    /// Every line including the last is terminated by a newline.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        tracing::debug!(options = ?self.options, "generator::generate");
        let mut output = String::new();
        for password in self.many(rng) {
            output.push_str(&password);
            output.push('\n');
        }
        output
    }
}
