#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]
//! Pronounceable password generation.
//!
//! Passwords are built from a weighted [phoneme library](PhonemeLibrary)
//! of consonants and vowels, followed by symbol and digit affixes
//! which may optionally be mixed into the body.
//!
//! ```
//! use propass_password::{
//!     seeded_rng, GenerationOptions, Generator, PhonemeLibrary,
//! };
//!
//! let library = PhonemeLibrary::builtin().unwrap();
//! let options = GenerationOptions::default();
//! let mut rng = seeded_rng(Some(42));
//! let output = Generator::new(&library, options).generate(&mut rng);
//! assert_eq!(3, output.lines().count());
//! ```

pub mod affix;
mod error;
pub mod generator;
pub mod mixer;
mod options;
mod phonemes;
pub mod planner;
pub mod sampler;
pub mod segment;

pub use error::Error;
pub use generator::{Generator, PasswordParts};
pub use options::GenerationOptions;
pub use phonemes::{
    CharacterCategory, LetterCategory, LetterSet, PhonemeLibrary,
    MAX_WEIGHT, MIN_WEIGHT,
};
pub use sampler::{Draw, Sampler, Weighting};

use rand::{rngs::StdRng, SeedableRng};

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Create the random number generator for a run.
///
/// A fixed seed yields byte-identical output for identical options,
/// otherwise the generator is seeded from operating system entropy.
///
/// This is not a cryptographically secure source of randomness.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
