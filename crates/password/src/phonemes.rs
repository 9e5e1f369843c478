//! Weighted phoneme library.
use serde::Deserialize;
use std::{fmt, path::Path};

use crate::{Error, Result};

/// Lowest weight a phoneme may declare (most common).
pub const MIN_WEIGHT: u8 = 1;

/// Highest weight a phoneme may declare (most rare).
///
/// The weighted sampler rolls a twenty sided die so any
/// weight above this value could never be accepted.
pub const MAX_WEIGHT: u8 = 20;

static BUILTIN: &str = include_str!("phonemes.json");

/// Consonant or vowel cluster with a rarity weight.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LetterSet {
    #[serde(rename = "char")]
    value: String,
    weight: u8,
}

impl LetterSet {
    /// Display value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Rarity weight; higher is rarer.
    pub fn weight(&self) -> u8 {
        self.weight
    }
}

/// Categories of weighted letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterCategory {
    /// Single consonant letters.
    SingleConsonants,
    /// Two letter consonant clusters.
    DoubleConsonants,
    /// Single vowel letters.
    SingleVowels,
    /// Two letter vowel clusters.
    DoubleVowels,
}

impl LetterCategory {
    /// All letter categories.
    pub const ALL: [LetterCategory; 4] = [
        Self::SingleConsonants,
        Self::DoubleConsonants,
        Self::SingleVowels,
        Self::DoubleVowels,
    ];

    /// Name of the category in a library file.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SingleConsonants => "singleConsonants",
            Self::DoubleConsonants => "doubleConsonants",
            Self::SingleVowels => "singleVowels",
            Self::DoubleVowels => "doubleVowels",
        }
    }

    /// Number of letters in each entry of the category.
    pub fn width(&self) -> usize {
        match self {
            Self::SingleConsonants | Self::SingleVowels => 1,
            Self::DoubleConsonants | Self::DoubleVowels => 2,
        }
    }

    /// Determine if this category holds consonants.
    pub fn is_consonant(&self) -> bool {
        matches!(self, Self::SingleConsonants | Self::DoubleConsonants)
    }
}

impl fmt::Display for LetterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Categories of unweighted characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterCategory {
    /// Digit characters.
    Numbers,
    /// Symbol characters.
    Symbols,
}

impl CharacterCategory {
    /// Name of the category in a library file.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Numbers => "numbers",
            Self::Symbols => "symbols",
        }
    }

    fn accepts(&self, c: char) -> bool {
        match self {
            Self::Numbers => c.is_numeric(),
            Self::Symbols => {
                !c.is_alphanumeric() && !c.is_whitespace() && !c.is_control()
            }
        }
    }
}

impl fmt::Display for CharacterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Library file layout before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LibraryFile {
    single_consonants: Vec<LetterSet>,
    double_consonants: Vec<LetterSet>,
    single_vowels: Vec<LetterSet>,
    double_vowels: Vec<LetterSet>,
    numbers: Vec<String>,
    symbols: Vec<String>,
}

/// Validated phoneme library.
///
/// Every category is guaranteed to be non-empty and every
/// weight to be within [MIN_WEIGHT] and [MAX_WEIGHT].
#[derive(Debug, Clone)]
pub struct PhonemeLibrary {
    single_consonants: Vec<LetterSet>,
    double_consonants: Vec<LetterSet>,
    single_vowels: Vec<LetterSet>,
    double_vowels: Vec<LetterSet>,
    numbers: Vec<String>,
    symbols: Vec<String>,
}

impl PhonemeLibrary {
    /// Library bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN)
    }

    /// Parse and validate a library from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: LibraryFile = serde_json::from_str(json)?;
        let library = Self {
            single_consonants: file.single_consonants,
            double_consonants: file.double_consonants,
            single_vowels: file.single_vowels,
            double_vowels: file.double_vowels,
            numbers: file.numbers,
            symbols: file.symbols,
        };
        library.validate()?;
        Ok(library)
    }

    /// Read, parse and validate a library file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "phonemes::load");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Weighted letters in a category.
    pub fn letters(&self, category: LetterCategory) -> &[LetterSet] {
        match category {
            LetterCategory::SingleConsonants => &self.single_consonants,
            LetterCategory::DoubleConsonants => &self.double_consonants,
            LetterCategory::SingleVowels => &self.single_vowels,
            LetterCategory::DoubleVowels => &self.double_vowels,
        }
    }

    /// Plain characters in a category.
    pub fn characters(&self, category: CharacterCategory) -> &[String] {
        match category {
            CharacterCategory::Numbers => &self.numbers,
            CharacterCategory::Symbols => &self.symbols,
        }
    }

    fn validate(&self) -> Result<()> {
        for category in LetterCategory::ALL {
            let letters = self.letters(category);
            if letters.is_empty() {
                return Err(Error::EmptyCategory(category.to_string()));
            }
            for letter in letters {
                if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&letter.weight) {
                    return Err(Error::InvalidWeight {
                        category: category.to_string(),
                        phoneme: letter.value.clone(),
                        weight: letter.weight,
                        min: MIN_WEIGHT,
                        max: MAX_WEIGHT,
                    });
                }
                if letter.value.chars().count() != category.width()
                    || !letter.value.chars().all(char::is_alphabetic)
                {
                    return Err(Error::InvalidPhoneme {
                        category: category.to_string(),
                        phoneme: letter.value.clone(),
                        expected: if category.width() == 1 {
                            "a single letter"
                        } else {
                            "two letters"
                        },
                    });
                }
            }
        }

        for category in [CharacterCategory::Numbers, CharacterCategory::Symbols]
        {
            let characters = self.characters(category);
            if characters.is_empty() {
                return Err(Error::EmptyCategory(category.to_string()));
            }
            for value in characters {
                let mut chars = value.chars();
                let valid = match (chars.next(), chars.next()) {
                    (Some(c), None) => category.accepts(c),
                    _ => false,
                };
                if !valid {
                    return Err(Error::InvalidPhoneme {
                        category: category.to_string(),
                        phoneme: value.clone(),
                        expected: match category {
                            CharacterCategory::Numbers => "a single digit",
                            CharacterCategory::Symbols => {
                                "a single symbol character"
                            }
                        },
                    });
                }
            }
        }

        Ok(())
    }
}
