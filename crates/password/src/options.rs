use crate::{Error, Result, Weighting};

/// Options for password generation.
///
/// Values are validated on construction and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    total_length: usize,
    number_count: usize,
    symbol_count: usize,
    password_count: usize,
    use_caps: bool,
    mix_affixes: bool,
    unweighted: bool,
}

impl GenerationOptions {
    /// Shortest password that may be requested.
    pub const MIN_LENGTH: usize = 10;
    /// Longest password that may be requested.
    pub const MAX_LENGTH: usize = 128;
    /// Fewest passwords that may be requested.
    pub const MIN_PASSWORDS: usize = 1;
    /// Most passwords that may be requested.
    pub const MAX_PASSWORDS: usize = 250;

    /// Default total length.
    pub const DEFAULT_LENGTH: usize = 13;
    /// Default digit count.
    pub const DEFAULT_NUMBERS: usize = 2;
    /// Default symbol count.
    pub const DEFAULT_SYMBOLS: usize = 1;
    /// Default number of passwords.
    pub const DEFAULT_PASSWORDS: usize = 3;

    /// Create validated options.
    pub fn new(
        total_length: usize,
        number_count: usize,
        symbol_count: usize,
        password_count: usize,
    ) -> Result<Self> {
        if !(Self::MIN_PASSWORDS..=Self::MAX_PASSWORDS)
            .contains(&password_count)
        {
            return Err(Error::PasswordCount {
                value: password_count,
                min: Self::MIN_PASSWORDS,
                max: Self::MAX_PASSWORDS,
            });
        }

        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&total_length) {
            return Err(Error::Length {
                value: total_length,
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
            });
        }

        if number_count.saturating_add(symbol_count) > total_length {
            return Err(Error::AffixOverflow {
                numbers: number_count,
                symbols: symbol_count,
                length: total_length,
            });
        }

        Ok(Self {
            total_length,
            number_count,
            symbol_count,
            password_count,
            use_caps: false,
            mix_affixes: false,
            unweighted: false,
        })
    }

    /// Capitalize consonants.
    pub fn caps(mut self, use_caps: bool) -> Self {
        self.use_caps = use_caps;
        self
    }

    /// Shuffle the affixes into the body.
    pub fn mix(mut self, mix_affixes: bool) -> Self {
        self.mix_affixes = mix_affixes;
        self
    }

    /// Ignore phoneme weights.
    pub fn unweighted(mut self, unweighted: bool) -> Self {
        self.unweighted = unweighted;
        self
    }

    /// Total password length.
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    /// Number of digit characters.
    pub fn number_count(&self) -> usize {
        self.number_count
    }

    /// Number of symbol characters.
    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    /// Number of passwords to generate.
    pub fn password_count(&self) -> usize {
        self.password_count
    }

    /// Whether consonants are capitalized.
    pub fn use_caps(&self) -> bool {
        self.use_caps
    }

    /// Whether affixes are mixed into the body.
    pub fn mix_affixes(&self) -> bool {
        self.mix_affixes
    }

    /// Weighting policy for letter sampling.
    pub fn weighting(&self) -> Weighting {
        self.unweighted.into()
    }

    /// Target number of letters in the body.
    pub fn word_length(&self) -> usize {
        self.total_length - self.number_count - self.symbol_count
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            total_length: Self::DEFAULT_LENGTH,
            number_count: Self::DEFAULT_NUMBERS,
            symbol_count: Self::DEFAULT_SYMBOLS,
            password_count: Self::DEFAULT_PASSWORDS,
            use_caps: false,
            mix_affixes: false,
            unweighted: false,
        }
    }
}
