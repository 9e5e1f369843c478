use thiserror::Error;

/// Errors generated by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when the number of passwords is out of range.
    #[error("Please specify a number of passwords between {min} and {max}.")]
    PasswordCount {
        /// Requested number of passwords.
        value: usize,
        /// Minimum number of passwords.
        min: usize,
        /// Maximum number of passwords.
        max: usize,
    },

    /// Error generated when the password length is out of range.
    #[error("Please specify a password length of {min} or greater and up to {max}.")]
    Length {
        /// Requested password length.
        value: usize,
        /// Minimum password length.
        min: usize,
        /// Maximum password length.
        max: usize,
    },

    /// Error generated when the affixes do not fit in the password.
    #[error("Please specify a total amount of numbers and symbols are equal to or less than the total length of the password.")]
    AffixOverflow {
        /// Requested digit count.
        numbers: usize,
        /// Requested symbol count.
        symbols: usize,
        /// Requested total length.
        length: usize,
    },

    /// Error generated when a phoneme category has no entries.
    #[error("phoneme category '{0}' is empty")]
    EmptyCategory(String),

    /// Error generated when a phoneme weight is out of range.
    #[error("phoneme '{phoneme}' in '{category}' has weight {weight}, expected {min} to {max}")]
    InvalidWeight {
        /// Category name.
        category: String,
        /// Display value of the phoneme.
        phoneme: String,
        /// Weight that was declared.
        weight: u8,
        /// Minimum weight.
        min: u8,
        /// Maximum weight.
        max: u8,
    },

    /// Error generated when a phoneme display value has the wrong length.
    #[error("phoneme '{phoneme}' in '{category}' must be {expected}")]
    InvalidPhoneme {
        /// Category name.
        category: String,
        /// Display value of the phoneme.
        phoneme: String,
        /// Description of the expected shape.
        expected: &'static str,
    },

    /// Error generated by the io module.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error generated parsing a phoneme library.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
