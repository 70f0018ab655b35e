//! Error types for the lzstring library

use thiserror::Error;

/// Main error type for lzstring operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LzError {
    /// A character outside the bound alphabet was found while decoding
    #[error("Invalid character {character:?} at position {position} in {alphabet} input")]
    InvalidAlphabetCharacter {
        /// The offending character.
        character: char,
        /// Name of the alphabet being decoded ("base64", "uri-safe", "utf16").
        alphabet: &'static str,
        /// Character position within the input.
        position: usize,
    },

    /// The bit stream ran out of symbols in the middle of a token
    #[error("Compressed stream truncated: bit stream exhausted mid-token")]
    TruncatedStream,

    /// A token id with no dictionary entry (and not the self-reference case)
    #[error("Unknown dictionary reference: token id {0}")]
    UnknownDictionaryReference(u32),

    /// A high or low surrogate code unit without its partner
    ///
    /// Only reported by the strict transcoding mode; the default mode
    /// substitutes U+FFFD instead.
    #[error("Unpaired surrogate {unit:#06X} at code unit {position}")]
    UnpairedSurrogate {
        /// The lone surrogate value.
        unit: u16,
        /// Index of the unit within the code-unit sequence.
        position: usize,
    },
}

/// Result type alias for lzstring operations
pub type Result<T> = std::result::Result<T, LzError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_character_display() {
        let err = LzError::InvalidAlphabetCharacter {
            character: '!',
            alphabet: "base64",
            position: 4,
        };
        assert_eq!(
            err.to_string(),
            "Invalid character '!' at position 4 in base64 input"
        );
    }

    #[test]
    fn test_unpaired_surrogate_display() {
        let err = LzError::UnpairedSurrogate {
            unit: 0xD835,
            position: 0,
        };
        assert!(err.to_string().contains("0xD835"));
    }

    #[test]
    fn test_unknown_reference_display() {
        let err = LzError::UnknownDictionaryReference(42);
        assert!(err.to_string().contains("42"));
    }
}
