//! Output alphabets.
//!
//! Each alphabet pairs a symbol width with a mapping between symbol values
//! and output characters. The two base64-style alphabets carry 6 bits per
//! character; the byte-array form carries 8 bits per byte with no character
//! mapping; raw form carries 16 bits per code unit; the UTF-16-safe text
//! form carries 15 bits per character, offset into printable space.

use crate::error::{LzError, Result};
use once_cell::sync::Lazy;

/// Bits per character in the base64-style alphabets.
pub const CHAR_WIDTH: u32 = 6;
/// Bits per byte in byte-array form.
pub const BYTE_WIDTH: u32 = 8;
/// Bits per character in UTF-16-safe text form.
pub const UTF16_WIDTH: u32 = 15;
/// Bits per code unit in raw form.
pub const CODE_UNIT_WIDTH: u32 = 16;

/// Character offset applied to 15-bit symbols in UTF-16-safe text form,
/// keeping every output unit clear of control characters and surrogates.
pub const UTF16_OFFSET: u16 = 32;

const BASE64_CHARS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const URI_SAFE_CHARS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// A 6-bit character alphabet: forward table plus reverse lookup.
pub struct CharAlphabet {
    name: &'static str,
    chars: &'static [u8; 64],
    reverse: [i8; 128],
}

impl CharAlphabet {
    fn new(name: &'static str, chars: &'static [u8; 64]) -> Self {
        let mut reverse = [-1i8; 128];
        for (value, &ch) in chars.iter().enumerate() {
            reverse[ch as usize] = value as i8;
        }
        Self {
            name,
            chars,
            reverse,
        }
    }

    /// Map a 6-bit symbol value to its output character.
    pub fn encode_symbol(&self, value: u16) -> char {
        self.chars[value as usize] as char
    }

    /// Map an input character back to its 6-bit symbol value.
    pub fn decode_char(&self, character: char, position: usize) -> Result<u16> {
        let index = character as usize;
        if index < 128 {
            let value = self.reverse[index];
            if value >= 0 {
                return Ok(value as u16);
            }
        }
        Err(LzError::InvalidAlphabetCharacter {
            character,
            alphabet: self.name,
            position,
        })
    }

    /// Decode a whole string of alphabet characters into symbol values.
    ///
    /// Trailing `=` padding is accepted and ignored; `=` anywhere else, or
    /// any other out-of-alphabet character, is an error.
    pub fn decode_str(&self, input: &str) -> Result<Vec<u16>> {
        let trimmed = input.trim_end_matches('=');
        let mut symbols = Vec::with_capacity(trimmed.len());
        for (position, character) in trimmed.chars().enumerate() {
            symbols.push(self.decode_char(character, position)?);
        }
        Ok(symbols)
    }
}

/// Standard base64 alphabet (`+`/`/`, `=` padding on encode).
pub static BASE64: Lazy<CharAlphabet> = Lazy::new(|| CharAlphabet::new("base64", BASE64_CHARS));

/// URL-safe base64 alphabet (`-`/`_`, no padding on encode).
pub static URI_SAFE: Lazy<CharAlphabet> =
    Lazy::new(|| CharAlphabet::new("uri-safe", URI_SAFE_CHARS));
