//! The compression codec: public operations over the engine.
//!
//! Every entry point follows the same pipeline: text is transcoded to
//! UTF-16 code units at the boundary, the adaptive-dictionary engine runs
//! over code units only, and an output alphabet packs the resulting bit
//! stream. Each call owns all of its state; nothing is shared or cached
//! across invocations.

pub(crate) mod compressor;
pub(crate) mod decompressor;

use crate::alphabet::{
    CharAlphabet, BASE64, BYTE_WIDTH, CHAR_WIDTH, CODE_UNIT_WIDTH, URI_SAFE, UTF16_OFFSET,
    UTF16_WIDTH,
};
use crate::encoding::{from_code_units, to_code_units};
use crate::error::{LzError, Result};
use crate::io::BitReader;

use compressor::compress_code_units;
use decompressor::decompress_symbols;

/// Compress text into raw 16-bit symbols (not yet alphabet-encoded).
///
/// The output can contain any `u16` values, including lone surrogates and
/// zero, which is why it is a code-unit sequence rather than a `String`.
/// Empty input produces the scheme's fixed one-symbol encoding, not an
/// empty sequence.
pub fn compress(input: &str) -> Vec<u16> {
    compress_code_units(&to_code_units(input), CODE_UNIT_WIDTH)
}

/// Decompress raw 16-bit symbols produced by [`compress`].
///
/// Empty input is accepted and yields an empty string.
pub fn decompress(compressed: &[u16]) -> Result<String> {
    if compressed.is_empty() {
        return Ok(String::new());
    }
    let mut reader = BitReader::new(compressed, CODE_UNIT_WIDTH);
    Ok(from_code_units(&decompress_symbols(&mut reader)?))
}

/// Compress text to standard base64 (`+`/`/` alphabet, `=`-padded).
pub fn compress_to_base64(input: &str) -> String {
    let mut encoded = encode_with_alphabet(input, &BASE64);
    while encoded.len() % 4 != 0 {
        encoded.push('=');
    }
    encoded
}

/// Decompress a string produced by [`compress_to_base64`].
///
/// Trailing `=` padding is accepted; any character outside the alphabet is
/// an [`LzError::InvalidAlphabetCharacter`].
pub fn decompress_from_base64(input: &str) -> Result<String> {
    decode_with_alphabet(input, &BASE64)
}

/// Compress text to URL-safe base64 (`-`/`_` alphabet, no padding), safe
/// for direct use inside a URI component.
pub fn compress_to_encoded_uri_component(input: &str) -> String {
    encode_with_alphabet(input, &URI_SAFE)
}

/// Decompress a string produced by [`compress_to_encoded_uri_component`].
///
/// Inputs with or without trailing `=` padding are accepted.
pub fn decompress_from_encoded_uri_component(input: &str) -> Result<String> {
    decode_with_alphabet(input, &URI_SAFE)
}

/// Compress text to a byte array.
pub fn compress_to_uint8_array(input: &str) -> Vec<u8> {
    let symbols = compress_code_units(&to_code_units(input), BYTE_WIDTH);
    let mut bytes: Vec<u8> = symbols.iter().map(|&s| s as u8).collect();
    // The reference emits 16-bit groups split into byte pairs, so its
    // output length is always even.
    if bytes.len() % 2 != 0 {
        bytes.push(0);
    }
    bytes
}

/// Decompress a byte array produced by [`compress_to_uint8_array`].
///
/// Odd-length input is accepted (the final byte fills the high bits of the
/// last 16-bit group). Empty input yields an empty string.
pub fn decompress_from_uint8_array(compressed: &[u8]) -> Result<String> {
    if compressed.is_empty() {
        return Ok(String::new());
    }
    let symbols: Vec<u16> = compressed.iter().map(|&b| b as u16).collect();
    let mut reader = BitReader::new(&symbols, BYTE_WIDTH);
    Ok(from_code_units(&decompress_symbols(&mut reader)?))
}

/// Compress text into "UTF-16-safe" text: 15 bits per output character,
/// offset away from control characters, with one trailing space.
///
/// The result survives storage layers that require well-formed UTF-16
/// strings (e.g. `localStorage`) at a cost of one bit per character.
pub fn compress_to_utf16(input: &str) -> String {
    let symbols = compress_code_units(&to_code_units(input), UTF16_WIDTH);
    let mut output = String::with_capacity(symbols.len() + 1);
    for &symbol in &symbols {
        let unit = (symbol + UTF16_OFFSET) as u32;
        // 15-bit symbols offset by 32 stay below the surrogate range.
        output.push(char::from_u32(unit).expect("offset symbol is a scalar value"));
    }
    output.push(' ');
    output
}

/// Decompress a string produced by [`compress_to_utf16`].
pub fn decompress_from_utf16(input: &str) -> Result<String> {
    if input.is_empty() {
        return Ok(String::new());
    }
    let mut symbols = Vec::with_capacity(input.len());
    for (position, character) in input.chars().enumerate() {
        let code = character as u32;
        let value = code.wrapping_sub(UTF16_OFFSET as u32);
        if value >= 1 << UTF16_WIDTH {
            return Err(LzError::InvalidAlphabetCharacter {
                character,
                alphabet: "utf16",
                position,
            });
        }
        symbols.push(value as u16);
    }
    let mut reader = BitReader::new(&symbols, UTF16_WIDTH);
    Ok(from_code_units(&decompress_symbols(&mut reader)?))
}

fn encode_with_alphabet(input: &str, alphabet: &CharAlphabet) -> String {
    let symbols = compress_code_units(&to_code_units(input), CHAR_WIDTH);
    symbols
        .iter()
        .map(|&symbol| alphabet.encode_symbol(symbol))
        .collect()
}

fn decode_with_alphabet(input: &str, alphabet: &CharAlphabet) -> Result<String> {
    if input.is_empty() {
        return Ok(String::new());
    }
    let symbols = alphabet.decode_str(input)?;
    let mut reader = BitReader::new(&symbols, CHAR_WIDTH);
    Ok(from_code_units(&decompress_symbols(&mut reader)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_round_trip() {
        let text = "Hello, 世界! 🌍";
        assert_eq!(decompress(&compress(text)).unwrap(), text);
    }

    #[test]
    fn test_base64_padding_length() {
        for text in ["", "a", "ab", "abc", "abcd", "𝔓"] {
            let encoded = compress_to_base64(text);
            assert_eq!(encoded.len() % 4, 0, "input {:?}", text);
        }
    }

    #[test]
    fn test_uri_component_has_no_padding_or_reserved_chars() {
        let encoded = compress_to_encoded_uri_component("Mixed 中文 and English with 🎯");
        assert!(!encoded.contains('='));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
    }

    #[test]
    fn test_uint8_array_length_is_even() {
        for text in ["", "a", "abc", "𝔓", "longer input with repetition repetition"] {
            assert_eq!(compress_to_uint8_array(text).len() % 2, 0);
        }
    }

    #[test]
    fn test_utf16_output_ends_with_space() {
        assert!(compress_to_utf16("payload").ends_with(' '));
    }

    #[test]
    fn test_empty_decompress_inputs() {
        assert_eq!(decompress(&[]).unwrap(), "");
        assert_eq!(decompress_from_base64("").unwrap(), "");
        assert_eq!(decompress_from_encoded_uri_component("").unwrap(), "");
        assert_eq!(decompress_from_uint8_array(&[]).unwrap(), "");
        assert_eq!(decompress_from_utf16("").unwrap(), "");
    }

    #[test]
    fn test_utf16_rejects_control_character() {
        let err = decompress_from_utf16("\u{0001}").unwrap_err();
        assert!(matches!(err, LzError::InvalidAlphabetCharacter { .. }));
    }
}
