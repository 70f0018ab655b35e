//! Compatibility tests against the JavaScript reference implementation.
//!
//! The vectors here are the reference's literal outputs; they pin the wire
//! format bit-for-bit. The `"𝔓"` cases are the canonical regression for
//! the codepoint-vs-code-unit bug: an implementation that feeds codepoints
//! to the engine instead of UTF-16 code units produces a different,
//! shorter stream for any supplementary-plane input.

use lzstring::{
    compress, compress_to_base64, compress_to_encoded_uri_component, compress_to_uint8_array,
    compress_to_utf16, decompress_from_base64, decompress_from_encoded_uri_component,
    to_code_units,
};

#[test]
fn test_empty_string_has_fixed_minimal_encoding() {
    // Empty input still carries the end-of-stream marker.
    assert_eq!(compress(""), vec![0x4000]);
    assert_eq!(compress_to_base64(""), "Q===");
    assert_eq!(compress_to_uint8_array(""), vec![0x40, 0x00]);
    assert_eq!(compress_to_utf16(""), "\u{2020} ");
}

#[test]
fn test_supplementary_char_transcodes_to_surrogate_pair() {
    assert_eq!(to_code_units("𝔓"), vec![0xD835, 0xDD13]);
}

#[test]
fn test_supplementary_char_base64_matches_reference() {
    assert_eq!(compress_to_base64("𝔓"), "qwbmRdo=");
    assert_eq!(decompress_from_base64("qwbmRdo=").unwrap(), "𝔓");
}

#[test]
fn test_supplementary_char_uri_component_matches_reference() {
    // Same symbols as base64 here (no +, / or padding in this stream),
    // minus the padding.
    assert_eq!(compress_to_encoded_uri_component("𝔓"), "qwbmRdo");
    assert_eq!(
        decompress_from_encoded_uri_component("qwbmRdo").unwrap(),
        "𝔓"
    );
}

#[test]
fn test_supplementary_char_raw_and_bytes_match_reference() {
    assert_eq!(compress("𝔓"), vec![0xAB06, 0xE645, 0xDA00]);
    assert_eq!(
        compress_to_uint8_array("𝔓"),
        vec![0xAB, 0x06, 0xE6, 0x45, 0xDA, 0x00]
    );
}

#[test]
fn test_single_character_vectors() {
    assert_eq!(compress("a"), vec![0x2190]);
    assert_eq!(compress_to_base64("a"), "IZA=");
    assert_eq!(compress_to_uint8_array("a"), vec![0x21, 0x90]);
    assert_eq!(compress_to_utf16("a"), "\u{10E8} ");
}

#[test]
fn test_repeated_character_uses_back_reference() {
    // "aaa" compresses to literal + dictionary token, not three literals.
    assert_eq!(compress_to_base64("aaa"), "IYo=");
    assert_eq!(decompress_from_base64("IYo=").unwrap(), "aaa");
}

#[test]
fn test_other_supplementary_plane_round_trips() {
    // U+1D4D3 and friends: every supplementary character must go through
    // the surrogate split.
    for text in ["\u{1D4D3}", "\u{1F600}", "\u{1F680}"] {
        assert_eq!(to_code_units(text).len(), 2, "input {:?}", text);
        let encoded = compress_to_base64(text);
        assert_eq!(decompress_from_base64(&encoded).unwrap(), text);
    }
}
