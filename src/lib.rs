//! # lzstring
//!
//! A pure Rust implementation of the lz-string text compression format,
//! bit-compatible with the JavaScript [pieroxy/lz-string](https://github.com/pieroxy/lz-string)
//! reference implementation.
//!
//! lz-string is an LZ78-family scheme with a growing symbol table and
//! variable-width codes, designed for compressing short, repetitive text
//! (query strings, JSON payloads, editor state) into strings that fit in
//! URLs or web storage. It is not a rival to Deflate; its value is exact
//! interoperability with the reference format.
//!
//! ## Features
//!
//! - All reference output forms: raw 16-bit, base64, URL-safe base64,
//!   byte array, and UTF-16-safe text
//! - Correct UTF-16 code-unit semantics: supplementary-plane characters
//!   (emoji, mathematical symbols) compress to the same bits as in
//!   JavaScript, where strings are indexed by code unit
//! - Typed decode errors instead of silent empty output
//!
//! ## Quick Start
//!
//! ```rust
//! let compressed = lzstring::compress_to_base64("repetitive text, repetitive text");
//! let restored = lzstring::decompress_from_base64(&compressed)?;
//! assert_eq!(restored, "repetitive text, repetitive text");
//! # Ok::<(), lzstring::LzError>(())
//! ```
//!
//! ## Architecture
//!
//! - `encoding` - the UTF-16 code-unit boundary: text in, 16-bit units out,
//!   and back (surrogate pairs split and merged here, nowhere else)
//! - `io` - bit-level stream writer/reader over fixed-width symbols
//! - `codec` - the adaptive-dictionary engines and the public operations
//! - `alphabet` - the output alphabets binding symbol widths to characters
//!
//! Every compress/decompress call constructs and owns its entire state, so
//! concurrent calls from multiple threads need no coordination.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod alphabet;
pub mod codec;
pub mod encoding;
pub mod error;
pub mod io;

// Re-export commonly used types
pub use error::{LzError, Result};

// Re-export the public operations
pub use codec::{
    compress, compress_to_base64, compress_to_encoded_uri_component, compress_to_uint8_array,
    compress_to_utf16, decompress, decompress_from_base64,
    decompress_from_encoded_uri_component, decompress_from_uint8_array, decompress_from_utf16,
};

// Re-export the transcoding boundary
pub use encoding::{from_code_units, from_code_units_strict, to_code_units};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
