//! Adaptive-dictionary decompression engine.
//!
//! Rebuilds the compressor's dictionary from the token stream alone. The
//! decoder tracks the same width schedule as the encoder (one step ahead,
//! since literals occupy two ids' worth of schedule) and reconstructs each
//! token's substring, including the self-referential case where a token
//! refers to the entry currently being defined.

use crate::codec::compressor::{
    CODE_END_OF_STREAM, CODE_LITERAL_16, CODE_LITERAL_8, FIRST_DICTIONARY_CODE,
};
use crate::error::{LzError, Result};
use crate::io::BitReader;

/// Decode a symbol stream back into the original code-unit sequence.
///
/// The reader must be bound to the alphabet the stream was encoded with.
/// Corrupted input surfaces as [`LzError::TruncatedStream`] or
/// [`LzError::UnknownDictionaryReference`]; output is never silently
/// truncated.
pub(crate) fn decompress_symbols(reader: &mut BitReader<'_>) -> Result<Vec<u16>> {
    // Token id -> substring. Ids below FIRST_DICTIONARY_CODE are control
    // codes and never resolve to entries; placeholders keep indices aligned.
    let mut dictionary: Vec<Vec<u16>> = vec![Vec::new(); FIRST_DICTIONARY_CODE as usize];
    let mut num_bits: u32 = 3;
    let mut enlarge_in: u64 = 4;
    let mut result: Vec<u16> = Vec::new();

    // The first token is always a literal (or an immediate end marker) and
    // its flag is read at the initial 2-bit width.
    let mut w: Vec<u16> = match reader.read_bits(2)? {
        CODE_LITERAL_8 => vec![reader.read_bits(8)? as u16],
        CODE_LITERAL_16 => vec![reader.read_bits(16)? as u16],
        CODE_END_OF_STREAM => return Ok(result),
        other => return Err(LzError::UnknownDictionaryReference(other)),
    };
    dictionary.push(w.clone());
    result.extend_from_slice(&w);

    loop {
        let code = reader.read_bits(num_bits)?;
        let index = match code {
            CODE_LITERAL_8 => {
                let unit = reader.read_bits(8)? as u16;
                dictionary.push(vec![unit]);
                enlarge_in -= 1;
                dictionary.len() - 1
            }
            CODE_LITERAL_16 => {
                let unit = reader.read_bits(16)? as u16;
                dictionary.push(vec![unit]);
                enlarge_in -= 1;
                dictionary.len() - 1
            }
            CODE_END_OF_STREAM => return Ok(result),
            code => code as usize,
        };
        if enlarge_in == 0 {
            enlarge_in = 1u64 << num_bits;
            num_bits += 1;
        }

        let entry = if index < dictionary.len() {
            dictionary[index].clone()
        } else if index == dictionary.len() {
            // Self-reference: the token names the entry being defined right
            // now, which the encoder only produces for w + w[0].
            let mut entry = w.clone();
            entry.push(w[0]);
            entry
        } else {
            return Err(LzError::UnknownDictionaryReference(code));
        };

        result.extend_from_slice(&entry);
        let mut new_entry = w;
        new_entry.push(entry[0]);
        dictionary.push(new_entry);
        enlarge_in -= 1;
        if enlarge_in == 0 {
            enlarge_in = 1u64 << num_bits;
            num_bits += 1;
        }
        w = entry;
    }
}
