//! Adaptive-dictionary compression engine.
//!
//! An LZ78-family encoder with a growing symbol table and variable-width
//! codes, emitting the reference scheme's exact token stream. Token codes
//! start at 2 bits and widen by one bit each time the dictionary doubles;
//! fresh single code units are emitted as flagged literals (8-bit for
//! values below 256, 16-bit otherwise) the first time they stand alone.

use ahash::{AHashMap, AHashSet};

use crate::io::BitWriter;

/// Token id reserved for the 8-bit literal flag.
pub(crate) const CODE_LITERAL_8: u32 = 0;
/// Token id reserved for the 16-bit literal flag.
pub(crate) const CODE_LITERAL_16: u32 = 1;
/// Token id reserved for the end-of-stream marker.
pub(crate) const CODE_END_OF_STREAM: u32 = 2;
/// First token id available for dictionary entries.
pub(crate) const FIRST_DICTIONARY_CODE: u32 = 3;

/// Per-call compressor state.
///
/// Owned exclusively by one [`compress`](Self::compress) invocation; the
/// dictionary only ever grows and every token id is assigned exactly once.
struct Compressor {
    dictionary: AHashMap<Vec<u16>, u32>,
    /// Single units seen but not yet emitted as a literal.
    pending_literals: AHashSet<u16>,
    next_code: u32,
    num_bits: u32,
    /// Emissions remaining until the code width grows by one bit.
    enlarge_in: u64,
}

impl Compressor {
    fn new() -> Self {
        Self {
            dictionary: AHashMap::new(),
            pending_literals: AHashSet::new(),
            next_code: FIRST_DICTIONARY_CODE,
            num_bits: 2,
            enlarge_in: 2,
        }
    }

    /// Emit the working substring `w`: a flagged literal if it is a single
    /// unit not yet seen in any combination, otherwise its token id.
    fn emit(&mut self, w: &[u16], writer: &mut BitWriter) {
        if w.len() == 1 && self.pending_literals.contains(&w[0]) {
            let unit = w[0];
            if unit < 256 {
                writer.write_bits(self.num_bits, CODE_LITERAL_8);
                writer.write_bits(8, unit as u32);
            } else {
                writer.write_bits(self.num_bits, CODE_LITERAL_16);
                writer.write_bits(16, unit as u32);
            }
            self.count_emission();
            self.pending_literals.remove(&unit);
        } else {
            let code = self.dictionary[w];
            writer.write_bits(self.num_bits, code);
        }
        // A literal emission counts twice toward the width schedule.
        self.count_emission();
    }

    fn count_emission(&mut self) {
        self.enlarge_in -= 1;
        if self.enlarge_in == 0 {
            self.enlarge_in = 1u64 << self.num_bits;
            self.num_bits += 1;
        }
    }

    fn compress(mut self, input: &[u16], writer: &mut BitWriter) {
        let mut w: Vec<u16> = Vec::new();

        for &c in input {
            if !self.dictionary.contains_key(&[c][..]) {
                self.dictionary.insert(vec![c], self.next_code);
                self.next_code += 1;
                self.pending_literals.insert(c);
            }

            let mut wc = w.clone();
            wc.push(c);
            if self.dictionary.contains_key(&wc[..]) {
                // Greedy longest-match extension.
                w = wc;
            } else {
                self.emit(&w, writer);
                self.dictionary.insert(wc, self.next_code);
                self.next_code += 1;
                w.clear();
                w.push(c);
            }
        }

        if !w.is_empty() {
            self.emit(&w, writer);
        }

        writer.write_bits(self.num_bits, CODE_END_OF_STREAM);
    }
}

/// Compress a code-unit sequence into fixed-width symbols of `width` bits.
///
/// Compression never fails; empty input yields the scheme's fixed minimal
/// encoding (the end marker alone, zero-padded).
pub(crate) fn compress_code_units(input: &[u16], width: u32) -> Vec<u16> {
    let mut writer = BitWriter::new(width);
    Compressor::new().compress(input, &mut writer);
    writer.finish()
}
