//! Bit-level stream I/O.
//!
//! The codec emits and consumes a continuous bit stream packed into
//! fixed-width symbols; the symbol width (6, 8, 15 or 16 bits) is chosen by
//! the output alphabet. [`BitWriter`] and [`BitReader`] are the two halves
//! of that state machine.

pub mod bit_reader;
pub mod bit_writer;

pub use bit_reader::BitReader;
pub use bit_writer::BitWriter;
