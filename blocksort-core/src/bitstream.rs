//! Bit-level I/O for the entropy-coded payload.
//!
//! This module provides `BitReader` and `BitWriter`, which move single bits
//! and short bit strings in and out of a byte buffer.
//!
//! # Bit Ordering
//!
//! The container payload is packed MSB-first (Most Significant Bit first):
//! the first bit written lands in bit 7 of byte 0, the ninth in bit 7 of
//! byte 1. A trailing partial byte is padded with zero bits. The ordering is
//! part of the wire format and is exposed as [`BIT_ORDER_MSB_FIRST`].
//!
//! # Example
//!
//! ```
//! use blocksort_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3);
//! writer.write_bit(true);
//! let bytes = writer.finish();
//! assert_eq!(bytes, vec![0b1011_0000]);
//!
//! let mut reader = BitReader::new(&bytes);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert!(reader.read_bit().unwrap());
//! ```

use crate::error::{BlocksortError, Result};

/// Payload bits are packed most significant bit first within each byte.
pub const BIT_ORDER_MSB_FIRST: bool = true;

/// MSB-first bit reader over a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Absolute bit cursor.
    position: u64,
}

impl<'a> BitReader<'a> {
    /// Create a new `BitReader` positioned at the first bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Total number of bits in the underlying buffer.
    pub fn bit_len(&self) -> u64 {
        self.data.len() as u64 * 8
    }

    /// Get the current bit position (for error reporting).
    pub fn bit_position(&self) -> u64 {
        self.position
    }

    /// Number of bits left before the reader is exhausted.
    pub fn bits_remaining(&self) -> u64 {
        self.bit_len() - self.position
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        let byte_index = (self.position / 8) as usize;
        let Some(&byte) = self.data.get(byte_index) else {
            return Err(BlocksortError::stream_exhausted(self.position));
        };

        let shift = 7 - (self.position % 8) as u32;
        self.position += 1;
        Ok((byte >> shift) & 1 == 1)
    }

    /// Read up to 32 bits; the first bit read ends up most significant.
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        debug_assert!(count <= 32, "Cannot read more than 32 bits at once");

        if u64::from(count) > self.bits_remaining() {
            return Err(BlocksortError::stream_exhausted(self.position));
        }

        let mut value = 0u32;
        for _ in 0..count {
            value = (value << 1) | u32::from(self.read_bit()?);
        }
        Ok(value)
    }
}

/// MSB-first bit writer accumulating into an owned byte buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Completed bytes.
    output: Vec<u8>,
    /// Pending bits, left-aligned as they will appear in the byte.
    current: u8,
    /// Number of pending bits in `current`.
    pending: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl BitWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty writer with room for `bytes` output bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            output: Vec::with_capacity(bytes),
            ..Self::default()
        }
    }

    /// Get the total number of bits written so far.
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Write a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.current |= u8::from(bit) << (7 - self.pending);
        self.pending += 1;
        self.total_bits_written += 1;

        if self.pending == 8 {
            self.output.push(self.current);
            self.current = 0;
            self.pending = 0;
        }
    }

    /// Write the low `count` bits of `value`, most significant first.
    pub fn write_bits(&mut self, value: u32, count: u8) {
        debug_assert!(count <= 32, "Cannot write more than 32 bits at once");

        for i in (0..count).rev() {
            self.write_bit((value >> i) & 1 == 1);
        }
    }

    /// Pad the trailing partial byte with zero bits and return the buffer.
    pub fn finish(mut self) -> Vec<u8> {
        if self.pending > 0 {
            self.output.push(self.current);
        }
        self.output
    }
}
