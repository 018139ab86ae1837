//! # Blocksort Core
//!
//! Core components for the blocksort compressor.
//!
//! - [`bitstream`]: MSB-first bit-level I/O for Huffman payloads
//! - [`error`]: Error types shared by every layer
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Front end                                           │
//! │     blocksort CLI (files, reports)                      │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Suffix array, BWT, MTF, Huffman, SBM1/HFN1 blobs    │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: BitStream (this crate)                              │
//! │     BitReader/BitWriter, errors                         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use blocksort_core::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0xABC, 12);
//! let data = writer.finish();
//!
//! let mut reader = BitReader::new(&data);
//! assert_eq!(reader.read_bits(12).unwrap(), 0xABC);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;

pub use bitstream::{BitReader, BitWriter};
pub use error::{BlocksortError, Result};
