//! Block-sorting compression for blocksort.
//!
//! Two pipelines share one Huffman coder and one container layout:
//!
//! - **SBM1** (full): append a unique sentinel, build the suffix array, take
//!   the Burrows-Wheeler transform, recode with Move-to-Front, then Huffman.
//! - **HFN1** (entropy-only): Huffman-code the raw bytes.
//!
//! Each call processes one complete in-memory buffer; there is no streaming
//! mode and no state survives between calls.
//!
//! ## Example
//!
//! ```rust
//! use blocksort_codec::{decode, decode_full, encode_entropy, encode_full};
//!
//! let original = b"banana bandana";
//!
//! let blob = encode_full(original).unwrap();
//! assert_eq!(decode_full(&blob).unwrap(), original);
//!
//! let blob = encode_entropy(original).unwrap();
//! assert_eq!(decode(&blob).unwrap(), original);
//! ```
//!
//! Input containing all 256 byte values has no free sentinel, so the full
//! pipeline refuses it:
//!
//! ```rust
//! use blocksort_codec::{BlocksortError, encode_entropy, encode_full};
//!
//! let every_byte: Vec<u8> = (0..=255).collect();
//! assert!(matches!(encode_full(&every_byte), Err(BlocksortError::AlphabetExhausted)));
//! assert!(encode_entropy(&every_byte).is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

/// Burrows-Wheeler Transform implementation.
pub mod bwt;
pub mod config;
pub mod container;
mod decode;
mod encode;
pub mod huffman;
/// Move-to-Front transform implementation.
pub mod mtf;
pub mod suffix_array;

pub use blocksort_core::error::{BlocksortError, Result};
pub use config::{ENTROPY_MAGIC, FULL_MAGIC, Pipeline};
pub use container::ContainerHeader;
pub use decode::{decode, decode_entropy, decode_full};
pub use encode::{encode, encode_entropy, encode_full};
