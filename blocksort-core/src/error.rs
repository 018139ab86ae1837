//! Error types for blocksort operations.
//!
//! Every failure a codec call can hit is surfaced as a distinct variant of
//! [`BlocksortError`]. Nothing is retried: each stage is a pure transform over
//! an in-memory buffer, so an error means the input itself is unusable.

use std::io;
use thiserror::Error;

/// The main error type for blocksort operations.
#[derive(Debug, Error)]
pub enum BlocksortError {
    /// Every byte value occurs in the input, so no sentinel can be chosen.
    #[error("Alphabet exhausted: input uses all 256 byte values, no sentinel available")]
    AlphabetExhausted,

    /// The blob does not start with the expected pipeline tag.
    #[error("Invalid magic number: expected {expected:02x?}, found {found:02x?}")]
    BadMagic {
        /// Expected magic bytes.
        expected: Vec<u8>,
        /// Actual magic bytes found.
        found: Vec<u8>,
    },

    /// A bit was requested past the end of the payload.
    #[error("Bit stream exhausted at bit position {bit_position}")]
    StreamExhausted {
        /// Absolute bit position of the failed read.
        bit_position: u64,
    },

    /// Header values that cannot describe a valid blob.
    #[error("Malformed header: {message}")]
    MalformedHeader {
        /// Description of the inconsistency.
        message: String,
    },

    /// I/O error from the front end.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for blocksort operations.
pub type Result<T> = std::result::Result<T, BlocksortError>;

impl BlocksortError {
    /// Create a bad magic error.
    pub fn bad_magic(expected: impl Into<Vec<u8>>, found: impl Into<Vec<u8>>) -> Self {
        Self::BadMagic {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a stream exhausted error.
    pub fn stream_exhausted(bit_position: u64) -> Self {
        Self::StreamExhausted { bit_position }
    }

    /// Create a malformed header error.
    pub fn malformed_header(message: impl Into<String>) -> Self {
        Self::MalformedHeader {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BlocksortError::bad_magic(b"HFN1".to_vec(), b"XFN1".to_vec());
        assert!(err.to_string().contains("Invalid magic"));

        let err = BlocksortError::stream_exhausted(17);
        assert!(err.to_string().contains("17"));

        let err = BlocksortError::malformed_header("frequency total 3 != symbol count 4");
        assert!(err.to_string().contains("frequency total"));

        assert!(
            BlocksortError::AlphabetExhausted
                .to_string()
                .contains("256")
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: BlocksortError = io_err.into();
        assert!(matches!(err, BlocksortError::Io(_)));
    }
}
