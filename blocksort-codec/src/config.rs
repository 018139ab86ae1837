//! Pipeline selection and pinned wire-format constants.

use std::fmt;

/// Magic tag of a block-sort (suffix array + BWT + MTF + Huffman) blob.
pub const FULL_MAGIC: [u8; 4] = *b"SBM1";

/// Magic tag of an entropy-only (Huffman) blob.
pub const ENTROPY_MAGIC: [u8; 4] = *b"HFN1";

/// Length of every magic tag.
pub const MAGIC_LEN: usize = 4;

/// Width of every header integer and frequency count, in bytes.
pub const U32_LEN: usize = 4;

/// Header integers and frequency counts are little-endian.
pub const BYTE_ORDER_LITTLE_ENDIAN: bool = true;

/// Number of entries in the frequency table (one per byte value).
pub const FREQ_TABLE_LEN: usize = 256;

/// Serialized size of the frequency table.
pub const FREQ_TABLE_BYTES: usize = FREQ_TABLE_LEN * U32_LEN;

/// The two container pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pipeline {
    /// Suffix array, block transform, rank-list transform, then Huffman.
    #[default]
    Full,
    /// Huffman coding of the raw bytes.
    Entropy,
}

impl Pipeline {
    /// Both pipelines, full first.
    pub const ALL: [Self; 2] = [Self::Full, Self::Entropy];

    /// Magic tag written at the start of a blob.
    pub const fn magic(self) -> [u8; 4] {
        match self {
            Self::Full => FULL_MAGIC,
            Self::Entropy => ENTROPY_MAGIC,
        }
    }

    /// Size of the fixed header, frequency table included.
    ///
    /// - Full: magic, symbol count, primary index, table (1036 bytes)
    /// - Entropy: magic, symbol count, table (1032 bytes)
    pub const fn header_len(self) -> usize {
        match self {
            Self::Full => MAGIC_LEN + 2 * U32_LEN + FREQ_TABLE_BYTES,
            Self::Entropy => MAGIC_LEN + U32_LEN + FREQ_TABLE_BYTES,
        }
    }

    /// Whether the header carries a primary index.
    pub const fn has_primary_index(self) -> bool {
        matches!(self, Self::Full)
    }

    /// Detect the pipeline from the first bytes of a blob.
    pub fn from_magic(magic: &[u8]) -> Option<Self> {
        if magic.starts_with(&FULL_MAGIC) {
            Some(Self::Full)
        } else if magic.starts_with(&ENTROPY_MAGIC) {
            Some(Self::Entropy)
        } else {
            None
        }
    }

    /// Short name used in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Entropy => "entropy",
        }
    }

    /// Conventional file extension for blobs of this pipeline.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Full => "sbm",
            Self::Entropy => "hfn",
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "SBM1 (suffix array + BWT + MTF + Huffman)"),
            Self::Entropy => write!(f, "HFN1 (Huffman only)"),
        }
    }
}
