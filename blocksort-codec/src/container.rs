//! Container header layout for SBM1 and HFN1 blobs.
//!
//! ```text
//! offset  SBM1 (full)              HFN1 (entropy-only)
//! 0       magic "SBM1"             magic "HFN1"
//! 4       u32 symbol count         u32 symbol count
//! 8       u32 primary index        256 x u32 frequencies
//! 12      256 x u32 frequencies    payload
//! 1036    payload
//! ```
//!
//! All integers are little-endian. The payload is the Huffman bit stream,
//! MSB-first and zero-padded to a byte boundary.

use crate::config::{ENTROPY_MAGIC, FREQ_TABLE_LEN, FULL_MAGIC, MAGIC_LEN, Pipeline, U32_LEN};
use crate::huffman::{FrequencyTable, HuffmanTree};
use blocksort_core::error::{BlocksortError, Result};

/// Append `value` as a little-endian u32.
pub(crate) fn write_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Read a little-endian u32 at `offset`; the caller checks bounds.
fn read_u32(blob: &[u8], offset: usize) -> u32 {
    let mut bytes = [0u8; U32_LEN];
    bytes.copy_from_slice(&blob[offset..offset + U32_LEN]);
    u32::from_le_bytes(bytes)
}

/// Parsed fixed-size header of a blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Pipeline named by the magic tag.
    pub pipeline: Pipeline,
    /// Number of entropy-coded symbols.
    pub symbol_count: u32,
    /// BWT primary index (full pipeline only).
    pub primary_index: Option<u32>,
    /// Frequency of each symbol in the coded stream.
    pub frequencies: FrequencyTable,
}

impl ContainerHeader {
    /// Parse the header of a blob of either pipeline.
    pub fn parse(blob: &[u8]) -> Result<Self> {
        let magic = &blob[..blob.len().min(MAGIC_LEN)];
        let pipeline = Pipeline::from_magic(magic).ok_or_else(|| {
            BlocksortError::bad_magic([FULL_MAGIC, ENTROPY_MAGIC].concat(), magic)
        })?;
        Self::parse_fields(blob, pipeline)
    }

    /// Parse the header of a blob that must belong to `pipeline`.
    pub fn parse_as(blob: &[u8], pipeline: Pipeline) -> Result<Self> {
        let expected = pipeline.magic();
        if !blob.starts_with(&expected) {
            let found = &blob[..blob.len().min(MAGIC_LEN)];
            return Err(BlocksortError::bad_magic(expected.to_vec(), found.to_vec()));
        }
        Self::parse_fields(blob, pipeline)
    }

    fn parse_fields(blob: &[u8], pipeline: Pipeline) -> Result<Self> {
        let header_len = pipeline.header_len();
        if blob.len() < header_len {
            return Err(BlocksortError::malformed_header(format!(
                "{} header needs {} bytes, blob has {}",
                pipeline.name(),
                header_len,
                blob.len()
            )));
        }

        let mut offset = MAGIC_LEN;
        let symbol_count = read_u32(blob, offset);
        offset += U32_LEN;

        let primary_index = if pipeline.has_primary_index() {
            let index = read_u32(blob, offset);
            offset += U32_LEN;
            Some(index)
        } else {
            None
        };

        let mut frequencies = [0u32; FREQ_TABLE_LEN];
        for freq in frequencies.iter_mut() {
            *freq = read_u32(blob, offset);
            offset += U32_LEN;
        }

        Ok(Self {
            pipeline,
            symbol_count,
            primary_index,
            frequencies,
        })
    }

    /// Serialize the header, ready for the payload to be appended.
    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.pipeline.magic());
        write_u32(out, self.symbol_count);
        if self.pipeline.has_primary_index() {
            write_u32(out, self.primary_index.unwrap_or(0));
        }
        for &freq in &self.frequencies {
            write_u32(out, freq);
        }
    }

    /// Size of the serialized header.
    pub fn len(&self) -> usize {
        self.pipeline.header_len()
    }

    /// Headers are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The payload that follows this header in `blob`.
    pub fn payload<'a>(&self, blob: &'a [u8]) -> &'a [u8] {
        blob.get(self.len()..).unwrap_or(&[])
    }

    /// Number of byte values with a non-zero count.
    pub fn distinct_symbols(&self) -> usize {
        self.frequencies.iter().filter(|&&f| f > 0).count()
    }

    /// Check that the header can describe `payload_len` bytes of payload.
    ///
    /// Catches impossible combinations before any entropy decoding runs.
    pub fn validate(&self, payload_len: usize) -> Result<()> {
        let n = u64::from(self.symbol_count);
        let total: u64 = self.frequencies.iter().map(|&f| u64::from(f)).sum();
        if total != n {
            return Err(BlocksortError::malformed_header(format!(
                "frequency total {} does not match symbol count {}",
                total, n
            )));
        }

        // Every code of a multi-symbol tree is at least one bit long
        if self.distinct_symbols() > 1 && (payload_len as u64) * 8 < n {
            return Err(BlocksortError::malformed_header(format!(
                "{} symbols cannot fit in {} payload bytes",
                n, payload_len
            )));
        }

        if self.pipeline == Pipeline::Full {
            if n == 0 {
                return Err(BlocksortError::malformed_header(
                    "full pipeline blob without sentinel symbol",
                ));
            }
            let index = u64::from(self.primary_index.unwrap_or(0));
            if index >= n {
                return Err(BlocksortError::malformed_header(format!(
                    "primary index {} out of range for {} symbols",
                    index, n
                )));
            }
        }

        Ok(())
    }

    /// Rebuild the Huffman tree the encoder used.
    pub fn tree(&self) -> Option<HuffmanTree> {
        HuffmanTree::build(&self.frequencies)
    }
}
