//! Blob decoders for both pipelines.

use crate::config::Pipeline;
use crate::container::ContainerHeader;
use crate::{bwt, mtf};
use blocksort_core::BitReader;
use blocksort_core::error::{BlocksortError, Result};
use log::debug;

/// Validate the header and entropy-decode the symbol stream.
fn entropy_decode(header: &ContainerHeader, blob: &[u8]) -> Result<Vec<u8>> {
    let payload = header.payload(blob);
    header.validate(payload.len())?;

    let count = header.symbol_count as usize;
    let Some(tree) = header.tree() else {
        // validate() guarantees an all-zero table only for n == 0
        return Ok(Vec::new());
    };

    if let Some(symbol) = tree.single_symbol() {
        debug!("{}: lone symbol {:#04x} x {}", header.pipeline.name(), symbol, count);
    }

    let mut reader = BitReader::new(payload);
    let symbols = tree.decode(&mut reader, count)?;
    debug!(
        "{}: decoded {} symbols from {} payload bits",
        header.pipeline.name(),
        symbols.len(),
        reader.bit_position()
    );
    Ok(symbols)
}

/// Decompress an SBM1 blob.
pub fn decode_full(blob: &[u8]) -> Result<Vec<u8>> {
    let header = ContainerHeader::parse_as(blob, Pipeline::Full)?;
    decode_full_with_header(&header, blob)
}

fn decode_full_with_header(header: &ContainerHeader, blob: &[u8]) -> Result<Vec<u8>> {
    let ranks = entropy_decode(header, blob)?;
    let transformed = mtf::inverse_transform(&ranks);

    let primary_index = header.primary_index.unwrap_or(0) as usize;
    let mut restored = bwt::inverse_transform(&transformed, primary_index)?;

    // The forward side always appended a sentinel
    if restored.pop().is_none() {
        return Err(BlocksortError::malformed_header(
            "full pipeline blob without sentinel symbol",
        ));
    }
    Ok(restored)
}

/// Decompress an HFN1 blob.
pub fn decode_entropy(blob: &[u8]) -> Result<Vec<u8>> {
    let header = ContainerHeader::parse_as(blob, Pipeline::Entropy)?;
    entropy_decode(&header, blob)
}

/// Decompress a blob of either pipeline, chosen by its magic tag.
pub fn decode(blob: &[u8]) -> Result<Vec<u8>> {
    let header = ContainerHeader::parse(blob)?;
    match header.pipeline {
        Pipeline::Full => decode_full_with_header(&header, blob),
        Pipeline::Entropy => entropy_decode(&header, blob),
    }
}
