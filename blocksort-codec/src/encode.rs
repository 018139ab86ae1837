//! Blob encoders for both pipelines.

use crate::config::Pipeline;
use crate::container::ContainerHeader;
use crate::huffman::{self, FrequencyTable, HuffmanTree};
use crate::{bwt, mtf, suffix_array};
use blocksort_core::error::{BlocksortError, Result};
use log::debug;

/// Symbol count as stored in the header.
fn header_count(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| {
        BlocksortError::malformed_header(format!(
            "{} symbols exceed the 32-bit symbol count field",
            len
        ))
    })
}

/// Count, build the tree and bit-pack `symbols`.
fn entropy_code(symbols: &[u8]) -> (FrequencyTable, Vec<u8>) {
    let freqs = huffman::count_frequencies(symbols);
    let payload = match HuffmanTree::build(&freqs) {
        Some(tree) => {
            let codes = tree.code_table();
            debug!(
                "huffman: {} distinct symbols, longest code {} bits",
                codes.len(),
                codes.max_len()
            );
            huffman::pack(symbols, &codes, &freqs)
        }
        None => Vec::new(),
    };
    (freqs, payload)
}

/// Assemble header and payload into a blob.
fn assemble(header: &ContainerHeader, payload: &[u8]) -> Vec<u8> {
    let mut blob = Vec::with_capacity(header.len() + payload.len());
    header.write(&mut blob);
    blob.extend_from_slice(payload);
    blob
}

/// Compress with the block-sort pipeline (SBM1).
///
/// Fails with `AlphabetExhausted` when `raw` uses all 256 byte values.
pub fn encode_full(raw: &[u8]) -> Result<Vec<u8>> {
    let (extended, sentinel) = bwt::append_sentinel(raw)?;
    let symbol_count = header_count(extended.len())?;
    debug!("full: {} bytes, sentinel {:#04x}", raw.len(), sentinel);

    let sa = suffix_array::build(&extended);
    let (transformed, primary_index) = bwt::transform_with_suffix_array(&extended, &sa);
    drop(sa);
    debug!("full: primary index {}", primary_index);

    let ranks = mtf::transform(&transformed);
    let (frequencies, payload) = entropy_code(&ranks);

    let header = ContainerHeader {
        pipeline: Pipeline::Full,
        symbol_count,
        primary_index: Some(header_count(primary_index)?),
        frequencies,
    };
    debug!("full: payload {} bytes", payload.len());
    Ok(assemble(&header, &payload))
}

/// Compress with the entropy-only pipeline (HFN1).
pub fn encode_entropy(raw: &[u8]) -> Result<Vec<u8>> {
    let symbol_count = header_count(raw.len())?;
    let (frequencies, payload) = entropy_code(raw);

    let header = ContainerHeader {
        pipeline: Pipeline::Entropy,
        symbol_count,
        primary_index: None,
        frequencies,
    };
    debug!(
        "entropy: {} bytes, payload {} bytes",
        raw.len(),
        payload.len()
    );
    Ok(assemble(&header, &payload))
}

/// Compress with the given pipeline.
pub fn encode(raw: &[u8], pipeline: Pipeline) -> Result<Vec<u8>> {
    match pipeline {
        Pipeline::Full => encode_full(raw),
        Pipeline::Entropy => encode_entropy(raw),
    }
}
