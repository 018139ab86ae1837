//! Compress command implementation.

use crate::PipelineChoice;
use crate::utils::{compressed_path, compression_ratio};
use blocksort_codec::{Pipeline, encode};
use blocksort_core::BlocksortError;
use log::{info, warn};
use std::path::Path;

/// Encode `raw` with the chosen pipeline.
///
/// `Auto` tries the full pipeline first and falls back to entropy-only when
/// the input leaves no byte value free for the sentinel.
pub fn compress_bytes(
    raw: &[u8],
    choice: PipelineChoice,
) -> blocksort_core::Result<(Pipeline, Vec<u8>)> {
    match choice {
        PipelineChoice::Full => Ok((Pipeline::Full, encode(raw, Pipeline::Full)?)),
        PipelineChoice::Entropy => Ok((Pipeline::Entropy, encode(raw, Pipeline::Entropy)?)),
        PipelineChoice::Auto => match encode(raw, Pipeline::Full) {
            Ok(blob) => Ok((Pipeline::Full, blob)),
            Err(BlocksortError::AlphabetExhausted) => {
                warn!("all 256 byte values present, falling back to entropy-only");
                Ok((Pipeline::Entropy, encode(raw, Pipeline::Entropy)?))
            }
            Err(e) => Err(e),
        },
    }
}

pub fn cmd_compress(
    input: &Path,
    output: Option<&Path>,
    choice: PipelineChoice,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read(input)?;
    let (pipeline, blob) = compress_bytes(&raw, choice)?;

    let output = output.map_or_else(|| compressed_path(input, pipeline), Path::to_path_buf);
    std::fs::write(&output, &blob)?;

    info!(
        "{} -> {} ({}, ratio {:.3})",
        input.display(),
        output.display(),
        pipeline.name(),
        compression_ratio(raw.len(), blob.len())
    );
    println!(
        "Compressed {} ({} bytes) to {} ({} bytes) using {}",
        input.display(),
        raw.len(),
        output.display(),
        blob.len(),
        pipeline
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_prefers_full() {
        let (pipeline, blob) = compress_bytes(b"banana", PipelineChoice::Auto).unwrap();
        assert_eq!(pipeline, Pipeline::Full);
        assert_eq!(&blob[..4], b"SBM1");
    }

    #[test]
    fn test_auto_falls_back() {
        let all: Vec<u8> = (0..=255).collect();
        let (pipeline, blob) = compress_bytes(&all, PipelineChoice::Auto).unwrap();
        assert_eq!(pipeline, Pipeline::Entropy);
        assert_eq!(&blob[..4], b"HFN1");
    }

    #[test]
    fn test_explicit_full_fails() {
        let all: Vec<u8> = (0..=255).collect();
        assert!(matches!(
            compress_bytes(&all, PipelineChoice::Full),
            Err(BlocksortError::AlphabetExhausted)
        ));
    }
}
