//! Report command implementation.

use crate::utils::compression_ratio;
use blocksort_codec::{Pipeline, decode, encode};
use blocksort_core::BlocksortError;
use log::{debug, warn};
use serde::Serialize;
use std::path::Path;

/// Outcome of one pipeline on the input.
#[derive(Debug, Serialize)]
struct PipelineReport {
    pipeline: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    compressed_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ratio: Option<f64>,
    verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// JSON output for a report.
#[derive(Debug, Serialize)]
struct ReportJson {
    file: String,
    original_size: usize,
    pipelines: Vec<PipelineReport>,
}

fn measure(raw: &[u8], pipeline: Pipeline) -> PipelineReport {
    let blob = match encode(raw, pipeline) {
        Ok(blob) => blob,
        Err(e) => {
            if matches!(e, BlocksortError::AlphabetExhausted) {
                warn!("{}: {}", pipeline.name(), e);
            }
            return PipelineReport {
                pipeline: pipeline.name(),
                compressed_size: None,
                ratio: None,
                verified: false,
                error: Some(e.to_string()),
            };
        }
    };

    let (verified, error) = match decode(&blob) {
        Ok(restored) if restored == raw => (true, None),
        Ok(_) => (false, Some("round trip mismatch".to_string())),
        Err(e) => (false, Some(e.to_string())),
    };
    debug!("{}: {} bytes, verified {}", pipeline.name(), blob.len(), verified);

    PipelineReport {
        pipeline: pipeline.name(),
        compressed_size: Some(blob.len()),
        ratio: Some(compression_ratio(raw.len(), blob.len())),
        verified,
        error,
    }
}

fn build_report(file: &Path, raw: &[u8]) -> ReportJson {
    ReportJson {
        file: file.display().to_string(),
        original_size: raw.len(),
        pipelines: Pipeline::ALL.iter().map(|&p| measure(raw, p)).collect(),
    }
}

pub fn cmd_report(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::fs::read(input)?;
    let report = build_report(input, &raw);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("File: {} ({} bytes)", report.file, report.original_size);
        println!();
        println!(
            "{:>8} {:>12} {:>8} {:>9}",
            "Pipeline", "Compressed", "Ratio", "Verified"
        );
        println!("{}", "-".repeat(40));
        for entry in &report.pipelines {
            match (entry.compressed_size, entry.ratio) {
                (Some(size), Some(ratio)) => println!(
                    "{:>8} {:>12} {:>8.3} {:>9}",
                    entry.pipeline,
                    size,
                    ratio,
                    if entry.verified { "ok" } else { "FAILED" }
                ),
                _ => println!(
                    "{:>8} {:>12} {:>8} {:>9}",
                    entry.pipeline, "-", "-", "-"
                ),
            }
            if let Some(error) = &entry.error {
                println!("{:>8} {}", "", error);
            }
        }
    }

    if report
        .pipelines
        .iter()
        .any(|p| p.compressed_size.is_some() && !p.verified)
    {
        return Err("round trip verification failed".into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_both_pipelines() {
        let report = build_report(Path::new("t"), b"abracadabra abracadabra");
        assert_eq!(report.original_size, 23);
        assert_eq!(report.pipelines.len(), 2);
        assert_eq!(report.pipelines[0].pipeline, "full");
        assert_eq!(report.pipelines[1].pipeline, "entropy");
        assert!(report.pipelines.iter().all(|p| p.verified));
    }

    #[test]
    fn test_report_empty_ratio() {
        let report = build_report(Path::new("empty"), b"");
        for entry in &report.pipelines {
            assert_eq!(entry.ratio, Some(0.0));
            assert!(entry.verified);
        }
    }

    #[test]
    fn test_report_all_byte_values() {
        let all: Vec<u8> = (0..=255).collect();
        let report = build_report(Path::new("all"), &all);

        let full = &report.pipelines[0];
        assert!(full.compressed_size.is_none());
        assert!(!full.verified);
        assert!(full.error.is_some());

        assert!(report.pipelines[1].verified);
    }
}
