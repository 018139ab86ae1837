//! Utility functions for the CLI.

use blocksort_codec::Pipeline;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension used when a decompressed file has no recognizable suffix.
const RESTORED_EXTENSION: &str = "out";

/// `<input>.sbm` or `<input>.hfn`.
pub fn compressed_path(input: &Path, pipeline: Pipeline) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(pipeline.extension());
    PathBuf::from(name)
}

/// Strip a pipeline extension, or append `.out` when there is none.
pub fn restored_path(input: &Path) -> PathBuf {
    let known = input
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| Pipeline::ALL.iter().any(|p| p.extension() == ext));

    if known {
        input.with_extension("")
    } else {
        let mut name = OsString::from(input.as_os_str());
        name.push(".");
        name.push(RESTORED_EXTENSION);
        PathBuf::from(name)
    }
}

/// Compressed size over original size; 0 for an empty original.
pub fn compression_ratio(original: usize, compressed: usize) -> f64 {
    if original == 0 {
        0.0
    } else {
        compressed as f64 / original as f64
    }
}
