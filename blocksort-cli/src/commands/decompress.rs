//! Decompress command implementation.

use crate::utils::restored_path;
use blocksort_codec::{Pipeline, decode};
use log::info;
use std::path::Path;

pub fn cmd_decompress(
    input: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let blob = std::fs::read(input)?;
    let restored = decode(&blob)?;

    if let Some(pipeline) = Pipeline::from_magic(&blob) {
        info!("{}: {} pipeline", input.display(), pipeline.name());
    }

    let output = output.map_or_else(|| restored_path(input), Path::to_path_buf);
    std::fs::write(&output, &restored)?;

    println!(
        "Decompressed {} ({} bytes) to {} ({} bytes)",
        input.display(),
        blob.len(),
        output.display(),
        restored.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PipelineChoice;
    use crate::commands::cmd_compress;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("blocksort-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_compress_then_decompress_default_paths() {
        let dir = scratch_dir("default-paths");
        let input = dir.join("notes.txt");
        let original = b"she sells sea shells by the sea shore".repeat(20);
        std::fs::write(&input, &original).unwrap();

        cmd_compress(&input, None, PipelineChoice::Auto).unwrap();
        let blob_path = dir.join("notes.txt.sbm");
        assert_eq!(&std::fs::read(&blob_path).unwrap()[..4], b"SBM1");

        // decompressing must recreate the original file name
        std::fs::remove_file(&input).unwrap();
        cmd_decompress(&blob_path, None).unwrap();
        assert_eq!(std::fs::read(&input).unwrap(), original);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_compress_then_decompress_explicit_paths() {
        let dir = scratch_dir("explicit-paths");
        let input = dir.join("all-bytes.bin");
        let original: Vec<u8> = (0..=255).cycle().take(3000).collect();
        std::fs::write(&input, &original).unwrap();

        let blob_path = dir.join("packed");
        cmd_compress(&input, Some(blob_path.as_path()), PipelineChoice::Auto).unwrap();
        // every byte value is present, so auto picks the entropy pipeline
        assert_eq!(&std::fs::read(&blob_path).unwrap()[..4], b"HFN1");

        let restored = dir.join("restored.bin");
        cmd_decompress(&blob_path, Some(restored.as_path())).unwrap();
        assert_eq!(std::fs::read(&restored).unwrap(), original);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_decompress_rejects_unknown_magic() {
        let dir = scratch_dir("bad-magic");
        let input = dir.join("junk.sbm");
        std::fs::write(&input, b"JUNK and then some").unwrap();

        assert!(cmd_decompress(&input, None).is_err());
        assert!(!dir.join("junk").exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
