//! Info command implementation.

use blocksort_codec::{ContainerHeader, Pipeline};
use serde::Serialize;
use std::path::Path;

/// JSON output for a blob header.
#[derive(Debug, Serialize)]
struct BlobInfoJson {
    file: String,
    pipeline: &'static str,
    magic: String,
    symbol_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_index: Option<u32>,
    distinct_symbols: usize,
    header_size: usize,
    payload_size: usize,
}

impl BlobInfoJson {
    fn from_header(file: &Path, header: &ContainerHeader, blob: &[u8]) -> Self {
        Self {
            file: file.display().to_string(),
            pipeline: header.pipeline.name(),
            magic: String::from_utf8_lossy(&header.pipeline.magic()).into_owned(),
            symbol_count: header.symbol_count,
            primary_index: header.primary_index,
            distinct_symbols: header.distinct_symbols(),
            header_size: header.len(),
            payload_size: header.payload(blob).len(),
        }
    }
}

pub fn cmd_info(blob_path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let blob = std::fs::read(blob_path)?;
    let header = ContainerHeader::parse(&blob)?;
    let info = BlobInfoJson::from_header(blob_path, &header, &blob);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Blob Information");
    println!("================");
    println!("File: {}", info.file);
    println!("Pipeline: {}", header.pipeline);
    println!("Size: {} bytes", blob.len());
    println!();
    println!("Header:");
    println!("  Magic: {}", info.magic);
    println!("  Symbol count: {}", info.symbol_count);
    if let Some(index) = info.primary_index {
        println!("  Primary index: {}", index);
    }
    println!("  Distinct symbols: {}", info.distinct_symbols);
    println!("  Header size: {} bytes", info.header_size);
    println!("  Payload size: {} bytes", info.payload_size);

    if header.pipeline == Pipeline::Full {
        // the coded stream carries the sentinel
        println!(
            "  Original size: {} bytes",
            info.symbol_count.saturating_sub(1)
        );
    } else {
        println!("  Original size: {} bytes", info.symbol_count);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blocksort_codec::encode_full;

    #[test]
    fn test_info_json_fields() {
        let blob = encode_full(b"banana").unwrap();
        let header = ContainerHeader::parse(&blob).unwrap();
        let info = BlobInfoJson::from_header(Path::new("banana.sbm"), &header, &blob);

        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["pipeline"], "full");
        assert_eq!(value["magic"], "SBM1");
        assert_eq!(value["symbol_count"], 7);
        assert_eq!(value["primary_index"], 4);
        assert_eq!(value["distinct_symbols"], 5);
        assert_eq!(value["header_size"], 1036);
    }
}
