//! Info command implementation.

use crate::utils::format_ratio;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, sink};
use std::path::Path;
use zzzip_lzw::{CodeConfig, CodingStats, decompress_stream};

/// Summary of a compressed file.
#[derive(Debug, Serialize)]
struct InfoReport {
    file: String,
    compressed_size: u64,
    original_size: u64,
    codes: u64,
    entries_learned: u64,
    dictionary_frozen: bool,
    max_code: u16,
}

impl InfoReport {
    fn new(input: &Path, stats: CodingStats, config: CodeConfig) -> Self {
        Self {
            file: input.display().to_string(),
            compressed_size: stats.code_bytes(),
            original_size: stats.plain_bytes,
            codes: stats.codes,
            entries_learned: stats.entries_learned,
            dictionary_frozen: stats.dictionary_frozen,
            max_code: config.max_code(),
        }
    }
}

pub fn cmd_info(input: &Path, config: CodeConfig, json: bool) -> Result<()> {
    let file = File::open(input).with_context(|| format!("cannot open {}", input.display()))?;
    let stats = decompress_stream(BufReader::new(file), sink(), config)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let report = InfoReport::new(input, stats, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("File Information");
    println!("================");
    println!("File: {}", report.file);
    println!("Compressed size: {} bytes", report.compressed_size);
    println!("Original size: {} bytes", report.original_size);
    println!("Codes: {}", report.codes);
    println!(
        "Compression ratio: {}",
        format_ratio(stats.ratio_percent())
    );
    println!(
        "Dictionary: {} learned entries (max code {}){}",
        report.entries_learned,
        report.max_code,
        if report.dictionary_frozen {
            ", frozen"
        } else {
            ""
        }
    );

    Ok(())
}
