//! Compress command implementation.

use crate::utils::{
    PartialOutput, TEXT_SUFFIX, compressed_path, create_progress_bar, ensure_distinct,
    format_ratio, require_suffix,
};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use zzzip_lzw::{CodeConfig, compress_stream};

pub fn cmd_compress(
    input: &Path,
    output: Option<PathBuf>,
    config: CodeConfig,
    force: bool,
    progress: bool,
) -> Result<()> {
    require_suffix(input, TEXT_SUFFIX)?;
    let output = output.unwrap_or_else(|| compressed_path(input));

    ensure_distinct(input, &output)?;

    let file = File::open(input).with_context(|| format!("cannot open {}", input.display()))?;
    let len = file.metadata()?.len();
    let pb = create_progress_bar(len, progress);

    let (guard, out_file) = PartialOutput::create(&output, force)?;
    let reader = BufReader::new(pb.wrap_read(file));
    let stats = compress_stream(reader, BufWriter::new(out_file), config)
        .with_context(|| format!("failed to compress {}", input.display()))?;
    guard.commit();
    pb.finish_and_clear();

    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        codes = stats.codes,
        "compressed"
    );
    println!("Compressed: {} -> {}", input.display(), output.display());
    println!(
        "  {} bytes -> {} bytes ({})",
        stats.plain_bytes,
        stats.code_bytes(),
        format_ratio(stats.ratio_percent())
    );
    if stats.dictionary_frozen {
        println!("  Dictionary filled up; later text was coded with a frozen dictionary");
    }

    Ok(())
}
