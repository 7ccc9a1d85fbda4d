//! Decompress command implementation.

use crate::utils::{
    PartialOutput, ZZZ_SUFFIX, create_progress_bar, decompressed_path, ensure_distinct,
    require_suffix,
};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use zzzip_lzw::{CodeConfig, decompress_stream};

pub fn cmd_decompress(
    input: &Path,
    output: Option<PathBuf>,
    config: CodeConfig,
    force: bool,
    progress: bool,
) -> Result<()> {
    require_suffix(input, ZZZ_SUFFIX)?;
    let output = match output {
        Some(path) => path,
        None => decompressed_path(input)?,
    };

    ensure_distinct(input, &output)?;

    let file = File::open(input).with_context(|| format!("cannot open {}", input.display()))?;
    let len = file.metadata()?.len();
    let pb = create_progress_bar(len, progress);

    let (guard, out_file) = PartialOutput::create(&output, force)?;
    let reader = BufReader::new(pb.wrap_read(file));
    let stats = decompress_stream(reader, BufWriter::new(out_file), config)
        .with_context(|| format!("failed to decompress {}", input.display()))?;
    guard.commit();
    pb.finish_and_clear();

    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        codes = stats.codes,
        "decompressed"
    );
    println!("Decompressed: {} -> {}", input.display(), output.display());
    println!(
        "  {} codes -> {} bytes",
        stats.codes, stats.plain_bytes
    );

    Ok(())
}
