//! Utility functions for the CLI.

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Suffix required on plain-text inputs.
pub const TEXT_SUFFIX: &str = ".txt";

/// Suffix of compressed files.
pub const ZZZ_SUFFIX: &str = ".zzz";

/// Create a byte progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
            .expect("progress bar template is valid")
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Check that `path` ends with `suffix`.
pub fn require_suffix(path: &Path, suffix: &str) -> Result<()> {
    let name = path.to_string_lossy();
    if !name.ends_with(suffix) || name.len() == suffix.len() {
        bail!("{} is not a {} file", path.display(), suffix);
    }
    Ok(())
}

/// Default output for `compress`: the input path with `.zzz` appended.
pub fn compressed_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(ZZZ_SUFFIX);
    PathBuf::from(name)
}

/// Default output for `decompress`: the input path without `.zzz`.
pub fn decompressed_path(input: &Path) -> Result<PathBuf> {
    let name = input.to_string_lossy();
    match name.strip_suffix(ZZZ_SUFFIX) {
        Some(stem) if !stem.is_empty() => Ok(PathBuf::from(stem)),
        _ => bail!("cannot derive an output name from {}", input.display()),
    }
}

/// Resolve `path` to an absolute form, even when it does not exist yet.
fn resolve(path: &Path) -> Option<PathBuf> {
    if let Ok(resolved) = fs::canonicalize(path) {
        return Some(resolved);
    }
    let name = path.file_name()?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Some(fs::canonicalize(parent).ok()?.join(name))
}

/// Refuse to write the output over the input it is read from.
pub fn ensure_distinct(input: &Path, output: &Path) -> Result<()> {
    let same = match (resolve(input), resolve(output)) {
        (Some(input), Some(output)) => input == output,
        _ => input == output,
    };
    if same {
        bail!(
            "output {} is the same file as input {}",
            output.display(),
            input.display()
        );
    }
    Ok(())
}

/// An output file that is deleted unless the pass completes.
#[derive(Debug)]
pub struct PartialOutput {
    path: PathBuf,
    committed: bool,
}

impl PartialOutput {
    /// Create the output file, refusing to clobber an existing one unless
    /// `force` is set.
    pub fn create(path: &Path, force: bool) -> Result<(Self, File)> {
        if !force && path.exists() {
            bail!("{} already exists (use --force to overwrite)", path.display());
        }
        let file =
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
        Ok((
            Self {
                path: path.to_path_buf(),
                committed: false,
            },
            file,
        ))
    }

    /// Keep the file.
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for PartialOutput {
    fn drop(&mut self) {
        if !self.committed {
            tracing::debug!(path = %self.path.display(), "removing partial output");
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Code stream size as a percentage of the text size, for display.
pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(ratio) => format!("{:.1}%", ratio),
        None => "-".to_string(),
    }
}
