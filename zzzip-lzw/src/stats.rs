//! Per-pass coding statistics.

use crate::codestream::CODE_WIDTH_BYTES;

/// Counters collected over one encode or decode pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodingStats {
    /// Plain-text bytes consumed (encoder) or produced (decoder).
    pub plain_bytes: u64,
    /// Codes emitted (encoder) or consumed (decoder).
    pub codes: u64,
    /// Entries added to the symbol table beyond the seed alphabet.
    pub entries_learned: u64,
    /// Whether the code space ran out during the pass.
    pub dictionary_frozen: bool,
}

impl CodingStats {
    /// Size of the code stream in bytes.
    pub fn code_bytes(&self) -> u64 {
        self.codes * CODE_WIDTH_BYTES as u64
    }

    /// Code stream size as a percentage of the plain text size.
    ///
    /// Returns `None` for an empty pass.
    pub fn ratio_percent(&self) -> Option<f64> {
        if self.plain_bytes == 0 {
            return None;
        }
        Some(self.code_bytes() as f64 / self.plain_bytes as f64 * 100.0)
    }
}
