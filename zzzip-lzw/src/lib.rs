//! # zzzip-lzw: 16-bit LZW Text Compression
//!
//! This crate compresses plain text with an adaptive LZW dictionary and
//! writes the result as a bare stream of 16-bit codes (`.zzz` files).
//!
//! ## Format
//!
//! - **Seed alphabet**: printable ASCII (codes 32-126) followed by tab, CR
//!   and LF (codes 127-129). Any other input byte is rejected.
//! - **Learned entries**: codes from 130 upwards, one per emitted code.
//! - **Code stream**: big-endian `u16` codes, no header, no end marker.
//! - **Exhaustion**: once the code space is used up, both sides stop
//!   learning and keep coding with the frozen dictionary.
//!
//! The dictionary is never stored; the decoder rebuilds it from the seed
//! alphabet and the code stream.
//!
//! ## Example
//!
//! ```rust
//! use zzzip_lzw::{compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let compressed = compress(original).unwrap();
//! assert!(compressed.len() < original.len() * 2);
//!
//! let decompressed = decompress(&compressed).unwrap();
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Streaming
//!
//! ```rust
//! use zzzip_lzw::{CodeConfig, compress_stream, decompress_stream};
//!
//! let text = b"line one\nline two\n";
//! let mut codes = Vec::new();
//! let stats = compress_stream(&text[..], &mut codes, CodeConfig::DEFAULT).unwrap();
//! assert_eq!(stats.code_bytes(), codes.len() as u64);
//!
//! let mut restored = Vec::new();
//! decompress_stream(&codes[..], &mut restored, CodeConfig::DEFAULT).unwrap();
//! assert_eq!(restored, text);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod alphabet;
pub mod codestream;
mod config;
mod decoder;
mod encoder;
mod error;
mod stats;
mod symbol_table;

pub use codestream::{CODE_WIDTH_BYTES, CodeReader, CodeWriter};
pub use config::CodeConfig;
pub use decoder::{DecoderState, LzwDecoder};
pub use encoder::{EncoderState, LzwEncoder};
pub use error::{ErrorKind, Result, ZzzError};
pub use stats::CodingStats;
pub use symbol_table::SymbolTable;

use std::io::{Read, Write};

/// A dictionary code.
pub type Code = u16;

/// Compress text held in memory with the full 16-bit code space.
///
/// # Example
///
/// ```rust
/// use zzzip_lzw::compress;
///
/// assert!(compress(b"").unwrap().is_empty());
/// assert_eq!(compress(b"a").unwrap(), [0x00, 0x61]);
/// ```
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    LzwEncoder::new(CodeConfig::DEFAULT).encode(data)
}

/// Decompress a code stream held in memory with the full 16-bit code space.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    LzwDecoder::new(CodeConfig::DEFAULT).decode(data)
}

/// Compress `reader` into `writer`.
///
/// # Parameters
///
/// - `reader`: plain text; wrap unbuffered sources in a `BufReader`
/// - `writer`: destination for the code stream
/// - `config`: code space; the decoder must use the same value
///
/// # Returns
///
/// Statistics for the pass. On error the output is incomplete and should
/// be discarded.
pub fn compress_stream<R: Read, W: Write>(
    reader: R,
    writer: W,
    config: CodeConfig,
) -> Result<CodingStats> {
    LzwEncoder::new(config).encode_stream(reader, writer)
}

/// Decompress `reader` into `writer`.
///
/// # Parameters
///
/// - `reader`: code stream
/// - `writer`: destination for the plain text
/// - `config`: code space used by the encoder
///
/// # Returns
///
/// Statistics for the pass. On error the output is incomplete and should
/// be discarded.
pub fn decompress_stream<R: Read, W: Write>(
    reader: R,
    writer: W,
    config: CodeConfig,
) -> Result<CodingStats> {
    LzwDecoder::new(config).decode_stream(reader, writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let compressed = compress(original).unwrap();
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, original);
    }

    #[test]
    fn test_310_byte_roundtrip() {
        let original = b"This is a test of compression! ".repeat(10);
        assert_eq!(original.len(), 310);

        let compressed = compress(&original).unwrap();
        assert!(compressed.len() < original.len());
        let decompressed = decompress(&compressed).unwrap();
        assert_eq!(decompressed, original);
    }

    #[test]
    fn test_empty_input() {
        let compressed = compress(b"").unwrap();
        assert!(compressed.is_empty());
        assert!(decompress(&compressed).unwrap().is_empty());
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(compress(b"a").unwrap(), [0x00, 0x61]);
        assert_eq!(decompress(&[0x00, 0x61]).unwrap(), b"a");
    }

    #[test]
    fn test_repeating_pattern() {
        let original = vec![b'X'; 1000];
        let compressed = compress(&original).unwrap();
        assert!(compressed.len() < original.len() / 5);
        assert_eq!(decompress(&compressed).unwrap(), original);
    }
}
