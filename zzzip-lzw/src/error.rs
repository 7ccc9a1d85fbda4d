//! Error types for zzz coding passes.

use crate::Code;
use thiserror::Error;

/// Coarse classification of a [`ZzzError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input byte outside the seed alphabet.
    AlphabetViolation,
    /// Code space exhausted.
    DictionaryExhausted,
    /// Code stream cannot be decoded.
    MalformedStream,
    /// Rejected configuration.
    InvalidConfig,
    /// Underlying read or write failure.
    Io,
}

/// Compression/decompression errors.
#[derive(Debug, Error)]
pub enum ZzzError {
    /// Input byte that has no seed code.
    #[error("Byte {byte:#04x} at offset {offset} is outside the seed alphabet")]
    AlphabetViolation {
        /// Offending byte.
        byte: u8,
        /// Offset of the byte in the input.
        offset: u64,
    },

    /// Symbol table cannot assign another code.
    #[error("Dictionary exhausted (max code {max_code})")]
    DictionaryExhausted {
        /// Highest code the table may assign.
        max_code: Code,
    },

    /// Code stream ends in the middle of a code.
    #[error("Malformed stream: length {length} is not a multiple of the code width")]
    TruncatedCode {
        /// Total length of the stream in bytes.
        length: u64,
    },

    /// Code with no entry and no valid pending-entry interpretation.
    #[error("Malformed stream: invalid code {code} at byte {position}")]
    InvalidCode {
        /// The unresolvable code.
        code: Code,
        /// Byte position of the code in the stream.
        position: u64,
    },

    /// Code resolves to an empty text.
    #[error("Malformed stream: code {code} resolves to an empty entry")]
    EmptyEntry {
        /// The offending code.
        code: Code,
    },

    /// Code ceiling below the seed alphabet.
    #[error("Invalid configuration: max code {max_code} does not cover the seed alphabet")]
    InvalidConfig {
        /// Requested ceiling.
        max_code: Code,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ZzzError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlphabetViolation { .. } => ErrorKind::AlphabetViolation,
            Self::DictionaryExhausted { .. } => ErrorKind::DictionaryExhausted,
            Self::TruncatedCode { .. } | Self::InvalidCode { .. } | Self::EmptyEntry { .. } => {
                ErrorKind::MalformedStream
            }
            Self::InvalidConfig { .. } => ErrorKind::InvalidConfig,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Whether the code stream itself is corrupt.
    pub fn is_malformed(&self) -> bool {
        self.kind() == ErrorKind::MalformedStream
    }
}

/// Result type for zzz operations.
pub type Result<T> = std::result::Result<T, ZzzError>;
