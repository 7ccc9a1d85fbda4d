//! LZW decoder (decompression).
//!
//! The decoder rebuilds the encoder's symbol table from the code stream
//! alone, learning each entry one code later than the encoder did. A code
//! may therefore name the entry the encoder learned on its previous step,
//! which the decoder has not materialized yet; its text is the previous
//! text plus its own first byte.

use crate::Code;
use crate::codestream::{CODE_WIDTH_BYTES, CodeReader};
use crate::config::CodeConfig;
use crate::error::{Result, ZzzError};
use crate::stats::CodingStats;
use crate::symbol_table::SymbolTable;
use std::io::{Read, Write};
use tracing::{debug, warn};

/// Decoder state between codes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DecoderState {
    /// No code decoded yet.
    #[default]
    Idle,
    /// At least one code decoded.
    Primed {
        /// Text of the last decoded code.
        previous: Vec<u8>,
    },
}

impl DecoderState {
    /// Text of the last decoded code.
    pub fn previous(&self) -> Option<&[u8]> {
        match self {
            Self::Idle => None,
            Self::Primed { previous } => Some(previous),
        }
    }
}

/// LZW decoder for decompression.
#[derive(Debug)]
pub struct LzwDecoder {
    /// Dictionary for code lookup.
    table: SymbolTable,
    state: DecoderState,
    stats: CodingStats,
}

impl LzwDecoder {
    /// Create a new decoder with a freshly seeded table.
    pub fn new(config: CodeConfig) -> Self {
        Self {
            table: SymbolTable::new(config),
            state: DecoderState::Idle,
            stats: CodingStats::default(),
        }
    }

    /// Decode one code and return its text.
    pub fn push(&mut self, code: Code) -> Result<&[u8]> {
        let position = self.stats.codes * CODE_WIDTH_BYTES as u64;

        let text = match &self.state {
            DecoderState::Idle => self.known_text(code, position)?.to_vec(),
            DecoderState::Primed { previous } => {
                let mut entry = previous.clone();
                let text = if self.table.lookup_text(code).is_some() {
                    let text = self.known_text(code, position)?.to_vec();
                    entry.push(text[0]);
                    text
                } else if self.table.next_code() == Some(code) {
                    // The entry the encoder learned on its previous step.
                    let first = *previous.first().ok_or(ZzzError::EmptyEntry { code })?;
                    entry.push(first);
                    entry.clone()
                } else {
                    return Err(ZzzError::InvalidCode { code, position });
                };
                self.learn(entry)?;
                text
            }
        };

        self.stats.codes += 1;
        self.stats.plain_bytes += text.len() as u64;
        self.state = DecoderState::Primed { previous: text };
        Ok(self.state.previous().unwrap_or_default())
    }

    /// Text of an assigned code, rejecting unknown codes and empty texts.
    fn known_text(&self, code: Code, position: u64) -> Result<&[u8]> {
        let text = self
            .table
            .lookup_text(code)
            .ok_or(ZzzError::InvalidCode { code, position })?;
        if text.is_empty() {
            return Err(ZzzError::EmptyEntry { code });
        }
        Ok(text)
    }

    /// Add an entry, freezing the table when the code space runs out.
    ///
    /// Inserts fail at exactly the step where the encoder's did, so both
    /// sides freeze on the same entry.
    fn learn(&mut self, text: Vec<u8>) -> Result<()> {
        match self.table.insert(text) {
            Ok(_) => self.stats.entries_learned += 1,
            Err(ZzzError::DictionaryExhausted { max_code }) => {
                if !self.stats.dictionary_frozen {
                    warn!(
                        max_code,
                        codes = self.stats.codes,
                        "dictionary exhausted, continuing with a frozen table"
                    );
                    self.stats.dictionary_frozen = true;
                }
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Decode a code stream into a byte stream.
    ///
    /// The decoder is reset first, so every call is an independent pass.
    /// On error, whatever was already written to `writer` must be discarded
    /// by the caller.
    pub fn decode_stream<R: Read, W: Write>(
        &mut self,
        reader: R,
        mut writer: W,
    ) -> Result<CodingStats> {
        self.reset();
        debug!(max_code = self.table.config().max_code(), "decode pass started");

        let mut reader = CodeReader::new(reader);
        while let Some(code) = reader.read_code()? {
            let text = self.push(code)?;
            writer.write_all(text)?;
        }
        writer.flush()?;

        debug!(
            plain_bytes = self.stats.plain_bytes,
            codes = self.stats.codes,
            learned = self.stats.entries_learned,
            frozen = self.stats.dictionary_frozen,
            "decode pass finished"
        );
        Ok(self.stats)
    }

    /// Decode a list of codes.
    pub fn decode_codes(&mut self, codes: &[Code]) -> Result<Vec<u8>> {
        self.reset();
        let mut output = Vec::new();
        for &code in codes {
            output.extend_from_slice(self.push(code)?);
        }
        Ok(output)
    }

    /// Decode a persisted code stream held in memory.
    pub fn decode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len() * 2);
        self.decode_stream(input, &mut output)?;
        Ok(output)
    }

    /// Current state of the machine.
    pub fn state(&self) -> &DecoderState {
        &self.state
    }

    /// Statistics of the current pass.
    pub fn stats(&self) -> CodingStats {
        self.stats
    }

    /// The symbol table rebuilt so far.
    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Reset the decoder to its initial state.
    pub fn reset(&mut self) {
        self.table.seed();
        self.state = DecoderState::Idle;
        self.stats = CodingStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::LzwEncoder;
    use crate::error::ErrorKind;

    #[test]
    fn test_decode_empty() {
        let mut decoder = LzwDecoder::new(CodeConfig::DEFAULT);
        assert!(decoder.decode_codes(&[]).unwrap().is_empty());
        assert!(decoder.decode(&[]).unwrap().is_empty());
        assert_eq!(decoder.state(), &DecoderState::Idle);
    }

    #[test]
    fn test_decode_pending_entry() {
        // Every code after the first names the entry being defined.
        let mut decoder = LzwDecoder::new(CodeConfig::DEFAULT);
        let output = decoder.decode_codes(&[97, 130, 131, 132]).unwrap();
        assert_eq!(output, b"aaaaaaaaaa");
        assert_eq!(decoder.table().lookup_text(130), Some(&b"aa"[..]));
        assert_eq!(decoder.table().lookup_text(132), Some(&b"aaaa"[..]));
        assert_eq!(decoder.stats().entries_learned, 3);
    }

    #[test]
    fn test_one_step_behind() {
        let mut decoder = LzwDecoder::new(CodeConfig::DEFAULT);

        assert_eq!(decoder.push(b'a' as Code).unwrap(), b"a");
        assert_eq!(decoder.table().next_code(), Some(130));
        assert_eq!(decoder.state().previous(), Some(&b"a"[..]));

        // Learns "ab" only once 'b' arrives.
        assert_eq!(decoder.push(b'b' as Code).unwrap(), b"b");
        assert_eq!(decoder.table().lookup_text(130), Some(&b"ab"[..]));

        assert_eq!(decoder.push(130).unwrap(), b"ab");
        assert_eq!(decoder.table().lookup_text(131), Some(&b"ba"[..]));

        // 132 is the pending "ab" + 'a'.
        assert_eq!(decoder.push(132).unwrap(), b"aba");
        assert_eq!(decoder.table().lookup_text(132), Some(&b"aba"[..]));
    }

    #[test]
    fn test_invalid_first_code() {
        let mut decoder = LzwDecoder::new(CodeConfig::DEFAULT);
        for code in [0, 31, 130, 500] {
            let err = decoder.decode_codes(&[code]).unwrap_err();
            assert!(
                matches!(err, ZzzError::InvalidCode { code: c, position: 0 } if c == code),
                "code {code}: {err}"
            );
        }
    }

    #[test]
    fn test_code_beyond_pending_entry() {
        let mut decoder = LzwDecoder::new(CodeConfig::DEFAULT);
        let err = decoder.decode_codes(&[97, 98, 132]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedStream);
        assert!(matches!(
            err,
            ZzzError::InvalidCode {
                code: 132,
                position: 4
            }
        ));
    }

    #[test]
    fn test_odd_length_stream() {
        let mut decoder = LzwDecoder::new(CodeConfig::DEFAULT);
        let err = decoder.decode(&[0x00, 0x61, 0x00]).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_frozen_dictionary_mirrors_encoder() {
        let config = CodeConfig::with_max_code(131).unwrap();
        let mut encoder = LzwEncoder::new(config);
        let mut decoder = LzwDecoder::new(config);

        let original = b"abababababababab";
        let codes = encoder.encode_codes(original).unwrap();
        let output = decoder.decode_codes(&codes).unwrap();

        assert_eq!(output, original);
        assert!(decoder.stats().dictionary_frozen);
        assert_eq!(
            decoder.stats().entries_learned,
            encoder.stats().entries_learned
        );
    }

    #[test]
    fn test_no_pending_entry_when_frozen() {
        let config = CodeConfig::with_max_code(130).unwrap();
        let mut decoder = LzwDecoder::new(config);
        // 131 can never be assigned under this ceiling.
        let err = decoder.decode_codes(&[97, 98, 131]).unwrap_err();
        assert!(matches!(err, ZzzError::InvalidCode { code: 131, .. }));
    }
}
