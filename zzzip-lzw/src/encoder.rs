//! LZW encoder (compression).

use crate::Code;
use crate::alphabet::seed_code;
use crate::codestream::{CodeWriter, codes_to_bytes};
use crate::config::CodeConfig;
use crate::error::{Result, ZzzError};
use crate::stats::CodingStats;
use crate::symbol_table::SymbolTable;
use std::io::{Read, Write};
use tracing::{debug, warn};

/// Encoder state between input bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EncoderState {
    /// Empty prefix: nothing consumed since the last flush.
    #[default]
    Idle,
    /// A non-empty prefix known to the symbol table.
    Growing {
        /// Longest matched text ending at the current input position.
        prefix: Vec<u8>,
        /// Code of `prefix`.
        code: Code,
    },
}

/// LZW encoder for compression.
#[derive(Debug)]
pub struct LzwEncoder {
    /// Dictionary for prefix lookup.
    table: SymbolTable,
    state: EncoderState,
    stats: CodingStats,
}

impl LzwEncoder {
    /// Create a new encoder with a freshly seeded table.
    pub fn new(config: CodeConfig) -> Self {
        Self {
            table: SymbolTable::new(config),
            state: EncoderState::Idle,
            stats: CodingStats::default(),
        }
    }

    /// Feed one input byte.
    ///
    /// Returns the code emitted by this step, if any. A code is emitted when
    /// `prefix + byte` is unknown: the prefix code goes out, `prefix + byte`
    /// is learned and the prefix restarts at `byte`.
    pub fn push(&mut self, byte: u8) -> Result<Option<Code>> {
        let byte_code = seed_code(byte).ok_or(ZzzError::AlphabetViolation {
            byte,
            offset: self.stats.plain_bytes,
        })?;
        self.stats.plain_bytes += 1;

        let EncoderState::Growing { prefix, code } = &mut self.state else {
            self.state = EncoderState::Growing {
                prefix: vec![byte],
                code: byte_code,
            };
            return Ok(None);
        };

        prefix.push(byte);
        if let Some(extended) = self.table.lookup_code(prefix.as_slice()) {
            *code = extended;
            return Ok(None);
        }

        let emitted = *code;
        let candidate = std::mem::replace(prefix, vec![byte]);
        *code = byte_code;

        self.learn(candidate)?;
        self.stats.codes += 1;
        Ok(Some(emitted))
    }

    /// Flush the pending prefix at end of input.
    ///
    /// Returns the final code, or `None` if the input was empty.
    pub fn finish(&mut self) -> Option<Code> {
        match std::mem::take(&mut self.state) {
            EncoderState::Idle => None,
            EncoderState::Growing { code, .. } => {
                self.stats.codes += 1;
                Some(code)
            }
        }
    }

    /// Add an entry, freezing the table when the code space runs out.
    fn learn(&mut self, text: Vec<u8>) -> Result<()> {
        match self.table.insert(text) {
            Ok(_) => self.stats.entries_learned += 1,
            Err(ZzzError::DictionaryExhausted { max_code }) => {
                if !self.stats.dictionary_frozen {
                    warn!(
                        max_code,
                        offset = self.stats.plain_bytes,
                        "dictionary exhausted, continuing with a frozen table"
                    );
                    self.stats.dictionary_frozen = true;
                }
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Encode a byte stream into a code stream.
    ///
    /// The encoder is reset first, so every call is an independent pass.
    /// `reader` is consumed byte by byte; wrap unbuffered sources in a
    /// [`std::io::BufReader`].
    pub fn encode_stream<R: Read, W: Write>(&mut self, reader: R, writer: W) -> Result<CodingStats> {
        self.reset();
        debug!(max_code = self.table.config().max_code(), "encode pass started");

        let mut writer = CodeWriter::new(writer);
        for byte in reader.bytes() {
            if let Some(code) = self.push(byte?)? {
                writer.write_code(code)?;
            }
        }
        if let Some(code) = self.finish() {
            writer.write_code(code)?;
        }
        writer.finish()?;

        debug!(
            plain_bytes = self.stats.plain_bytes,
            codes = self.stats.codes,
            learned = self.stats.entries_learned,
            frozen = self.stats.dictionary_frozen,
            "encode pass finished"
        );
        Ok(self.stats)
    }

    /// Encode `input` into a list of codes.
    pub fn encode_codes(&mut self, input: &[u8]) -> Result<Vec<Code>> {
        self.reset();
        let mut codes = Vec::new();
        for &byte in input {
            codes.extend(self.push(byte)?);
        }
        codes.extend(self.finish());
        Ok(codes)
    }

    /// Encode `input` into its persisted byte form.
    pub fn encode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        self.encode_codes(input).map(|codes| codes_to_bytes(&codes))
    }

    /// Current state of the machine.
    pub fn state(&self) -> &EncoderState {
        &self.state
    }

    /// Statistics of the current pass.
    pub fn stats(&self) -> CodingStats {
        self.stats
    }

    /// The symbol table built so far.
    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Reset the encoder to its initial state.
    pub fn reset(&mut self) {
        self.table.seed();
        self.state = EncoderState::Idle;
        self.stats = CodingStats::default();
    }
}
