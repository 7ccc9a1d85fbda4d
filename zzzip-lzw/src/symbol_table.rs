//! Symbol table: the bidirectional code/text dictionary.

use crate::Code;
use crate::alphabet::{FIRST_SEED_CODE, SEED_ALPHABET_LEN, seed_entries};
use crate::config::CodeConfig;
use crate::error::{Result, ZzzError};
use std::collections::HashMap;

/// Growable dictionary mapping codes to byte strings and back.
///
/// Codes are assigned sequentially from the seed alphabet upwards and are
/// never removed or reassigned during a pass.
#[derive(Debug)]
pub struct SymbolTable {
    /// Code table: `code - FIRST_SEED_CODE` -> text.
    table: Vec<Vec<u8>>,
    /// Reverse lookup: text -> code.
    reverse: HashMap<Vec<u8>, Code>,
    /// Configuration.
    config: CodeConfig,
}

impl SymbolTable {
    /// Create a seeded symbol table.
    pub fn new(config: CodeConfig) -> Self {
        let mut table = Self {
            table: Vec::with_capacity(SEED_ALPHABET_LEN),
            reverse: HashMap::with_capacity(SEED_ALPHABET_LEN),
            config,
        };
        table.seed();
        table
    }

    /// Reset the table to the seed alphabet.
    pub fn seed(&mut self) {
        self.table.clear();
        self.reverse.clear();

        for (code, byte) in seed_entries() {
            self.table.push(vec![byte]);
            self.reverse.insert(vec![byte], code);
        }
    }

    /// Exact-match lookup of a text.
    pub fn lookup_code(&self, text: &[u8]) -> Option<Code> {
        self.reverse.get(text).copied()
    }

    /// Text for a code, if assigned.
    pub fn lookup_text(&self, code: Code) -> Option<&[u8]> {
        let index = code.checked_sub(FIRST_SEED_CODE)? as usize;
        self.table.get(index).map(Vec::as_slice)
    }

    /// Assign the next code to `text`.
    ///
    /// Fails with [`ZzzError::DictionaryExhausted`] once the code space is
    /// used up, and with [`ZzzError::EmptyEntry`] for an empty text; the
    /// table stays valid and unchanged in both cases.
    pub fn insert(&mut self, text: Vec<u8>) -> Result<Code> {
        if text.is_empty() {
            return Err(ZzzError::EmptyEntry {
                code: self.next_code().unwrap_or(self.config.max_code()),
            });
        }

        let code = self.next_code().ok_or(ZzzError::DictionaryExhausted {
            max_code: self.config.max_code(),
        })?;

        // A corrupt stream can make the decoder learn a text twice; the
        // first code keeps the reverse mapping.
        self.reverse.entry(text.clone()).or_insert(code);
        self.table.push(text);

        Ok(code)
    }

    /// Code the next insert will receive, or `None` when the table is full.
    pub fn next_code(&self) -> Option<Code> {
        let next = FIRST_SEED_CODE as usize + self.table.len();
        if next > self.config.max_code() as usize {
            None
        } else {
            Some(next as Code)
        }
    }

    /// Whether the code space is exhausted.
    pub fn is_full(&self) -> bool {
        self.next_code().is_none()
    }

    /// Total number of entries, seed included.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false: the seed alphabet is never empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Number of entries learned since seeding.
    pub fn learned(&self) -> usize {
        self.table.len() - SEED_ALPHABET_LEN
    }

    /// Get the configuration.
    pub fn config(&self) -> &CodeConfig {
        &self.config
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new(CodeConfig::DEFAULT)
    }
}
