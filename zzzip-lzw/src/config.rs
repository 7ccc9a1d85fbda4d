//! Code-space configuration shared by the encoder and decoder.

use crate::Code;
use crate::alphabet::FIRST_DYNAMIC_CODE;
use crate::error::{Result, ZzzError};

/// Code-space parameters.
///
/// The configuration is not stored in the code stream, so the encoder and
/// decoder of one document must be built from the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeConfig {
    /// Highest code the symbol table may assign.
    max_code: Code,
}

impl CodeConfig {
    /// Full 16-bit code space.
    pub const DEFAULT: Self = Self { max_code: Code::MAX };

    /// Create a configuration with a lower code ceiling.
    ///
    /// The ceiling must at least cover the seed alphabet.
    pub fn with_max_code(max_code: Code) -> Result<Self> {
        if max_code < FIRST_DYNAMIC_CODE - 1 {
            return Err(ZzzError::InvalidConfig { max_code });
        }
        Ok(Self { max_code })
    }

    /// Highest assignable code.
    pub fn max_code(&self) -> Code {
        self.max_code
    }

    /// Number of codes available to learned entries.
    pub fn dynamic_capacity(&self) -> usize {
        (self.max_code as usize + 1) - FIRST_DYNAMIC_CODE as usize
    }
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodeConfig::default();
        assert_eq!(config.max_code(), 65535);
        assert_eq!(config.dynamic_capacity(), 65536 - 130);
    }

    #[test]
    fn test_ceiling_must_cover_seed() {
        assert!(CodeConfig::with_max_code(128).is_err());
        let config = CodeConfig::with_max_code(129).unwrap();
        assert_eq!(config.dynamic_capacity(), 0);
        let config = CodeConfig::with_max_code(140).unwrap();
        assert_eq!(config.dynamic_capacity(), 11);
    }
}
