//! Fixed-width code stream I/O.
//!
//! A code stream is a bare sequence of 16-bit big-endian codes: no header,
//! no length prefix and no end marker. End of stream is end of file.

use crate::Code;
use crate::error::{Result, ZzzError};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{ErrorKind, Read, Write};

/// Width of one code in bytes.
pub const CODE_WIDTH_BYTES: usize = 2;

/// Writes codes to an underlying byte sink.
#[derive(Debug)]
pub struct CodeWriter<W: Write> {
    inner: W,
    codes_written: u64,
}

impl<W: Write> CodeWriter<W> {
    /// Create a new code writer.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            codes_written: 0,
        }
    }

    /// Write one code.
    pub fn write_code(&mut self, code: Code) -> Result<()> {
        self.inner.write_u16::<BigEndian>(code)?;
        self.codes_written += 1;
        Ok(())
    }

    /// Number of codes written so far.
    pub fn codes_written(&self) -> u64 {
        self.codes_written
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Reads codes from an underlying byte source.
#[derive(Debug)]
pub struct CodeReader<R: Read> {
    inner: R,
    /// Bytes consumed so far.
    position: u64,
}

impl<R: Read> CodeReader<R> {
    /// Create a new code reader.
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Read the next code.
    ///
    /// Returns `Ok(None)` at end of file on a code boundary. End of file
    /// inside a code is a malformed stream.
    pub fn read_code(&mut self) -> Result<Option<Code>> {
        let high = match self.inner.read_u8() {
            Ok(byte) => byte,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let low = match self.inner.read_u8() {
            Ok(byte) => byte,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                return Err(ZzzError::TruncatedCode {
                    length: self.position + 1,
                });
            }
            Err(e) => return Err(e.into()),
        };

        self.position += CODE_WIDTH_BYTES as u64;
        Ok(Some(Code::from_be_bytes([high, low])))
    }

    /// Byte position of the next code.
    pub fn position(&self) -> u64 {
        self.position
    }
}

impl<R: Read> Iterator for CodeReader<R> {
    type Item = Result<Code>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_code().transpose()
    }
}

/// Serialize codes to their persisted byte form.
pub fn codes_to_bytes(codes: &[Code]) -> Vec<u8> {
    codes.iter().flat_map(|code| code.to_be_bytes()).collect()
}

/// Parse a persisted code stream held in memory.
pub fn bytes_to_codes(data: &[u8]) -> Result<Vec<Code>> {
    CodeReader::new(data).collect()
}
