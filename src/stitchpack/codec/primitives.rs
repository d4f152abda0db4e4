//! Fixed-width little-endian reader and writer used by the container codec.

use crate::error::{Result, StitchpackError};

/// Cursor over a byte slice. Every read names the field it is reading so a
/// short input reports exactly which part of the container was cut off.
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Fails with `TruncatedInput` unless `needed` more bytes are available.
    pub fn require(&self, needed: usize, field: &'static str) -> Result<()> {
        let available = self.remaining_len();
        if available < needed {
            return Err(StitchpackError::TruncatedInput {
                field,
                needed,
                available,
            });
        }
        Ok(())
    }

    pub fn read_bytes(&mut self, len: usize, field: &'static str) -> Result<&'a [u8]> {
        self.require(len, field)?;
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.read_bytes(N, field)?);
        Ok(buf)
    }

    pub fn read_u32(&mut self, field: &'static str) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array(field)?))
    }

    pub fn read_i32(&mut self, field: &'static str) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_array(field)?))
    }
}

/// Growable output buffer.
#[derive(Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
