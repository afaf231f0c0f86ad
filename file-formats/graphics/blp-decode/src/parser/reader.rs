//! Bounds-checked field reads over a byte slice
//!
//! Every header field is read at its fixed position through [`Cursor`]; a read
//! that would pass the end of the buffer fails with
//! [`Error::TruncatedBuffer`] instead of touching memory outside the slice.

use super::error::Error;
use super::types::ParseResult;

/// Trait for reading binary data from a byte slice
pub trait ByteReader {
    /// Read a single unsigned 8-bit integer
    fn read_u8(&mut self) -> ParseResult<u8>;

    /// Read a single unsigned 32-bit integer in little-endian format
    fn read_u32_le(&mut self) -> ParseResult<u32>;

    /// Read exactly `n` bytes
    fn read_bytes(&mut self, n: usize) -> ParseResult<Vec<u8>>;

    /// Read exactly `N` bytes into an array
    fn read_array<const N: usize>(&mut self) -> ParseResult<[u8; N]>;

    /// Current position from the start of the data
    fn position(&self) -> usize;
}

/// A cursor for reading binary data from a byte slice
pub struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the beginning of the data
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    fn take(&mut self, n: usize) -> ParseResult<&'a [u8]> {
        let end = self
            .position
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or(Error::TruncatedBuffer {
                needed: self.position.saturating_add(n),
                actual: self.data.len(),
            })?;
        let bytes = &self.data[self.position..end];
        self.position = end;
        Ok(bytes)
    }
}

impl ByteReader for Cursor<'_> {
    fn read_u8(&mut self) -> ParseResult<u8> {
        let [value] = self.read_array::<1>()?;
        Ok(value)
    }

    fn read_u32_le(&mut self) -> ParseResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    fn read_bytes(&mut self, n: usize) -> ParseResult<Vec<u8>> {
        Ok(self.take(n)?.to_vec())
    }

    fn read_array<const N: usize>(&mut self) -> ParseResult<[u8; N]> {
        let mut buf = [0; N];
        buf.copy_from_slice(self.take(N)?);
        Ok(buf)
    }

    fn position(&self) -> usize {
        self.position
    }
}

/// Read a fixed number of little-endian `u32` values
pub fn read_u32_array<const N: usize>(reader: &mut impl ByteReader) -> ParseResult<[u32; N]> {
    let mut values = [0; N];
    for value in values.iter_mut() {
        *value = reader.read_u32_le()?;
    }
    Ok(values)
}
