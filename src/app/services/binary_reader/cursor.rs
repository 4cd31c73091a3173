//! Cursor over a fixed-size record buffer
//!
//! Every read advances the cursor by exactly the declared width of the value.
//! Reading past the end of the buffer means the layout table does not match the
//! record width; it is reported as a structural [`DecodeError`] at the byte
//! offset where the read started.

use crate::config::TextEncoding;
use crate::error::{DecodeError, DecodeResult};
use byteorder::{ByteOrder, LittleEndian};

/// Fixed-width little-endian scalar
pub trait LeScalar: Copy + Default {
    /// Width on disk in bytes
    const WIDTH: usize;

    /// Decode from exactly `WIDTH` bytes
    fn from_le(bytes: &[u8]) -> Self;
}

impl LeScalar for u8 {
    const WIDTH: usize = 1;

    fn from_le(bytes: &[u8]) -> Self {
        bytes[0]
    }
}

impl LeScalar for u16 {
    const WIDTH: usize = 2;

    fn from_le(bytes: &[u8]) -> Self {
        LittleEndian::read_u16(bytes)
    }
}

impl LeScalar for i32 {
    const WIDTH: usize = 4;

    fn from_le(bytes: &[u8]) -> Self {
        LittleEndian::read_i32(bytes)
    }
}

impl LeScalar for f32 {
    const WIDTH: usize = 4;

    fn from_le(bytes: &[u8]) -> Self {
        LittleEndian::read_f32(bytes)
    }
}

impl LeScalar for f64 {
    const WIDTH: usize = 8;

    fn from_le(bytes: &[u8]) -> Self {
        LittleEndian::read_f64(bytes)
    }
}

/// Sequential reader over one record buffer
#[derive(Debug, Clone)]
pub struct RecordCursor<'a> {
    buffer: &'a [u8],
    position: usize,
    encoding: TextEncoding,
}

impl<'a> RecordCursor<'a> {
    /// Cursor at the start of `buffer`, decoding strings as Latin-1
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_encoding(buffer, TextEncoding::default())
    }

    pub fn with_encoding(buffer: &'a [u8], encoding: TextEncoding) -> Self {
        Self {
            buffer,
            position: 0,
            encoding,
        }
    }

    /// Current byte offset from the start of the buffer
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left to read
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn take(&mut self, width: usize) -> DecodeResult<&'a [u8]> {
        if width > self.remaining() {
            return Err(DecodeError::structural(format!(
                "read of {} bytes overruns the {}-byte record ({} bytes left)",
                width,
                self.buffer.len(),
                self.remaining()
            ))
            .at_byte(self.position as u64)
            .with_bytes(&self.buffer[self.position..]));
        }

        let bytes = &self.buffer[self.position..self.position + width];
        self.position += width;
        Ok(bytes)
    }

    /// Read one scalar
    pub fn read<T: LeScalar>(&mut self) -> DecodeResult<T> {
        self.take(T::WIDTH).map(T::from_le)
    }

    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        self.read()
    }

    pub fn read_u16_le(&mut self) -> DecodeResult<u16> {
        self.read()
    }

    pub fn read_i32_le(&mut self) -> DecodeResult<i32> {
        self.read()
    }

    pub fn read_f32_le(&mut self) -> DecodeResult<f32> {
        self.read()
    }

    pub fn read_f64_le(&mut self) -> DecodeResult<f64> {
        self.read()
    }

    /// Read a fixed-width string, optionally dropping trailing blanks and NULs
    pub fn read_fixed_string(&mut self, width: usize, trim_padding: bool) -> DecodeResult<String> {
        let bytes = self.take(width)?;
        let (text, _) = self.encoding.decode(bytes);

        if trim_padding {
            Ok(text.trim_end_matches([' ', '\0']).to_string())
        } else {
            Ok(text.into_owned())
        }
    }

    /// Read `N` consecutive scalars
    pub fn read_array<T: LeScalar, const N: usize>(&mut self) -> DecodeResult<[T; N]> {
        let bytes = self.take(T::WIDTH * N)?;
        let mut values = [T::default(); N];
        for (value, chunk) in values.iter_mut().zip(bytes.chunks_exact(T::WIDTH)) {
            *value = T::from_le(chunk);
        }
        Ok(values)
    }

    /// Read `count` consecutive scalars
    pub fn read_vec<T: LeScalar>(&mut self, count: usize) -> DecodeResult<Vec<T>> {
        let bytes = self.take(T::WIDTH * count)?;
        Ok(bytes.chunks_exact(T::WIDTH).map(T::from_le).collect())
    }

    /// Advance over `width` bytes without decoding them
    pub fn skip(&mut self, width: usize) -> DecodeResult<()> {
        self.take(width).map(|_| ())
    }
}
