//! Binary reading and writing utilities for the client protocol.
//!
//! All multi-byte values are big-endian.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::ProtocolError;

/// A reader for parsing binary protocol messages.
#[derive(Debug)]
pub struct BinaryReader {
    buf: Bytes,
}

impl BinaryReader {
    /// Create a new reader from raw bytes.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { buf: data.into() }
    }

    /// Returns remaining bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    #[inline]
    fn ensure(&self, n: usize) -> Result<(), ProtocolError> {
        if self.buf.remaining() >= n {
            Ok(())
        } else {
            Err(ProtocolError::UnexpectedEof)
        }
    }

    #[inline]
    pub fn get_u8(&mut self) -> Result<u8, ProtocolError> {
        self.ensure(1)?;
        Ok(self.buf.get_u8())
    }

    #[inline]
    pub fn get_u16(&mut self) -> Result<u16, ProtocolError> {
        self.ensure(2)?;
        Ok(self.buf.get_u16())
    }

    /// Read a null-terminated big-endian UTF-16 string.
    ///
    /// Fails with `UnexpectedEof` if the terminator is missing and with
    /// `Encoding` on unpaired surrogates.
    pub fn get_string_big_unicode_null(&mut self) -> Result<String, ProtocolError> {
        let mut units = Vec::new();
        loop {
            let unit = self.get_u16()?;
            if unit == 0 {
                break;
            }
            units.push(unit);
        }
        String::from_utf16(&units).map_err(|_| {
            ProtocolError::Encoding("unpaired surrogate in UTF-16BE string".to_string())
        })
    }
}

/// A writer for building binary protocol messages.
#[derive(Debug, Default)]
pub struct BinaryWriter {
    buf: BytesMut,
}

impl BinaryWriter {
    /// Create a new writer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Create a new writer with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Returns the current length.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn put_u8(&mut self, v: u8) {
        self.buf.put_u8(v);
    }

    #[inline]
    pub fn put_u16(&mut self, v: u16) {
        self.buf.put_u16(v);
    }

    /// Write a null-terminated big-endian UTF-16 string.
    ///
    /// Text containing U+0000 cannot be represented: the reader would stop
    /// at the embedded null.
    pub fn put_string_big_unicode_null(&mut self, s: &str) -> Result<(), ProtocolError> {
        if let Some(pos) = s.find('\0') {
            return Err(ProtocolError::Encoding(format!(
                "embedded null character at byte {pos}"
            )));
        }
        for unit in s.encode_utf16() {
            self.buf.put_u16(unit);
        }
        self.buf.put_u16(0);
        Ok(())
    }

    /// Consume the writer and return the built buffer.
    pub fn finish(self) -> Bytes {
        self.buf.freeze()
    }

    /// Get current buffer as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }
}
