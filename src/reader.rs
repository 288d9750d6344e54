//! Bounds-checked packet reader.
//!
//! [`PacketReader`] walks a received payload field by field, in the same
//! order the sender used. It checks every read against the slice length
//! before handing off to the [Decoder](crate::codec::decode), so a truncated
//! or malformed payload is an [`OutOfBounds`](BufferError::OutOfBounds) error
//! instead of a panic.
//!
//! # Example
//!
//! ```
//! use wirebuf::reader::PacketReader;
//!
//! let payload = [0x01, 0x00, 0x02, 0x00, b'h', b'i'];
//! let mut reader = PacketReader::new(&payload);
//!
//! assert_eq!(reader.get::<u16>().unwrap(), 1);
//! assert_eq!(reader.get::<String>().unwrap(), "hi");
//! assert_eq!(reader.remaining(), 0);
//! assert!(reader.get::<u8>().is_err());
//! ```

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::codec::WireDecode;
use crate::error::{BufferError, Result};
use crate::layout::STRING_PREFIX_WIDTH;
use crate::value::{Quaternion, Timestamp, Value, ValueKind, Vector3};

/// Configuration for a [`PacketReader`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Position of the first read.
    pub start_offset: u16,
    /// Reject invalid UTF-8 in strings instead of replacing it.
    pub strict_utf8: bool,
}

impl ReaderConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position of the first read.
    pub fn with_start_offset(mut self, start_offset: u16) -> Self {
        self.start_offset = start_offset;
        self
    }

    /// Enable or disable strict UTF-8 checking.
    pub fn with_strict_utf8(mut self, strict_utf8: bool) -> Self {
        self.strict_utf8 = strict_utf8;
        self
    }
}

/// Sequential, bounds-checked reader over a borrowed payload.
#[derive(Debug, Clone)]
pub struct PacketReader<'a> {
    buf: &'a [u8],
    position: usize,
    strict_utf8: bool,
}

impl<'a> PacketReader<'a> {
    /// Create a reader at position 0 with lossy string decoding.
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_config(buf, ReaderConfig::default())
    }

    /// Create a reader with custom settings.
    pub fn with_config(buf: &'a [u8], config: ReaderConfig) -> Self {
        Self {
            buf,
            position: config.start_offset as usize,
            strict_utf8: config.strict_utf8,
        }
    }

    /// Fail unless `width` bytes are available at the current position.
    fn check(&self, width: usize) -> Result<()> {
        let len = self.buf.len();
        if self.position > len || width > len - self.position {
            return Err(BufferError::OutOfBounds {
                offset: self.position,
                width,
                len: self.buf.len(),
            });
        }
        Ok(())
    }

    /// Read the next value of type `T` and advance past it.
    ///
    /// On error the position does not move.
    pub fn get<T: WireDecode>(&mut self) -> Result<T> {
        let width = T::encoded_len_at(self.buf, self.position).ok_or_else(|| {
            BufferError::OutOfBounds {
                offset: self.position,
                width: STRING_PREFIX_WIDTH as usize,
                len: self.buf.len(),
            }
        })?;
        self.check(width)?;

        if self.strict_utf8 && T::KIND == ValueKind::String {
            let start = self.position + STRING_PREFIX_WIDTH as usize;
            let content = &self.buf[start..self.position + width];
            std::str::from_utf8(content).map_err(|source| BufferError::InvalidUtf8 {
                offset: self.position,
                source,
            })?;
        }

        let value = T::decode_at(self.buf, self.position);
        self.position += width;
        Ok(value)
    }

    /// Copy the next `len` raw bytes and advance past them.
    pub fn get_bytes(&mut self, len: usize) -> Result<Bytes> {
        self.check(len)?;
        let bytes = Bytes::copy_from_slice(&self.buf[self.position..self.position + len]);
        self.position += len;
        Ok(bytes)
    }

    /// Read the next value of a runtime-known kind.
    ///
    /// Raw byte runs need a length, so [`ValueKind::Bytes`] is logged and
    /// yields empty bytes without advancing; use
    /// [`get_bytes`](Self::get_bytes).
    pub fn get_value(&mut self, kind: ValueKind) -> Result<Value> {
        let value = match kind {
            ValueKind::Byte => Value::Byte(self.get()?),
            ValueKind::I16 => Value::I16(self.get()?),
            ValueKind::U16 => Value::U16(self.get()?),
            ValueKind::I32 => Value::I32(self.get()?),
            ValueKind::U32 => Value::U32(self.get()?),
            ValueKind::I64 => Value::I64(self.get()?),
            ValueKind::U64 => Value::U64(self.get()?),
            ValueKind::F32 => Value::F32(self.get()?),
            ValueKind::F64 => Value::F64(self.get()?),
            ValueKind::Vector3 => Value::Vector3(self.get::<Vector3>()?),
            ValueKind::Quaternion => Value::Quaternion(self.get::<Quaternion>()?),
            ValueKind::String => Value::String(self.get()?),
            ValueKind::Timestamp => Value::Timestamp(self.get::<Timestamp>()?),
            ValueKind::Bytes => {
                tracing::warn!(
                    "Cannot read raw bytes at position {} without a length, use get_bytes",
                    self.position
                );
                Value::default_for(kind)
            }
        };
        Ok(value)
    }

    /// Current read position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the read position. Bounds are checked on the next read.
    #[inline]
    pub fn seek(&mut self, position: usize) {
        self.position = position;
    }

    /// Bytes left after the current position.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.position)
    }
}
