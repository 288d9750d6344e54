//! Cursor-based packet writer.
//!
//! [`PacketWriter`] owns a buffer and a write position, and lays fields out
//! back to back by delegating each put to the
//! [Encoder](crate::codec::encode) at the current position:
//!
//! ```text
//! put(u16) ─┐        put("hi") ─┐
//!           ▼                   ▼
//! ┌─────────┬──────────────────────┐
//! │ 01 00   │ 02 00 68 69          │
//! └─────────┴──────────────────────┘
//! 0         2                      6 ◄── position
//! ```
//!
//! # Example
//!
//! ```
//! use wirebuf::writer::PacketWriter;
//!
//! let mut writer = PacketWriter::new();
//! writer.put(1u16).unwrap();
//! writer.put("hi").unwrap();
//!
//! assert_eq!(writer.position(), 6);
//! assert_eq!(writer.as_bytes(), &[0x01, 0x00, 0x02, 0x00, b'h', b'i']);
//! ```

use bytes::{Bytes, BytesMut};
use serde::{Deserialize, Serialize};

use crate::codec::{write_into, WireEncode};
use crate::diagnostics::HexDump;
use crate::error::Result;
use crate::layout::new_buffer;
use crate::value::Value;

/// Default pre-sized buffer length.
pub const DEFAULT_INITIAL_CAPACITY: u16 = 0;

/// Default first write position.
pub const DEFAULT_START_OFFSET: u16 = 0;

/// Configuration for a [`PacketWriter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Zero-filled length the buffer starts with.
    pub initial_capacity: u16,
    /// Position of the first put, e.g. to leave room for a header
    /// filled in later with [`PacketWriter::put_at`].
    pub start_offset: u16,
}

impl WriterConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the zero-filled starting length.
    pub fn with_initial_capacity(mut self, initial_capacity: u16) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the position of the first put.
    pub fn with_start_offset(mut self, start_offset: u16) -> Self {
        self.start_offset = start_offset;
        self
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            start_offset: DEFAULT_START_OFFSET,
        }
    }
}

/// Sequential writer over an owned, growable buffer.
pub struct PacketWriter {
    buffer: BytesMut,
    position: u16,
}

impl PacketWriter {
    /// Create a writer with default settings (empty buffer, position 0).
    pub fn new() -> Self {
        Self::with_config(WriterConfig::default())
    }

    /// Create a writer with custom settings.
    pub fn with_config(config: WriterConfig) -> Self {
        Self {
            buffer: new_buffer(config.initial_capacity),
            position: config.start_offset,
        }
    }

    /// Continue writing into an existing buffer, starting at position 0.
    pub fn from_buffer(buffer: BytesMut) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Write `value` at the current position and advance past it.
    ///
    /// Returns the offset the value was written at. On error neither the
    /// buffer nor the position changes.
    pub fn put<T: WireEncode>(&mut self, value: T) -> Result<u16> {
        let offset = self.position;
        let width = value.encoded_len();
        write_into(&mut self.buffer, offset, value)?;
        // write_into checked offset + width <= u16::MAX
        self.position = offset + width as u16;
        Ok(offset)
    }

    /// Write `value` at `offset` without moving the position.
    pub fn put_at<T: WireEncode>(&mut self, offset: u16, value: T) -> Result<()> {
        write_into(&mut self.buffer, offset, value)
    }

    /// Put an optional string; `None` is written as `""`.
    pub fn put_str_opt(&mut self, value: Option<&str>) -> Result<u16> {
        self.put(value)
    }

    /// Put a raw byte run with no length prefix.
    pub fn put_bytes(&mut self, value: &[u8]) -> Result<u16> {
        self.put(value)
    }

    /// Put a dynamically typed value.
    pub fn put_value(&mut self, value: &Value) -> Result<u16> {
        self.put(value)
    }

    /// Current write position.
    #[inline]
    pub fn position(&self) -> u16 {
        self.position
    }

    /// Move the write position. The buffer grows on the next put if needed.
    #[inline]
    pub fn seek(&mut self, position: u16) {
        self.position = position;
    }

    /// Buffer length, which may exceed the position after a seek.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Get the written bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Take the buffer back for further functional writes.
    pub fn into_inner(self) -> BytesMut {
        self.buffer
    }

    /// Finish writing and hand the payload off as immutable `Bytes`.
    pub fn freeze(self) -> Bytes {
        self.buffer.freeze()
    }
}

impl Default for PacketWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PacketWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PacketWriter")
            .field("position", &self.position)
            .field("buffer", &format_args!("{}", HexDump(&self.buffer)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::read;
    use crate::error::BufferError;
    use crate::value::{Quaternion, Timestamp, Vector3};

    #[test]
    fn test_sequential_layout() {
        let mut writer = PacketWriter::new();
        assert_eq!(writer.put(7u8).unwrap(), 0);
        assert_eq!(writer.put(Vector3::new(1.0, 2.0, 3.0)).unwrap(), 1);
        assert_eq!(writer.put("ok").unwrap(), 13);
        assert_eq!(writer.put(Quaternion::IDENTITY).unwrap(), 17);
        assert_eq!(writer.position(), 33);
        assert_eq!(writer.len(), 33);

        let buf = writer.freeze();
        assert_eq!(read::<u8>(&buf, 0), 7);
        assert_eq!(read::<Vector3>(&buf, 1), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(read::<String>(&buf, 13), "ok");
        assert_eq!(read::<Quaternion>(&buf, 17), Quaternion::IDENTITY);
    }

    #[test]
    fn test_config_presizes_and_offsets() {
        let config = WriterConfig::new()
            .with_initial_capacity(8)
            .with_start_offset(4);
        let mut writer = PacketWriter::with_config(config);
        assert_eq!(writer.len(), 8);
        assert_eq!(writer.position(), 4);

        writer.put(0xAABBu16).unwrap();
        assert_eq!(writer.as_bytes(), &[0, 0, 0, 0, 0xBB, 0xAA, 0, 0]);
    }

    #[test]
    fn test_put_at_backfills_header() {
        let mut writer = PacketWriter::with_config(WriterConfig::new().with_start_offset(2));
        writer.put("body").unwrap();
        let body_len = writer.position() - 2;
        writer.put_at(0, body_len).unwrap();

        assert_eq!(writer.position(), 8);
        assert_eq!(read::<u16>(writer.as_bytes(), 0), 6);
    }

    #[test]
    fn test_put_str_opt_none() {
        let mut writer = PacketWriter::new();
        writer.put_str_opt(None).unwrap();
        assert_eq!(writer.as_bytes(), &[0, 0]);
    }

    #[test]
    fn test_put_bytes_and_value() {
        let mut writer = PacketWriter::new();
        writer.put_bytes(&[9, 9]).unwrap();
        writer
            .put_value(&Value::Timestamp(Timestamp::from_unix_millis(1)))
            .unwrap();
        assert_eq!(writer.position(), 10);
        assert_eq!(read::<Timestamp>(writer.as_bytes(), 2).unix_millis(), 1);
    }

    #[test]
    fn test_overflow_leaves_state() {
        let mut writer = PacketWriter::new();
        writer.seek(u16::MAX);
        let err = writer.put(1u8).unwrap_err();
        assert!(matches!(err, BufferError::LengthOverflow { .. }));
        assert_eq!(writer.position(), u16::MAX);
        assert!(writer.is_empty());
    }

    #[test]
    fn test_from_buffer_overwrites_in_place() {
        let mut writer = PacketWriter::from_buffer(BytesMut::from(&[1u8, 1, 1][..]));
        writer.put(0u8).unwrap();
        assert_eq!(writer.into_inner(), BytesMut::from(&[0u8, 1, 1][..]));
    }

    #[test]
    fn test_debug_shows_hex() {
        let mut writer = PacketWriter::new();
        writer.put(0x0Au8).unwrap();
        let debug = format!("{:?}", writer);
        assert!(debug.contains("Buffer[(1) 0A]"));
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: WriterConfig = serde_json::from_str(r#"{"start_offset":3}"#).unwrap();
        assert_eq!(config, WriterConfig::new().with_start_offset(3));
    }
}
