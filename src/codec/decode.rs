//! Decoder - reads typed values at offsets.
//!
//! Reads are the mirror of [`encode`](super::encode): same widths, same
//! sub-offsets, little-endian regardless of host order. Nothing here checks
//! bounds or grows anything. The caller tracks the layout, and an offset past
//! the end of the buffer panics on slice indexing. Use
//! [`PacketReader`](crate::reader::PacketReader) for checked reads.

use std::borrow::Cow;

use bytes::Bytes;

use super::WireDecode;
use crate::error::{BufferError, Result};
use crate::layout::STRING_PREFIX_WIDTH;
use crate::value::{Quaternion, Timestamp, Value, ValueKind, Vector3};

macro_rules! impl_decode_le {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl WireDecode for $ty {
                const KIND: ValueKind = ValueKind::$kind;

                #[inline]
                fn decode_at(buf: &[u8], offset: usize) -> Self {
                    const WIDTH: usize = std::mem::size_of::<$ty>();
                    let mut raw = [0u8; WIDTH];
                    raw.copy_from_slice(&buf[offset..offset + WIDTH]);
                    <$ty>::from_le_bytes(raw)
                }
            }
        )*
    };
}

impl_decode_le! {
    u8 => Byte,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl WireDecode for Vector3 {
    const KIND: ValueKind = ValueKind::Vector3;

    fn decode_at(buf: &[u8], offset: usize) -> Self {
        Vector3::new(
            f32::decode_at(buf, offset),
            f32::decode_at(buf, offset + 4),
            f32::decode_at(buf, offset + 8),
        )
    }
}

impl WireDecode for Quaternion {
    const KIND: ValueKind = ValueKind::Quaternion;

    fn decode_at(buf: &[u8], offset: usize) -> Self {
        Quaternion::new(
            f32::decode_at(buf, offset),
            f32::decode_at(buf, offset + 4),
            f32::decode_at(buf, offset + 8),
            f32::decode_at(buf, offset + 12),
        )
    }
}

impl WireDecode for Timestamp {
    const KIND: ValueKind = ValueKind::Timestamp;

    #[inline]
    fn decode_at(buf: &[u8], offset: usize) -> Self {
        Timestamp::from_unix_millis(i64::decode_at(buf, offset))
    }
}

/// Content bytes of the string whose prefix is at `offset`.
fn string_content(buf: &[u8], offset: usize) -> &[u8] {
    let len = u16::decode_at(buf, offset) as usize;
    let start = offset + STRING_PREFIX_WIDTH as usize;
    &buf[start..start + len]
}

/// Invalid UTF-8 is replaced with U+FFFD; see [`try_read_str`] for the
/// strict variant.
impl WireDecode for String {
    const KIND: ValueKind = ValueKind::String;

    fn encoded_len_at(buf: &[u8], offset: usize) -> Option<usize> {
        if buf.len().saturating_sub(offset) < STRING_PREFIX_WIDTH as usize {
            return None;
        }
        Some(STRING_PREFIX_WIDTH as usize + u16::decode_at(buf, offset) as usize)
    }

    fn decode_at(buf: &[u8], offset: usize) -> Self {
        let content = string_content(buf, offset);
        match String::from_utf8_lossy(content) {
            Cow::Borrowed(s) => s.to_owned(),
            Cow::Owned(s) => {
                tracing::warn!("Replaced invalid UTF-8 in string at offset {}", offset);
                s
            }
        }
    }
}

/// Read a value of type `T` at `offset`.
///
/// # Panics
///
/// Panics if the encoded value extends past the end of `buf`.
///
/// # Example
///
/// ```
/// use wirebuf::codec::read;
///
/// let buf = [0x01, 0x00, 0x02, 0x00, b'h', b'i'];
/// assert_eq!(read::<u16>(&buf, 0), 1);
/// assert_eq!(read::<String>(&buf, 2), "hi");
/// ```
#[inline]
pub fn read<T: WireDecode>(buf: &[u8], offset: u16) -> T {
    T::decode_at(buf, offset as usize)
}

/// Read a length-prefixed string, replacing invalid UTF-8.
#[inline]
pub fn read_str(buf: &[u8], offset: u16) -> String {
    read(buf, offset)
}

/// Read a length-prefixed string, rejecting invalid UTF-8.
///
/// # Panics
///
/// Panics if the string extends past the end of `buf`.
pub fn try_read_str(buf: &[u8], offset: u16) -> Result<String> {
    let content = string_content(buf, offset as usize);
    std::str::from_utf8(content)
        .map(str::to_owned)
        .map_err(|source| BufferError::InvalidUtf8 {
            offset: offset as usize,
            source,
        })
}

/// Copy `len` raw bytes starting at `offset`.
///
/// # Panics
///
/// Panics if the run extends past the end of `buf`.
pub fn read_bytes(buf: &[u8], offset: u16, len: u16) -> Bytes {
    let start = offset as usize;
    Bytes::copy_from_slice(&buf[start..start + len as usize])
}

/// Read a value whose type is only known at runtime.
///
/// Raw byte runs cannot be read this way because their length is not encoded;
/// that case is logged and yields empty bytes. Use [`read_bytes`] instead.
pub fn read_value(buf: &[u8], offset: u16, kind: ValueKind) -> Value {
    match kind {
        ValueKind::Byte => Value::Byte(read(buf, offset)),
        ValueKind::I16 => Value::I16(read(buf, offset)),
        ValueKind::U16 => Value::U16(read(buf, offset)),
        ValueKind::I32 => Value::I32(read(buf, offset)),
        ValueKind::U32 => Value::U32(read(buf, offset)),
        ValueKind::I64 => Value::I64(read(buf, offset)),
        ValueKind::U64 => Value::U64(read(buf, offset)),
        ValueKind::F32 => Value::F32(read(buf, offset)),
        ValueKind::F64 => Value::F64(read(buf, offset)),
        ValueKind::Vector3 => Value::Vector3(read(buf, offset)),
        ValueKind::Quaternion => Value::Quaternion(read(buf, offset)),
        ValueKind::String => Value::String(read(buf, offset)),
        ValueKind::Timestamp => Value::Timestamp(read(buf, offset)),
        ValueKind::Bytes => {
            tracing::warn!(
                "Cannot read raw bytes at offset {} without a length, use read_bytes",
                offset
            );
            Value::default_for(kind)
        }
    }
}
