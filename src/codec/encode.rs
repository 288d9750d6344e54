//! Encoder - writes typed values at offsets, growing the buffer on demand.
//!
//! Every write computes the value's total width, grows the buffer to
//! `offset + width` if needed, then copies the little-endian bytes into
//! `[offset, offset + width)`. Bytes outside that range are never touched.
//!
//! Composite types are written as consecutive sub-writes with no padding:
//!
//! ```text
//! vector3     x@0  y@4  z@8
//! quaternion  x@0  y@4  z@8  w@12
//! string      len(u16)@0  utf8@2..2+len
//! ```

use bytes::{Bytes, BytesMut};

use super::WireEncode;
use crate::error::Result;
use crate::layout::{checked_end, ensure_capacity, STRING_PREFIX_WIDTH};
use crate::value::{Quaternion, Timestamp, Value, ValueKind, Vector3};

macro_rules! impl_encode_le {
    ($($ty:ty),* $(,)?) => {
        $(
            impl WireEncode for $ty {
                #[inline]
                fn encoded_len(&self) -> usize {
                    std::mem::size_of::<$ty>()
                }

                #[inline]
                fn encode_into(&self, dst: &mut [u8]) {
                    dst.copy_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_encode_le!(u8, i16, u16, i32, u32, i64, u64, f32, f64);

/// Write `components` as consecutive f32 sub-writes.
fn encode_floats(components: &[f32], dst: &mut [u8]) {
    for (component, chunk) in components.iter().zip(dst.chunks_exact_mut(4)) {
        component.encode_into(chunk);
    }
}

impl WireEncode for Vector3 {
    #[inline]
    fn encoded_len(&self) -> usize {
        ValueKind::Vector3.width() as usize
    }

    fn encode_into(&self, dst: &mut [u8]) {
        encode_floats(&self.to_array(), dst);
    }
}

impl WireEncode for Quaternion {
    #[inline]
    fn encoded_len(&self) -> usize {
        ValueKind::Quaternion.width() as usize
    }

    fn encode_into(&self, dst: &mut [u8]) {
        encode_floats(&self.to_array(), dst);
    }
}

impl WireEncode for Timestamp {
    #[inline]
    fn encoded_len(&self) -> usize {
        ValueKind::Timestamp.width() as usize
    }

    #[inline]
    fn encode_into(&self, dst: &mut [u8]) {
        self.unix_millis().encode_into(dst);
    }
}

impl WireEncode for str {
    #[inline]
    fn encoded_len(&self) -> usize {
        STRING_PREFIX_WIDTH as usize + self.len()
    }

    fn encode_into(&self, dst: &mut [u8]) {
        debug_assert!(self.len() <= u16::MAX as usize);
        let (prefix, content) = dst.split_at_mut(STRING_PREFIX_WIDTH as usize);
        (self.len() as u16).encode_into(prefix);
        content.copy_from_slice(self.as_bytes());
    }
}

impl WireEncode for String {
    #[inline]
    fn encoded_len(&self) -> usize {
        self.as_str().encoded_len()
    }

    #[inline]
    fn encode_into(&self, dst: &mut [u8]) {
        self.as_str().encode_into(dst)
    }
}

/// An absent string encodes exactly like an empty one.
impl WireEncode for Option<&str> {
    #[inline]
    fn encoded_len(&self) -> usize {
        self.unwrap_or_default().encoded_len()
    }

    #[inline]
    fn encode_into(&self, dst: &mut [u8]) {
        self.unwrap_or_default().encode_into(dst)
    }
}

/// Raw byte runs carry no prefix; the reader must know the length.
impl WireEncode for [u8] {
    #[inline]
    fn encoded_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn encode_into(&self, dst: &mut [u8]) {
        dst.copy_from_slice(self);
    }
}

impl WireEncode for Bytes {
    #[inline]
    fn encoded_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn encode_into(&self, dst: &mut [u8]) {
        dst.copy_from_slice(self);
    }
}

impl WireEncode for Value {
    fn encoded_len(&self) -> usize {
        Value::encoded_len(self)
    }

    fn encode_into(&self, dst: &mut [u8]) {
        match self {
            Value::Byte(v) => v.encode_into(dst),
            Value::I16(v) => v.encode_into(dst),
            Value::U16(v) => v.encode_into(dst),
            Value::I32(v) => v.encode_into(dst),
            Value::U32(v) => v.encode_into(dst),
            Value::I64(v) => v.encode_into(dst),
            Value::U64(v) => v.encode_into(dst),
            Value::F32(v) => v.encode_into(dst),
            Value::F64(v) => v.encode_into(dst),
            Value::Vector3(v) => v.encode_into(dst),
            Value::Quaternion(v) => v.encode_into(dst),
            Value::String(v) => v.encode_into(dst),
            Value::Timestamp(v) => v.encode_into(dst),
            Value::Bytes(v) => v.encode_into(dst),
        }
    }
}

/// Write `value` at `offset` in place.
///
/// On error the buffer is left exactly as it was.
///
/// # Errors
///
/// Returns [`LengthOverflow`](crate::BufferError::LengthOverflow) if the write
/// would end past 65535 bytes.
pub fn write_into<T: WireEncode>(buffer: &mut BytesMut, offset: u16, value: T) -> Result<()> {
    let width = value.encoded_len();
    let end = checked_end(offset, width)?;

    let grown = ensure_capacity(std::mem::take(buffer), end);
    *buffer = grown;
    value.encode_into(&mut buffer[offset as usize..end as usize]);
    Ok(())
}

/// Write `value` at `offset` and return the buffer to keep using.
///
/// The returned buffer may be a different allocation than the one passed in.
///
/// # Example
///
/// ```
/// use bytes::BytesMut;
/// use wirebuf::codec::write;
///
/// let buf = write(BytesMut::new(), 0, "hi").unwrap();
/// assert_eq!(&buf[..], &[0x02, 0x00, b'h', b'i']);
/// ```
///
/// # Errors
///
/// Returns [`LengthOverflow`](crate::BufferError::LengthOverflow) if the write
/// would end past 65535 bytes. The buffer is dropped in that case; use
/// [`write_into`] to keep it.
pub fn write<T: WireEncode>(mut buffer: BytesMut, offset: u16, value: T) -> Result<BytesMut> {
    write_into(&mut buffer, offset, value)?;
    Ok(buffer)
}

/// Write a length-prefixed UTF-8 string.
#[inline]
pub fn write_str(buffer: BytesMut, offset: u16, value: &str) -> Result<BytesMut> {
    write(buffer, offset, value)
}

/// Write an optional string; `None` produces the same bytes as `""`.
#[inline]
pub fn write_str_opt(buffer: BytesMut, offset: u16, value: Option<&str>) -> Result<BytesMut> {
    write(buffer, offset, value)
}

/// Write a raw byte run with no length prefix.
#[inline]
pub fn write_bytes(buffer: BytesMut, offset: u16, value: &[u8]) -> Result<BytesMut> {
    write(buffer, offset, value)
}

/// Write a dynamically typed value.
#[inline]
pub fn write_value(buffer: BytesMut, offset: u16, value: &Value) -> Result<BytesMut> {
    write(buffer, offset, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BufferError;

    #[test]
    fn test_write_u16_to_empty() {
        let buf = write(BytesMut::new(), 0, 1u16).unwrap();
        assert_eq!(&buf[..], &[0x01, 0x00]);
    }

    #[test]
    fn test_little_endian_byte_order() {
        let buf = write(BytesMut::new(), 0, 0x0102_0304u32).unwrap();
        assert_eq!(&buf[..], &[0x04, 0x03, 0x02, 0x01]);

        let buf = write(BytesMut::new(), 0, -2i16).unwrap();
        assert_eq!(&buf[..], &[0xFE, 0xFF]);

        let buf = write(BytesMut::new(), 0, 1.0f32).unwrap();
        assert_eq!(&buf[..], &[0x00, 0x00, 0x80, 0x3F]);

        let buf = write(BytesMut::new(), 0, 0x0102_0304_0506_0708u64).unwrap();
        assert_eq!(&buf[..], &[8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_write_string() {
        let buf = write_str(BytesMut::new(), 0, "hi").unwrap();
        assert_eq!(&buf[..], &[0x02, 0x00, b'h', b'i']);
    }

    #[test]
    fn test_empty_and_absent_string_identical() {
        let empty = write_str(BytesMut::new(), 3, "").unwrap();
        let absent = write_str_opt(BytesMut::new(), 3, None).unwrap();
        assert_eq!(empty, absent);
        assert_eq!(&absent[..], &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_vector_matches_float_sub_writes() {
        let vector = write(BytesMut::new(), 10, Vector3::new(1.0, 2.0, 3.0)).unwrap();

        let floats = write(BytesMut::new(), 10, 1.0f32).unwrap();
        let floats = write(floats, 14, 2.0f32).unwrap();
        let floats = write(floats, 18, 3.0f32).unwrap();

        assert_eq!(vector.len(), 22);
        assert_eq!(vector, floats);
    }

    #[test]
    fn test_quaternion_matches_float_sub_writes() {
        let q = Quaternion::new(0.1, 0.2, 0.3, 0.4);
        let quat = write(BytesMut::new(), 0, q).unwrap();

        let mut floats = BytesMut::new();
        for (i, c) in q.to_array().into_iter().enumerate() {
            floats = write(floats, (i * 4) as u16, c).unwrap();
        }

        assert_eq!(quat, floats);
    }

    #[test]
    fn test_timestamp_is_i64_millis() {
        let ts = write(BytesMut::new(), 0, Timestamp::from_unix_millis(-5)).unwrap();
        let raw = write(BytesMut::new(), 0, -5i64).unwrap();
        assert_eq!(ts, raw);
    }

    #[test]
    fn test_composite_widths_follow_size_table() {
        use crate::layout::width_of;

        assert_eq!(
            Vector3::ZERO.encoded_len(),
            width_of(ValueKind::Vector3) as usize
        );
        assert_eq!(
            Quaternion::IDENTITY.encoded_len(),
            width_of(ValueKind::Quaternion) as usize
        );
        assert_eq!(
            Timestamp::EPOCH.encoded_len(),
            width_of(ValueKind::Timestamp) as usize
        );
        let buf = write(BytesMut::new(), 0, Timestamp::EPOCH).unwrap();
        assert_eq!(buf.len(), 8);
    }

    #[test]
    fn test_write_preserves_prefix() {
        let buf = BytesMut::from(&[9u8, 8, 7][..]);
        let buf = write(buf, 5, 0xABu8).unwrap();
        assert_eq!(&buf[..], &[9, 8, 7, 0, 0, 0xAB]);
    }

    #[test]
    fn test_overwrite_inside_existing_buffer() {
        let buf = BytesMut::from(&[1u8, 1, 1, 1, 1, 1][..]);
        let buf = write(buf, 2, 0u16).unwrap();
        assert_eq!(&buf[..], &[1, 1, 0, 0, 1, 1]);
    }

    #[test]
    fn test_write_bytes_no_prefix() {
        let buf = write_bytes(BytesMut::new(), 1, &[0xDE, 0xAD]).unwrap();
        assert_eq!(&buf[..], &[0x00, 0xDE, 0xAD]);
    }

    #[test]
    fn test_write_value_matches_typed_write() {
        let typed = write(BytesMut::new(), 4, -7i32).unwrap();
        let dynamic = write_value(BytesMut::new(), 4, &Value::I32(-7)).unwrap();
        assert_eq!(typed, dynamic);

        let typed = write(BytesMut::new(), 0, "abc").unwrap();
        let dynamic = write_value(BytesMut::new(), 0, &Value::from("abc")).unwrap();
        assert_eq!(typed, dynamic);
    }

    #[test]
    fn test_write_up_to_limit() {
        let buf = write(BytesMut::new(), u16::MAX - 2, 0xFFFFu16).unwrap();
        assert_eq!(buf.len(), u16::MAX as usize);
    }

    #[test]
    fn test_overflow_rejected_and_buffer_kept() {
        let mut buf = BytesMut::from(&[1u8, 2, 3][..]);
        let err = write_into(&mut buf, u16::MAX - 1, 0u32).unwrap_err();
        assert!(matches!(err, BufferError::LengthOverflow { width: 4, .. }));
        assert_eq!(&buf[..], &[1, 2, 3]);
    }

    #[test]
    fn test_oversized_string_rejected() {
        let long = "x".repeat(u16::MAX as usize);
        assert!(write_str(BytesMut::new(), 0, &long).is_err());
    }
}
