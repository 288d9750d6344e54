//! Dynamically typed values.
//!
//! [`Value`] is the sum type a schema-driven layer uses when field types are
//! only known at runtime. Statically typed callers can skip it and go through
//! the [`WireEncode`](crate::codec::WireEncode) /
//! [`WireDecode`](crate::codec::WireDecode) traits directly.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::{Quaternion, Timestamp, ValueKind, Vector3};
use crate::layout::size_of_str;

/// A value of any supported logical type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    /// Single raw byte.
    Byte(u8),
    /// Signed 16-bit integer.
    I16(i16),
    /// Unsigned 16-bit integer.
    U16(u16),
    /// Signed 32-bit integer.
    I32(i32),
    /// Unsigned 32-bit integer.
    U32(u32),
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// Single precision float.
    F32(f32),
    /// Double precision float.
    F64(f64),
    /// 3-component vector.
    Vector3(Vector3),
    /// Rotation quaternion.
    Quaternion(Quaternion),
    /// UTF-8 string; empty encodes like an absent one.
    String(String),
    /// Unix-millisecond timestamp.
    Timestamp(Timestamp),
    /// Raw byte run with no length prefix.
    Bytes(Bytes),
}

impl Value {
    /// The logical type tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Byte(_) => ValueKind::Byte,
            Value::I16(_) => ValueKind::I16,
            Value::U16(_) => ValueKind::U16,
            Value::I32(_) => ValueKind::I32,
            Value::U32(_) => ValueKind::U32,
            Value::I64(_) => ValueKind::I64,
            Value::U64(_) => ValueKind::U64,
            Value::F32(_) => ValueKind::F32,
            Value::F64(_) => ValueKind::F64,
            Value::Vector3(_) => ValueKind::Vector3,
            Value::Quaternion(_) => ValueKind::Quaternion,
            Value::String(_) => ValueKind::String,
            Value::Timestamp(_) => ValueKind::Timestamp,
            Value::Bytes(_) => ValueKind::Bytes,
        }
    }

    /// Total encoded width, including string content and raw run length.
    pub fn encoded_len(&self) -> usize {
        match self {
            Value::String(s) => size_of_str(s),
            Value::Bytes(b) => b.len(),
            other => other.kind().width() as usize,
        }
    }

    /// Zero value for a kind; what the decoder yields when it cannot read one.
    pub fn default_for(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Byte => Value::Byte(0),
            ValueKind::I16 => Value::I16(0),
            ValueKind::U16 => Value::U16(0),
            ValueKind::I32 => Value::I32(0),
            ValueKind::U32 => Value::U32(0),
            ValueKind::I64 => Value::I64(0),
            ValueKind::U64 => Value::U64(0),
            ValueKind::F32 => Value::F32(0.0),
            ValueKind::F64 => Value::F64(0.0),
            ValueKind::Vector3 => Value::Vector3(Vector3::ZERO),
            ValueKind::Quaternion => Value::Quaternion(Quaternion::default()),
            ValueKind::String => Value::String(String::new()),
            ValueKind::Timestamp => Value::Timestamp(Timestamp::EPOCH),
            ValueKind::Bytes => Value::Bytes(Bytes::new()),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    u8 => Byte,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Vector3 => Vector3,
    Quaternion => Quaternion,
    String => String,
    Timestamp => Timestamp,
    Bytes => Bytes,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(Bytes::copy_from_slice(b))
    }
}
