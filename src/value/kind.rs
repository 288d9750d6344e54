//! Logical type tags.
//!
//! A [`ValueKind`] is what an out-of-band schema names for each field.
//! Schema strings are parsed with [`str::parse`]; names that do not map to a
//! wire encoding are reported as [`BufferError::UnsupportedType`].
//!
//! # Example
//!
//! ```
//! use wirebuf::value::ValueKind;
//!
//! let kind: ValueKind = "ushort".parse().unwrap();
//! assert_eq!(kind, ValueKind::U16);
//! assert_eq!(kind.to_string(), "u16");
//! assert!("matrix4".parse::<ValueKind>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BufferError;
use crate::layout::width_of;

/// Every logical type this crate can encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Single raw byte.
    Byte,
    /// Signed 16-bit integer.
    I16,
    /// Unsigned 16-bit integer.
    U16,
    /// Signed 32-bit integer.
    I32,
    /// Unsigned 32-bit integer.
    U32,
    /// Signed 64-bit integer.
    I64,
    /// Unsigned 64-bit integer.
    U64,
    /// IEEE-754 single precision float.
    F32,
    /// IEEE-754 double precision float.
    F64,
    /// Three consecutive f32 (x, y, z).
    Vector3,
    /// Four consecutive f32 (x, y, z, w).
    Quaternion,
    /// u16 length prefix followed by UTF-8 bytes.
    String,
    /// i64 Unix milliseconds.
    Timestamp,
    /// Raw byte run, length tracked by the caller.
    Bytes,
}

impl ValueKind {
    /// All kinds, in declaration order.
    pub const ALL: [ValueKind; 14] = [
        ValueKind::Byte,
        ValueKind::I16,
        ValueKind::U16,
        ValueKind::I32,
        ValueKind::U32,
        ValueKind::I64,
        ValueKind::U64,
        ValueKind::F32,
        ValueKind::F64,
        ValueKind::Vector3,
        ValueKind::Quaternion,
        ValueKind::String,
        ValueKind::Timestamp,
        ValueKind::Bytes,
    ];

    /// Canonical lowercase name, as used by `Display` and serde.
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Byte => "byte",
            ValueKind::I16 => "i16",
            ValueKind::U16 => "u16",
            ValueKind::I32 => "i32",
            ValueKind::U32 => "u32",
            ValueKind::I64 => "i64",
            ValueKind::U64 => "u64",
            ValueKind::F32 => "f32",
            ValueKind::F64 => "f64",
            ValueKind::Vector3 => "vector3",
            ValueKind::Quaternion => "quaternion",
            ValueKind::String => "string",
            ValueKind::Timestamp => "timestamp",
            ValueKind::Bytes => "bytes",
        }
    }

    /// Fixed encoded width. See [`width_of`].
    #[inline]
    pub const fn width(self) -> u16 {
        width_of(self)
    }

    /// Whether the encoded width depends on the value.
    #[inline]
    pub const fn is_variable(self) -> bool {
        matches!(self, ValueKind::String | ValueKind::Bytes)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueKind {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "byte" | "u8" => ValueKind::Byte,
            "i16" | "short" => ValueKind::I16,
            "u16" | "ushort" => ValueKind::U16,
            "i32" | "int" => ValueKind::I32,
            "u32" | "uint" => ValueKind::U32,
            "i64" | "long" => ValueKind::I64,
            "u64" | "ulong" => ValueKind::U64,
            "f32" | "float" => ValueKind::F32,
            "f64" | "double" => ValueKind::F64,
            "vector3" | "vec3" => ValueKind::Vector3,
            "quaternion" | "quat" => ValueKind::Quaternion,
            "string" | "str" => ValueKind::String,
            "timestamp" | "datetime" => ValueKind::Timestamp,
            "bytes" => ValueKind::Bytes,
            _ => return Err(BufferError::UnsupportedType(s.to_string())),
        };
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for kind in ValueKind::ALL {
            assert_eq!(kind.name().parse::<ValueKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_aliases_case_insensitive() {
        assert_eq!("Short".parse::<ValueKind>().unwrap(), ValueKind::I16);
        assert_eq!("ULONG".parse::<ValueKind>().unwrap(), ValueKind::U64);
        assert_eq!(" double ".parse::<ValueKind>().unwrap(), ValueKind::F64);
        assert_eq!("quat".parse::<ValueKind>().unwrap(), ValueKind::Quaternion);
        assert_eq!("DateTime".parse::<ValueKind>().unwrap(), ValueKind::Timestamp);
    }

    #[test]
    fn test_parse_unknown_is_unsupported() {
        let err = "matrix4".parse::<ValueKind>().unwrap_err();
        assert!(matches!(err, BufferError::UnsupportedType(ref name) if name == "matrix4"));
        assert!(err.to_string().contains("Unsupported value type"));
    }

    #[test]
    fn test_variable_kinds() {
        let variable: Vec<_> = ValueKind::ALL
            .iter()
            .filter(|k| k.is_variable())
            .collect();
        assert_eq!(variable, [&ValueKind::String, &ValueKind::Bytes]);
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&ValueKind::Quaternion).unwrap();
        assert_eq!(json, "\"quaternion\"");
        let kind: ValueKind = serde_json::from_str("\"u32\"").unwrap();
        assert_eq!(kind, ValueKind::U32);
    }
}
