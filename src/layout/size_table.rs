//! Encoded widths of the logical types.
//!
//! ```text
//! ┌────────────────────┬───────┬────────────────────────────┐
//! │ Kind               │ Width │ Encoding                   │
//! ├────────────────────┼───────┼────────────────────────────┤
//! │ byte               │ 1     │ raw                        │
//! │ i16 / u16          │ 2     │ LE                         │
//! │ i32 / u32 / f32    │ 4     │ LE                         │
//! │ i64 / u64 / f64    │ 8     │ LE                         │
//! │ vector3            │ 12    │ 3 x f32 (x, y, z)          │
//! │ quaternion         │ 16    │ 4 x f32 (x, y, z, w)       │
//! │ string             │ 2 + N │ u16 LE length, UTF-8 bytes │
//! │ timestamp          │ 8     │ i64 LE Unix millis         │
//! │ bytes              │ N     │ raw, no prefix             │
//! └────────────────────┴───────┴────────────────────────────┘
//! ```

use crate::error::{BufferError, Result};
use crate::value::ValueKind;

/// Largest buffer length (and therefore largest end offset) a write may reach.
pub const MAX_BUFFER_LEN: usize = u16::MAX as usize;

/// Width of the length prefix in front of string content.
pub const STRING_PREFIX_WIDTH: u16 = 2;

/// Fixed encoded width of a kind.
///
/// Strings report only their 2-byte prefix; add the content length with
/// [`size_of_str`]. Raw byte runs report 0 because their width is supplied by
/// the caller.
///
/// # Example
///
/// ```
/// use wirebuf::layout::width_of;
/// use wirebuf::value::ValueKind;
///
/// assert_eq!(width_of(ValueKind::Quaternion), 16);
/// assert_eq!(width_of(ValueKind::String), 2);
/// assert_eq!(width_of(ValueKind::Bytes), 0);
/// ```
pub const fn width_of(kind: ValueKind) -> u16 {
    match kind {
        ValueKind::Byte => 1,
        ValueKind::I16 | ValueKind::U16 => 2,
        ValueKind::I32 | ValueKind::U32 | ValueKind::F32 => 4,
        ValueKind::I64 | ValueKind::U64 | ValueKind::F64 => 8,
        ValueKind::Vector3 => 3 * 4,
        ValueKind::Quaternion => 4 * 4,
        ValueKind::String => STRING_PREFIX_WIDTH,
        ValueKind::Timestamp => 8,
        ValueKind::Bytes => 0,
    }
}

/// Width of a kind named by a schema string.
///
/// Unknown names are logged and report 0. A zero from this function for a
/// name other than `"bytes"` means the schema is wrong and any offsets derived
/// from it will be too.
pub fn width_of_name(name: &str) -> u16 {
    match name.parse::<ValueKind>() {
        Ok(kind) => width_of(kind),
        Err(e) => {
            tracing::warn!("Cannot size value: {}", e);
            0
        }
    }
}

/// Total encoded width of a string: prefix plus UTF-8 byte count.
#[inline]
pub fn size_of_str(value: &str) -> usize {
    STRING_PREFIX_WIDTH as usize + value.len()
}

/// End offset of a `width`-byte write at `offset`.
///
/// Computed without wrapping; fails if the end passes [`MAX_BUFFER_LEN`].
pub fn checked_end(offset: u16, width: usize) -> Result<u16> {
    let end = offset as usize + width;
    if end > MAX_BUFFER_LEN {
        tracing::debug!(
            "Rejecting write: offset {} + width {} exceeds {}",
            offset,
            width,
            MAX_BUFFER_LEN
        );
        return Err(BufferError::LengthOverflow { offset, width });
    }
    Ok(end as u16)
}
