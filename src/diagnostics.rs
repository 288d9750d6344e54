//! Human-readable buffer dumps for debugging.
//!
//! ```text
//! Buffer[(2) 0A FF]
//! ```

use std::fmt;

/// Render `buf` as `Buffer[(<len>) XX XX ...]`; empty input renders as `""`.
///
/// # Example
///
/// ```
/// use wirebuf::diagnostics::describe;
///
/// assert_eq!(describe(&[0x0A, 0xFF]), "Buffer[(2) 0A FF]");
/// assert_eq!(describe(&[]), "");
/// ```
pub fn describe(buf: &[u8]) -> String {
    HexDump(buf).to_string()
}

/// `Display` adapter producing the same text as [`describe`] without an
/// intermediate `String`, e.g. inside `tracing` fields.
#[derive(Debug, Clone, Copy)]
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        write!(f, "Buffer[({})", self.0.len())?;
        for byte in self.0 {
            write!(f, " {:02X}", byte)?;
        }
        f.write_str("]")
    }
}
