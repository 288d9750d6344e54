//! Codec module - typed reads and writes at buffer offsets.
//!
//! - [`encode`] - writes values into a growable `BytesMut`
//! - [`decode`] - reads values back out of any byte slice
//!
//! # Design
//!
//! Every supported type implements [`WireEncode`] and/or [`WireDecode`], so
//! the generic [`write`](encode::write) and [`read`](decode::read) entry points
//! dispatch at compile time. Schema-driven callers that only know types at
//! runtime go through [`Value`](crate::value::Value) and
//! [`write_value`](encode::write_value) / [`read_value`](decode::read_value),
//! which route by exhaustive match.
//!
//! All multi-byte values are little-endian on the wire, whatever the host.
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use wirebuf::codec::{read, write};
//! use wirebuf::value::Vector3;
//!
//! let buf = write(BytesMut::new(), 0, 7u16).unwrap();
//! let buf = write(buf, 2, Vector3::new(1.0, 2.0, 3.0)).unwrap();
//! let buf = write(buf, 14, "name").unwrap();
//!
//! assert_eq!(read::<u16>(&buf, 0), 7);
//! assert_eq!(read::<Vector3>(&buf, 2), Vector3::new(1.0, 2.0, 3.0));
//! assert_eq!(read::<String>(&buf, 14), "name");
//! ```

pub mod decode;
pub mod encode;

pub use decode::{read, read_bytes, read_str, read_value, try_read_str};
pub use encode::{write, write_bytes, write_into, write_str, write_str_opt, write_value};

use crate::value::ValueKind;

/// A value with a little-endian wire encoding.
pub trait WireEncode {
    /// Total number of bytes [`encode_into`](Self::encode_into) writes.
    fn encoded_len(&self) -> usize;

    /// Write the encoding into `dst`.
    ///
    /// `dst` is exactly [`encoded_len`](Self::encoded_len) bytes long and the
    /// encoded length is already known to fit the 16-bit bound; use
    /// [`write`](encode::write) rather than calling this directly.
    fn encode_into(&self, dst: &mut [u8]);
}

impl<T: WireEncode + ?Sized> WireEncode for &T {
    #[inline]
    fn encoded_len(&self) -> usize {
        (**self).encoded_len()
    }

    #[inline]
    fn encode_into(&self, dst: &mut [u8]) {
        (**self).encode_into(dst)
    }
}

/// A value that can be read back from its wire encoding.
pub trait WireDecode: Sized {
    /// The logical type this decodes.
    const KIND: ValueKind;

    /// Width of the encoded value starting at `offset`.
    ///
    /// For fixed-width types this is the size table entry. Variable-width
    /// types peek their prefix and return `None` if the prefix itself is out
    /// of range.
    fn encoded_len_at(buf: &[u8], offset: usize) -> Option<usize> {
        let _ = (buf, offset);
        Some(Self::KIND.width() as usize)
    }

    /// Decode the value at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if the encoding extends past the end of `buf`.
    fn decode_at(buf: &[u8], offset: usize) -> Self;
}
