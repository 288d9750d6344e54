//! Exact-size buffer growth.
//!
//! Growth never shrinks, allocates exactly the requested length, and keeps
//! every byte already written. New bytes are zero.

use bytes::BytesMut;

/// Allocate a zero-filled buffer of exactly `len` bytes.
pub fn new_buffer(len: u16) -> BytesMut {
    BytesMut::zeroed(len as usize)
}

/// Return a buffer at least `min_len` bytes long.
///
/// - Already long enough: returned as is, untouched.
/// - Too short (including empty): extended to exactly `min_len`, keeping the
///   existing prefix and zero-filling the rest.
///
/// # Example
///
/// ```
/// use bytes::BytesMut;
/// use wirebuf::layout::ensure_capacity;
///
/// let buf = ensure_capacity(BytesMut::from(&[1u8, 2][..]), 5);
/// assert_eq!(&buf[..], &[1, 2, 0, 0, 0]);
///
/// let same = ensure_capacity(buf, 3);
/// assert_eq!(same.len(), 5);
/// ```
pub fn ensure_capacity(buffer: BytesMut, min_len: u16) -> BytesMut {
    let len = buffer.len();
    if len >= min_len as usize {
        return buffer;
    }

    tracing::trace!("Growing buffer from {} to {} bytes", len, min_len);
    // Fresh exact-size allocation; resize would reserve headroom.
    let mut grown = new_buffer(min_len);
    grown[..len].copy_from_slice(&buffer);
    grown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_zeroed() {
        let buf = new_buffer(4);
        assert_eq!(&buf[..], &[0, 0, 0, 0]);
        assert!(new_buffer(0).is_empty());
    }

    #[test]
    fn test_grow_empty() {
        let buf = ensure_capacity(BytesMut::new(), 3);
        assert_eq!(&buf[..], &[0, 0, 0]);
    }

    #[test]
    fn test_grow_preserves_prefix_and_is_exact() {
        let buf = ensure_capacity(BytesMut::from(&[0xAA, 0xBB][..]), 6);
        assert_eq!(buf.len(), 6);
        assert_eq!(&buf[..], &[0xAA, 0xBB, 0, 0, 0, 0]);
    }

    #[test]
    fn test_grow_allocates_no_headroom() {
        let buf = ensure_capacity(BytesMut::new(), 2);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.capacity(), 2);

        let buf = ensure_capacity(buf, 11);
        assert_eq!(buf.capacity(), 11);
    }

    #[test]
    fn test_no_op_when_sufficient() {
        let original = BytesMut::from(&[1u8, 2, 3, 4][..]);
        let ptr = original.as_ptr();

        let buf = ensure_capacity(original, 4);
        assert_eq!(&buf[..], &[1, 2, 3, 4]);
        // Same allocation, no copy
        assert_eq!(buf.as_ptr(), ptr);

        let buf = ensure_capacity(buf, 1);
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn test_grow_to_zero_keeps_empty() {
        assert!(ensure_capacity(BytesMut::new(), 0).is_empty());
    }
}
