//! Base conversion helpers.

/// Widen 7-bit packed bytes into one 7-bit value per output byte.
///
/// Each input byte contributes its low 7 bits, followed (except for the last
/// byte) by its bit 7 as a separate byte. The output is always twice the
/// input length; the slot after the last byte stays zero. Returns `None` for
/// empty input.
///
/// # Example
///
/// ```
/// use wirebuf::convert::base128_to_base256;
///
/// let out = base128_to_base256(&[0x81, 0x05]).unwrap();
/// assert_eq!(out, vec![0x01, 0x01, 0x05, 0x00]);
/// ```
pub fn base128_to_base256(base128: &[u8]) -> Option<Vec<u8>> {
    if base128.is_empty() {
        return None;
    }

    let mut out = vec![0u8; base128.len() * 2];
    let mut index = 0;
    let last = base128.len() - 1;

    for (i, &byte) in base128.iter().enumerate() {
        out[index] = byte & 0x7F;
        index += 1;
        if i < last {
            out[index] = (byte >> 7) & 0x7F;
            index += 1;
        }
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_none() {
        assert_eq!(base128_to_base256(&[]), None);
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(base128_to_base256(&[0xFF]).unwrap(), vec![0x7F, 0x00]);
    }

    #[test]
    fn test_high_bit_split() {
        let out = base128_to_base256(&[0x80, 0x7F, 0x80]).unwrap();
        assert_eq!(out, vec![0x00, 0x01, 0x7F, 0x00, 0x00, 0x00]);
    }
}
