//! Strict decoding of raw integer arguments.
//!
//! The host hands integer arguments over as raw native-endian byte
//! buffers. Both the salt byte count and the PBKDF2 iteration count go
//! through this decoder before anything else happens.

use crate::error::{Error, Result};

/// Longest raw encoding we accept (sized for the host's widest integer).
pub const MAX_ENCODED_LEN: usize = 16;

/// Width of the host's native integer.
const NATIVE_WIDTH: usize = size_of::<i32>();

/// Decodes a raw native-endian byte buffer into a positive integer.
///
/// The buffer may be up to [`MAX_ENCODED_LEN`] bytes long, but every byte
/// beyond the native integer width must be zero; a nonzero high byte means
/// the value would not survive truncation to the native width, so the whole
/// encoding is rejected rather than silently wrapped. The low bytes are
/// read as a native-endian signed integer and anything below 1 is rejected,
/// which also covers encodings whose sign bit is set.
pub fn decode_uint(bytes: &[u8]) -> Result<u32> {
    if bytes.len() > MAX_ENCODED_LEN {
        return Err(Error::InvalidArgumentShape);
    }

    if bytes[NATIVE_WIDTH.min(bytes.len())..]
        .iter()
        .any(|&b| b != 0)
    {
        return Err(Error::InvalidArgumentShape);
    }

    let mut raw = [0u8; NATIVE_WIDTH];
    let used = bytes.len().min(NATIVE_WIDTH);
    raw[..used].copy_from_slice(&bytes[..used]);

    let value = i32::from_ne_bytes(raw);
    if value < 1 {
        return Err(Error::InvalidArgumentShape);
    }

    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_one() {
        assert_eq!(decode_uint(&1i32.to_ne_bytes()).unwrap(), 1);
    }

    #[test]
    fn decodes_short_encodings() {
        // the host may pass fewer bytes than the native width
        assert_eq!(decode_uint(&[7]).unwrap(), 7);
        assert_eq!(decode_uint(&1000u16.to_ne_bytes()).unwrap(), 1000);
    }

    #[test]
    fn accepts_wide_encoding_with_zero_high_bytes() {
        let mut wide = [0u8; 16];
        wide[..4].copy_from_slice(&4096i32.to_ne_bytes());
        assert_eq!(decode_uint(&wide).unwrap(), 4096);
    }

    #[test]
    fn rejects_overlong_buffer() {
        assert!(decode_uint(&[0u8; 17]).is_err());
    }

    #[test]
    fn rejects_nonzero_high_bytes() {
        let mut wide = [0u8; 8];
        wide[..4].copy_from_slice(&1i32.to_ne_bytes());
        wide[7] = 1;
        assert!(decode_uint(&wide).is_err());
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert!(decode_uint(&0i32.to_ne_bytes()).is_err());
        assert!(decode_uint(&(-1i32).to_ne_bytes()).is_err());
        assert!(decode_uint(&i32::MIN.to_ne_bytes()).is_err());
    }

    #[test]
    fn rejects_empty_buffer() {
        assert!(decode_uint(&[]).is_err());
    }

    #[test]
    fn decodes_max_native_value() {
        assert_eq!(decode_uint(&i32::MAX.to_ne_bytes()).unwrap(), i32::MAX as u32);
    }
}
