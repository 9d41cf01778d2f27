//! This module contains the fixed-width big-endian integer codec shared by the
//! batch and context encoders.

use crate::errors::BatchEncodingError;
use alloc::vec::Vec;

/// Returns whether `value` is representable in a big-endian field of `width` bytes.
pub const fn fits(value: u64, width: usize) -> bool {
    width >= 8 || value < 1u64 << (8 * width)
}

/// Appends `value` to `out` as a zero-padded big-endian field of `width` bytes.
///
/// Fails with [BatchEncodingError::FieldOverflow] before writing anything if
/// `value` does not fit. Widths above 8 bytes are not used by this format.
pub fn write_uint(out: &mut Vec<u8>, value: u64, width: usize) -> Result<(), BatchEncodingError> {
    debug_assert!(width <= 8, "field width exceeds u64");
    if !fits(value, width) {
        return Err(BatchEncodingError::FieldOverflow { value, width });
    }
    out.extend_from_slice(&value.to_be_bytes()[8 - width..]);
    Ok(())
}

/// Reads a `width`-byte big-endian field from the front of `buf`, advancing it.
pub fn read_uint(buf: &mut &[u8], width: usize) -> Result<u64, BatchEncodingError> {
    debug_assert!(width <= 8, "field width exceeds u64");
    if buf.len() < width {
        return Err(BatchEncodingError::UnexpectedEof { expected: width, remaining: buf.len() });
    }
    let mut bytes = [0u8; 8];
    bytes[8 - width..].copy_from_slice(&buf[..width]);
    *buf = &buf[width..];
    Ok(u64::from_be_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_uint_zero_padded() {
        let mut out = Vec::new();
        write_uint(&mut out, 0x03e8, 5).unwrap();
        assert_eq!(out, [0x00, 0x00, 0x00, 0x03, 0xe8]);
    }

    #[test]
    fn test_write_uint_boundary() {
        let mut out = Vec::new();
        write_uint(&mut out, (1 << 24) - 1, 3).unwrap();
        assert_eq!(out, [0xff, 0xff, 0xff]);

        let err = write_uint(&mut out, 1 << 24, 3).unwrap_err();
        assert_eq!(err, BatchEncodingError::FieldOverflow { value: 1 << 24, width: 3 });
        // Nothing was written for the failed field.
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_read_uint_advances() {
        let data = [0x00, 0x00, 0x02, 0xaa];
        let mut buf = &data[..];
        assert_eq!(read_uint(&mut buf, 3).unwrap(), 2);
        assert_eq!(buf, [0xaa]);
    }

    #[test]
    fn test_read_uint_short_buffer() {
        let mut buf = &[0x01u8, 0x02][..];
        let err = read_uint(&mut buf, 5).unwrap_err();
        assert_eq!(err, BatchEncodingError::UnexpectedEof { expected: 5, remaining: 2 });
    }

    #[test]
    fn test_full_width_never_overflows() {
        let mut out = Vec::new();
        write_uint(&mut out, u64::MAX, 8).unwrap();
        let mut buf = out.as_slice();
        assert_eq!(read_uint(&mut buf, 8).unwrap(), u64::MAX);
    }
}
