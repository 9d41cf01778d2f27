//! Contains the [RawTransaction] type.

use crate::{
    errors::BatchEncodingError,
    params::TX_DATA_LEN_WIDTH,
    uint::{read_uint, write_uint},
};
use alloc::vec::Vec;
use alloy_primitives::Bytes;

/// A raw, signed layer-2 transaction payload.
///
/// On the wire each payload is preceded by a 3-byte big-endian length field;
/// the payload bytes themselves are opaque to the codec.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq)]
pub struct RawTransaction(pub Bytes);

impl RawTransaction {
    /// Returns if the transaction is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends the length-prefixed payload to `out`.
    ///
    /// Fails with [BatchEncodingError::FieldOverflow] if the payload is longer
    /// than the 3-byte length prefix can express, without writing anything.
    pub fn encode(&self, out: &mut Vec<u8>) -> Result<(), BatchEncodingError> {
        write_uint(out, self.0.len() as u64, TX_DATA_LEN_WIDTH)?;
        out.extend_from_slice(&self.0);
        Ok(())
    }

    /// Reads one length-prefixed payload from the front of `buf`, advancing it.
    pub fn decode(buf: &mut &[u8]) -> Result<Self, BatchEncodingError> {
        let len = read_uint(buf, TX_DATA_LEN_WIDTH)? as usize;
        if buf.len() < len {
            return Err(BatchEncodingError::UnexpectedEof { expected: len, remaining: buf.len() });
        }
        let data = Bytes::copy_from_slice(&buf[..len]);
        *buf = &buf[len..];
        Ok(Self(data))
    }
}

impl<T: Into<Bytes>> From<T> for RawTransaction {
    fn from(bytes: T) -> Self {
        Self(bytes.into())
    }
}

impl AsRef<[u8]> for RawTransaction {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::bytes;

    #[test]
    fn test_raw_transaction_roundtrip() {
        let tx = RawTransaction(bytes!("deadbeef"));
        let mut encoded = Vec::new();
        tx.encode(&mut encoded).unwrap();
        assert_eq!(encoded, [0x00, 0x00, 0x04, 0xde, 0xad, 0xbe, 0xef]);

        let mut buf = encoded.as_slice();
        assert_eq!(RawTransaction::decode(&mut buf).unwrap(), tx);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_empty_transaction() {
        let tx = RawTransaction::default();
        assert!(tx.is_empty());

        let mut encoded = Vec::new();
        tx.encode(&mut encoded).unwrap();
        assert_eq!(encoded, [0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_oversized_transaction_rejected() {
        let tx = RawTransaction(vec![0u8; 1 << 24].into());
        let mut encoded = Vec::new();
        let err = tx.encode(&mut encoded).unwrap_err();
        assert_eq!(err, BatchEncodingError::FieldOverflow { value: 1 << 24, width: 3 });
        assert!(encoded.is_empty());
    }

    #[test]
    fn test_decode_truncated_payload() {
        // Length prefix claims 4 bytes but only 2 follow.
        let data = [0x00, 0x00, 0x04, 0xaa, 0xbb];
        let mut buf = &data[..];
        let err = RawTransaction::decode(&mut buf).unwrap_err();
        assert_eq!(err, BatchEncodingError::UnexpectedEof { expected: 4, remaining: 2 });
    }
}
