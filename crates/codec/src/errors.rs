//! This module contains the error types for the batch calldata codec.

use thiserror::Error;

/// An error encountered while encoding or decoding `appendSequencerBatch` calldata.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchEncodingError {
    /// A numeric field exceeds its fixed byte width. Encoding aborts before any
    /// bytes for the offending field are written.
    #[error("Field value {value} does not fit in {width} bytes")]
    FieldOverflow {
        /// The value that does not fit.
        value: u64,
        /// The byte width of the field.
        width: usize,
    },
    /// The batch structure contradicts itself. Detected before encoding begins.
    #[error(transparent)]
    InconsistentBatch(#[from] InconsistentBatchError),
    /// The buffer ended before a field could be read.
    #[error("Unexpected end of calldata: needed {expected} more bytes, found {remaining}")]
    UnexpectedEof {
        /// The number of bytes the next field requires.
        expected: usize,
        /// The number of bytes remaining in the buffer.
        remaining: usize,
    },
    /// Decoding consumed the batch but left unparsed bytes behind.
    #[error("Calldata has {0} trailing bytes")]
    TrailingBytes(usize),
    /// The calldata does not begin with the `appendSequencerBatch()` selector.
    #[error("Unexpected method selector")]
    SelectorMismatch,
}

/// A structural mismatch between the declared element counts of a batch and the
/// contexts or transactions it carries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InconsistentBatchError {
    /// The batch declares elements to append but carries no contexts.
    #[error("Batch declares {total} elements to append but has no contexts")]
    MissingContexts {
        /// The declared `totalElementsToAppend`.
        total: u64,
    },
    /// The supplied transactions do not cover the sequenced transactions the
    /// contexts declare.
    #[error("Batch carries {transactions} transactions but contexts declare {sequenced} sequenced")]
    TransactionCountMismatch {
        /// The number of supplied transaction payloads.
        transactions: usize,
        /// The number of sequenced transactions summed over all contexts.
        sequenced: u64,
    },
    /// The declared element total does not match the sum of sequenced and
    /// queued transactions over all contexts.
    #[error("Batch declares {total} total elements but contexts sum to {actual}")]
    ElementCountMismatch {
        /// The declared `totalElementsToAppend`.
        total: u64,
        /// The element count implied by the contexts.
        actual: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inconsistent_batch_error_display() {
        let err: BatchEncodingError = InconsistentBatchError::MissingContexts { total: 7 }.into();
        assert_eq!(err.to_string(), "Batch declares 7 elements to append but has no contexts");
    }

    #[test]
    fn test_field_overflow_display() {
        let err = BatchEncodingError::FieldOverflow { value: 1 << 24, width: 3 };
        assert_eq!(err.to_string(), "Field value 16777216 does not fit in 3 bytes");
    }
}
