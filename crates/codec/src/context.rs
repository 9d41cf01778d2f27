//! Contains the [BatchContext] type and its fixed-width codec.

use crate::{
    errors::BatchEncodingError,
    params::{BLOCK_FIELD_WIDTH, TX_COUNT_WIDTH},
    uint::{fits, read_uint, write_uint},
};
use alloc::vec::Vec;

/// A grouping record within a sequencer batch, describing how many sequenced
/// and queued transactions follow and under what timestamp and L1 block number.
///
/// *Encoding*
/// context = `num_sequenced_transactions ++ num_subsequent_queue_transactions ++ timestamp ++ block_number`
/// * num_sequenced_transactions        = uint24
/// * num_subsequent_queue_transactions = uint24
/// * timestamp                         = uint40
/// * block_number                      = uint40
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchContext {
    /// The number of sequenced transactions in this context.
    pub num_sequenced_transactions: u64,
    /// The number of queue transactions appended after the sequenced ones.
    pub num_subsequent_queue_transactions: u64,
    /// The Unix timestamp associated with this context.
    pub timestamp: u64,
    /// The L1 block number associated with this context.
    pub block_number: u64,
}

impl BatchContext {
    /// The number of chain elements this context contributes.
    pub const fn num_elements(&self) -> u64 {
        self.num_sequenced_transactions + self.num_subsequent_queue_transactions
    }

    /// Checks that every field fits its fixed width.
    pub const fn check_field_widths(&self) -> Result<(), BatchEncodingError> {
        if !fits(self.num_sequenced_transactions, TX_COUNT_WIDTH) {
            return Err(BatchEncodingError::FieldOverflow {
                value: self.num_sequenced_transactions,
                width: TX_COUNT_WIDTH,
            });
        }
        if !fits(self.num_subsequent_queue_transactions, TX_COUNT_WIDTH) {
            return Err(BatchEncodingError::FieldOverflow {
                value: self.num_subsequent_queue_transactions,
                width: TX_COUNT_WIDTH,
            });
        }
        if !fits(self.timestamp, BLOCK_FIELD_WIDTH) {
            return Err(BatchEncodingError::FieldOverflow {
                value: self.timestamp,
                width: BLOCK_FIELD_WIDTH,
            });
        }
        if !fits(self.block_number, BLOCK_FIELD_WIDTH) {
            return Err(BatchEncodingError::FieldOverflow {
                value: self.block_number,
                width: BLOCK_FIELD_WIDTH,
            });
        }
        Ok(())
    }

    /// Appends the 16-byte context fragment to `out`.
    ///
    /// All fields are validated up front so that a failed encode never leaves a
    /// partial fragment in `out`.
    pub fn encode(&self, out: &mut Vec<u8>) -> Result<(), BatchEncodingError> {
        self.check_field_widths()?;
        write_uint(out, self.num_sequenced_transactions, TX_COUNT_WIDTH)?;
        write_uint(out, self.num_subsequent_queue_transactions, TX_COUNT_WIDTH)?;
        write_uint(out, self.timestamp, BLOCK_FIELD_WIDTH)?;
        write_uint(out, self.block_number, BLOCK_FIELD_WIDTH)?;
        Ok(())
    }

    /// Reads one context fragment from the front of `buf`, advancing it.
    pub fn decode(buf: &mut &[u8]) -> Result<Self, BatchEncodingError> {
        let num_sequenced_transactions = read_uint(buf, TX_COUNT_WIDTH)?;
        let num_subsequent_queue_transactions = read_uint(buf, TX_COUNT_WIDTH)?;
        let timestamp = read_uint(buf, BLOCK_FIELD_WIDTH)?;
        let block_number = read_uint(buf, BLOCK_FIELD_WIDTH)?;
        Ok(Self {
            num_sequenced_transactions,
            num_subsequent_queue_transactions,
            timestamp,
            block_number,
        })
    }
}
