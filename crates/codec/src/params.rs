//! This module contains the parameters of the `appendSequencerBatch` calldata format.
//!
//! All widths reproduce the on-chain layout of the canonical transaction chain
//! contract bit-for-bit. The format is not self-describing: field lengths are
//! implicit and every numeric field is big-endian, zero-padded to its width.

/// The signature of the batch append method. Its keccak-256 hash supplies the
/// calldata method selector.
pub const APPEND_SEQUENCER_BATCH_SIGNATURE: &str = "appendSequencerBatch()";

/// [SELECTOR_SIZE] is the byte length of the method selector prefixing the calldata.
pub const SELECTOR_SIZE: usize = 4;

/// Byte width of the `shouldStartAtElement` header field.
pub const START_ELEMENT_WIDTH: usize = 5;

/// Byte width of the `totalElementsToAppend` header field.
pub const TOTAL_ELEMENTS_WIDTH: usize = 3;

/// Byte width of the context count header field.
pub const CONTEXT_COUNT_WIDTH: usize = 3;

/// Byte width of the two transaction count fields within a batch context.
pub const TX_COUNT_WIDTH: usize = 3;

/// Byte width of the timestamp and block number fields within a batch context.
pub const BLOCK_FIELD_WIDTH: usize = 5;

/// Byte width of the length prefix preceding each transaction payload.
pub const TX_DATA_LEN_WIDTH: usize = 3;

/// [BATCH_CONTEXT_SIZE] is the encoded size of one batch context fragment.
pub const BATCH_CONTEXT_SIZE: usize = 2 * TX_COUNT_WIDTH + 2 * BLOCK_FIELD_WIDTH;
