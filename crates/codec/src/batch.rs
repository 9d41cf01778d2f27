//! Contains the [AppendSequencerBatchParams] type and the calldata builder for
//! the `appendSequencerBatch()` contract method.

use crate::{
    context::BatchContext,
    errors::{BatchEncodingError, InconsistentBatchError},
    params::{
        APPEND_SEQUENCER_BATCH_SIGNATURE, BATCH_CONTEXT_SIZE, CONTEXT_COUNT_WIDTH, SELECTOR_SIZE,
        START_ELEMENT_WIDTH, TOTAL_ELEMENTS_WIDTH, TX_DATA_LEN_WIDTH,
    },
    transaction::RawTransaction,
    uint::{read_uint, write_uint},
};
use alloc::vec::Vec;
use alloy_primitives::{keccak256, Bytes};

/// Computes the 4-byte method selector for `appendSequencerBatch()`.
///
/// The selector is the first four bytes of the keccak-256 digest of the
/// method signature string, `0xd0f89344`.
pub fn batch_selector() -> [u8; 4] {
    let digest = keccak256(APPEND_SEQUENCER_BATCH_SIGNATURE.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

/// The full description of one `appendSequencerBatch()` call.
///
/// *Encoding*
/// batch = `should_start_at_element ++ total_elements_to_append ++ num_contexts ++ contexts ++ txs`
/// * should_start_at_element   = uint40
/// * total_elements_to_append  = uint24
/// * num_contexts              = uint24
/// * contexts                  = num_contexts [BatchContext] fragments, in order
/// * txs                       = length-prefixed [RawTransaction] payloads, in order
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AppendSequencerBatchParams {
    /// The chain index at which this batch begins.
    pub should_start_at_element: u64,
    /// The total number of elements (sequenced + queued) this batch appends.
    pub total_elements_to_append: u64,
    /// The ordered batch contexts. Order defines the grouping order in the
    /// resulting chain.
    pub contexts: Vec<BatchContext>,
    /// The sequenced transaction payloads, one per sequenced transaction,
    /// aligned with the grouping the contexts imply.
    pub transactions: Vec<RawTransaction>,
}

impl AppendSequencerBatchParams {
    /// Checks the structural consistency of the batch against the element
    /// counts its contexts declare.
    pub fn check_consistency(&self) -> Result<(), InconsistentBatchError> {
        if self.contexts.is_empty() && self.total_elements_to_append != 0 {
            return Err(InconsistentBatchError::MissingContexts {
                total: self.total_elements_to_append,
            });
        }

        let sequenced =
            self.contexts.iter().map(|ctx| ctx.num_sequenced_transactions).sum::<u64>();
        if self.transactions.len() as u64 != sequenced {
            return Err(InconsistentBatchError::TransactionCountMismatch {
                transactions: self.transactions.len(),
                sequenced,
            });
        }

        let actual = self.contexts.iter().map(|ctx| ctx.num_elements()).sum::<u64>();
        if actual != self.total_elements_to_append {
            return Err(InconsistentBatchError::ElementCountMismatch {
                total: self.total_elements_to_append,
                actual,
            });
        }

        Ok(())
    }

    /// Encodes the batch body: everything after the method selector.
    ///
    /// The batch is validated before any bytes are produced; there is no
    /// partial-success state.
    pub fn encode(&self) -> Result<Vec<u8>, BatchEncodingError> {
        self.check_consistency()?;
        for context in &self.contexts {
            context.check_field_widths()?;
        }

        let tx_len: usize = self.transactions.iter().map(|tx| tx.0.len()).sum();
        let mut out = Vec::with_capacity(
            START_ELEMENT_WIDTH +
                TOTAL_ELEMENTS_WIDTH +
                CONTEXT_COUNT_WIDTH +
                self.contexts.len() * BATCH_CONTEXT_SIZE +
                self.transactions.len() * TX_DATA_LEN_WIDTH +
                tx_len,
        );

        write_uint(&mut out, self.should_start_at_element, START_ELEMENT_WIDTH)?;
        write_uint(&mut out, self.total_elements_to_append, TOTAL_ELEMENTS_WIDTH)?;
        write_uint(&mut out, self.contexts.len() as u64, CONTEXT_COUNT_WIDTH)?;
        for context in &self.contexts {
            context.encode(&mut out)?;
        }
        for transaction in &self.transactions {
            transaction.encode(&mut out)?;
        }

        Ok(out)
    }

    /// Produces the complete calldata: the method selector followed by the
    /// encoded batch body.
    pub fn calldata(&self) -> Result<Bytes, BatchEncodingError> {
        let body = self.encode()?;
        let mut out = Vec::with_capacity(SELECTOR_SIZE + body.len());
        out.extend_from_slice(&batch_selector());
        out.extend_from_slice(&body);
        Ok(out.into())
    }

    /// Decodes a batch body (no selector) from the front of `buf`.
    ///
    /// The number of transaction payloads is implied by the decoded contexts.
    /// Fails if the buffer is short or if any bytes remain once the batch has
    /// been consumed.
    pub fn decode(buf: &mut &[u8]) -> Result<Self, BatchEncodingError> {
        let should_start_at_element = read_uint(buf, START_ELEMENT_WIDTH)?;
        let total_elements_to_append = read_uint(buf, TOTAL_ELEMENTS_WIDTH)?;
        let num_contexts = read_uint(buf, CONTEXT_COUNT_WIDTH)?;

        let mut contexts = Vec::new();
        for _ in 0..num_contexts {
            contexts.push(BatchContext::decode(buf)?);
        }

        let sequenced = contexts.iter().map(|ctx| ctx.num_sequenced_transactions).sum::<u64>();
        let mut transactions = Vec::new();
        for _ in 0..sequenced {
            transactions.push(RawTransaction::decode(buf)?);
        }

        if !buf.is_empty() {
            return Err(BatchEncodingError::TrailingBytes(buf.len()));
        }

        Ok(Self { should_start_at_element, total_elements_to_append, contexts, transactions })
    }

    /// Decodes selector-prefixed calldata, as read back off the chain.
    pub fn decode_calldata(data: &[u8]) -> Result<Self, BatchEncodingError> {
        if data.len() < SELECTOR_SIZE {
            return Err(BatchEncodingError::UnexpectedEof {
                expected: SELECTOR_SIZE,
                remaining: data.len(),
            });
        }
        if data[..SELECTOR_SIZE] != batch_selector() {
            return Err(BatchEncodingError::SelectorMismatch);
        }
        let mut buf = &data[SELECTOR_SIZE..];
        Self::decode(&mut buf)
    }
}
