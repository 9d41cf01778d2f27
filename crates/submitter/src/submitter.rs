//! This module contains the [SequencerBatchSubmitter].

use crate::{
    config::SubmitterConfig,
    errors::SubmitterError,
    request::{build_request, TxOverrides},
    sender::BatchSender,
};
use alloy_primitives::{Address, B256};
use alloy_rpc_types::TransactionRequest;
use ctc_codec::AppendSequencerBatchParams;
use tracing::{debug, info};

/// Thin adapter that turns a batch description into an `appendSequencerBatch`
/// transaction and hands it to a [BatchSender].
///
/// The submitter is a stateless pure transform up to the final `send` call: it
/// performs no I/O of its own, keeps no state between submissions, and never
/// retries. Encoding failures abort before a request exists; sender failures
/// propagate unchanged.
#[derive(Debug)]
pub struct SequencerBatchSubmitter<S> {
    /// The submitter configuration.
    config: SubmitterConfig,
    /// The sender the prepared requests are delegated to.
    sender: S,
}

impl<S> SequencerBatchSubmitter<S> {
    /// Creates a new submitter over the given sender.
    pub const fn new(config: SubmitterConfig, sender: S) -> Self {
        Self { config, sender }
    }

    /// The address of the canonical transaction chain contract.
    pub const fn contract_address(&self) -> Address {
        self.config.contract_address
    }

    /// Builds the submission request for `params` without sending it.
    ///
    /// Caller overrides take precedence over the config's defaults; the
    /// request's `to` and `input` fields are fixed by the submitter.
    pub fn build_request(
        &self,
        params: &AppendSequencerBatchParams,
        overrides: TxOverrides,
    ) -> Result<TransactionRequest, SubmitterError> {
        let calldata = params.calldata()?;
        let overrides = overrides.or(&self.config.default_overrides);
        Ok(build_request(self.config.contract_address, calldata, &overrides))
    }
}

impl<S: BatchSender> SequencerBatchSubmitter<S> {
    /// Encodes `params`, wraps the calldata in a transaction request, and
    /// submits it through the sender, returning the pending transaction hash.
    pub async fn append_sequencer_batch(
        &self,
        params: &AppendSequencerBatchParams,
        overrides: TxOverrides,
    ) -> Result<B256, SubmitterError> {
        let request = self.build_request(params, overrides)?;
        debug!(
            contexts = params.contexts.len(),
            transactions = params.transactions.len(),
            calldata_len = request.input.input().map(|data| data.len()).unwrap_or(0),
            "Submitting sequencer batch"
        );

        let tx_hash = self.sender.send(request).await?;
        info!(%tx_hash, start_element = params.should_start_at_element, "Sequencer batch submitted");
        Ok(tx_hash)
    }
}
