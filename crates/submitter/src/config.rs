//! This module contains the batch submitter configuration.

use crate::request::TxOverrides;
use alloy_primitives::Address;

/// Configuration for [SequencerBatchSubmitter].
///
/// [SequencerBatchSubmitter]: crate::SequencerBatchSubmitter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitterConfig {
    /// The address of the canonical transaction chain contract. Copied
    /// verbatim into the `to` field of every submission.
    pub contract_address: Address,
    /// Default transaction overrides applied beneath caller-supplied ones.
    pub default_overrides: TxOverrides,
}

impl SubmitterConfig {
    /// Creates a config for the given contract address with no default
    /// overrides.
    pub fn new(contract_address: Address) -> Self {
        Self { contract_address, default_overrides: TxOverrides::default() }
    }

    /// Sets the default transaction overrides.
    pub fn with_default_overrides(mut self, overrides: TxOverrides) -> Self {
        self.default_overrides = overrides;
        self
    }
}
