//! This module contains transaction request construction for batch submission.

use alloy_primitives::{Address, Bytes, U256};
use alloy_rpc_types::{TransactionInput, TransactionRequest};

/// Caller-supplied overrides for the submission transaction.
///
/// Every field is an opaque pass-through: the builder copies set fields onto
/// the request without interpreting them. The `to` and `input` fields of the
/// request always point at the batch inbox contract and the encoded calldata
/// and cannot be overridden.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TxOverrides {
    /// The sender account.
    pub from: Option<Address>,
    /// The gas limit.
    pub gas_limit: Option<u64>,
    /// The legacy gas price.
    pub gas_price: Option<u128>,
    /// The EIP-1559 max fee per gas.
    pub max_fee_per_gas: Option<u128>,
    /// The EIP-1559 max priority fee per gas.
    pub max_priority_fee_per_gas: Option<u128>,
    /// The transaction nonce.
    pub nonce: Option<u64>,
    /// The value sent with the transaction.
    pub value: Option<U256>,
}

impl TxOverrides {
    /// Returns `self` with unset fields filled in from `defaults`.
    ///
    /// Caller-supplied fields always take precedence over defaults.
    pub fn or(self, defaults: &Self) -> Self {
        Self {
            from: self.from.or(defaults.from),
            gas_limit: self.gas_limit.or(defaults.gas_limit),
            gas_price: self.gas_price.or(defaults.gas_price),
            max_fee_per_gas: self.max_fee_per_gas.or(defaults.max_fee_per_gas),
            max_priority_fee_per_gas: self
                .max_priority_fee_per_gas
                .or(defaults.max_priority_fee_per_gas),
            nonce: self.nonce.or(defaults.nonce),
            value: self.value.or(defaults.value),
        }
    }
}

/// Builds the submission request for the given contract and calldata.
///
/// Overrides are applied first; `to` and `input` are set last so they always
/// reflect the batch inbox contract and the encoded batch.
pub(crate) fn build_request(
    contract: Address,
    calldata: Bytes,
    overrides: &TxOverrides,
) -> TransactionRequest {
    let mut request = TransactionRequest {
        from: overrides.from,
        gas: overrides.gas_limit,
        gas_price: overrides.gas_price,
        max_fee_per_gas: overrides.max_fee_per_gas,
        max_priority_fee_per_gas: overrides.max_priority_fee_per_gas,
        nonce: overrides.nonce,
        value: overrides.value,
        ..Default::default()
    };
    request = request.to(contract);
    request.input = TransactionInput::new(calldata);
    request
}
