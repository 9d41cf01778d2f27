//! This module contains the sender capability consumed by the batch submitter.

use crate::errors::SenderError;
use alloy_primitives::{keccak256, B256};
use alloy_rpc_types::TransactionRequest;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

/// A capability that can deliver a prepared transaction request to the chain.
///
/// Implementations own signing, transport, timeouts, and retries. The
/// submitter hands over the request and returns the resulting pending
/// transaction hash to its caller; sender errors are never caught or rewrapped
/// on the way up.
#[async_trait]
pub trait BatchSender: Send + Sync {
    /// Submits the request, returning the hash of the pending transaction.
    async fn send(&self, request: TransactionRequest) -> Result<B256, SenderError>;
}

/// In-memory sender that records requests instead of broadcasting them.
///
/// This implementation provides a lightweight option for exercising the
/// submitter without a chain; the returned hash is the keccak-256 digest of
/// the request calldata, so identical batches yield identical handles.
#[derive(Debug, Default)]
pub struct InMemoryBatchSender {
    /// The requests recorded so far.
    sent: Mutex<Vec<TransactionRequest>>,
}

impl InMemoryBatchSender {
    /// Create a new in-memory batch sender.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the requests recorded so far.
    pub async fn sent(&self) -> Vec<TransactionRequest> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl BatchSender for InMemoryBatchSender {
    async fn send(&self, request: TransactionRequest) -> Result<B256, SenderError> {
        let hash = keccak256(request.input.input().cloned().unwrap_or_default());
        let mut sent = self.sent.lock().await;
        sent.push(request);
        info!(
            total_sent = sent.len(),
            tx_hash = %hash,
            "InMemoryBatchSender: request recorded (not broadcast)"
        );
        Ok(hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::bytes;
    use alloy_rpc_types::TransactionInput;

    #[tokio::test]
    async fn in_memory_sender_records_requests() {
        let sender = InMemoryBatchSender::new();
        let mut request = TransactionRequest::default();
        request.input = TransactionInput::new(bytes!("d0f89344"));

        let hash = sender.send(request.clone()).await.unwrap();
        assert_eq!(hash, keccak256(bytes!("d0f89344")));
        assert_eq!(sender.sent().await, vec![request]);
    }

    #[tokio::test]
    async fn in_memory_sender_handle_is_deterministic() {
        let sender = InMemoryBatchSender::new();
        let mut request = TransactionRequest::default();
        request.input = TransactionInput::new(bytes!("0102"));

        let first = sender.send(request.clone()).await.unwrap();
        let second = sender.send(request).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(sender.sent().await.len(), 2);
    }
}
