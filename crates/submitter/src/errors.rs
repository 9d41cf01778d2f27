//! This module contains the error types for batch submission.

use ctc_codec::errors::BatchEncodingError;
use thiserror::Error;

/// An error raised by a [BatchSender] while delivering a prepared request.
///
/// The submitter never generates these itself and never inspects them; they
/// surface through [SubmitterError::Transport] with the original cause intact.
///
/// [BatchSender]: crate::BatchSender
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SenderError {
    /// RPC error.
    #[error("RPC error: {0}")]
    Rpc(String),
    /// Signing error.
    #[error("Signing error: {0}")]
    Signing(String),
    /// The node rejected the transaction.
    #[error("Transaction rejected: {0}")]
    Rejected(String),
}

/// Errors returned by [SequencerBatchSubmitter].
///
/// [SequencerBatchSubmitter]: crate::SequencerBatchSubmitter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitterError {
    /// The batch could not be encoded. No transaction request is produced.
    #[error(transparent)]
    Encoding(#[from] BatchEncodingError),
    /// The sender failed to deliver the prepared request.
    #[error(transparent)]
    Transport(#[from] SenderError),
}
