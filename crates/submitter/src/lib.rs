#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod config;
pub use config::SubmitterConfig;

mod errors;
pub use errors::{SenderError, SubmitterError};

mod request;
pub use request::TxOverrides;

mod sender;
pub use sender::{BatchSender, InMemoryBatchSender};

mod submitter;
pub use submitter::SequencerBatchSubmitter;

// Re-export the codec surface consumed alongside the submitter.
pub use ctc_codec::{batch_selector, AppendSequencerBatchParams, BatchContext, RawTransaction};
