#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

extern crate alloc;

pub mod errors;
pub mod params;
pub mod uint;

mod transaction;
pub use transaction::RawTransaction;

mod context;
pub use context::BatchContext;

mod batch;
pub use batch::{batch_selector, AppendSequencerBatchParams};
