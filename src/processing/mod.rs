/*! Batch processing

Contains structures and functions that operate on whole batches of documents rather than single ones.
!*/
pub mod dedup;

pub use dedup::{deduplicate, Decision, Deduplicator};
