//! Pipelines.
//!
//! Two independent pipelines are implemented here:
//! - [CleanPipeline] builds an English corpus from a WARC archive,
//! - [DedupPipeline] removes near-duplicates from a text dataset.
//!
//! They share no state and can be run in any order.
//! The module also provides a light [pipeline::Pipeline] trait for pipeline creation.
pub mod clean;
pub mod dedup;
mod document;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use clean::{CleanPipeline, DocumentFilter, Judgment};
pub use dedup::DedupPipeline;
pub use document::Document;
pub use pipeline::{Pipeline, Summary};
