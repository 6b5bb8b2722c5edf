/*! Filtering utilities

Filters can operate on paragraph or document level.

Filters implement [filter::Filter], [filter::FilterMut] or both:
- [filter::Filter] is implemented for filters that do not have state (see [paragraph::LongToken] for example)
- [filter::FilterMut] is implemented for filter that do have state (see [crate::processing::Deduplicator]).

Document-level filters read a [DenyList], which is loaded once and shared by reference.
! */
mod denylist;
mod filter;
pub mod paragraph;
mod record;

pub use denylist::DenyList;
pub use filter::Filter;
pub use filter::FilterMut;
pub use record::{QualityClassifier, Verdict};
