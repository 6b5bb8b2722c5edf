/*! Document sources

- [archive]: (identifier, raw payload) pairs from WARC archives,
- [dataset]: raw texts from pre-extracted datasets.

Both are lazy, blocking pull sources.
!*/
pub mod archive;
pub mod dataset;

pub use archive::Archive;
