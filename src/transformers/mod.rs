/*! Document transformers.

Transforms documents by removing or masking content.

Each transformer is also usable on plain `&str` content,
returning a new [String] and leaving the input untouched.
!*/

mod paragraph_filter;
mod pii;
mod transform;

pub use paragraph_filter::ParagraphCleaner;
pub use pii::Redactor;
pub use transform::Transform;
