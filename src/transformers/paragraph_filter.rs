//! Removes low quality paragraphs.
//!
//! Paragraphs are `\n`-separated strings. A paragraph is removed when
//! - it holds a run of more than 100 ASCII alphanumeric characters (see [LongToken]),
//! - it has no ASCII punctuation (see [Punctuation]).
//!
//! Example:
//! ```text
//! Welcome to my blog!
//! Home About Contact
//! aGVsbG8gd29ybGQ...(200 more base64 characters)
//! This post is about cats.
//! ```
//!
//! will be transformed into
//!
//! ```text
//! Welcome to my blog!
//! This post is about cats.
//! ```
//!
//! Surviving paragraphs keep their order. If nothing survives, content becomes empty.
use itertools::Itertools;

use crate::{
    filtering::{
        paragraph::{LongToken, Punctuation},
        Filter,
    },
    pipelines::Document,
};

use super::Transform;

#[derive(Default)]
pub struct ParagraphCleaner {
    long_token: LongToken,
    punctuation: Punctuation,
}

impl ParagraphCleaner {
    /// Use a custom maximum alphanumeric run length.
    pub fn new(max_run: usize) -> Self {
        Self {
            long_token: LongToken::with_max_run(max_run),
            punctuation: Punctuation,
        }
    }

    fn keep(&self, paragraph: &str) -> bool {
        self.long_token.detect(paragraph) && self.punctuation.detect(paragraph)
    }

    pub fn clean(&self, text: &str) -> String {
        // split on '\n' rather than lines() to keep eventual '\r'
        text.split('\n').filter(|p| self.keep(p)).join("\n")
    }
}

impl Transform for ParagraphCleaner {
    fn transform_own(&self, mut doc: Document) -> Document {
        let cleaned = self.clean(doc.content());
        doc.set_content(cleaned);
        doc
    }
}
