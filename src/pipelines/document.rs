//! Document: the unit of judgment.
use serde::Serialize;

/// Plain text content along with the identifier of its source
/// (target URI for archive records, index for dataset records).
///
/// Paragraphs are separated by `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    id: String,
    content: String,
}

impl Document {
    pub fn new(id: String, content: String) -> Self {
        Self { id, content }
    }

    /// Get a reference to the document's id.
    pub fn id(&self) -> &str {
        self.id.as_ref()
    }

    /// Get a reference to the document's content.
    pub fn content(&self) -> &str {
        self.content.as_ref()
    }

    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// Content on a single line: `\n` and `\r` are replaced by spaces, and the result is trimmed.
    pub fn single_line(&self) -> String {
        self.content
            .replace(['\n', '\r'], " ")
            .trim()
            .to_string()
    }
}
