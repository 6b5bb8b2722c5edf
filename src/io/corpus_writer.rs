//! Line-oriented corpus writer.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::pipelines::Document;

/// Writes one document per line.
///
/// Newlines and carriage returns inside documents are replaced by spaces,
/// so that each written line is exactly one document.
pub struct CorpusWriter<W: Write> {
    inner: BufWriter<W>,
    nb_written: usize,
}

impl CorpusWriter<File> {
    /// Create (or truncate) the file at `dst`.
    pub fn create(dst: &Path) -> std::io::Result<Self> {
        info!("creating {:?}", dst);
        Ok(Self::new(File::create(dst)?))
    }
}

impl<W: Write> CorpusWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: BufWriter::new(writer),
            nb_written: 0,
        }
    }

    pub fn write_document(&mut self, doc: &Document) -> std::io::Result<()> {
        self.write_line(&doc.single_line())
    }

    /// Write raw text, flattening it on a single line.
    pub fn write_text(&mut self, text: &str) -> std::io::Result<()> {
        self.write_line(text.replace(['\n', '\r'], " ").trim())
    }

    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.nb_written += 1;
        Ok(())
    }

    /// Number of documents written so far.
    pub fn nb_written(&self) -> usize {
        self.nb_written
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }

    /// Flush and get back the underlying writer.
    pub fn into_inner(self) -> std::io::Result<W> {
        self.inner.into_inner().map_err(|e| e.into_error())
    }
}
