//! English corpus extraction pipeline
//!
//! Builds a cleaned, English-only corpus from a WARC archive.
//!
//! # Processing
//! 1. Each response record is decoded (encoding detection, markup removal).
//! 1. PII (SSN, phone numbers) is masked.
//! 1. Low quality paragraphs are removed.
//! 1. The document goes through the quality classifier (denylist, composition)
//!    and the language classifier (script ratio).
//! 1. Documents accepted by both are written, one per line.
//!
//! Records are processed one at a time, in archive order.
//! Rejections never stop the run. An unreadable record is counted,
//! and ends the run when the archive reader cannot go past it.
use std::path::PathBuf;

use log::{debug, error, info, warn};

use crate::error::Error;
use crate::extract::{Decoder, RawPayload};
use crate::filtering::{DenyList, QualityClassifier, Verdict};
use crate::identifiers::{AsciiScript, Identification, Identifier};
use crate::io::CorpusWriter;
use crate::sources::archive;
use crate::transformers::{ParagraphCleaner, Redactor, Transform};

use super::pipeline::{Pipeline, Summary};
use super::Document;

/// Result of running a single document through [DocumentFilter].
#[derive(Debug)]
pub struct Judgment {
    pub doc: Document,
    pub quality: Verdict,
    pub language: Option<Identification>,
}

impl Judgment {
    pub fn is_accepted(&self) -> bool {
        self.quality.is_accept() && self.language.is_some()
    }
}

/// Chain of every single-document stage.
///
/// Holds no mutable state: the same input always yields the same [Judgment].
pub struct DocumentFilter<'a> {
    decoder: Decoder,
    redactor: Redactor,
    cleaner: ParagraphCleaner,
    quality: QualityClassifier<'a>,
    language: AsciiScript,
}

impl<'a> DocumentFilter<'a> {
    pub fn new(denylist: &'a DenyList) -> Self {
        Self {
            decoder: Decoder,
            redactor: Redactor,
            cleaner: ParagraphCleaner::default(),
            quality: QualityClassifier::new(denylist),
            language: AsciiScript::default(),
        }
    }

    /// Decode, redact, clean and classify a raw payload.
    pub fn process(&self, id: String, payload: &RawPayload) -> Judgment {
        let text = self.decoder.decode(payload);
        self.judge(Document::new(id, text))
    }

    /// Redact, clean and classify already decoded text.
    pub fn judge(&self, doc: Document) -> Judgment {
        let doc = self.redactor.transform_own(doc);
        let doc = self.cleaner.transform_own(doc);

        let quality = self.quality.judge(doc.content());
        let language = self.language.identify(doc.content());

        Judgment {
            doc,
            quality,
            language,
        }
    }
}

pub struct CleanPipeline {
    src: PathBuf,
    dst: PathBuf,
    denylist: PathBuf,
    limit: Option<usize>,
}

impl CleanPipeline {
    pub fn new(src: PathBuf, dst: PathBuf, denylist: PathBuf, limit: Option<usize>) -> Self {
        Self {
            src,
            dst,
            denylist,
            limit,
        }
    }

    /// Filter `entries`, writing accepted documents to `writer`.
    ///
    /// Entries that could not be read are logged and counted in [Summary::errors].
    pub fn filter_entries<I, W>(
        filter: &DocumentFilter,
        entries: I,
        writer: &mut CorpusWriter<W>,
    ) -> Result<Summary, Error>
    where
        I: Iterator<Item = Result<(String, RawPayload), Error>>,
        W: std::io::Write,
    {
        let mut summary = Summary::default();

        for entry in entries {
            let (id, payload) = match entry {
                Ok(e) => e,
                Err(e) => {
                    error!("{:?}", e);
                    summary.errors += 1;
                    continue;
                }
            };
            summary.total += 1;

            let judgment = filter.process(id, &payload);
            info!(
                "{} quality: {:?}, english: {}",
                judgment.doc.id(),
                judgment.quality,
                judgment.language.is_some()
            );

            if judgment.is_accepted() {
                writer.write_document(&judgment.doc)?;
                summary.accepted += 1;
                debug!("{} written", judgment.doc.id());
            } else if judgment.quality.is_accept() {
                debug!("{} filtered out: not English", judgment.doc.id());
            }
        }

        writer.flush()?;
        Ok(summary)
    }
}

impl Pipeline<Summary> for CleanPipeline {
    fn run(&self) -> Result<Summary, Error> {
        // fail early on missing resources
        let denylist = DenyList::from_path(&self.denylist)?;
        let entries = archive::open(&self.src)?;
        let mut writer = CorpusWriter::create(&self.dst)?;

        let filter = DocumentFilter::new(&denylist);
        let summary = match self.limit {
            Some(limit) => Self::filter_entries(&filter, entries.take(limit), &mut writer)?,
            None => Self::filter_entries(&filter, entries, &mut writer)?,
        };

        info!("{} passed out of {} records processed.", summary.accepted, summary.total);
        if summary.errors > 0 {
            warn!("{} records could not be read", summary.errors);
        }
        info!("cleaned documents saved to {:?}", self.dst);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::error::Error;
    use crate::extract::RawPayload;
    use crate::filtering::{DenyList, Verdict};
    use crate::io::CorpusWriter;
    use crate::pipelines::Document;

    use super::{CleanPipeline, DocumentFilter};

    fn denylist() -> DenyList {
        let terms: HashSet<String> = ["darnit"].iter().map(|t| t.to_string()).collect();
        DenyList::new(terms)
    }

    #[test]
    fn judge_accept() {
        let dl = denylist();
        let f = DocumentFilter::new(&dl);
        let j = f.judge(Document::new(
            "id".to_string(),
            "A proper English paragraph, with punctuation.\nmenu home about".to_string(),
        ));

        assert!(j.is_accepted());
        assert_eq!(j.doc.content(), "A proper English paragraph, with punctuation.");
    }

    #[test]
    fn judge_redacts() {
        let dl = denylist();
        let f = DocumentFilter::new(&dl);
        let j = f.judge(Document::new(
            "id".to_string(),
            "Call me at +15551234567, or not.".to_string(),
        ));
        assert!(j.is_accepted());
        assert_eq!(j.doc.content(), "Call me at +1XXXXXXXXXX, or not.");
    }

    #[test]
    fn judge_empty_after_cleaning() {
        let dl = denylist();
        let f = DocumentFilter::new(&dl);
        let j = f.judge(Document::new("id".to_string(), "no punctuation at all".to_string()));
        assert_eq!(j.quality, Verdict::Blank);
        assert!(!j.is_accepted());
    }

    #[test]
    fn judge_not_english() {
        let dl = denylist();
        let f = DocumentFilter::new(&dl);
        let j = f.judge(Document::new(
            "id".to_string(),
            "Это обычный текст на русском языке.".to_string(),
        ));
        assert!(j.quality.is_accept());
        assert!(j.language.is_none());
        assert!(!j.is_accepted());
    }

    #[test]
    fn filter_entries() {
        let dl = denylist();
        let f = DocumentFilter::new(&dl);
        let entries: Vec<Result<(String, RawPayload), Error>> = vec![
            Ok((
                "https://good.example".to_string(),
                RawPayload::from("<p>This is a fine page, about gardening.</p>"),
            )),
            Err(Error::Custom("unreadable record".to_string())),
            Ok((
                "https://bad.example".to_string(),
                RawPayload::from("<p>This is a fine page, darnit.</p>"),
            )),
        ];

        let mut writer = CorpusWriter::new(Vec::new());
        let summary = CleanPipeline::filter_entries(&f, entries.into_iter(), &mut writer).unwrap();

        assert_eq!(summary.accepted, 1);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.errors, 1);
        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(out, "This is a fine page, about gardening.\n");
    }
}
