//! Dataset deduplication pipeline
//!
//! Reads every text of a dataset, removes near-duplicates (see [crate::processing::dedup])
//! and optionally writes kept texts, one per line.
//!
//! A malformed dataset is fatal: the first unreadable text ends the run with an error.
use std::path::PathBuf;

use log::{debug, info};

use crate::error::Error;
use crate::io::CorpusWriter;
use crate::processing::{Decision, Deduplicator};
use crate::sources::dataset;

use super::pipeline::{Pipeline, Summary};

pub struct DedupPipeline {
    src: PathBuf,
    dst: Option<PathBuf>,
}

impl DedupPipeline {
    pub fn new(src: PathBuf, dst: Option<PathBuf>) -> Self {
        Self { src, dst }
    }

    /// Deduplicate `texts` into `dedup`.
    ///
    /// Stops at the first text that could not be read.
    pub fn dedup_texts<I>(texts: I, dedup: &mut Deduplicator) -> Result<Summary, Error>
    where
        I: Iterator<Item = Result<String, Error>>,
    {
        let mut total = 0;
        for (idx, text) in texts.enumerate() {
            let text = text?;
            total += 1;

            match dedup.offer(&text) {
                Decision::Kept => (),
                Decision::Empty => debug!("record {} has no tokens", idx),
                Decision::Duplicate { of, similarity } => debug!(
                    "record {} is a near-duplicate of kept record {} ({:.3})",
                    idx, of, similarity
                ),
            }
        }

        Ok(Summary {
            accepted: dedup.len(),
            total,
            errors: 0,
        })
    }
}

impl Pipeline<Summary> for DedupPipeline {
    fn run(&self) -> Result<Summary, Error> {
        let texts = dataset::open(&self.src)?;
        let mut dedup = Deduplicator::default();

        let summary = Self::dedup_texts(texts, &mut dedup)?;
        info!(
            "{} deduplicated out of {} records processed.",
            summary.accepted, summary.total
        );

        if let Some(dst) = &self.dst {
            let mut writer = CorpusWriter::create(dst)?;
            for text in dedup.kept() {
                writer.write_text(text)?;
            }
            writer.flush()?;
            info!("deduplicated documents saved to {:?}", dst);
        }

        Ok(summary)
    }
}
