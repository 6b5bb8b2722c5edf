//! # webcorpus
//!
//! Filtering and deduplication pipeline producing English corpora from web crawls.
//!
//! This project can be used both as a tool to process archives and datasets,
//! or as a lib to integrate filtering stages into other projects.
//!
//! ## Getting started
//!
//! ```sh
//! # filter the first 100 records of an archive
//! webcorpus --archive CC-MAIN-example.warc.gz -n 100 --output cleaned.txt
//!
//! # deduplicate a dataset
//! webcorpus --dataset topic_dataset.json --dedup-output dedup.txt
//! ```
//!
//! Per-record diagnostics are logged at `info` level, use `RUST_LOG` to change it.
use env_logger::Env;
use structopt::StructOpt;
use webcorpus::error::Error;
use webcorpus::pipelines::{CleanPipeline, DedupPipeline, Pipeline};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let opt = cli::WebCorpus::from_args();
    debug!("cli args\n{:#?}", opt);

    if opt.archive.is_none() && opt.dataset.is_none() {
        println!("Usage: webcorpus --archive data.warc.gz [--dataset topic_dataset.json]");
        println!("Run webcorpus --help for all options.");
        return Ok(());
    }

    if let Some(archive) = opt.archive {
        let p = CleanPipeline::new(archive, opt.output.clone(), opt.denylist, Some(opt.num_records));
        let summary = p.run()?;
        debug!("{}", serde_json::to_string(&summary)?);
        println!("{} passed out of {} records processed.", summary.accepted, summary.total);
        if summary.errors > 0 {
            println!("{} records could not be read.", summary.errors);
        }
        println!("Cleaned documents saved to: {}", opt.output.display());
    }

    if let Some(dataset) = opt.dataset {
        let p = DedupPipeline::new(dataset, opt.dedup_output);
        let summary = p.run()?;
        debug!("{}", serde_json::to_string(&summary)?);
        println!("{} deduplicated out of {} records processed.", summary.accepted, summary.total);
    }

    Ok(())
}
