//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
/// Filtering and deduplication of English web corpora.
///
/// ```sh
/// webcorpus 0.1.0
/// Filtering and deduplication of English web corpora.
///
/// USAGE:
///     webcorpus [OPTIONS]
///
/// FLAGS:
///     -h, --help       Prints help information
///     -V, --version    Prints version information
///
/// OPTIONS:
///     -a, --archive <archive>              WARC archive to filter (gzipped if ending in .gz)
///     -d, --dataset <dataset>              JSON/JSONL text dataset to deduplicate
///         --dedup-output <dedup-output>    where to write deduplicated dataset texts
///         --denylist <denylist>            denylist file, one term per line [default: bad_word_list.txt]
///     -n, --num-records <num-records>      number of archive records to process [default: 30]
///     -o, --output <output>                where to write cleaned documents [default: cleaned_documents.txt]
/// ```
#[structopt(name = "webcorpus", about = "English web corpus filtering and deduplication.")]
pub struct WebCorpus {
    #[structopt(
        parse(from_os_str),
        short = "a",
        long = "archive",
        help = "WARC archive to filter (gzipped if ending in .gz)"
    )]
    pub archive: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        short = "d",
        long = "dataset",
        help = "JSON/JSONL text dataset to deduplicate"
    )]
    pub dataset: Option<PathBuf>,
    #[structopt(
        short = "n",
        long = "num-records",
        help = "number of archive records to process",
        default_value = "30"
    )]
    pub num_records: usize,
    #[structopt(
        parse(from_os_str),
        short = "o",
        long = "output",
        help = "where to write cleaned documents",
        default_value = "cleaned_documents.txt"
    )]
    pub output: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "denylist",
        help = "denylist file, one term per line",
        default_value = "bad_word_list.txt"
    )]
    pub denylist: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "dedup-output",
        help = "where to write deduplicated dataset texts"
    )]
    pub dedup_output: Option<PathBuf>,
}
