//! WARC archive reader.
//!
//! Only `response` records are yielded. Their body is an HTTP response:
//! the status line and headers are stripped, and the `charset` of the `Content-Type` header,
//! if any, is kept as an encoding hint for decoding.
use std::{fs::File, io::BufReader, path::Path};

use bytes::Bytes;
use flate2::read::MultiGzDecoder;
use log::debug;
use std::io::BufRead;
use warc::{BufferedBody, Record, RecordIter, RecordType, WarcHeader, WarcReader};

use crate::error::Error;
use crate::extract::RawPayload;

/// Archive instance, generic over reader type.
///
/// This genericity enables reading both compressed and decompressed `warc` files.
///
/// Be aware that CommonCrawl files are gzipped and need
/// a multi gz decoder (such as [MultiGzDecoder]).
///
/// The reader cannot resynchronize after a malformed record,
/// so iteration ends after the first error.
pub struct Archive<T> {
    iter: RecordIter<T>,
    done: bool,
}

/// Archive reader using [MultiGzDecoder] over a [File].
impl Archive<BufReader<MultiGzDecoder<File>>> {
    /// Create a new reader from a gzipped WARC file.
    pub fn from_path_gzip<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let gzip_file = File::open(path)?;
        let gzip_stream = MultiGzDecoder::new(gzip_file);

        // we use a different reader from the default one in the warc crate to
        // manage multipart gzipped content.
        let bufreader = BufReader::new(gzip_stream);

        Ok(Self::new(bufreader))
    }
}

impl Archive<BufReader<File>> {
    /// Create a new reader from an uncompressed WARC file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<T: BufRead> Archive<T> {
    pub fn new(reader: T) -> Self {
        Self {
            iter: WarcReader::new(reader).iter_records(),
            done: false,
        }
    }
}

/// Boxed iterator over archive entries.
pub type Entries = Box<dyn Iterator<Item = Result<(String, RawPayload), Error>>>;

/// Open an archive, choosing the gzip reader when the path ends in `.gz`.
pub fn open(path: &Path) -> Result<Entries, Error> {
    if !path.exists() {
        return Err(Error::MissingResource(path.to_path_buf()));
    }
    let gzipped = path.extension().map_or(false, |ext| ext == "gz");
    if gzipped {
        Ok(Box::new(Archive::from_path_gzip(path)?))
    } else {
        Ok(Box::new(Archive::from_path(path)?))
    }
}

/// Get the source identifier and payload of a response record.
///
/// Identifier is the target URI, or the record id if there's none.
pub fn entry(record: &Record<BufferedBody>) -> (String, RawPayload) {
    let id = record
        .header(WarcHeader::TargetURI)
        .map(|uri| uri.to_string())
        .unwrap_or_else(|| record.warc_id().to_string());

    (id, http_payload(record.body()))
}

/// Strip HTTP status line and headers from `body`.
/// Bodies that do not start with an HTTP status line are kept whole.
pub fn http_payload(body: &[u8]) -> RawPayload {
    if !body.starts_with(b"HTTP/") {
        return RawPayload::new(Bytes::copy_from_slice(body), None);
    }

    let (head, content) = match find(body, b"\r\n\r\n") {
        Some(idx) => (&body[..idx], &body[idx + 4..]),
        None => match find(body, b"\n\n") {
            Some(idx) => (&body[..idx], &body[idx + 2..]),
            None => (body, &body[body.len()..]),
        },
    };

    let charset = String::from_utf8_lossy(head)
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-type"))
        .and_then(|(_, value)| charset(value));

    RawPayload::new(Bytes::copy_from_slice(content), charset)
}

/// Extract `charset` parameter of a `Content-Type` header value.
fn charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("charset"))
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

impl<R: BufRead> Iterator for Archive<R> {
    type Item = Result<(String, RawPayload), Error>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.iter.next()? {
                Ok(record) => {
                    if *record.warc_type() == RecordType::Response {
                        return Some(Ok(entry(&record)));
                    }
                    debug!("skipping {:?} record {}", record.warc_type(), record.warc_id());
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(Error::Warc(e)));
                }
            }
        }
    }
}
