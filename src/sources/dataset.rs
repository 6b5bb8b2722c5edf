/*! Pre-extracted text dataset reader.

Two layouts are supported:
- a JSON document holding records in a `data` array: `{"data": [{"text": "..."}, ...]}`,
- JSON Lines (`.jsonl` extension), one `{"text": "..."}` record per line.

Other record fields are ignored.
JSON Lines files are read lazily, JSON documents are loaded whole.
!*/
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

#[derive(Debug, Deserialize)]
struct TextRecord {
    text: String,
}

#[derive(Debug, Deserialize)]
struct DatasetFile {
    data: Vec<TextRecord>,
}

/// Boxed iterator over dataset texts.
pub type Texts = Box<dyn Iterator<Item = Result<String, Error>>>;

/// Open a dataset, choosing the layout from the file extension.
pub fn open(path: &Path) -> Result<Texts, Error> {
    if !path.exists() {
        return Err(Error::MissingResource(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let jsonl = path.extension().map_or(false, |ext| ext == "jsonl");
    if jsonl {
        Ok(Box::new(from_jsonl(BufReader::new(file))))
    } else {
        let texts = from_json(BufReader::new(file))?;
        Ok(Box::new(texts.into_iter().map(Ok)))
    }
}

/// Read every text of a `{"data": [...]}` document.
pub fn from_json<R: Read>(reader: R) -> Result<Vec<String>, Error> {
    let dataset: DatasetFile = serde_json::from_reader(reader)?;
    Ok(dataset.data.into_iter().map(|record| record.text).collect())
}

/// Lazily read texts from JSON Lines. Blank lines are skipped.
pub fn from_jsonl<R: BufRead>(reader: R) -> impl Iterator<Item = Result<String, Error>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) if line.trim().is_empty() => None,
        Ok(line) => Some(
            serde_json::from_str::<TextRecord>(&line)
                .map(|record| record.text)
                .map_err(Error::from),
        ),
        Err(e) => Some(Err(Error::from(e))),
    })
}
