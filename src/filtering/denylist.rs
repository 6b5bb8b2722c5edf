/*! Denylist of terms.

A denylist is a line-oriented file, one term per line.
Terms are lowercased on load and blank lines are ignored.

The list is loaded once and then only read, so it can be shared by reference
between every classifier call.
!*/
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::info;

use crate::error::Error;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DenyList {
    terms: HashSet<String>,
}

impl DenyList {
    pub fn new(terms: HashSet<String>) -> Self {
        let terms = terms
            .into_iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    /// Load a denylist from a file.
    ///
    /// A missing file is an error: it is never treated as an empty list.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Err(Error::MissingResource(path.to_path_buf()));
        }
        let denylist = Self::from_reader(File::open(path)?)?;
        info!("loaded {} denylist terms from {:?}", denylist.len(), path);
        Ok(denylist)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut terms = HashSet::new();
        for line in BufReader::new(reader).lines() {
            let term = line?.trim().to_lowercase();
            if !term.is_empty() {
                terms.insert(term);
            }
        }
        Ok(Self { terms })
    }

    /// Returns the first term found as a substring of `lowercased`.
    ///
    /// `lowercased` has to be lowercased by the caller.
    pub fn find_in(&self, lowercased: &str) -> Option<&str> {
        self.terms
            .iter()
            .find(|term| lowercased.contains(term.as_str()))
            .map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::Path;

    use crate::error::Error;

    use super::DenyList;

    #[test]
    fn from_reader() {
        let src = "Foo\n\n  bar \nBAZ\n";
        let dl = DenyList::from_reader(src.as_bytes()).unwrap();

        assert_eq!(dl.len(), 3);
        assert!(dl.contains("foo"));
        assert!(dl.contains("bar"));
        assert!(dl.contains("baz"));
    }

    #[test]
    fn find_in() {
        let dl = DenyList::from_reader("badword".as_bytes()).unwrap();
        assert_eq!(dl.find_in("this has a badwords inside"), Some("badword"));
        assert_eq!(dl.find_in("this is clean"), None);
    }

    #[test]
    fn from_path() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "one\ntwo").unwrap();

        let dl = DenyList::from_path(f.path()).unwrap();
        assert_eq!(dl.len(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        let res = DenyList::from_path(Path::new("this/does/not/exist.txt"));
        assert!(matches!(res, Err(Error::MissingResource(_))));
    }
}
