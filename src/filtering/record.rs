//! Document-level filtering.
use unic_ucd::GeneralCategory;

use super::{DenyList, Filter};

/// Outcome of a [QualityClassifier] run.
///
/// Every rejection variant names the check that failed first.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Accept,
    /// Holds the offending denylist term.
    Denylisted(String),
    Blank,
    NoPunctuation,
    /// Holds the measured valid character ratio.
    Noisy(f64),
}

impl Verdict {
    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept)
    }
}

/// Rejects documents on denylisted terms and lexical composition.
///
/// A document is rejected if any of these holds:
/// - its lowercased content contains a denylisted term,
/// - it is empty or whitespace only,
/// - it has no ASCII punctuation,
/// - less than [QualityClassifier::min_valid_ratio] of its characters are
///   alphanumeric, ASCII punctuation or whitespace.
pub struct QualityClassifier<'a> {
    denylist: &'a DenyList,
    min_valid_ratio: f64,
}

impl<'a> QualityClassifier<'a> {
    /// inits the classifier with a valid character ratio of 0.8.
    pub fn new(denylist: &'a DenyList) -> Self {
        Self {
            denylist,
            min_valid_ratio: 0.8,
        }
    }

    pub fn with_min_valid_ratio(denylist: &'a DenyList, min_valid_ratio: f64) -> Self {
        Self {
            denylist,
            min_valid_ratio,
        }
    }

    pub fn min_valid_ratio(&self) -> &f64 {
        &self.min_valid_ratio
    }

    /// Run every check and report the first failing one.
    pub fn judge(&self, text: &str) -> Verdict {
        if let Some(term) = self.denylist.find_in(&text.to_lowercase()) {
            return Verdict::Denylisted(term.to_string());
        }

        if text.trim().is_empty() {
            return Verdict::Blank;
        }

        let mut nb_chars = 0usize;
        let mut nb_punctuation = 0usize;
        let mut nb_valid = 0usize;
        for c in text.chars() {
            nb_chars += 1;
            let punctuation = c.is_ascii_punctuation();
            if punctuation {
                nb_punctuation += 1;
            }
            if punctuation || c.is_whitespace() || is_alphanumeric(c) {
                nb_valid += 1;
            }
        }

        if nb_punctuation == 0 {
            return Verdict::NoPunctuation;
        }

        let ratio = nb_valid as f64 / nb_chars as f64;
        if ratio < self.min_valid_ratio {
            return Verdict::Noisy(ratio);
        }

        Verdict::Accept
    }
}

impl Filter<&str> for QualityClassifier<'_> {
    fn detect(&self, text: &str) -> bool {
        self.judge(text).is_accept()
    }
}

/// letter or number, in the Unicode general category sense.
fn is_alphanumeric(c: char) -> bool {
    let category = GeneralCategory::of(c);
    category.is_letter() || category.is_number()
}
