/*! Script ratio English detection.

Counts letters (Unicode general category `L*`), and among them the ASCII ones.
Text is identified as English when more than 90% of its letters are ASCII.

This is not a language identifier: non-English languages written in (mostly unaccented) Latin script
are identified as English. Text without any letter is never identified.
!*/
use unic_ucd::GeneralCategory;

use crate::filtering::Filter;

use super::{Identification, Identifier};

pub struct AsciiScript {
    threshold: f64,
}

impl AsciiScript {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> &f64 {
        &self.threshold
    }

    /// Ratio of ASCII letters over all letters, [None] if there's no letter.
    pub fn ascii_ratio(text: &str) -> Option<f64> {
        let (letters, ascii_letters) = text
            .chars()
            .filter(|c| GeneralCategory::of(*c).is_letter())
            .fold((0usize, 0usize), |(letters, ascii), c| {
                (letters + 1, ascii + usize::from(c.is_ascii()))
            });

        if letters == 0 {
            None
        } else {
            Some(ascii_letters as f64 / letters as f64)
        }
    }
}

impl Default for AsciiScript {
    fn default() -> Self {
        Self { threshold: 0.9 }
    }
}

impl Identifier<&str> for AsciiScript {
    fn identify(&self, text: &str) -> Option<Identification> {
        Self::ascii_ratio(text)
            .filter(|ratio| *ratio > self.threshold)
            .map(|ratio| Identification::new("en", ratio))
    }
}

impl Filter<&str> for AsciiScript {
    fn detect(&self, text: &str) -> bool {
        self.identify(text).is_some()
    }
}
