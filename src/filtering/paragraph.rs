//! paragraph-level filtering
use super::Filter;

/// Degenerate long token filter.
/// Returns `false` if the paragraph holds a run of more than [LongToken::max_run]
/// consecutive ASCII alphanumeric characters (base64 blobs, minified scripts...).
///
/// [LongToken::max_run] is 100 by default.
pub struct LongToken {
    max_run: usize,
}

impl LongToken {
    /// specify a maximum run length
    pub fn with_max_run(max_run: usize) -> Self {
        Self { max_run }
    }

    /// Get a reference to the long token's max run.
    pub fn max_run(&self) -> &usize {
        &self.max_run
    }
}

impl Filter<&str> for LongToken {
    fn detect(&self, paragraph: &str) -> bool {
        let mut run = 0;
        for c in paragraph.chars() {
            if c.is_ascii_alphanumeric() {
                run += 1;
                if run > self.max_run {
                    return false;
                }
            } else {
                run = 0;
            }
        }
        true
    }
}

impl Default for LongToken {
    fn default() -> Self {
        LongToken { max_run: 100 }
    }
}

/// Keeps paragraphs that have at least one ASCII punctuation character
/// (``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``).
#[derive(Default)]
pub struct Punctuation;

impl Filter<&str> for Punctuation {
    fn detect(&self, paragraph: &str) -> bool {
        paragraph.chars().any(|c| c.is_ascii_punctuation())
    }
}

#[cfg(test)]
mod tests {
    use super::{Filter, LongToken, Punctuation};

    #[test]
    fn long_token_default() {
        let valid: String = ['z'; 100].iter().collect();
        let invalid: String = ['z'; 101].iter().collect();

        let f = LongToken::default();
        assert_eq!(f.max_run(), &100);
        assert!(f.detect(&valid));
        assert!(!f.detect(&invalid));
    }

    #[test]
    fn long_token_broken_by_whitespace() {
        let a: String = ['a'; 80].iter().collect();
        let paragraph = format!("{a} {a}, {a}.");

        assert!(LongToken::default().detect(&paragraph));
    }

    #[test]
    fn long_token_non_ascii_breaks_run() {
        let a: String = ['a'; 60].iter().collect();
        let paragraph = format!("{a}é{a}");

        assert!(LongToken::default().detect(&paragraph));
    }

    #[test]
    fn long_token_custom() {
        let f = LongToken::with_max_run(3);
        assert!(f.detect("abc def"));
        assert!(!f.detect("abcd"));
    }

    #[test]
    fn punctuation() {
        let f = Punctuation;
        assert!(f.detect("Hello, world"));
        assert!(f.detect("#hashtag"));
        assert!(!f.detect("no punctuation here"));
        assert!(!f.detect(""));
        // non-ASCII punctuation does not count
        assert!(!f.detect("«guillemets»"));
    }
}
