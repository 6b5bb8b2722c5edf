/*! Near-duplicate removal

Documents are compared using the Jaccard similarity of their word token sets:
a candidate is a near-duplicate if its similarity with any previously kept document
is at least the threshold (0.5 by default).

Candidates are processed in order, and kept documents are accumulated in a [Deduplicator].
The first occurrence of a group of near-duplicates is the one that is kept.

## Scaling

Each candidate is compared with every kept document, making a whole pass O(n²).
This is fine for moderate batches. Large corpora would need an approximate method
(e.g. locality sensitive hashing over shingles) instead of the pairwise scan.
!*/
use std::collections::HashSet;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::filtering::FilterMut;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\w+").unwrap();
}

/// Set of unique lowercased word tokens.
pub type TokenSet = HashSet<String>;

/// Lowercase `text`, then collect maximal runs of word characters.
pub fn tokenize(text: &str) -> TokenSet {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// |a ∩ b| / |a ∪ b|, with the union size floored at 1.
pub fn jaccard(a: &TokenSet, b: &TokenSet) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|t| large.contains(*t)).count();
    let union = (a.len() + b.len() - intersection).max(1);
    intersection as f64 / union as f64
}

/// Decision made on a single candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Kept,
    /// No word token at all.
    Empty,
    /// Near-duplicate of the kept document at this index, with its similarity.
    Duplicate { of: usize, similarity: f64 },
}

/// Accumulator of kept documents and their token sets.
///
/// Invariant: no two kept documents have a similarity at or above the threshold.
///
/// Implements [FilterMut], `detect_mut` returning `true` when the candidate is kept.
pub struct Deduplicator {
    threshold: f64,
    kept: Vec<(String, TokenSet)>,
}

impl Deduplicator {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            kept: Vec::new(),
        }
    }

    pub fn threshold(&self) -> &f64 {
        &self.threshold
    }

    /// Offer a candidate, adding it to kept documents if it is not a near-duplicate.
    pub fn offer(&mut self, text: &str) -> Decision {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Decision::Empty;
        }

        for (idx, (_, kept_tokens)) in self.kept.iter().enumerate() {
            let similarity = jaccard(&tokens, kept_tokens);
            if similarity >= self.threshold {
                debug!("near-duplicate of #{idx} (jaccard {similarity:.3})");
                return Decision::Duplicate {
                    of: idx,
                    similarity,
                };
            }
        }

        self.kept.push((text.to_string(), tokens));
        Decision::Kept
    }

    /// Kept documents, in order of acceptance.
    pub fn kept(&self) -> impl Iterator<Item = &str> {
        self.kept.iter().map(|(text, _)| text.as_str())
    }

    pub fn len(&self) -> usize {
        self.kept.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }

    pub fn into_kept(self) -> Vec<String> {
        self.kept.into_iter().map(|(text, _)| text).collect()
    }
}

impl Default for Deduplicator {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl FilterMut<&str> for Deduplicator {
    fn detect_mut(&mut self, text: &str) -> bool {
        self.offer(text) == Decision::Kept
    }
}

/// Deduplicate a batch of texts with the default threshold, keeping input order.
pub fn deduplicate<I, S>(texts: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut dedup = Deduplicator::default();
    for text in texts {
        dedup.offer(text.as_ref());
    }
    dedup.into_kept()
}

#[cfg(test)]
mod tests {
    use crate::filtering::FilterMut;

    use super::*;

    fn set(tokens: &[&str]) -> TokenSet {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("The cat, the CAT; the_dog!"),
            set(&["the", "cat", "the_dog"])
        );
        assert!(tokenize("... !!! ---").is_empty());
    }

    #[test]
    fn test_jaccard() {
        let a = set(&["the", "cat", "sat"]);
        let b = set(&["the", "cat", "sat", "on", "mat"]);
        assert_eq!(jaccard(&a, &b), 0.6);
        assert_eq!(jaccard(&b, &a), 0.6);
        assert_eq!(jaccard(&a, &a), 1.0);
        assert_eq!(jaccard(&TokenSet::new(), &TokenSet::new()), 0.0);
    }

    #[test]
    fn test_dedup_example() {
        let texts = [
            "the cat sat",
            "the cat sat on the mat",
            "a totally different sentence",
        ];
        assert_eq!(
            deduplicate(texts),
            vec![
                "the cat sat".to_string(),
                "a totally different sentence".to_string()
            ]
        );
    }

    #[test]
    fn test_dedup_repeated_input() {
        let texts = [
            "the cat sat",
            "the cat sat on the mat",
            "a totally different sentence",
        ];
        let once = deduplicate(texts);
        let twice = deduplicate(texts.iter().chain(texts.iter()));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_dedup_empty_tokens() {
        let mut d = Deduplicator::default();
        assert_eq!(d.offer("?!... ---"), Decision::Empty);
        assert_eq!(d.offer(""), Decision::Empty);
        assert!(d.is_empty());
    }

    #[test]
    fn test_decision() {
        let mut d = Deduplicator::default();
        assert_eq!(d.offer("one two three four"), Decision::Kept);
        assert_eq!(d.offer("five six seven eight"), Decision::Kept);
        assert_eq!(
            d.offer("five six seven"),
            Decision::Duplicate {
                of: 1,
                similarity: 0.75
            }
        );
        assert_eq!(d.kept().collect::<Vec<_>>(), ["one two three four", "five six seven eight"]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut d = Deduplicator::default();
        assert!(d.detect_mut("a b"));
        // {a, c} vs {a, b}: 1/3
        assert!(d.detect_mut("a c"));
        // {a, b, c, d} vs {a, b}: 2/4 = 0.5
        assert!(!d.detect_mut("a b c d"));
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn test_custom_threshold() {
        assert_eq!(Deduplicator::default().threshold(), &0.5);

        let mut d = Deduplicator::new(0.9);
        assert_eq!(d.threshold(), &0.9);
        assert_eq!(d.offer("the cat sat"), Decision::Kept);
        // 0.6 is under the custom threshold
        assert_eq!(d.offer("the cat sat on the mat"), Decision::Kept);
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn test_case_insensitive() {
        let kept = deduplicate(["Hello World", "hello world"]);
        assert_eq!(kept, vec!["Hello World".to_string()]);
    }
}
