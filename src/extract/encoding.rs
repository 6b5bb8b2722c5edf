//! Character encoding detection and lossy decoding.
use std::borrow::Cow;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use log::debug;

/// Pick an encoding for `bytes`.
///
/// The statistical guess is used when the detector is confident about it.
/// Otherwise the declared `hint` is used if it is a known encoding label,
/// falling back to UTF-8.
///
/// Note that a low confidence guess does not go straight to UTF-8:
/// a valid declared charset is tried first, UTF-8 is only the last resort.
pub fn detect(bytes: &[u8], hint: Option<&str>) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let (guess, confident) = detector.guess_assess(None, true);

    if confident {
        return guess;
    }

    match hint.and_then(|label| Encoding::for_label(label.trim().as_bytes())) {
        Some(declared) => {
            debug!("low confidence guess {}, using declared {}", guess.name(), declared.name());
            declared
        }
        None => {
            debug!("low confidence guess {}, falling back to UTF-8", guess.name());
            UTF_8
        }
    }
}

/// Decode `bytes`, replacing malformed sequences with U+FFFD.
///
/// This never fails.
pub fn decode<'a>(bytes: &'a [u8], hint: Option<&str>) -> Cow<'a, str> {
    let encoding = detect(bytes, hint);
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        debug!("replaced malformed {} sequences", used.name());
    }
    text
}
