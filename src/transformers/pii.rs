/*! Masks personally identifiable information.

Two structured patterns are masked:
- USA social security numbers (`DDD-DD-DDDD`), replaced by `XXX-XX-XXXX`,
- phone numbers made of `+1` and ten digits, replaced by `+1XXXXXXXXXX`.

Text outside of matches is left untouched.
!*/
use lazy_static::lazy_static;
use regex::Regex;

use crate::pipelines::Document;

use super::Transform;

pub const SSN_MASK: &str = "XXX-XX-XXXX";
pub const PHONE_MASK: &str = "+1XXXXXXXXXX";

lazy_static! {
    static ref SSN: Regex = Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").unwrap();
    static ref PHONE: Regex = Regex::new(r"\+1\d{10}\b").unwrap();
}

#[derive(Default)]
pub struct Redactor;

impl Redactor {
    pub fn redact(&self, text: &str) -> String {
        let text = SSN.replace_all(text, SSN_MASK);
        PHONE.replace_all(&text, PHONE_MASK).into_owned()
    }
}

impl Transform for Redactor {
    fn transform_own(&self, mut doc: Document) -> Document {
        let redacted = self.redact(doc.content());
        doc.set_content(redacted);
        doc
    }
}
