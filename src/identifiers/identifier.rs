/*! Identifier trait

All identifiers should implement [Identifier] to be useable in pipelines.
!*/
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Identification {
    label: &'static str,
    prob: f64,
}

impl Identification {
    pub fn new(label: &'static str, prob: f64) -> Self {
        Self { label, prob }
    }
    /// Get a reference to the identification's label.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Get a reference to the identification's prob.
    pub fn prob(&self) -> &f64 {
        &self.prob
    }
}

pub trait Identifier<T> {
    /// returns an identification, or [None] if the text can't be identified.
    fn identify(&self, text: T) -> Option<Identification>;
}
