//! Pipeline trait.
use std::fmt;

use serde::Serialize;

use crate::error::Error;

/// This trait must be implemented for each Pipeline,
/// and is generic over the return type so that
/// any custom pipeline that needs a return type can use the
/// trait aswell.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}

/// Count of accepted documents over processed ones.
///
/// `errors` counts source entries that could not be read,
/// they are not part of `total`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub accepted: usize,
    pub total: usize,
    pub errors: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.accepted, self.total)?;
        if self.errors > 0 {
            write!(f, " ({} unreadable)", self.errors)?;
        }
        Ok(())
    }
}
