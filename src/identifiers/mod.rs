/*! Language identification

Holds an [Identifier] trait for implementing other ones.

The current identifier is [AsciiScript], a script ratio heuristic
that only tells English (or rather, ASCII-lettered text) apart from the rest. !*/
mod identifier;
mod script;

pub use identifier::{Identification, Identifier};
pub use script::AsciiScript;
