/*!
# IO utilities

Textual data saving.

Accepted documents are written one per line (see [CorpusWriter]).
!*/
mod corpus_writer;

pub use corpus_writer::CorpusWriter;
