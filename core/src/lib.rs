//! Boolean retrieval over an in-memory inverted index.

pub mod collection;
pub mod error;
pub mod index;
pub mod loader;
pub mod postings;
pub mod query;
pub mod tokenizer;

pub use collection::Collection;
pub use error::{Error, Result};
pub use index::InvertedIndex;
pub use postings::{complement, intersect, union, DocId, PostingsList};
pub use query::{EvalOrder, Evaluator, Query};
pub use tokenizer::Tokenizer;
