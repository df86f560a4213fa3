use crate::DocId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A postings list was not strictly ascending. Duplicates land here too.
    #[error("postings list not strictly ascending at position {position}: {previous} then {next}")]
    Unsorted { position: usize, previous: DocId, next: DocId },

    #[error("duplicate document id {0}")]
    DuplicateDocument(DocId),

    #[error("unknown tokenizer: {0}")]
    UnknownTokenizer(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::Unsorted { position: 2, previous: 5, next: 5 };
        assert_eq!(err.to_string(), "postings list not strictly ascending at position 2: 5 then 5");
        assert_eq!(Error::DuplicateDocument(7).to_string(), "duplicate document id 7");
    }
}
