use crate::collection::Collection;
use crate::postings::{DocId, PostingsList};
use crate::query::{Evaluator, Query};
use crate::tokenizer::Tokenizer;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Term to postings mapping, built once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvertedIndex {
    postings: BTreeMap<String, PostingsList>,
    universe: PostingsList,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Tokenize every document and record each (term, doc) pair once.
    pub fn build(collection: &Collection, tokenizer: Tokenizer) -> Self {
        let mut raw: HashMap<String, Vec<DocId>> = HashMap::new();
        for (doc_id, text) in collection.iter() {
            let mut seen_in_doc: HashSet<String> = HashSet::new();
            for term in tokenizer.tokenize(text) {
                if seen_in_doc.insert(term.clone()) {
                    raw.entry(term).or_default().push(doc_id);
                }
            }
        }
        let postings: BTreeMap<String, PostingsList> = raw
            .into_iter()
            .map(|(term, ids)| (term, PostingsList::from_unsorted(ids)))
            .collect();
        let universe = PostingsList::from_unsorted(collection.ids().collect());
        tracing::debug!(num_docs = universe.len(), num_terms = postings.len(), %tokenizer, "built inverted index");
        Self { postings, universe }
    }

    /// Assemble from postings that are already grouped. Every posted id is folded into the universe.
    pub fn from_postings<I, S>(terms: I, universe: PostingsList) -> Self
    where
        I: IntoIterator<Item = (S, PostingsList)>,
        S: Into<String>,
    {
        let postings: BTreeMap<String, PostingsList> = terms.into_iter().map(|(t, p)| (t.into(), p)).collect();
        let mut all = universe.into_vec();
        for list in postings.values() {
            all.extend_from_slice(list);
        }
        Self { postings, universe: PostingsList::from_unsorted(all) }
    }

    pub fn postings(&self, term: &str) -> Option<&PostingsList> {
        self.postings.get(term)
    }

    /// Postings for `term`, empty when the term never occurs.
    pub fn lookup(&self, term: &str) -> Cow<'_, PostingsList> {
        match self.postings.get(term) {
            Some(list) => Cow::Borrowed(list),
            None => Cow::Owned(PostingsList::new()),
        }
    }

    pub fn universe(&self) -> &PostingsList { &self.universe }

    pub fn num_docs(&self) -> usize { self.universe.len() }

    pub fn num_terms(&self) -> usize { self.postings.len() }

    /// Terms with their postings in ascending term order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &PostingsList)> + '_ {
        self.postings.iter().map(|(t, p)| (t.as_str(), p))
    }

    pub fn evaluate(&self, query: &Query) -> PostingsList {
        Evaluator::new(self).evaluate(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_only() {
        let c = Collection::try_from_iter([(3, "a a a b"), (1, "b a")]).unwrap();
        let idx = InvertedIndex::build(&c, Tokenizer::Whitespace);
        assert_eq!(idx.postings("a").unwrap().as_slice(), &[1, 3]);
        assert_eq!(idx.postings("b").unwrap().as_slice(), &[1, 3]);
        assert_eq!(idx.num_terms(), 2);
    }

    #[test]
    fn empty_documents_stay_in_universe() {
        let c = Collection::try_from_iter([(1, "x"), (2, "   ")]).unwrap();
        let idx = InvertedIndex::build(&c, Tokenizer::Whitespace);
        assert_eq!(idx.universe().as_slice(), &[1, 2]);
        assert_eq!(idx.num_docs(), 2);
    }

    #[test]
    fn empty_collection_gives_empty_index() {
        let idx = InvertedIndex::build(&Collection::new(), Tokenizer::Words);
        assert_eq!(idx, InvertedIndex::new());
        assert!(idx.lookup("anything").is_empty());
    }

    #[test]
    fn from_postings_widens_universe() {
        let idx = InvertedIndex::from_postings(
            [("a", PostingsList::from_unsorted(vec![2, 7]))],
            PostingsList::from_unsorted(vec![1, 2]),
        );
        assert_eq!(idx.universe().as_slice(), &[1, 2, 7]);
    }
}
