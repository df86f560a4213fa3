use crate::error::{Error, Result};
use crate::DocId;
use std::collections::BTreeMap;

/// Raw documents keyed by id, iterated in ascending id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    docs: BTreeMap<DocId, String>,
}

impl Collection {
    pub fn new() -> Self { Self::default() }

    /// Build from pairs, failing on the first repeated id.
    pub fn try_from_iter<I, S>(docs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (DocId, S)>,
        S: Into<String>,
    {
        let mut collection = Self::new();
        for (id, text) in docs {
            collection.insert(id, text)?;
        }
        Ok(collection)
    }

    pub fn insert(&mut self, id: DocId, text: impl Into<String>) -> Result<()> {
        if self.docs.contains_key(&id) {
            return Err(Error::DuplicateDocument(id));
        }
        self.docs.insert(id, text.into());
        Ok(())
    }

    pub fn get(&self, id: DocId) -> Option<&str> {
        self.docs.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }

    pub fn ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.docs.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DocId, &str)> + '_ {
        self.docs.iter().map(|(id, text)| (*id, text.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_ids() {
        let mut c = Collection::new();
        c.insert(2, "b").unwrap();
        assert_eq!(c.insert(2, "again"), Err(Error::DuplicateDocument(2)));
        assert_eq!(c.get(2), Some("b"));
    }

    #[test]
    fn iterates_in_id_order() {
        let c = Collection::try_from_iter([(9, "z"), (1, "a"), (4, "d")]).unwrap();
        assert_eq!(c.ids().collect::<Vec<_>>(), vec![1, 4, 9]);
        assert_eq!(c.len(), 3);
    }
}
