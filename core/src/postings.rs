//! Sorted postings lists and the merge-based set operations over them.
//!
//! Every [`PostingsList`] is strictly ascending with no duplicates. The
//! constructors enforce that, so `intersect`, `union` and `complement` can run
//! a single forward two-pointer scan without re-checking their inputs.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

pub type DocId = u32;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<DocId>", into = "Vec<DocId>")]
pub struct PostingsList(Vec<DocId>);

impl PostingsList {
    pub fn new() -> Self { Self::default() }

    /// Sort and deduplicate arbitrary ids into a valid list.
    pub fn from_unsorted(mut ids: Vec<DocId>) -> Self {
        ids.sort_unstable();
        ids.dedup();
        Self(ids)
    }

    pub fn as_slice(&self) -> &[DocId] { &self.0 }

    pub fn into_vec(self) -> Vec<DocId> { self.0 }
}

impl TryFrom<Vec<DocId>> for PostingsList {
    type Error = Error;

    fn try_from(ids: Vec<DocId>) -> Result<Self> {
        if let Some(position) = ids.windows(2).position(|w| w[0] >= w[1]) {
            return Err(Error::Unsorted { position: position + 1, previous: ids[position], next: ids[position + 1] });
        }
        Ok(Self(ids))
    }
}

impl From<PostingsList> for Vec<DocId> {
    fn from(list: PostingsList) -> Self { list.0 }
}

impl Deref for PostingsList {
    type Target = [DocId];

    fn deref(&self) -> &[DocId] { &self.0 }
}

impl<'a> IntoIterator for &'a PostingsList {
    type Item = &'a DocId;
    type IntoIter = std::slice::Iter<'a, DocId>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

/// Ids present in both lists.
pub fn intersect(p1: &PostingsList, p2: &PostingsList) -> PostingsList {
    let (a, b) = (p1.as_slice(), p2.as_slice());
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0usize, 0usize);
    while i < a.len() && j < b.len() {
        let (x, y) = (a[i], b[j]);
        if x == y {
            out.push(x);
            i += 1;
            j += 1;
        } else if x < y {
            i += 1;
        } else {
            j += 1;
        }
    }
    PostingsList(out)
}

/// Ids present in either list, each emitted once.
pub fn union(p1: &PostingsList, p2: &PostingsList) -> PostingsList {
    let (a, b) = (p1.as_slice(), p2.as_slice());
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0usize, 0usize);
    while i < a.len() && j < b.len() {
        let (x, y) = (a[i], b[j]);
        if x < y {
            out.push(x);
            i += 1;
        } else if y < x {
            out.push(y);
            j += 1;
        } else {
            out.push(x);
            i += 1;
            j += 1;
        }
    }
    // At most one side has a tail left, and it is already sorted.
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    PostingsList(out)
}

/// Ids in `universe` that are not in `p`.
///
/// Ids in `p` that the universe does not contain are skipped without effect.
pub fn complement(p: &PostingsList, universe: &PostingsList) -> PostingsList {
    let (excluded, all) = (p.as_slice(), universe.as_slice());
    let mut out = Vec::with_capacity(all.len().saturating_sub(excluded.len()));
    let (mut i, mut j) = (0usize, 0usize);
    while i < excluded.len() && j < all.len() {
        let (x, u) = (excluded[i], all[j]);
        if u < x {
            out.push(u);
            j += 1;
        } else if u == x {
            i += 1;
            j += 1;
        } else {
            // stray id, not part of the universe
            i += 1;
        }
    }
    out.extend_from_slice(&all[j..]);
    PostingsList(out)
}

/// Intersection of any number of lists, merged in the order given.
///
/// Stops as soon as the running result is empty. Empty input yields an empty list.
pub fn intersect_all<'a, I>(lists: I) -> PostingsList
where
    I: IntoIterator<Item = &'a PostingsList>,
{
    let mut iter = lists.into_iter();
    let mut acc = match iter.next() {
        Some(first) => first.clone(),
        None => return PostingsList::new(),
    };
    for next in iter {
        if acc.is_empty() { break; }
        acc = intersect(&acc, next);
    }
    acc
}

/// Union of any number of lists. Empty input yields an empty list.
pub fn union_all<'a, I>(lists: I) -> PostingsList
where
    I: IntoIterator<Item = &'a PostingsList>,
{
    lists.into_iter().fold(PostingsList::new(), |acc, next| union(&acc, next))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pl(ids: &[DocId]) -> PostingsList {
        PostingsList::try_from(ids.to_vec()).unwrap()
    }

    #[test]
    fn rejects_unsorted_and_duplicates() {
        let err = PostingsList::try_from(vec![1, 3, 2]).unwrap_err();
        assert_eq!(err, Error::Unsorted { position: 2, previous: 3, next: 2 });
        assert!(PostingsList::try_from(vec![1, 1]).is_err());
        assert!(PostingsList::try_from(vec![]).is_ok());
    }

    #[test]
    fn from_unsorted_normalizes() {
        assert_eq!(PostingsList::from_unsorted(vec![5, 1, 3, 1, 5]).as_slice(), &[1, 3, 5]);
    }

    #[test]
    fn intersect_basic() {
        assert_eq!(intersect(&pl(&[1, 2, 3, 4, 5]), &pl(&[1, 2, 3, 5])), pl(&[1, 2, 3, 5]));
        assert_eq!(intersect(&pl(&[1, 3, 5]), &pl(&[2, 4, 6])), pl(&[]));
        assert_eq!(intersect(&pl(&[]), &pl(&[1, 2])), pl(&[]));
    }

    #[test]
    fn union_collapses_shared_ids() {
        assert_eq!(union(&pl(&[1, 2, 3]), &pl(&[4])), pl(&[1, 2, 3, 4]));
        assert_eq!(union(&pl(&[1, 3, 5]), &pl(&[1, 2, 3, 9, 10])), pl(&[1, 2, 3, 5, 9, 10]));
        assert_eq!(union(&pl(&[]), &pl(&[7])), pl(&[7]));
    }

    #[test]
    fn complement_basic() {
        let universe = pl(&[1, 2, 3, 4, 5]);
        assert_eq!(complement(&pl(&[1, 2, 3, 5]), &universe), pl(&[4]));
        assert_eq!(complement(&pl(&[]), &universe), universe);
        assert_eq!(complement(&universe, &universe), pl(&[]));
    }

    #[test]
    fn complement_skips_stray_ids() {
        let universe = pl(&[2, 4, 6]);
        assert_eq!(complement(&pl(&[1, 4, 5, 9]), &universe), pl(&[2, 6]));
    }

    #[test]
    fn n_ary_helpers() {
        let a = pl(&[1, 2, 3, 4]);
        let b = pl(&[2, 4]);
        let c = pl(&[4, 8]);
        assert_eq!(intersect_all([&a, &b, &c]), pl(&[4]));
        assert_eq!(union_all([&a, &b, &c]), pl(&[1, 2, 3, 4, 8]));
        assert_eq!(intersect_all(std::iter::empty()), pl(&[]));
        assert_eq!(union_all(std::iter::empty()), pl(&[]));
    }

    #[test]
    fn intersect_all_stops_once_empty() {
        let a = pl(&[1, 3]);
        let b = pl(&[2, 4]);
        let c = pl(&[1, 2, 3, 4]);
        assert_eq!(intersect_all([&a, &b, &c]), pl(&[]));
        assert_eq!(intersect_all([&c]), c);
    }

    #[test]
    fn serde_validates_on_the_way_in() {
        let ok: PostingsList = serde_json::from_str("[1,2,9]").unwrap();
        assert_eq!(ok, pl(&[1, 2, 9]));
        assert!(serde_json::from_str::<PostingsList>("[2,1]").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "[1,2,9]");
    }
}
