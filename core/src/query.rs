//! Boolean query trees and their evaluation against an [`InvertedIndex`].

use crate::index::InvertedIndex;
use crate::postings::{complement, intersect_all, union_all, PostingsList};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A Boolean operator tree over terms.
///
/// Serialized externally tagged, e.g. `{"and":[{"term":"quick"},{"not":{"term":"dog"}}]}`.
/// Term leaves are matched verbatim against index keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Query {
    Term(String),
    And(Vec<Query>),
    Or(Vec<Query>),
    Not(Box<Query>),
}

impl Query {
    pub fn term(term: impl Into<String>) -> Self { Query::Term(term.into()) }

    pub fn and(children: impl IntoIterator<Item = Query>) -> Self {
        Query::And(children.into_iter().collect())
    }

    pub fn or(children: impl IntoIterator<Item = Query>) -> Self {
        Query::Or(children.into_iter().collect())
    }

    pub fn negate(child: Query) -> Self { Query::Not(Box::new(child)) }

    /// Leaf terms in left-to-right order.
    pub fn terms(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_terms(&mut out);
        out
    }

    fn collect_terms<'q>(&'q self, out: &mut Vec<&'q str>) {
        match self {
            Query::Term(t) => out.push(t),
            Query::And(children) | Query::Or(children) => {
                for c in children {
                    c.collect_terms(out);
                }
            }
            Query::Not(child) => child.collect_terms(out),
        }
    }

    fn is_compound(&self) -> bool {
        matches!(self, Query::And(c) | Query::Or(c) if c.len() > 1)
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_compound() { write!(f, "({self})") } else { write!(f, "{self}") }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (op, children) = match self {
            Query::Term(t) => return f.write_str(t),
            Query::Not(child) => {
                f.write_str("NOT ")?;
                return child.fmt_operand(f);
            }
            Query::And(children) => ("AND", children),
            Query::Or(children) => ("OR", children),
        };
        if children.is_empty() {
            return write!(f, "{op}()");
        }
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                write!(f, " {op} ")?;
            }
            child.fmt_operand(f)?;
        }
        Ok(())
    }
}

/// Order in which AND operands are merged. The result is the same either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvalOrder {
    AsWritten,
    /// Merge the shortest lists first to keep intermediates small.
    #[default]
    SmallestFirst,
}

/// Evaluates queries against a borrowed index. The index is never modified.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    index: &'a InvertedIndex,
    order: EvalOrder,
}

impl<'a> Evaluator<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self { index, order: EvalOrder::default() }
    }

    pub fn with_order(mut self, order: EvalOrder) -> Self {
        self.order = order;
        self
    }

    pub fn evaluate(&self, query: &Query) -> PostingsList {
        let result = self.eval(query).into_owned();
        tracing::trace!(%query, hits = result.len(), "evaluated query");
        result
    }

    fn eval(&self, query: &Query) -> Cow<'a, PostingsList> {
        match query {
            Query::Term(term) => self.index.lookup(term),
            Query::And(children) => {
                let mut parts: Vec<Cow<'a, PostingsList>> = children.iter().map(|c| self.eval(c)).collect();
                if self.order == EvalOrder::SmallestFirst {
                    parts.sort_by_key(|p| p.len());
                }
                Cow::Owned(intersect_all(parts.iter().map(|p| &**p)))
            }
            Query::Or(children) => {
                let parts: Vec<Cow<'a, PostingsList>> = children.iter().map(|c| self.eval(c)).collect();
                Cow::Owned(union_all(parts.iter().map(|p| &**p)))
            }
            Query::Not(child) => Cow::Owned(complement(&self.eval(child), self.index.universe())),
        }
    }
}
