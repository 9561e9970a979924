#![forbid(unsafe_code)]

use super::{Revision, RevisionStore};
use crate::Directive;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LatestView<'d> {
    pub revision: Option<Revision>,
    pub directive: &'d Directive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchView<'d> {
    pub query: String,
    pub revisions: Vec<Revision>,
    pub directive: &'d Directive,
}

/// Read side: pairs stored data with the formatting directive. The directive is passed through
/// untouched.
#[derive(Debug)]
pub struct Retrieval<'a, S> {
    store: &'a S,
    directive: &'a Directive,
}

impl<'a, S: RevisionStore> Retrieval<'a, S> {
    pub fn new(store: &'a S, directive: &'a Directive) -> Self {
        Self { store, directive }
    }

    pub fn latest_with_prompt(&self) -> Result<LatestView<'a>, S::Error> {
        Ok(LatestView {
            revision: self.store.get_latest()?,
            directive: self.directive,
        })
    }

    pub fn search_with_prompt(&self, query: &str) -> Result<SearchView<'a>, S::Error> {
        Ok(SearchView {
            query: query.to_string(),
            revisions: self.store.search_by_text(query)?,
            directive: self.directive,
        })
    }
}
