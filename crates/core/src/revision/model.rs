#![forbid(unsafe_code)]

/// One stored snapshot of the TODO list.
///
/// `id` is assigned by the store and strictly increases with every insert. `created_at` is the
/// store's insert timestamp, kept as the raw text the store produced; nothing in this crate
/// parses it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Revision {
    pub id: i64,
    pub content: String,
    pub created_at: String,
}

impl Revision {
    pub fn new(id: i64, content: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            created_at: created_at.into(),
        }
    }
}
