#![forbid(unsafe_code)]

use super::Revision;

/// Minimal row-store capability the revision chain is built on.
///
/// Implementations own the id sequence: `insert` must hand out strictly increasing ids that are
/// never reused, and "latest" always means the row with the maximum id.
pub trait RevisionStore {
    type Error;

    /// Appends a new revision and returns its id.
    fn insert(&mut self, content: &str) -> Result<i64, Self::Error>;

    fn get_by_id(&self, id: i64) -> Result<Option<Revision>, Self::Error>;

    fn get_latest(&self) -> Result<Option<Revision>, Self::Error>;

    /// Case-sensitive substring scan over every stored revision, newest first.
    /// An empty needle matches all rows.
    fn search_by_text(&self, needle: &str) -> Result<Vec<Revision>, Self::Error>;

    /// Rewrites `content` of an existing row in place. Returns `false` when the id is unknown.
    fn update_content(&mut self, id: i64, content: &str) -> Result<bool, Self::Error>;

    fn count(&self) -> Result<u64, Self::Error>;
}
