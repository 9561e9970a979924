#![forbid(unsafe_code)]

use super::RevisionStore;

pub const CHECKLIST_ITEM_PREFIX: &str = "- [ ] ";

/// How a write relates to the current latest revision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WriteIntent {
    /// Rewrite the latest row in place (insert when the store is empty). Keeps no history of
    /// the previous content.
    OverwriteLatest,
    /// Insert a new row holding the new text followed by the previous latest content.
    AppendRevision,
    /// Insert a new row holding the previous latest content plus one unchecked checklist item.
    AppendItem,
}

impl WriteIntent {
    pub const ALL: [WriteIntent; 3] = [
        WriteIntent::OverwriteLatest,
        WriteIntent::AppendRevision,
        WriteIntent::AppendItem,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OverwriteLatest => "overwrite_latest",
            Self::AppendRevision => "append_revision",
            Self::AppendItem => "append_item",
        }
    }

    /// Whether every write under this intent leaves a new row behind.
    pub fn preserves_history(self) -> bool {
        !matches!(self, Self::OverwriteLatest)
    }
}

/// New text first, previous latest content trailing.
pub fn compose_revision(new_content: &str, prior: Option<&str>) -> String {
    match prior {
        Some(prior) => format!("{new_content}\n{prior}"),
        None => new_content.to_string(),
    }
}

/// Previous latest content first, new checklist line appended.
pub fn compose_item(item: &str, prior: Option<&str>) -> String {
    match prior {
        Some(prior) => format!("{prior}\n{CHECKLIST_ITEM_PREFIX}{item}"),
        None => format!("{CHECKLIST_ITEM_PREFIX}{item}"),
    }
}

/// Write side of the revision chain.
///
/// Each operation reads the latest row and then writes; the pair is not atomic. Callers are
/// expected to serialize writes (one writer per store).
#[derive(Debug)]
pub struct RevisionLog<'a, S> {
    store: &'a mut S,
}

impl<'a, S: RevisionStore> RevisionLog<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Overwrite-Latest. Returns the id of the row that now holds `content`.
    pub fn update_todo(&mut self, content: &str) -> Result<i64, S::Error> {
        if let Some(latest) = self.store.get_latest()?
            && self.store.update_content(latest.id, content)?
        {
            return Ok(latest.id);
        }
        self.store.insert(content)
    }

    /// Append-Revision. Always inserts; returns the new id.
    pub fn update_todo_list(&mut self, content: &str) -> Result<i64, S::Error> {
        let latest = self.store.get_latest()?;
        let composed = compose_revision(content, latest.as_ref().map(|r| r.content.as_str()));
        self.store.insert(&composed)
    }

    /// Append-Single-Item. Always inserts; returns the new id.
    pub fn add_single_todo(&mut self, item: &str) -> Result<i64, S::Error> {
        let latest = self.store.get_latest()?;
        let composed = compose_item(item, latest.as_ref().map(|r| r.content.as_str()));
        self.store.insert(&composed)
    }

    pub fn write(&mut self, intent: WriteIntent, content: &str) -> Result<i64, S::Error> {
        match intent {
            WriteIntent::OverwriteLatest => self.update_todo(content),
            WriteIntent::AppendRevision => self.update_todo_list(content),
            WriteIntent::AppendItem => self.add_single_todo(content),
        }
    }
}
