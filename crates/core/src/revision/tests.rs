use super::*;
use crate::Directive;

#[derive(Default)]
struct MemoryStore {
    rows: Vec<Revision>,
    next_id: i64,
}

impl RevisionStore for MemoryStore {
    type Error = std::convert::Infallible;

    fn insert(&mut self, content: &str) -> Result<i64, Self::Error> {
        self.next_id += 1;
        self.rows
            .push(Revision::new(self.next_id, content, format!("t{}", self.next_id)));
        Ok(self.next_id)
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Revision>, Self::Error> {
        Ok(self.rows.iter().find(|r| r.id == id).cloned())
    }

    fn get_latest(&self) -> Result<Option<Revision>, Self::Error> {
        Ok(self.rows.iter().max_by_key(|r| r.id).cloned())
    }

    fn search_by_text(&self, needle: &str) -> Result<Vec<Revision>, Self::Error> {
        let mut out = self
            .rows
            .iter()
            .filter(|r| r.content.contains(needle))
            .cloned()
            .collect::<Vec<_>>();
        out.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(out)
    }

    fn update_content(&mut self, id: i64, content: &str) -> Result<bool, Self::Error> {
        match self.rows.iter_mut().find(|r| r.id == id) {
            Some(row) => {
                row.content = content.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn count(&self) -> Result<u64, Self::Error> {
        Ok(self.rows.len() as u64)
    }
}

fn latest(store: &MemoryStore) -> Revision {
    store.get_latest().unwrap().expect("latest revision")
}

#[test]
fn compose_revision_puts_new_text_first() {
    assert_eq!(compose_revision("new", Some("old")), "new\nold");
    assert_eq!(compose_revision("new", None), "new");
    assert_eq!(compose_revision("", Some("old")), "\nold");
}

#[test]
fn compose_item_appends_unchecked_line() {
    assert_eq!(compose_item("task", Some("base")), "base\n- [ ] task");
    assert_eq!(compose_item("task", None), "- [ ] task");
    assert_eq!(compose_item("", None), "- [ ] ");
}

#[test]
fn append_revision_on_empty_store_starts_at_id_one() {
    let mut store = MemoryStore::default();
    let id = RevisionLog::new(&mut store).update_todo_list("x").unwrap();
    assert_eq!(id, 1);
    assert_eq!(latest(&store).content, "x");
}

#[test]
fn append_revision_keeps_every_row() {
    let mut store = MemoryStore::default();
    let mut log = RevisionLog::new(&mut store);
    let first = log.update_todo_list("one").unwrap();
    let second = log.update_todo_list("two").unwrap();
    let third = log.update_todo_list("three").unwrap();
    assert!(first < second && second < third);

    assert_eq!(store.count().unwrap(), 3);
    assert_eq!(store.get_by_id(first).unwrap().unwrap().content, "one");
    assert_eq!(store.get_by_id(second).unwrap().unwrap().content, "two\none");
    assert_eq!(latest(&store).content, "three\ntwo\none");
}

#[test]
fn append_item_builds_on_latest() {
    let mut store = MemoryStore::default();
    store.insert("base").unwrap();
    let id = RevisionLog::new(&mut store).add_single_todo("task").unwrap();
    assert_eq!(id, 2);
    assert_eq!(latest(&store).content, "base\n- [ ] task");
    assert_eq!(store.get_by_id(1).unwrap().unwrap().content, "base");
}

#[test]
fn append_item_on_empty_store_is_single_line() {
    let mut store = MemoryStore::default();
    RevisionLog::new(&mut store).add_single_todo("buy milk").unwrap();
    assert_eq!(latest(&store).content, "- [ ] buy milk");
}

#[test]
fn overwrite_latest_reuses_the_same_id() {
    let mut store = MemoryStore::default();
    store.insert("seed").unwrap();
    let mut log = RevisionLog::new(&mut store);
    let a = log.update_todo("first edit").unwrap();
    let b = log.update_todo("second edit").unwrap();
    assert_eq!(a, b);
    assert_eq!(a, 1);
    assert_eq!(store.count().unwrap(), 1);
    assert_eq!(latest(&store).content, "second edit");
}

#[test]
fn overwrite_latest_inserts_when_empty() {
    let mut store = MemoryStore::default();
    let id = RevisionLog::new(&mut store).update_todo("").unwrap();
    assert_eq!(id, 1);
    assert_eq!(latest(&store).content, "");
}

#[test]
fn overwrite_only_touches_the_max_id_row() {
    let mut store = MemoryStore::default();
    store.insert("a").unwrap();
    store.insert("b").unwrap();
    RevisionLog::new(&mut store).update_todo("c").unwrap();
    assert_eq!(store.get_by_id(1).unwrap().unwrap().content, "a");
    assert_eq!(store.get_by_id(2).unwrap().unwrap().content, "c");
}

#[test]
fn write_dispatches_each_intent() {
    let mut store = MemoryStore::default();
    let mut log = RevisionLog::new(&mut store);
    log.write(WriteIntent::AppendRevision, "list").unwrap();
    log.write(WriteIntent::AppendItem, "item").unwrap();
    log.write(WriteIntent::OverwriteLatest, "final").unwrap();
    assert_eq!(store.count().unwrap(), 2);
    assert_eq!(store.get_by_id(1).unwrap().unwrap().content, "list");
    assert_eq!(latest(&store).content, "final");
}

#[test]
fn intent_history_flags() {
    let preserving = WriteIntent::ALL
        .iter()
        .filter(|i| i.preserves_history())
        .count();
    assert_eq!(preserving, 2);
    assert!(!WriteIntent::OverwriteLatest.preserves_history());
}

#[test]
fn retrieval_returns_the_same_directive_every_call() {
    let mut store = MemoryStore::default();
    let directive = Directive::builtin();

    let empty = Retrieval::new(&store, &directive).latest_with_prompt().unwrap();
    assert!(empty.revision.is_none());
    assert_eq!(empty.directive.prompt(), crate::directive::TODO_FORMAT_PROMPT);

    store.insert("a").unwrap();
    store.insert("b").unwrap();
    let view = Retrieval::new(&store, &directive).latest_with_prompt().unwrap();
    let revision = view.revision.expect("latest");
    assert_eq!(revision.id, 2);
    assert_eq!(revision.content, "b");
    assert!(std::ptr::eq(view.directive, &directive));
}

#[test]
fn search_view_is_newest_first_and_exact() {
    let mut store = MemoryStore::default();
    store.insert("foo bar").unwrap();
    store.insert("baz").unwrap();
    store.insert("bar again").unwrap();
    let directive = Directive::builtin();
    let retrieval = Retrieval::new(&store, &directive);

    let hits = retrieval.search_with_prompt("bar").unwrap();
    let ids = hits.revisions.iter().map(|r| r.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![3, 1]);
    assert_eq!(hits.query, "bar");

    assert!(retrieval.search_with_prompt("nothing").unwrap().revisions.is_empty());
    assert_eq!(retrieval.search_with_prompt("").unwrap().revisions.len(), 3);
}

#[test]
fn custom_directive_keeps_holidays() {
    let directive = Directive::with_prompt("custom", "render as a table");
    assert_eq!(directive.prompt(), "render as a table");
    assert_eq!(directive.version(), "custom");
    assert_eq!(directive.holidays(), crate::directive::HOLIDAYS_2025);
    assert_eq!(Directive::default(), Directive::builtin());
}

#[test]
fn builtin_prompt_keeps_markdown_hard_breaks() {
    let prompt = crate::directive::TODO_FORMAT_PROMPT;
    assert!(prompt.contains("   - Each task should be a list item with a checkbox.  \n"));
    assert!(prompt.contains("  *Due:* 2025/05/01 (14:30)  \n  *Priority:* High  \n"));
    assert_eq!(prompt.lines().filter(|line| line.ends_with("  ")).count(), 21);
    assert_eq!(Directive::builtin().prompt(), prompt);
}
