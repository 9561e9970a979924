#![forbid(unsafe_code)]

mod error;
mod schema;

pub use error::StoreError;

use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tt_core::{Revision, RevisionStore};

pub const DEFAULT_DB_FILE: &str = "tiny-todo.db";

const SELECT_REVISION: &str = "SELECT id, content, created_at FROM todos";

/// SQLite-backed revision store. One connection, owned for the lifetime of the handle; dropping
/// the store closes it.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    db_path: Option<PathBuf>,
}

impl SqliteStore {
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db_path = db_path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&db_path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Self::init(conn, Some(db_path))
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn, None)
    }

    fn init(conn: Connection, db_path: Option<PathBuf>) -> Result<Self, StoreError> {
        schema::preflight_gate(&conn)?;
        schema::install_schema(&conn)?;
        Ok(Self { conn, db_path })
    }

    /// `None` for in-memory stores.
    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    pub fn is_in_memory(&self) -> bool {
        self.db_path.is_none()
    }
}

impl RevisionStore for SqliteStore {
    type Error = StoreError;

    fn insert(&mut self, content: &str) -> Result<i64, StoreError> {
        self.conn
            .execute("INSERT INTO todos(content) VALUES (?1)", params![content])?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Revision>, StoreError> {
        let row = self
            .conn
            .query_row(
                &format!("{SELECT_REVISION} WHERE id=?1"),
                params![id],
                revision_from_row,
            )
            .optional()?;
        Ok(row)
    }

    fn get_latest(&self) -> Result<Option<Revision>, StoreError> {
        let row = self
            .conn
            .query_row(
                &format!("{SELECT_REVISION} ORDER BY id DESC LIMIT 1"),
                [],
                revision_from_row,
            )
            .optional()?;
        Ok(row)
    }

    fn search_by_text(&self, needle: &str) -> Result<Vec<Revision>, StoreError> {
        // instr() is case-sensitive and has no wildcard characters, unlike LIKE.
        let mut stmt = self.conn.prepare(&format!(
            "{SELECT_REVISION} WHERE ?1 = '' OR instr(content, ?1) > 0 ORDER BY id DESC"
        ))?;
        let mut rows = stmt.query(params![needle])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(revision_from_row(row)?);
        }
        Ok(out)
    }

    fn update_content(&mut self, id: i64, content: &str) -> Result<bool, StoreError> {
        let changed = self.conn.execute(
            "UPDATE todos SET content=?1 WHERE id=?2",
            params![content, id],
        )?;
        Ok(changed > 0)
    }

    fn count(&self) -> Result<u64, StoreError> {
        // Out-of-range values surface as a conversion error from rusqlite.
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM todos", [], |row| row.get::<_, u64>(0))?;
        Ok(count)
    }
}

fn revision_from_row(row: &Row<'_>) -> rusqlite::Result<Revision> {
    Ok(Revision {
        id: row.get(0)?,
        content: row.get(1)?,
        created_at: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
    })
}
