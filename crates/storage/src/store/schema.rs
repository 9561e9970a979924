#![forbid(unsafe_code)]

use super::StoreError;
use rusqlite::Connection;
use std::collections::BTreeSet;

pub(super) const TODOS_TABLE: &str = "todos";
const REQUIRED_COLUMNS: [&str; 3] = ["id", "content", "created_at"];

/// Refuses to open a database whose `todos` table does not carry the expected columns.
/// A missing table is fine: `install_schema` creates it.
pub(super) fn preflight_gate(conn: &Connection) -> Result<(), StoreError> {
    let columns = table_columns(conn, TODOS_TABLE)?;
    if columns.is_empty() {
        return Ok(());
    }
    if REQUIRED_COLUMNS
        .iter()
        .any(|column| !columns.contains(*column))
    {
        return Err(StoreError::InvalidInput(
            "RESET_REQUIRED: todos table is missing a required column",
        ));
    }
    Ok(())
}

pub(super) fn install_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
          id INTEGER PRIMARY KEY AUTOINCREMENT,
          content TEXT NOT NULL,
          created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )?;
    Ok(())
}

pub(super) fn table_columns(conn: &Connection, table: &str) -> Result<BTreeSet<String>, StoreError> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    let mut rows = stmt.query([table])?;
    let mut out = BTreeSet::new();
    while let Some(row) = rows.next()? {
        out.insert(row.get::<_, String>(0)?);
    }
    Ok(out)
}
