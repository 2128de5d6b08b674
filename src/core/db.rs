//! Database connection and schema management.
//!
//! Conversations are stored as one JSON document per row so the
//! schema stays stable as the document shape evolves. Reads and
//! writes go through SQLite's json functions.

use anyhow::Result;
use tokio_rusqlite::Connection;

/// Open an async connection to the database stored under `db_path`.
pub async fn async_db(db_path: &str) -> Result<Connection> {
    let db = Connection::open(format!("{}/agenthub.db", db_path.trim_end_matches('/'))).await?;
    Ok(db)
}

/// Create the schema if it doesn't already exist. Safe to run at
/// every startup.
pub fn initialize_db(conn: &rusqlite::Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS conversation (
            id TEXT PRIMARY KEY,
            data TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
