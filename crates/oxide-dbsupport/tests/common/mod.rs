#![allow(dead_code)]

use oxide_dbsupport::prelude::*;
use sqlx::{Connection, SqliteConnection};

pub const HISTORY_TABLE: &str = "flyway_schema_history";

pub async fn connect() -> SqliteConnection {
    SqliteConnection::connect("sqlite::memory:")
        .await
        .unwrap_or_else(|e| panic!("Failed to open in-memory SQLite connection: {e}"))
}

pub async fn detect(conn: &mut SqliteConnection) -> DialectProfile {
    DialectRegistry::with_builtins()
        .detect(conn)
        .await
        .unwrap_or_else(|e| panic!("Failed to detect SQLite: {e}"))
}

/// Returns `(name, declared type, not null)` for each column of `table`.
pub async fn table_columns(
    conn: &mut SqliteConnection,
    table: &str,
) -> Vec<(String, String, bool)> {
    let sql = format!(
        "SELECT name, type, \"notnull\" FROM pragma_table_info('{table}') ORDER BY cid"
    );
    let rows: Vec<(String, String, i64)> = sqlx::query_as(&sql)
        .fetch_all(&mut *conn)
        .await
        .unwrap_or_else(|e| panic!("Failed to read columns of {table}: {e}"));
    rows.into_iter()
        .map(|(name, ty, not_null)| (name, ty, not_null != 0))
        .collect()
}
