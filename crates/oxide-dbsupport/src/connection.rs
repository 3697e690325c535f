//! Borrowed database connections.
//!
//! Dialect support never owns a connection: every operation borrows one from
//! the caller for the duration of the call and leaves its lifecycle alone.

use sqlx::{MySqlConnection, PgConnection, SqliteConnection};

/// Product name and raw version string reported by a server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerInfo {
    /// Product name, e.g. `PostgreSQL` or `DB2/LINUXX8664`.
    pub product: String,
    /// Version string as reported by the server.
    pub version: String,
}

impl ServerInfo {
    /// Creates a new server info.
    pub fn new(product: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            version: version.into(),
        }
    }
}

/// The minimal set of operations dialect support issues against a database.
#[allow(async_fn_in_trait)]
pub trait SqlConnection {
    /// Returns the product name and version of the connected server.
    async fn server_info(&mut self) -> Result<ServerInfo, sqlx::Error>;

    /// Runs a query and returns the first column of the first row as a string.
    ///
    /// Returns `None` if there is no row or the value is NULL.
    async fn query_scalar(&mut self, sql: &str) -> Result<Option<String>, sqlx::Error>;

    /// Executes a statement, discarding any result.
    async fn execute(&mut self, sql: &str) -> Result<(), sqlx::Error>;
}

impl SqlConnection for SqliteConnection {
    async fn server_info(&mut self) -> Result<ServerInfo, sqlx::Error> {
        let version: String = sqlx::query_scalar("SELECT sqlite_version()")
            .fetch_one(&mut *self)
            .await?;
        Ok(ServerInfo::new("SQLite", version))
    }

    async fn query_scalar(&mut self, sql: &str) -> Result<Option<String>, sqlx::Error> {
        let value: Option<Option<String>> =
            sqlx::query_scalar(sql).fetch_optional(&mut *self).await?;
        Ok(value.flatten())
    }

    async fn execute(&mut self, sql: &str) -> Result<(), sqlx::Error> {
        sqlx::query(sql).execute(&mut *self).await?;
        Ok(())
    }
}

impl SqlConnection for PgConnection {
    async fn server_info(&mut self) -> Result<ServerInfo, sqlx::Error> {
        let version: String = sqlx::query_scalar("SHOW server_version")
            .fetch_one(&mut *self)
            .await?;
        Ok(ServerInfo::new("PostgreSQL", version))
    }

    async fn query_scalar(&mut self, sql: &str) -> Result<Option<String>, sqlx::Error> {
        let value: Option<Option<String>> =
            sqlx::query_scalar(sql).fetch_optional(&mut *self).await?;
        Ok(value.flatten())
    }

    async fn execute(&mut self, sql: &str) -> Result<(), sqlx::Error> {
        sqlx::query(sql).execute(&mut *self).await?;
        Ok(())
    }
}

impl SqlConnection for MySqlConnection {
    async fn server_info(&mut self) -> Result<ServerInfo, sqlx::Error> {
        let version: String = sqlx::query_scalar("SELECT VERSION()")
            .fetch_one(&mut *self)
            .await?;
        Ok(ServerInfo::new("MySQL", version))
    }

    async fn query_scalar(&mut self, sql: &str) -> Result<Option<String>, sqlx::Error> {
        let value: Option<Option<String>> =
            sqlx::query_scalar(sql).fetch_optional(&mut *self).await?;
        Ok(value.flatten())
    }

    /// Runs over the text protocol: `USE` cannot be prepared.
    async fn execute(&mut self, sql: &str) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(sql).execute(&mut *self).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Connection;

    async fn create_test_connection() -> SqliteConnection {
        SqliteConnection::connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory SQLite connection")
    }

    fn assert_sql_connection<C: SqlConnection>() {}

    #[test]
    fn test_driver_connections_implement_trait() {
        assert_sql_connection::<SqliteConnection>();
        assert_sql_connection::<PgConnection>();
        assert_sql_connection::<MySqlConnection>();
    }

    #[tokio::test]
    async fn test_sqlite_server_info() {
        let mut conn = create_test_connection().await;
        let info = conn.server_info().await.unwrap();
        assert_eq!(info.product, "SQLite");
        assert!(info.version.starts_with("3."));
    }

    #[tokio::test]
    async fn test_sqlite_query_scalar() {
        let mut conn = create_test_connection().await;
        assert_eq!(
            conn.query_scalar("SELECT 'main'").await.unwrap().as_deref(),
            Some("main")
        );
        assert_eq!(conn.query_scalar("SELECT NULL").await.unwrap(), None);
        assert_eq!(
            conn.query_scalar("SELECT 'x' WHERE 1 = 0").await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_sqlite_execute() {
        let mut conn = create_test_connection().await;
        conn.execute("CREATE TABLE t (id INTEGER)").await.unwrap();
        assert!(conn.execute("SET SCHEMA \"APP\"").await.is_err());
    }
}
