//! Current schema resolution and switching.

use tracing::{debug, warn};

use crate::connection::SqlConnection;
use crate::dialect::SCHEMA_PLACEHOLDER;
use crate::error::{DbSupportError, Result};
use crate::profile::DialectProfile;

/// A schema resolved against a dialect profile.
///
/// The handle only borrows its profile; it carries no state of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema<'p> {
    name: String,
    profile: &'p DialectProfile,
}

impl<'p> Schema<'p> {
    /// Returns the schema name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the profile this schema was resolved against.
    #[must_use]
    pub const fn profile(&self) -> &'p DialectProfile {
        self.profile
    }

    /// Returns the quoted schema name.
    #[must_use]
    pub fn quoted_name(&self) -> String {
        self.profile.quote(&self.name)
    }

    /// Returns the quoted, schema-qualified name of a table in this schema.
    #[must_use]
    pub fn qualify(&self, table: &str) -> String {
        self.profile.quoter().quote_qualified(&[&self.name, table])
    }
}

/// Reads and switches the current schema of a connection.
#[derive(Debug, Clone, Copy)]
pub struct SchemaLocator<'p> {
    profile: &'p DialectProfile,
}

impl<'p> SchemaLocator<'p> {
    /// Creates a locator for the given profile.
    #[must_use]
    pub const fn new(profile: &'p DialectProfile) -> Self {
        Self { profile }
    }

    /// Returns the name of the connection's current schema.
    pub async fn current_schema<C: SqlConnection>(&self, conn: &mut C) -> Result<String> {
        let query = self.profile.config().current_schema_query;
        debug!(sql = %query, "Querying current schema");

        match conn.query_scalar(query).await {
            Ok(Some(schema)) => Ok(schema),
            Ok(None) => Err(DbSupportError::SchemaResolution {
                query: query.to_string(),
                source: None,
            }),
            Err(e) => Err(DbSupportError::SchemaResolution {
                query: query.to_string(),
                source: Some(e),
            }),
        }
    }

    /// Switches the connection's current schema to `name`.
    pub async fn set_current_schema<C: SqlConnection>(
        &self,
        conn: &mut C,
        name: &str,
    ) -> Result<()> {
        let Some(statement) = self.set_schema_statement(name) else {
            warn!(
                dialect = self.profile.dialect_name(),
                schema = %name,
                "Dialect does not support setting the schema, current schema not changed"
            );
            return Ok(());
        };

        debug!(sql = %statement, "Changing current schema");
        let result = conn.execute(&statement).await;
        match result {
            Ok(()) => Ok(()),
            Err(source) => Err(DbSupportError::SqlExecution { statement, source }),
        }
    }

    /// Returns the statement that switches the current schema to `name`, or
    /// `None` if the dialect cannot switch schemas.
    #[must_use]
    pub fn set_schema_statement(&self, name: &str) -> Option<String> {
        let template = self.profile.config().set_schema_template?;
        let quoted = self.profile.quote(name);
        Some(template.replace(SCHEMA_PLACEHOLDER, &quoted))
    }

    /// Returns a handle to the schema with the given name. Performs no I/O.
    #[must_use]
    pub fn resolve_schema(&self, name: &str) -> Schema<'p> {
        Schema {
            name: name.to_string(),
            profile: self.profile,
        }
    }
}
