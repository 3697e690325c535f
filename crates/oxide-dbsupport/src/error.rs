//! Error types for dialect support.

/// Errors that can occur while detecting, gating or talking to a database.
#[derive(Debug, thiserror::Error)]
pub enum DbSupportError {
    /// The server is older than the oldest version the engine can operate against.
    #[error(
        "{product} {detected} is outdated and no longer supported. Upgrade to {product} {minimum} or later."
    )]
    VersionTooLow {
        /// Display name of the product.
        product: String,
        /// Detected version, `major.minor`.
        detected: String,
        /// Minimum supported version, `major.minor`.
        minimum: String,
    },

    /// The version is known, but only supported by a full/enterprise edition.
    #[error("{vendor} {product} {detected} requires a full edition upgrade.")]
    EditionUpgradeRequired {
        /// Vendor of the product.
        vendor: String,
        /// Display name of the product.
        product: String,
        /// Detected version, `major.minor`.
        detected: String,
    },

    /// A statement issued by this layer failed.
    #[error("Unable to execute statement '{statement}': {source}")]
    SqlExecution {
        /// The exact statement text that was sent to the database.
        statement: String,
        /// The underlying driver error.
        #[source]
        source: sqlx::Error,
    },

    /// The current schema could not be determined.
    #[error("Unable to retrieve the current schema for the connection (query: {query})")]
    SchemaResolution {
        /// The query that was issued.
        query: String,
        /// The driver error, or `None` if the query returned no value.
        #[source]
        source: Option<sqlx::Error>,
    },

    /// No registered dialect matches the product name.
    #[error("Unsupported database: {0}")]
    UnsupportedDatabase(String),

    /// The server reported a version string that could not be parsed.
    #[error("Unable to parse database version: {0}")]
    InvalidVersion(String),

    /// Database error while probing the connection.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl DbSupportError {
    /// Returns whether this error is one of the fatal version-gating errors.
    ///
    /// These are never transient and must abort the whole migration run.
    #[must_use]
    pub const fn is_fatal_version_error(&self) -> bool {
        matches!(
            self,
            Self::VersionTooLow { .. } | Self::EditionUpgradeRequired { .. }
        )
    }

    /// Returns the statement text attached to this error, if any.
    #[must_use]
    pub fn statement(&self) -> Option<&str> {
        match self {
            Self::SqlExecution { statement, .. } => Some(statement.as_str()),
            Self::SchemaResolution { query, .. } => Some(query.as_str()),
            _ => None,
        }
    }
}

/// Result type for dialect support operations.
pub type Result<T> = std::result::Result<T, DbSupportError>;
