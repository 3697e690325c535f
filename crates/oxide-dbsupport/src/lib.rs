//! Database dialect support for schema migrations.
//!
//! `oxide-dbsupport` is the layer a migration engine talks to for everything
//! that depends on the database product it is connected to:
//!
//! - **Version gating** - is this product/version supported at all, does it
//!   need a full edition, or is it newer than anything known to work?
//! - **History table DDL** - the statements that create the table recording
//!   applied migrations, in the dialect's types and quoting
//! - **Identifier quoting** - per-dialect quote characters
//! - **Current schema** - reading and switching the connection's schema
//! - **Capabilities** - transactional DDL, boolean literals, single
//!   connection requirement and friends
//!
//! Dialects are data: each one is a [`DialectConfig`](dialect::DialectConfig)
//! record held by a [`DialectRegistry`](registry::DialectRegistry).
//!
//! # Example
//!
//! ```rust,ignore
//! use oxide_dbsupport::prelude::*;
//! use sqlx::{Connection, SqliteConnection};
//!
//! let mut conn = SqliteConnection::connect("sqlite::memory:").await?;
//!
//! let profile = DialectRegistry::with_builtins().detect(&mut conn).await?;
//! if let Some(recommendation) = profile.ensure_supported()? {
//!     eprintln!("{recommendation}");
//! }
//!
//! let locator = profile.schema_locator();
//! let schema = locator.current_schema(&mut conn).await?;
//! for sql in profile
//!     .history_table()
//!     .render_statements(&schema, "flyway_schema_history")
//! {
//!     conn.execute(&sql).await?;
//! }
//! ```

pub mod connection;
pub mod dialect;
pub mod error;
pub mod history;
pub mod policy;
pub mod profile;
pub mod quote;
pub mod registry;
pub mod schema;
pub mod version;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::connection::{ServerInfo, SqlConnection};
    pub use crate::dialect::{Capabilities, DialectConfig, EditionBand, VersionThresholds};
    pub use crate::error::{DbSupportError, Result};
    pub use crate::history::{HistoryTableDdl, HistoryTableGenerator, HISTORY_COLUMNS};
    pub use crate::policy::{ensure_supported, UpgradeRecommendation, VersionVerdict};
    pub use crate::profile::DialectProfile;
    pub use crate::quote::IdentifierQuoter;
    pub use crate::registry::DialectRegistry;
    pub use crate::schema::{Schema, SchemaLocator};
    pub use crate::version::{ServerVersion, VersionCeiling};
}
