//! Database dialect configurations.
//!
//! A dialect is a plain data record: product matching, version thresholds,
//! capability tokens, schema statements and history table tokens. Adding
//! support for a database means adding a [`DialectConfig`] and registering
//! it, not writing a new type.

mod db2;
mod mysql;
mod postgres;
mod sqlite;

pub use db2::DB2;
pub use mysql::MYSQL;
pub use postgres::POSTGRESQL;
pub use sqlite::SQLITE;

use std::fmt;

use serde::Serialize;

use crate::version::{ServerVersion, VersionCeiling};

/// Placeholder substituted with the quoted schema name in
/// [`DialectConfig::set_schema_template`].
pub const SCHEMA_PLACEHOLDER: &str = "{schema}";

/// Configuration record describing one database dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DialectConfig {
    /// Short dialect identifier, e.g. `db2`.
    pub name: &'static str,
    /// Prefix of the product name reported by the driver, matched case-insensitively.
    pub product_prefix: &'static str,
    /// Vendor of the product.
    pub vendor: &'static str,
    /// Product name used in user-facing messages.
    pub product_label: &'static str,
    /// Opening and closing identifier quote characters.
    pub quote: (char, char),
    /// Fixed capability set.
    pub capabilities: Capabilities,
    /// Version support thresholds.
    pub thresholds: VersionThresholds,
    /// Scalar query returning the current schema.
    pub current_schema_query: &'static str,
    /// Statement switching the current schema, with [`SCHEMA_PLACEHOLDER`]
    /// standing for the quoted schema name. `None` if switching is unsupported.
    pub set_schema_template: Option<&'static str>,
    /// Tokens used to render the history table DDL.
    pub history_table: HistoryTableTokens,
}

/// Capabilities the migration engine consults when deciding how to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    /// Whether DDL statements participate in transactions.
    pub supports_ddl_transactions: bool,
    /// Literal stored for `true` in the history table.
    pub boolean_true: &'static str,
    /// Literal stored for `false` in the history table.
    pub boolean_false: &'static str,
    /// SQL expression returning the current user.
    pub current_user_function: &'static str,
    /// Whether the catalog plays the role of the schema (e.g. MySQL databases).
    pub catalog_is_schema: bool,
    /// Whether all operations of a run must share one physical connection.
    pub use_single_connection: bool,
}

/// Version support thresholds for a dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionThresholds {
    /// Oldest supported version (inclusive).
    pub min_supported: ServerVersion,
    /// Versions only supported by a full/enterprise edition, if any.
    pub edition_band: Option<EditionBand>,
    /// Newest version known to work; anything newer triggers a recommendation.
    pub max_known_good: VersionCeiling,
}

/// A half-open range `[from, until)` of versions requiring a full edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EditionBand {
    /// First version in the band (inclusive).
    pub from: ServerVersion,
    /// First version past the band (exclusive).
    pub until: ServerVersion,
}

impl EditionBand {
    /// Returns whether `version` falls inside the band.
    #[must_use]
    pub fn contains(&self, version: ServerVersion) -> bool {
        self.from <= version && version < self.until
    }
}

impl fmt::Display for EditionBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.until)
    }
}

/// Dialect tokens for the schema history table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryTableTokens {
    /// Integer column type.
    pub integer_type: &'static str,
    /// Variable-length string type; rendered as `<type>(<len>)`.
    pub varchar_type: &'static str,
    /// Timestamp column type.
    pub timestamp_type: &'static str,
    /// Default expression for the current time.
    pub timestamp_default: &'static str,
    /// Column type holding the boolean literals.
    pub boolean_type: &'static str,
    /// Clause appended after the closing parenthesis of `CREATE TABLE`.
    pub storage_clause: Option<&'static str>,
    /// Where the primary key is declared.
    pub primary_key: PrimaryKeyPlacement,
    /// How the `success` index and its table are qualified.
    pub index: IndexQualification,
}

/// Placement of the history table primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrimaryKeyPlacement {
    /// Separate `ALTER TABLE ... ADD CONSTRAINT ... PRIMARY KEY` statement.
    AlterTable,
    /// Table constraint inside `CREATE TABLE`, for dialects that cannot add
    /// a primary key to an existing table.
    Inline,
}

/// Qualification of the `success` index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IndexQualification {
    /// `CREATE INDEX "t_s_idx" ON "s"."t"`
    Table,
    /// `CREATE INDEX "s"."t_s_idx" ON "s"."t"`
    IndexAndTable,
    /// `CREATE INDEX "s"."t_s_idx" ON "t"`
    Index,
}

/// All dialects shipped with the crate.
pub const BUILTIN_DIALECTS: &[&DialectConfig] = &[&DB2, &POSTGRESQL, &MYSQL, &SQLITE];
