//! SQLite.
//!
//! SQLite cannot add a primary key to an existing table and has no notion of
//! switching schemas, so the primary key is declared inline and schema
//! switching is a logged no-op. All work must go through one connection,
//! since a second connection to an in-memory database sees a different
//! database.

use super::{
    Capabilities, DialectConfig, HistoryTableTokens, IndexQualification, PrimaryKeyPlacement,
    VersionThresholds,
};
use crate::version::{ServerVersion, VersionCeiling};

/// SQLite 3.
pub const SQLITE: DialectConfig = DialectConfig {
    name: "sqlite",
    product_prefix: "SQLite",
    vendor: "SQLite",
    product_label: "SQLite",
    quote: ('"', '"'),
    capabilities: Capabilities {
        supports_ddl_transactions: true,
        boolean_true: "1",
        boolean_false: "0",
        current_user_function: "''",
        catalog_is_schema: false,
        use_single_connection: true,
    },
    thresholds: VersionThresholds {
        min_supported: ServerVersion::new(3, 7),
        edition_band: None,
        max_known_good: VersionCeiling::Major(3),
    },
    current_schema_query: "SELECT 'main'",
    set_schema_template: None,
    history_table: HistoryTableTokens {
        integer_type: "INT",
        varchar_type: "VARCHAR",
        timestamp_type: "TEXT",
        timestamp_default: "(strftime('%Y-%m-%d %H:%M:%f','now'))",
        boolean_type: "BOOLEAN",
        storage_clause: None,
        primary_key: PrimaryKeyPlacement::Inline,
        index: IndexQualification::Index,
    },
};
