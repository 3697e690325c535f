//! PostgreSQL.

use super::{
    Capabilities, DialectConfig, EditionBand, HistoryTableTokens, IndexQualification,
    PrimaryKeyPlacement, VersionThresholds,
};
use crate::version::{ServerVersion, VersionCeiling};

/// PostgreSQL.
pub const POSTGRESQL: DialectConfig = DialectConfig {
    name: "postgresql",
    product_prefix: "PostgreSQL",
    vendor: "PostgreSQL",
    product_label: "PostgreSQL",
    quote: ('"', '"'),
    capabilities: Capabilities {
        supports_ddl_transactions: true,
        boolean_true: "TRUE",
        boolean_false: "FALSE",
        current_user_function: "current_user",
        catalog_is_schema: false,
        use_single_connection: false,
    },
    thresholds: VersionThresholds {
        min_supported: ServerVersion::new(9, 0),
        edition_band: Some(EditionBand {
            from: ServerVersion::new(9, 0),
            until: ServerVersion::new(9, 3),
        }),
        max_known_good: VersionCeiling::Major(10),
    },
    current_schema_query: "SELECT current_schema()",
    set_schema_template: Some("SET search_path = {schema}"),
    history_table: HistoryTableTokens {
        integer_type: "INTEGER",
        varchar_type: "VARCHAR",
        timestamp_type: "TIMESTAMP",
        timestamp_default: "now()",
        boolean_type: "BOOLEAN",
        storage_clause: None,
        primary_key: PrimaryKeyPlacement::AlterTable,
        index: IndexQualification::Table,
    },
};
