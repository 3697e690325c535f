//! IBM DB2.

use super::{
    Capabilities, DialectConfig, EditionBand, HistoryTableTokens, IndexQualification,
    PrimaryKeyPlacement, VersionThresholds,
};
use crate::version::{ServerVersion, VersionCeiling};

/// IBM DB2 (LUW).
///
/// 9.7 is the oldest release the engine operates against. All of 9.x and
/// 10.x before 10.5 are only supported by a full edition.
pub const DB2: DialectConfig = DialectConfig {
    name: "db2",
    product_prefix: "DB2",
    vendor: "IBM",
    product_label: "DB2",
    quote: ('"', '"'),
    capabilities: Capabilities {
        supports_ddl_transactions: true,
        boolean_true: "1",
        boolean_false: "0",
        current_user_function: "CURRENT_USER",
        catalog_is_schema: false,
        use_single_connection: false,
    },
    thresholds: VersionThresholds {
        min_supported: ServerVersion::new(9, 7),
        edition_band: Some(EditionBand {
            from: ServerVersion::new(9, 0),
            until: ServerVersion::new(10, 5),
        }),
        max_known_good: VersionCeiling::release(11, 1),
    },
    current_schema_query: "select current_schema from sysibm.sysdummy1",
    set_schema_template: Some("SET SCHEMA {schema}"),
    history_table: HistoryTableTokens {
        integer_type: "INT",
        varchar_type: "VARCHAR",
        timestamp_type: "TIMESTAMP",
        timestamp_default: "CURRENT TIMESTAMP",
        boolean_type: "SMALLINT",
        storage_clause: Some("ORGANIZE BY ROW"),
        primary_key: PrimaryKeyPlacement::AlterTable,
        index: IndexQualification::IndexAndTable,
    },
};
