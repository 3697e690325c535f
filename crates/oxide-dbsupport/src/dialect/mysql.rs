//! MySQL.

use super::{
    Capabilities, DialectConfig, EditionBand, HistoryTableTokens, IndexQualification,
    PrimaryKeyPlacement, VersionThresholds,
};
use crate::version::{ServerVersion, VersionCeiling};

/// MySQL. Databases act as schemas and DDL is never transactional.
pub const MYSQL: DialectConfig = DialectConfig {
    name: "mysql",
    product_prefix: "MySQL",
    vendor: "Oracle",
    product_label: "MySQL",
    quote: ('`', '`'),
    capabilities: Capabilities {
        supports_ddl_transactions: false,
        boolean_true: "1",
        boolean_false: "0",
        current_user_function: "SUBSTRING_INDEX(USER(),'@',1)",
        catalog_is_schema: true,
        use_single_connection: false,
    },
    thresholds: VersionThresholds {
        min_supported: ServerVersion::new(5, 1),
        edition_band: Some(EditionBand {
            from: ServerVersion::new(5, 1),
            until: ServerVersion::new(5, 5),
        }),
        max_known_good: VersionCeiling::Major(8),
    },
    current_schema_query: "SELECT DATABASE()",
    set_schema_template: Some("USE {schema}"),
    history_table: HistoryTableTokens {
        integer_type: "INT",
        varchar_type: "VARCHAR",
        timestamp_type: "TIMESTAMP",
        timestamp_default: "CURRENT_TIMESTAMP",
        boolean_type: "BOOL",
        storage_clause: Some("ENGINE=InnoDB"),
        primary_key: PrimaryKeyPlacement::AlterTable,
        index: IndexQualification::Table,
    },
};
