//! Schema history table DDL.
//!
//! The history table is the persisted ledger of applied migrations. Its
//! column list, order and nullability are shared by every dialect; only the
//! native type names, the storage clause and the placement of the primary
//! key and index vary.

use crate::dialect::{
    Capabilities, DialectConfig, HistoryTableTokens, IndexQualification, PrimaryKeyPlacement,
};
use crate::quote::IdentifierQuoter;

/// Logical type of a history table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Integer.
    Integer,
    /// Variable-length string with a maximum length.
    Varchar(u16),
    /// Timestamp defaulting to the current time.
    Timestamp,
    /// Column restricted to the dialect's boolean literals.
    Boolean,
}

/// A column of the history table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryColumn {
    /// Column name.
    pub name: &'static str,
    /// Logical type.
    pub kind: ColumnKind,
    /// Whether the column accepts NULL.
    pub nullable: bool,
}

const fn column(name: &'static str, kind: ColumnKind, nullable: bool) -> HistoryColumn {
    HistoryColumn {
        name,
        kind,
        nullable,
    }
}

/// The history table columns, in order.
pub const HISTORY_COLUMNS: [HistoryColumn; 10] = [
    column("installed_rank", ColumnKind::Integer, false),
    column("version", ColumnKind::Varchar(50), true),
    column("description", ColumnKind::Varchar(200), false),
    column("type", ColumnKind::Varchar(20), false),
    column("script", ColumnKind::Varchar(1000), false),
    column("checksum", ColumnKind::Integer, true),
    column("installed_by", ColumnKind::Varchar(100), false),
    column("installed_on", ColumnKind::Timestamp, false),
    column("execution_time", ColumnKind::Integer, false),
    column("success", ColumnKind::Boolean, false),
];

const RANK_COLUMN: &str = "installed_rank";
const SUCCESS_COLUMN: &str = "success";

/// The four logical parts of the history table DDL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryTableDdl {
    /// `CREATE TABLE` with the column list and the `success` check constraint.
    pub create_table: String,
    /// Storage/organization clause appended to `CREATE TABLE`.
    pub storage_clause: Option<String>,
    /// `ALTER TABLE ... ADD CONSTRAINT ... PRIMARY KEY`, or `None` when the
    /// primary key is declared inside `CREATE TABLE`.
    pub primary_key: Option<String>,
    /// Non-unique `CREATE INDEX` on `success`.
    pub index: String,
}

impl HistoryTableDdl {
    /// Returns the executable statements, without terminators.
    #[must_use]
    pub fn statements(&self) -> Vec<String> {
        let mut create = self.create_table.clone();
        if let Some(ref clause) = self.storage_clause {
            create.push(' ');
            create.push_str(clause);
        }

        let mut statements = vec![create];
        statements.extend(self.primary_key.clone());
        statements.push(self.index.clone());
        statements
    }
}

/// Renders the history table DDL for one dialect.
#[derive(Debug, Clone, Copy)]
pub struct HistoryTableGenerator<'a> {
    tokens: &'a HistoryTableTokens,
    capabilities: &'a Capabilities,
    quoter: IdentifierQuoter,
}

impl<'a> HistoryTableGenerator<'a> {
    /// Creates a generator for the given dialect.
    #[must_use]
    pub fn new(config: &'a DialectConfig) -> Self {
        Self {
            tokens: &config.history_table,
            capabilities: &config.capabilities,
            quoter: IdentifierQuoter::new(config.quote.0, config.quote.1),
        }
    }

    /// Renders the complete creation script, statements separated by `;`.
    #[must_use]
    pub fn render_create_script(&self, schema: &str, table: &str) -> String {
        let mut script = self.render_statements(schema, table).join(";\n");
        script.push(';');
        script
    }

    /// Renders the creation script as individual statements.
    #[must_use]
    pub fn render_statements(&self, schema: &str, table: &str) -> Vec<String> {
        self.render(schema, table).statements()
    }

    /// Renders the four logical parts of the creation script.
    #[must_use]
    pub fn render(&self, schema: &str, table: &str) -> HistoryTableDdl {
        let q = |name: &str| self.quoter.quote(name);
        let table_ref = self.quoter.quote_qualified(&[schema, table]);

        let mut lines: Vec<String> = HISTORY_COLUMNS
            .iter()
            .map(|c| format!("    {}", self.column_definition(c)))
            .collect();
        let pk_constraint = format!(
            "CONSTRAINT {} PRIMARY KEY ({})",
            q(&format!("{table}_pk")),
            q(RANK_COLUMN)
        );
        if self.tokens.primary_key == PrimaryKeyPlacement::Inline {
            lines.push(format!("    {pk_constraint}"));
        }
        lines.push(format!(
            "    CONSTRAINT {} CHECK ({} in({},{}))",
            q(&format!("{table}_s")),
            q(SUCCESS_COLUMN),
            self.capabilities.boolean_false,
            self.capabilities.boolean_true
        ));

        let create_table = format!("CREATE TABLE {table_ref} (\n{}\n)", lines.join(",\n"));

        let primary_key = match self.tokens.primary_key {
            PrimaryKeyPlacement::AlterTable => {
                Some(format!("ALTER TABLE {table_ref} ADD {pk_constraint}"))
            }
            PrimaryKeyPlacement::Inline => None,
        };

        let index_name = format!("{table}_s_idx");
        let qualified_index = self.quoter.quote_qualified(&[schema, &index_name]);
        let (index_ref, indexed_table) = match self.tokens.index {
            IndexQualification::Table => (q(&index_name), table_ref),
            IndexQualification::IndexAndTable => (qualified_index, table_ref),
            IndexQualification::Index => (qualified_index, q(table)),
        };
        let index = format!(
            "CREATE INDEX {index_ref} ON {indexed_table} ({})",
            q(SUCCESS_COLUMN)
        );

        HistoryTableDdl {
            create_table,
            storage_clause: self.tokens.storage_clause.map(str::to_string),
            primary_key,
            index,
        }
    }

    fn column_definition(&self, column: &HistoryColumn) -> String {
        let mut sql = format!("{} ", self.quoter.quote(column.name));
        match column.kind {
            ColumnKind::Integer => sql.push_str(self.tokens.integer_type),
            ColumnKind::Varchar(len) => {
                sql.push_str(&format!("{}({len})", self.tokens.varchar_type));
            }
            ColumnKind::Timestamp => {
                sql.push_str(self.tokens.timestamp_type);
                sql.push_str(" DEFAULT ");
                sql.push_str(self.tokens.timestamp_default);
            }
            ColumnKind::Boolean => sql.push_str(self.tokens.boolean_type),
        }
        if !column.nullable {
            sql.push_str(" NOT NULL");
        }
        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{BUILTIN_DIALECTS, DB2, MYSQL, POSTGRESQL, SQLITE};

    const TABLE: &str = "flyway_schema_history";

    #[test]
    fn test_db2_create_script() {
        let generator = HistoryTableGenerator::new(&DB2);
        let script = generator.render_create_script("APP", TABLE);
        let expected = concat!(
            "CREATE TABLE \"APP\".\"flyway_schema_history\" (\n",
            "    \"installed_rank\" INT NOT NULL,\n",
            "    \"version\" VARCHAR(50),\n",
            "    \"description\" VARCHAR(200) NOT NULL,\n",
            "    \"type\" VARCHAR(20) NOT NULL,\n",
            "    \"script\" VARCHAR(1000) NOT NULL,\n",
            "    \"checksum\" INT,\n",
            "    \"installed_by\" VARCHAR(100) NOT NULL,\n",
            "    \"installed_on\" TIMESTAMP DEFAULT CURRENT TIMESTAMP NOT NULL,\n",
            "    \"execution_time\" INT NOT NULL,\n",
            "    \"success\" SMALLINT NOT NULL,\n",
            "    CONSTRAINT \"flyway_schema_history_s\" CHECK (\"success\" in(0,1))\n",
            ") ORGANIZE BY ROW;\n",
            "ALTER TABLE \"APP\".\"flyway_schema_history\" ADD CONSTRAINT ",
            "\"flyway_schema_history_pk\" PRIMARY KEY (\"installed_rank\");\n",
            "CREATE INDEX \"APP\".\"flyway_schema_history_s_idx\" ",
            "ON \"APP\".\"flyway_schema_history\" (\"success\");",
        );
        assert_eq!(script, expected);
    }

    #[test]
    fn test_db2_four_parts_in_order() {
        let generator = HistoryTableGenerator::new(&DB2);
        let ddl = generator.render("APP", TABLE);
        let first_line = ddl.create_table.lines().next().unwrap();
        assert_eq!(
            first_line,
            "CREATE TABLE \"APP\".\"flyway_schema_history\" ("
        );
        assert_eq!(ddl.storage_clause.as_deref(), Some("ORGANIZE BY ROW"));
        let alter = ddl.primary_key.as_deref().unwrap();
        assert!(alter.starts_with("ALTER TABLE"));
        assert!(ddl.index.starts_with("CREATE INDEX"));
        assert!(!ddl.index.contains("UNIQUE"));

        let script = generator.render_create_script("APP", TABLE);
        let create = script.find("CREATE TABLE").unwrap();
        let storage = script.find("ORGANIZE BY ROW").unwrap();
        let alter = script.find("ALTER TABLE").unwrap();
        let index = script.find("CREATE INDEX").unwrap();
        assert!(create < storage && storage < alter && alter < index);
        assert_eq!(script.matches(';').count(), 3);
    }

    #[test]
    fn test_column_order_is_fixed_across_dialects() {
        for dialect in BUILTIN_DIALECTS {
            let ddl = HistoryTableGenerator::new(dialect).render("s", "t");
            let quoter = IdentifierQuoter::new(dialect.quote.0, dialect.quote.1);
            let mut last = 0;
            for column in &HISTORY_COLUMNS {
                let needle = format!("\n    {} ", quoter.quote(column.name));
                let Some(pos) = ddl.create_table.find(&needle) else {
                    panic!("{}: column {} missing", dialect.name, column.name);
                };
                assert!(
                    pos > last,
                    "{}: column {} out of order",
                    dialect.name,
                    column.name
                );
                last = pos;
            }
        }
    }

    #[test]
    fn test_nullability_is_fixed_across_dialects() {
        for dialect in BUILTIN_DIALECTS {
            let ddl = HistoryTableGenerator::new(dialect).render("s", "t");
            let columns = ddl.create_table.lines().skip(1);
            for line in columns.take(HISTORY_COLUMNS.len()) {
                let nullable = line.contains("\"version\"")
                    || line.contains("`version`")
                    || line.contains("\"checksum\"")
                    || line.contains("`checksum`");
                assert_eq!(
                    !line.contains("NOT NULL"),
                    nullable,
                    "{}: {line}",
                    dialect.name
                );
            }
        }
    }

    #[test]
    fn test_success_check_lists_false_then_true() {
        for dialect in BUILTIN_DIALECTS {
            let ddl = HistoryTableGenerator::new(dialect).render("s", "t");
            let quoter = IdentifierQuoter::new(dialect.quote.0, dialect.quote.1);
            let check = format!(
                "CHECK ({} in({},{}))",
                quoter.quote("success"),
                dialect.capabilities.boolean_false,
                dialect.capabilities.boolean_true
            );
            assert!(ddl.create_table.contains(&check), "{}", dialect.name);
        }
    }

    #[test]
    fn test_tokens_substituted_verbatim() {
        let generator = HistoryTableGenerator::new(&POSTGRESQL);
        let script = generator.render_create_script("My Schema", "${table}");
        let table_ref = "\"My Schema\".\"${table}\"";
        assert!(script.contains(&format!("CREATE TABLE {table_ref} (")));
        assert!(script.contains("\"${table}_pk\""));
        assert!(script.contains("CREATE INDEX \"${table}_s_idx\""));
        assert!(script.contains(&format!("ON {table_ref} (\"success\")")));
    }

    #[test]
    fn test_postgres_has_no_storage_clause() {
        let generator = HistoryTableGenerator::new(&POSTGRESQL);
        let ddl = generator.render("public", TABLE);
        let installed_on = "\"installed_on\" TIMESTAMP DEFAULT now() NOT NULL";
        assert!(ddl.storage_clause.is_none());
        assert!(ddl.create_table.contains(installed_on));
        assert!(ddl.create_table.contains("\"success\" BOOLEAN NOT NULL"));
        assert!(ddl.create_table.contains("in(FALSE,TRUE)"));
        assert_eq!(ddl.statements().len(), 3);
    }

    #[test]
    fn test_mysql_uses_backticks_and_engine() {
        let generator = HistoryTableGenerator::new(&MYSQL);
        let statements = generator.render_statements("app", TABLE);
        assert_eq!(statements.len(), 3);
        let first_line = statements[0].lines().next().unwrap();
        assert_eq!(first_line, "CREATE TABLE `app`.`flyway_schema_history` (");
        assert!(statements[0].ends_with(") ENGINE=InnoDB"));
        assert_eq!(
            statements[2],
            concat!(
                "CREATE INDEX `flyway_schema_history_s_idx` ",
                "ON `app`.`flyway_schema_history` (`success`)"
            )
        );
    }

    #[test]
    fn test_sqlite_folds_primary_key() {
        let ddl = HistoryTableGenerator::new(&SQLITE).render("main", TABLE);
        let pk = "CONSTRAINT \"flyway_schema_history_pk\" PRIMARY KEY (\"installed_rank\")";
        assert!(ddl.primary_key.is_none());
        assert!(ddl.create_table.contains(pk));
        assert_eq!(
            ddl.index,
            concat!(
                "CREATE INDEX \"main\".\"flyway_schema_history_s_idx\" ",
                "ON \"flyway_schema_history\" (\"success\")"
            )
        );
        assert_eq!(ddl.statements().len(), 2);
    }
}
