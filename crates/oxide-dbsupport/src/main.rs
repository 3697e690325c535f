//! oxide-dbsupport CLI
//!
//! Inspects a database connection the way the migration engine sees it.

use clap::{Parser, Subcommand};
use sqlx::{Connection, MySqlConnection, PgConnection, SqliteConnection};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_dbsupport::prelude::*;

/// Database dialect support for schema migrations.
#[derive(Parser)]
#[command(name = "oxide-dbsupport")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database URL (`sqlite:`, `postgres:` or `mysql:` connection string).
    #[arg(short, long, env = "DATABASE_URL", default_value = "sqlite::memory:")]
    database: String,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the database, check its version and show its capabilities.
    Info {
        /// Print the profile as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the DDL creating the schema history table.
    CreateScript {
        /// Schema holding the table (current schema if not specified).
        #[arg(short, long)]
        schema: Option<String>,

        /// History table name.
        #[arg(short, long, default_value = "flyway_schema_history")]
        table: String,
    },

    /// Print the connection's current schema.
    CurrentSchema,

    /// Switch the current schema and print the resulting current schema.
    SetSchema {
        /// Schema to switch to.
        name: String,
    },

    /// List the supported dialects.
    Dialects,
}

/// Driver selected from the scheme of the database URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Driver {
    Postgres,
    MySql,
    Sqlite,
}

impl Driver {
    fn from_url(url: &str) -> Option<Self> {
        let (scheme, _) = url.split_once(':')?;
        match scheme {
            "postgres" | "postgresql" => Some(Self::Postgres),
            "mysql" => Some(Self::MySql),
            "sqlite" => Some(Self::Sqlite),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let registry = DialectRegistry::with_builtins();

    if matches!(cli.command, Commands::Dialects) {
        print_dialects(&registry);
        return Ok(());
    }

    let url = cli.database.as_str();
    let Some(driver) = Driver::from_url(url) else {
        anyhow::bail!("Unsupported database URL: {url}");
    };

    match driver {
        Driver::Postgres => {
            let mut conn = PgConnection::connect(url).await?;
            run(&registry, &mut conn, cli.command).await?;
            conn.close().await?;
        }
        Driver::MySql => {
            let mut conn = MySqlConnection::connect(url).await?;
            run(&registry, &mut conn, cli.command).await?;
            conn.close().await?;
        }
        Driver::Sqlite => {
            let mut conn = SqliteConnection::connect(url).await?;
            run(&registry, &mut conn, cli.command).await?;
            conn.close().await?;
        }
    }

    Ok(())
}

async fn run<C: SqlConnection>(
    registry: &DialectRegistry,
    conn: &mut C,
    command: Commands,
) -> anyhow::Result<()> {
    let profile = registry.detect(conn).await?;
    profile.ensure_supported()?;

    let locator = profile.schema_locator();

    match command {
        Commands::Info { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                let caps = profile.capabilities();
                let current = locator.current_schema(conn).await?;
                let booleans = format!("{}/{}", caps.boolean_true, caps.boolean_false);
                let product = profile.product_label();
                println!("\nDatabase: {product} {}", profile.version());
                println!("{:-<60}", "");
                print_row("dialect", &profile.dialect_name());
                print_row("current schema", &current);
                print_row("ddl transactions", &caps.supports_ddl_transactions);
                print_row("boolean true/false", &booleans);
                print_row("current user function", &caps.current_user_function);
                print_row("catalog is schema", &caps.catalog_is_schema);
                print_row("single connection", &caps.use_single_connection);
                println!();
            }
        }

        Commands::CreateScript { schema, table } => {
            let schema = match schema {
                Some(schema) => schema,
                None => locator.current_schema(conn).await?,
            };
            let generator = profile.history_table();
            println!("{}", generator.render_create_script(&schema, &table));
        }

        Commands::CurrentSchema => {
            println!("{}", locator.current_schema(conn).await?);
        }

        Commands::SetSchema { name } => {
            locator.set_current_schema(conn, &name).await?;
            let current = locator.current_schema(conn).await?;
            info!(schema = %current, "Current schema");
            println!("{current}");
        }

        Commands::Dialects => print_dialects(registry),
    }

    Ok(())
}

fn print_row(label: &str, value: &dyn std::fmt::Display) {
    println!(" {label:<25} {value}");
}

fn print_dialects(registry: &DialectRegistry) {
    println!("\nSupported dialects:");
    println!("{:-<60}", "");
    for dialect in registry.dialects() {
        let thresholds = dialect.thresholds;
        let edition = thresholds
            .edition_band
            .map(|band| format!(", full edition for {band}"))
            .unwrap_or_default();
        println!(
            " {:<12} {} {}+ (tested up to {}{})",
            dialect.name,
            dialect.product_label,
            thresholds.min_supported,
            thresholds.max_known_good,
            edition
        );
    }
    println!();
}
