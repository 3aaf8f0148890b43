//! ora2ch CLI - Generate ClickHouse ODBC tables from an Oracle catalog
//!
//! Usage:
//!   ora2ch convert [--file <dump> | --dsn <dsn>] [--prefix <p>] [--output <path>] [--locator <dsn>]
//!   ora2ch inspect [--file <dump> | --dsn <dsn>] [--format table|json]
//!   ora2ch types
//!
//! Examples:
//!   ora2ch convert --file all_tab_columns.txt --locator ORACLE --output clickhouse.sql
//!   ora2ch --config ora2ch.toml convert
//!   ora2ch inspect --file all_tab_columns.txt --format json

use clap::{Parser, Subcommand, ValueEnum};
use ora2ch::catalog::TableCatalog;
use ora2ch::config::Settings;
use ora2ch::convert::{self, open_source, ConvertResult};
use ora2ch::typemap::TypeMapping;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "ora2ch")]
#[command(about = "ora2ch - ClickHouse ODBC-engine DDL from an Oracle column catalog")]
#[command(version)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the catalog to DROP/CREATE statements
    Convert {
        #[command(flatten)]
        source: SourceArgs,

        /// Prefix for generated table names
        #[arg(short, long)]
        prefix: Option<String>,

        /// Output file ("-" for stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// DSN written into the ENGINE clause
        #[arg(short, long)]
        locator: Option<String>,
    },

    /// Show the tables and columns found in the catalog
    Inspect {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(long, default_value = "table")]
        format: InspectFormat,
    },

    /// Print the built-in Oracle to ClickHouse type table
    Types,
}

#[derive(clap::Args)]
struct SourceArgs {
    /// Bordered table dump of ALL_TAB_COLUMNS
    #[arg(short, long, conflicts_with = "dsn")]
    file: Option<String>,

    /// ODBC DSN to query the catalog live
    #[arg(short, long)]
    dsn: Option<String>,
}

impl SourceArgs {
    /// Command-line source replaces whatever the config file set.
    fn apply(self, settings: &mut Settings) {
        if let Some(file) = self.file {
            settings.source.file = Some(file);
            settings.source.dsn = None;
        } else if let Some(dsn) = self.dsn {
            settings.source.dsn = Some(dsn);
            settings.source.file = None;
        }
    }
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    /// Per-table column counts
    Table,
    /// Column records as JSON
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            init_logging(cli.debug);
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(cli.debug || settings.general.debug);

    let result = match cli.command {
        Commands::Convert {
            source,
            prefix,
            output,
            locator,
        } => cmd_convert(settings, source, prefix, output, locator),
        Commands::Inspect { source, format } => cmd_inspect(settings, source, format),
        Commands::Types => cmd_types(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so DDL on stdout stays clean.
fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_convert(
    mut settings: Settings,
    source: SourceArgs,
    prefix: Option<String>,
    output: Option<String>,
    locator: Option<String>,
) -> ConvertResult<()> {
    source.apply(&mut settings);
    if let Some(prefix) = prefix {
        settings.target.table_prefix = prefix;
    }
    if let Some(output) = output {
        settings.target.output = output;
    }
    if locator.is_some() {
        settings.target.locator = locator;
    }

    let run_config = settings.into_run_config()?;
    let result = convert::run(&run_config)?;
    info!(
        tables = result.tables,
        columns = result.columns,
        "done"
    );
    Ok(())
}

fn cmd_inspect(
    mut settings: Settings,
    source: SourceArgs,
    format: InspectFormat,
) -> ConvertResult<()> {
    source.apply(&mut settings);

    let mut catalog_source = open_source(&settings.source_mode()?)?;
    let records = catalog_source.read_columns()?;

    match format {
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&records)?;
            println!("{}", json);
        }
        InspectFormat::Table => {
            let catalog = TableCatalog::build(&records, settings.mapping.identity);
            println!("Source: {}", catalog_source.describe());
            println!();
            println!("Tables:");
            for table in catalog.descriptors() {
                println!(
                    "  - {}.{} ({} columns)",
                    table.owner,
                    table.table_name,
                    table.columns.len()
                );
            }
            println!();
            println!(
                "{} tables, {} columns",
                catalog.table_count(),
                catalog.column_count()
            );
        }
    }

    Ok(())
}

fn cmd_types() -> ConvertResult<()> {
    let mapping = TypeMapping::default();
    for (oracle, clickhouse) in mapping.iter() {
        println!("{:<28} {}", oracle, clickhouse);
    }
    Ok(())
}
