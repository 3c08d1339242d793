//! colmeta CLI - inspect column metadata derived from introspected schemas.

mod report;

use clap::{Parser, Subcommand};
use colmeta::{CasingStyle, Config, MetaError, SchemaDocument};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;

use report::TableReport;

#[derive(Parser)]
#[command(name = "colmeta")]
#[command(about = "Inspect column metadata derived from introspected schemas")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Casing for type-map keys: title, upper_camel, snake, verbatim
    #[arg(long)]
    casing: Option<String>,

    /// Log format: text or json
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show names, type map and column partitions for each table
    Inspect {
        /// Schema document (YAML, or JSON with a .json extension)
        schema_file: PathBuf,

        /// Only inspect this table (name or schema.name)
        #[arg(long)]
        table: Option<String>,

        /// Output JSON to stdout
        #[arg(long)]
        output_json: bool,
    },

    /// Check a schema document against the column invariants
    Validate {
        /// Schema document (YAML, or JSON with a .json extension)
        schema_file: PathBuf,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), MetaError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format);

    let mut config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)?;
            info!("Loaded configuration from {:?}", path);
            config
        }
        None => Config::default(),
    };
    if let Some(casing) = &cli.casing {
        config.casing = casing.parse::<CasingStyle>()?;
    }

    match cli.command {
        Commands::Inspect {
            schema_file,
            table,
            output_json,
        } => {
            let doc = SchemaDocument::load(&schema_file)?;

            let tables = match &table {
                Some(name) => vec![doc.table(name).ok_or_else(|| {
                    MetaError::InvalidDocument(format!("table '{}' not found", name))
                })?],
                None => doc.select(&config.tables),
            };

            let reports: Vec<TableReport> = tables
                .into_iter()
                .map(|t| TableReport::build(t, &config.casing))
                .collect();

            if output_json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for r in &reports {
                    print!("{}", r);
                }
            }
        }

        Commands::Validate { schema_file } => {
            let doc = SchemaDocument::load(&schema_file)?;
            let columns: usize = doc.tables.iter().map(|t| t.columns.len()).sum();
            println!(
                "{}: {} tables, {} columns OK",
                schema_file.display(),
                doc.tables.len(),
                columns
            );
        }
    }

    Ok(())
}

/// Setup logging based on verbosity and format.
///
/// Logs go to stderr so that `--output-json` output stays parseable.
fn setup_logging(verbosity: &str, format: &str) {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr);

    if format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
