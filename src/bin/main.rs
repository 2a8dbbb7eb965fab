//! schemashift CLI - Generate SQL Server DDL from source table descriptions
//!
//! Usage:
//!   schemashift translate <table.json> [--source <system>] [--schema <name>] [--output <format>]
//!   schemashift estimate <table.json>
//!   schemashift check-name <name>
//!   schemashift explain <type>
//!
//! Examples:
//!   schemashift translate orders.json --schema bronze_schema --prefix erp
//!   schemashift translate orders.json --no-view --output json
//!   schemashift check-name src_orders
//!   schemashift explain VARCHAR2 --length 400

use clap::{Parser, Subcommand, ValueEnum};
use schemashift::config::Settings;
use schemashift::model::SourceTable;
use schemashift::naming::{validate_name, NamingStyle};
use schemashift::translate::Translator;
use schemashift::typemap::{explain_mapping, mapper_for, SourceSystem};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schemashift")]
#[command(about = "schemashift - Translate source table descriptions into SQL Server DDL")]
#[command(version)]
struct Cli {
    /// Path to a schemashift.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level filter (overrides the config file and RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate table and view DDL for a table description
    Translate {
        /// Path to the table description (.json)
        file: PathBuf,

        /// Source system the table was read from
        #[arg(long)]
        source: Option<SourceArg>,

        /// Target schema
        #[arg(long)]
        schema: Option<String>,

        /// Source-system prefix for the table name
        #[arg(long)]
        prefix: Option<String>,

        /// Database project name
        #[arg(long)]
        database: Option<String>,

        /// Table naming style
        #[arg(long)]
        naming: Option<NamingArg>,

        /// Do not generate a view
        #[arg(long)]
        no_view: bool,

        /// Output format
        #[arg(short, long, default_value = "sql")]
        output: OutputFormat,
    },

    /// Estimate the storage footprint of a table
    Estimate {
        /// Path to the table description (.json)
        file: PathBuf,

        /// Source system the table was read from
        #[arg(long)]
        source: Option<SourceArg>,
    },

    /// Check a table name against SQL Server naming rules
    CheckName {
        /// Name to check
        name: String,
    },

    /// Show how a source type is mapped
    Explain {
        /// Source type name (e.g. VARCHAR2, NUMBER)
        data_type: String,

        #[arg(long)]
        length: Option<u32>,

        #[arg(long)]
        precision: Option<u32>,

        #[arg(long)]
        scale: Option<i32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    Oracle,
    Sqlserver,
}

impl From<SourceArg> for SourceSystem {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Oracle => SourceSystem::Oracle,
            SourceArg::Sqlserver => SourceSystem::SqlServer,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum NamingArg {
    Standard,
    SchemaPrefixed,
}

impl From<NamingArg> for NamingStyle {
    fn from(arg: NamingArg) -> Self {
        match arg {
            NamingArg::Standard => NamingStyle::Standard,
            NamingArg::SchemaPrefixed => NamingStyle::SchemaPrefixed,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// DDL scripts followed by the project entries
    Sql,
    /// The whole bundle as JSON
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    setup_logging(cli.log_level.as_deref(), &settings.logging.level);

    match cli.command {
        Commands::Translate {
            file,
            source,
            schema,
            prefix,
            database,
            naming,
            no_view,
            output,
        } => {
            let overrides = TargetOverrides {
                source,
                schema,
                prefix,
                database,
                naming,
                no_view,
            };
            cmd_translate(&settings, &file, overrides, output)
        }
        Commands::Estimate { file, source } => cmd_estimate(&settings, &file, source),
        Commands::CheckName { name } => cmd_check_name(&name),
        Commands::Explain {
            data_type,
            length,
            precision,
            scale,
        } => cmd_explain(&data_type, length, precision, scale),
    }
}

/// Log to stderr so stdout carries only the generated output.
fn setup_logging(cli_level: Option<&str>, config_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli_level, config_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// `--log-level` wins over RUST_LOG, which wins over the config file.
fn log_filter(cli_level: Option<&str>, config_level: &str) -> EnvFilter {
    match cli_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level)),
    }
}

/// Command-line values that take precedence over the config file.
struct TargetOverrides {
    source: Option<SourceArg>,
    schema: Option<String>,
    prefix: Option<String>,
    database: Option<String>,
    naming: Option<NamingArg>,
    no_view: bool,
}

fn build_translator(settings: &Settings, overrides: TargetOverrides) -> Result<Translator, String> {
    let mut settings = settings.clone();
    if let Some(schema) = overrides.schema {
        settings.target.schema = schema;
    }
    if let Some(prefix) = overrides.prefix {
        settings.target.prefix = prefix;
    }
    if let Some(database) = overrides.database {
        settings.target.database = database;
    }
    if let Some(naming) = overrides.naming {
        settings.target.naming_style = naming.into();
    }
    if overrides.no_view {
        settings.target.create_view = false;
    }
    let source = overrides
        .source
        .map(SourceSystem::from)
        .unwrap_or(settings.target.source);

    settings.validate().map_err(|e| e.to_string())?;
    let target = settings.target_config().map_err(|e| e.to_string())?;

    Ok(Translator::new(target)
        .source(source)
        .audit(settings.audit.clone()))
}

fn read_table(file: &Path) -> Result<SourceTable, String> {
    let json = fs::read_to_string(file)
        .map_err(|e| format!("Error reading file '{}': {}", file.display(), e))?;

    let table = SourceTable::from_json(&json)
        .map_err(|e| format!("Error in '{}': {}", file.display(), e))?;

    if let Err(errors) = table.validate() {
        let lines: Vec<_> = errors.iter().map(|e| format!("  {}", e)).collect();
        return Err(format!("Invalid table description:\n{}", lines.join("\n")));
    }

    Ok(table)
}

fn cmd_translate(
    settings: &Settings,
    file: &Path,
    overrides: TargetOverrides,
    output: OutputFormat,
) -> ExitCode {
    let translator = match build_translator(settings, overrides) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let table = match read_table(file) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let bundle = translator.translate(&table);

    match output {
        OutputFormat::Sql => {
            for generated in &bundle.ddl.files {
                println!("-- {}", generated.path);
                println!("{}", generated.content);
                println!();
            }
            println!("-- {}", bundle.manifest.project_file);
            for entry in &bundle.manifest.entries {
                println!("{}", entry);
            }
            for note in &bundle.storage.notes {
                eprintln!("note: {}", note);
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&bundle) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}

fn cmd_estimate(settings: &Settings, file: &Path, source: Option<SourceArg>) -> ExitCode {
    let table = match read_table(file) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let source = source.map(SourceSystem::from).unwrap_or(settings.target.source);
    let translated = schemashift::translate::translate_table(&table, mapper_for(source).as_ref());
    let estimate = schemashift::storage::estimate_storage(&translated);

    println!("Table: {}", table.qualified_name());
    println!("Row size: {} bytes", estimate.row_size_bytes);
    match estimate.table_size_mb {
        Some(mb) => println!("Table size: {:.2} MB", mb),
        None => println!("Table size: unknown (no row count)"),
    }
    println!("Variable-length columns: {}", estimate.variable_length_columns);
    println!("Large objects: {}", if estimate.has_large_objects { "yes" } else { "no" });
    if !estimate.notes.is_empty() {
        println!();
        println!("Notes:");
        for note in &estimate.notes {
            println!("  - {}", note);
        }
    }

    ExitCode::SUCCESS
}

fn cmd_check_name(name: &str) -> ExitCode {
    let result = validate_name(name);
    if result.valid {
        println!("OK: {}", result.message);
        ExitCode::SUCCESS
    } else {
        println!("Invalid: {}", result.message);
        ExitCode::FAILURE
    }
}

fn cmd_explain(
    data_type: &str,
    length: Option<u32>,
    precision: Option<u32>,
    scale: Option<i32>,
) -> ExitCode {
    let mapper = mapper_for(SourceSystem::Oracle);
    let mapping = mapper.map_type(data_type, length, precision, scale);

    println!("{} -> {}", data_type, mapping.target);
    if let Some(length) = mapping.max_length {
        println!("  length: {}", length);
    }
    if let Some(precision) = mapping.precision {
        println!("  precision: {}", precision);
    }
    if let Some(scale) = mapping.scale {
        println!("  scale: {}", scale);
    }
    println!("{}", explain_mapping(data_type));

    ExitCode::SUCCESS
}
