//! Container Code CLI Application
//!
//! This is the command-line interface for the ISO 6346 container code
//! decoder. It uses the container-code-decoder library and adds:
//! - Argument handling (marking tokens joined with spaces)
//! - Reference table overrides (flags or config.toml)
//! - The annotated field diagram / JSON output
//! - Process exit conventions

use anyhow::Result;
use clap::Parser;
use container_code_decoder::{DecodeError, Inspector};
use std::path::PathBuf;

mod config;
mod render;

/// Container Code CLI - Validate and explain ISO 6346 container markings
#[derive(Parser, Debug)]
#[command(name = "container-code-cli")]
#[command(about = "Validate and explain ISO 6346 container marking codes", long_about = None)]
#[command(version)]
struct Args {
    /// Container marking tokens, joined with spaces
    /// (e.g. CSQU3054383, "CSQ U 305438 3 201G", "RAIU 6900114 25U1")
    #[arg(value_name = "MARKING", required = true)]
    marking: Vec<String>,

    /// Path to configuration file (config.toml) with table overrides
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Owner table override (JSON file)
    #[arg(long, value_name = "FILE")]
    owners: Option<PathBuf>,

    /// Equipment category table override (JSON file)
    #[arg(long, value_name = "FILE")]
    equipment: Option<PathBuf>,

    /// Size table override (JSON file with length and heightWidth maps)
    #[arg(long, value_name = "FILE")]
    sizes: Option<PathBuf>,

    /// Type table override (JSON file)
    #[arg(long, value_name = "FILE")]
    types: Option<PathBuf>,

    /// Emit the report as JSON instead of the field diagram
    #[arg(long)]
    json: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("Container Code CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using decoder library v{}", container_code_decoder::VERSION);

    let inspector = build_inspector(&args)?;

    if args.verbose > 0 && !args.quiet {
        println!("{}", render::render_table_summary(&inspector.table_stats()));
    }

    let raw = args.marking.join(" ");
    log::debug!("inspecting marking: {:?}", raw);

    match inspector.inspect(&raw) {
        Ok(report) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", render::render_report(&report));
            }
            Ok(())
        }
        Err(DecodeError::InvalidLength { code, len }) => {
            println!();
            println!("  {} \u{2718}", raw);
            println!(
                "  The marking length of {} is {}, but it must be 11 or 15 characters",
                code, len
            );
            println!();
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Build the inspector: embedded tables, then config file overrides,
/// then command-line flag overrides (flags win)
fn build_inspector(args: &Args) -> Result<Inspector> {
    let mut inspector = Inspector::builtin()?;

    if let Some(config_path) = &args.config {
        log::info!("Loading configuration from: {:?}", config_path);
        let config = config::load_config(config_path)?;

        let tables = inspector.tables_mut();
        if let Some(path) = &config.tables.owners {
            tables.load_owners(path)?;
        }
        if let Some(path) = &config.tables.equipment {
            tables.load_equipment(path)?;
        }
        if let Some(path) = &config.tables.sizes {
            tables.load_sizes(path)?;
        }
        if let Some(path) = &config.tables.types {
            tables.load_types(path)?;
        }
    }

    let tables = inspector.tables_mut();
    if let Some(path) = &args.owners {
        tables.load_owners(path)?;
    }
    if let Some(path) = &args.equipment {
        tables.load_equipment(path)?;
    }
    if let Some(path) = &args.sizes {
        tables.load_sizes(path)?;
    }
    if let Some(path) = &args.types {
        tables.load_types(path)?;
    }

    Ok(inspector)
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
