//! Brandstats CLI - Per-brand product rating reports from CSV files
//!
//! # Main Commands
//!
//! ```bash
//! brandstats report -f products.csv -r average-rating    # Render a report table
//! brandstats reports                                     # List available reports
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! brandstats read -f products.csv                        # Dump normalized records as JSON
//! brandstats --debug report -f a.csv -r average-rating   # Verbose logging
//! ```

use brandstats::{analyze, read_products, ReportKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "brandstats")]
#[command(about = "Analyze per-brand product ratings from CSV files", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a report over one or more CSV files
    Report {
        /// Input CSV files
        #[arg(short, long, required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        /// Report to render (see `reports` for the list)
        #[arg(short, long)]
        report: String,
    },

    /// List available reports
    Reports,

    /// Read CSV files and dump the normalized records as JSON
    Read {
        /// Input CSV files
        #[arg(short, long, required = true, num_args = 1..)]
        files: Vec<PathBuf>,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.debug);

    let result = match cli.command {
        Commands::Report { files, report } => cmd_report(&files, &report),

        Commands::Reports => cmd_reports(),

        Commands::Read { files } => cmd_read(&files),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("brandstats=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("brandstats=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_report(files: &[PathBuf], report: &str) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Analyzing {} file(s)", files.len());

    let table = analyze(files, report)?;
    println!("{}", table);

    Ok(())
}

fn cmd_reports() -> Result<(), Box<dyn std::error::Error>> {
    println!("Available reports:");
    for kind in ReportKind::all() {
        println!("  - {}", kind);
    }
    Ok(())
}

fn cmd_read(files: &[PathBuf]) -> Result<(), Box<dyn std::error::Error>> {
    for file in files {
        eprintln!("📄 Reading: {}", file.display());
    }

    let products = read_products(files)?;
    eprintln!("✅ Read {} product records", products.len());

    let json = serde_json::to_string_pretty(&products)?;
    println!("{}", json);

    Ok(())
}
