//! dirreport - directory statistics exported as JSON, CSV or XML.
//!
//! Usage:
//!   dirreport [PATH]                 Write reports/report-<timestamp>.json
//!   dirreport [PATH] -f csv          Pick the output format
//!   dirreport [PATH] --stdout        Print the report instead of writing it
//!   dirreport formats                List supported formats
//!   dirreport --help                 Show help

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{Context, Result};
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

use dirreport_export::{ManagerConfig, ReportAdapter, ReportFormat, ReportManager, ScanConfig};
use dirreport_scan::AnalyzerFacade;

#[derive(Parser)]
#[command(
    name = "dirreport",
    version,
    about = "Scan a directory and export its statistics",
    long_about = "dirreport counts files, directories, bytes and file extensions \
                  under a directory and writes the result as JSON, CSV or XML \
                  into a timestamped file."
)]
struct Cli {
    /// Directory to scan (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output format: json, csv or xml (case-insensitive)
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Directory report files are written to
    #[arg(short, long, default_value = dirreport_export::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Print the report to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Exit with an error when the report cannot be generated
    #[arg(long)]
    strict: bool,

    /// Maximum depth to traverse
    #[arg(short = 'd', long)]
    max_depth: Option<u32>,

    /// Skip entries whose name matches this glob (repeatable)
    #[arg(short, long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Skip hidden files and directories
    #[arg(long)]
    no_hidden: bool,

    /// Follow symbolic links
    #[arg(short = 'L', long)]
    follow_symlinks: bool,

    /// Number of scan threads (0 = auto)
    #[arg(short = 'j', long, default_value = "0")]
    threads: usize,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List supported output formats
    Formats,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(Command::Formats) = cli.command {
        for format in ReportFormat::iter() {
            println!("{format:<6} report-<timestamp>.{}", format.extension());
        }
        return Ok(());
    }

    let scan = ScanConfig::builder()
        .root(cli.path.clone())
        .max_depth(cli.max_depth)
        .ignore_patterns(cli.ignore.clone())
        .include_hidden(!cli.no_hidden)
        .follow_symlinks(cli.follow_symlinks)
        .threads(cli.threads)
        .build()
        .context("Invalid scan options")?;

    if cli.stdout {
        return run_stdout(&cli, scan);
    }

    let config = ManagerConfig::builder()
        .output_dir(cli.output_dir.clone())
        .scan(scan)
        .build()
        .context("Invalid output options")?;
    let manager = ReportManager::with_config(&cli.format, config)?;

    eprintln!("Scanning {}...", cli.path.display());

    if cli.strict {
        let path = manager
            .try_generate_report(&cli.path)
            .context("Report generation failed")?;
        eprintln!("Report written to {}", path.display());
    } else {
        manager.generate_report(&cli.path);
    }

    Ok(())
}

/// Scan and print the rendered report without touching the output directory.
fn run_stdout(cli: &Cli, scan: ScanConfig) -> Result<()> {
    let format = ReportFormat::parse(&cli.format)?;
    let facade = AnalyzerFacade::new(format.adapter()).with_scan_config(scan);

    let result = facade.scan(&cli.path).context("Scan failed")?;
    eprintln!(
        "{} - {} files, {} directories, {} in {:.2}s",
        result.root_path.display(),
        result.report.files,
        result.report.directories,
        format_size(result.report.total_size),
        result.scan_duration.as_secs_f64()
    );
    if !result.warnings.is_empty() {
        eprintln!("{} warning(s) during scan", result.warnings.len());
    }

    let rendered = facade
        .adapter()
        .export(&result.report)
        .context("Failed to render report")?;
    println!("{rendered}");

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
