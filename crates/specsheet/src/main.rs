//! specsheet command-line interface.
//!
//! Parses an OpenAPI 3.x document and renders one report row per
//! (path, verb) with request/response schemas fully inlined.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use specsheet_report::{extract_rows, render_report, ReportFormat};
use specsheet_spec_parser::parse_document_file;

#[derive(Parser, Debug)]
#[command(name = "specsheet", about = "Flat per-endpoint reports from OpenAPI documents", version)]
struct Cli {
    /// Log level (overridden by RUST_LOG).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the endpoint report for a spec.
    Report {
        /// Input spec file (YAML or JSON).
        #[arg(short, long)]
        spec: PathBuf,

        /// Output format (text or json).
        #[arg(long, default_value = "text")]
        format: String,

        /// Write the report to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that a spec parses as OpenAPI 3.x without rendering.
    Validate {
        /// Input spec file (YAML or JSON).
        #[arg(short, long)]
        spec: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Report {
            spec,
            format,
            output,
        } => run_report(&spec, &format, output.as_deref()),
        Commands::Validate { spec } => run_validate(&spec),
    }
}

/// Logs go to stderr so stdout stays clean for the report itself.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_report(spec: &Path, format: &str, output: Option<&Path>) -> ExitCode {
    let format = match ReportFormat::parse(format) {
        Some(f) => f,
        None => {
            eprintln!("error: unknown format '{}' (expected text or json)", format);
            return ExitCode::from(2);
        }
    };

    let doc = match parse_document_file(spec) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("error: failed to load {}: {}", spec.display(), e);
            return ExitCode::from(1);
        }
    };

    let rows = extract_rows(&doc);
    let mut rendered = match render_report(&rows, format) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: failed to render report: {}", e);
            return ExitCode::from(1);
        }
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &rendered) {
                eprintln!("error: failed to write {}: {}", path.display(), e);
                return ExitCode::from(1);
            }
            info!(rows = rows.len(), output = %path.display(), "report written");
        }
        None => print!("{}", rendered),
    }

    ExitCode::SUCCESS
}

fn run_validate(spec: &Path) -> ExitCode {
    match parse_document_file(spec) {
        Ok(doc) => {
            eprintln!(
                "✓ {} is valid OpenAPI {} ({} path(s))",
                spec.display(),
                doc.version,
                doc.paths.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ {}: {}", spec.display(), e);
            ExitCode::from(1)
        }
    }
}
