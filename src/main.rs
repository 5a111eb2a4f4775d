// Command-line entry point for structscan.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use structscan::extractors::{lint_structs, UnitOutcome};
use structscan::utils::paths::unit_label;
use structscan::{ExtractConfig, ExtractorManager};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source files to scan (.go, .rs)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Capacity of the declaration handoff channel (0 = rendezvous)
    #[arg(long, default_value_t = 0, conflicts_with = "unbounded")]
    channel_capacity: usize,

    /// Use an unbounded handoff channel
    #[arg(long, default_value_t = false)]
    unbounded: bool,

    /// Extract from files with syntax errors instead of skipping them
    #[arg(long, default_value_t = false)]
    allow_syntax_errors: bool,

    /// Process files on a thread pool
    #[arg(short, long, default_value_t = false)]
    parallel: bool,

    /// Report declarations and fields without a name
    #[arg(long, default_value_t = false)]
    lint: bool,
}

impl Cli {
    fn config(&self) -> ExtractConfig {
        ExtractConfig {
            channel_capacity: (!self.unbounded).then_some(self.channel_capacity),
            allow_syntax_errors: self.allow_syntax_errors,
            parallel: self.parallel,
            ..ExtractConfig::default()
        }
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let root = std::env::current_dir().context("Cannot determine working directory")?;

    let manager = ExtractorManager::new(cli.config());
    let report = manager.extract_files(&cli.files);

    match cli.format {
        Format::Text => {
            for unit in &report.units {
                let UnitOutcome::Extracted(file) = unit else {
                    continue;
                };
                for decl in &file.structs {
                    println!("{}", decl);
                }
                if cli.lint {
                    let label = unit_label(&file.path, &root);
                    for warning in lint_structs(&file.structs) {
                        eprintln!("{}: {}", label, warning);
                    }
                }
            }
        }
        Format::Json => {
            let units: Vec<_> = report
                .units
                .iter()
                .map(|unit| match unit {
                    UnitOutcome::Extracted(file) => {
                        let mut value = json!({
                            "path": unit_label(&file.path, &root),
                            "language": file.language,
                            "structs": file.structs,
                        });
                        if cli.lint {
                            value["lint"] = json!(lint_structs(&file.structs));
                        }
                        value
                    }
                    UnitOutcome::Failed(failure) => json!({
                        "path": unit_label(&failure.path, &root),
                        "error": failure.error.to_string(),
                    }),
                })
                .collect();
            let output = serde_json::to_string_pretty(&json!({ "units": units }))
                .context("Failed to serialize report")?;
            println!("{}", output);
        }
    }

    let failed = report.failures().count();
    if failed > 0 {
        if cli.format == Format::Text {
            for failure in report.failures() {
                eprintln!("{}", failure.describe(&root));
            }
        }
        eprintln!(
            "{} of {} files could not be scanned",
            failed,
            report.units.len()
        );
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
