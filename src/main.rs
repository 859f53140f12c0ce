// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11y-audit CLI - audits page-builder project files from the shell.

use a11y_audit::config::{self, Config, LogConfig};
use a11y_audit::fixes::{generate_component_fix, FixPatch};
use a11y_audit::report::{generate_report, OutputFormat};
use a11y_audit::{scanner, Auditor};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Accessibility audit engine for page-builder projects
#[derive(Parser)]
#[command(name = "a11y-audit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML or YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit every component of a project file
    Audit {
        /// Project file (JSON)
        file: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Audit a single component of a project file
    Component {
        /// Project file (JSON)
        file: PathBuf,

        /// Component id
        id: String,
    },

    /// Print the merged auto-fix patch for each component
    Fix {
        /// Project file (JSON)
        file: PathBuf,
    },

    /// Audit every project file below a directory
    Scan {
        /// Directory to scan
        dir: PathBuf,
    },

    /// Write the default configuration file
    InitConfig {
        /// Destination (defaults to .a11y-audit/config.toml)
        path: Option<PathBuf>,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI
    Sarif,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Sarif => OutputFormat::Sarif,
        }
    }
}

fn init_logging(log: &LogConfig, verbose: bool) {
    let level = if verbose { "debug" } else { log.level.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("a11y_audit={}", level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match log.format.as_str() {
        "json" => builder.json().init(),
        "compact" => builder.compact().init(),
        _ => builder.init(),
    }
}

/// Report where the configuration came from; needs the subscriber installed
fn log_config_source(path: &Path, config: &Config) {
    if path.exists() {
        debug!(path = %path.display(), ?config, "Loaded configuration");
    } else {
        debug!(path = %path.display(), "No configuration file, using defaults");
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let config = config::load_config(&config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;
    init_logging(&config.log, cli.verbose);
    log_config_source(&config_path, &config);
    let auditor = Auditor::new(config);

    match cli.command {
        Commands::Audit { file, format, output } => {
            let report = scanner::scan_file(&file, &auditor)?;
            write_output(&generate_report(&report, format.into()), output.as_deref())?;

            if report.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Component { file, id } => {
            let components = scanner::load_project(&file)?;
            let snapshot = components
                .iter()
                .find(|c| c.id == id)
                .with_context(|| format!("no component {} in {}", id, file.display()))?;
            let analysis = auditor.audit_component(snapshot);
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }

        Commands::Fix { file } => {
            let components = scanner::load_project(&file)?;
            let report = auditor.audit_project(&components);
            let patches: BTreeMap<&str, FixPatch> = components
                .iter()
                .zip(&report.component_analysis)
                .map(|(snapshot, analysis)| {
                    (snapshot.id.as_str(), generate_component_fix(&analysis.issues, snapshot))
                })
                .filter(|(_, patch)| !patch.is_empty())
                .collect();
            println!("{}", serde_json::to_string_pretty(&patches)?);
        }

        Commands::Scan { dir } => {
            let reports = scanner::scan_directory(&dir, &auditor)?;
            let mut failed = false;
            for (path, report) in &reports {
                println!(
                    "{}: score {}/100, {} issue(s)",
                    path.display(),
                    report.score,
                    report.issues.len()
                );
                failed |= report.has_errors();
            }

            if failed {
                std::process::exit(1);
            }
        }

        Commands::InitConfig { path } => {
            let path = path.unwrap_or_else(config::default_config_path);
            config::write_default_config(&path)?;
            eprintln!("Default configuration written to {}", path.display());
        }
    }

    Ok(())
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
