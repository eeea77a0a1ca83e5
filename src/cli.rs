//! CLI interface for the medical report scanner

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Extensions the analyze command accepts.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "csv", "xlsx", "xls"];

#[derive(Parser)]
#[command(name = "medscan")]
#[command(about = "Medical report keyword analysis and demographic extraction tool")]
#[command(
    long_about = "Scan a medical report file (TXT, CSV, XLSX, XLS) for known conditions and risk factors, extract demographic fields, and render an analysis report"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a medical report file
    Analyze {
        /// Path to the report file (TXT, CSV, XLSX, XLS)
        file: PathBuf,

        /// Output format: console, json, markdown, html
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include matched-term details in console output
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show the active vocabulary
    Vocab {
        /// Show only condition terms
        #[arg(long)]
        conditions: bool,

        /// Show only risk-factor terms
        #[arg(long)]
        risk_factors: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
