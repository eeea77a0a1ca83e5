//! MedScan: medical report keyword analysis and demographic extraction tool

mod analysis;
mod cli;
mod config;
mod error;
mod input;
mod output;

use analysis::analyzer::KeywordAnalyzer;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction, SUPPORTED_EXTENSIONS};
use config::Config;
use error::{MedScanError, Result};
use input::manager::InputManager;
use log::{error, info};
use output::formatter::ReportGenerator;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            file,
            output,
            save,
            detailed,
        } => {
            info!("Starting report analysis for {}", file.display());

            // Validate the extension before touching the file
            cli::validate_file_extension(&file, SUPPORTED_EXTENSIONS)
                .map_err(MedScanError::UnsupportedFormat)?;

            let output_format =
                cli::parse_output_format(&output).map_err(MedScanError::InvalidInput)?;

            // Extract text from the report
            let mut input_manager = InputManager::new();
            let report = input_manager.extract_report(&file).await?;

            info!(
                "Extracted {} characters from {:?} file",
                report.content.len(),
                report.file_type
            );

            // Run the keyword analysis
            let analyzer = KeywordAnalyzer::from_config(&config)?;
            let result = analyzer.analyze(&report.content, &report.file_type, report.byte_size);

            // Render and emit
            let generator =
                ReportGenerator::new(config.output.color_output, detailed || config.output.detailed);
            let formatted = generator.format(&result, &output_format)?;

            match save {
                Some(path) => {
                    generator.save(&formatted, &path)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", formatted),
            }
        }

        Commands::Vocab {
            conditions,
            risk_factors,
        } => {
            let show_all = !conditions && !risk_factors;

            if conditions || show_all {
                println!("Conditions ({}):", config.vocabulary.conditions.len());
                for term in &config.vocabulary.conditions {
                    println!("  • {}", term);
                }
            }

            if risk_factors || show_all {
                println!("Risk factors ({}):", config.vocabulary.risk_factors.len());
                for term in &config.vocabulary.risk_factors {
                    println!("  • {}", term);
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Configuration: {}", Config::config_path().display());
                println!("Conditions: {}", config.vocabulary.conditions.len());
                println!("Risk factors: {}", config.vocabulary.risk_factors.len());
                println!("Occurrence weight: {}", config.scoring.occurrence_weight);
                println!("Max confidence: {}", config.scoring.max_confidence);
                println!("Default format: {:?}", config.output.format);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
