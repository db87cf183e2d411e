use super::toml_config::{FixtureConfig, ReportFormat};
use crate::domain::model::CalculatorMode;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "fixture-calc")]
#[command(about = "Seeded-defect arithmetic fixture and its corrected counterpart")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Calculator implementation, overrides the config file
    #[arg(long, value_enum, global = true)]
    pub mode: Option<CalculatorMode>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add two integers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Divide two integers, truncating toward zero
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Format a user label
    FormatUser {
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    /// Run the built-in scenarios and print a report
    Scenarios {
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
    },
}

impl CliConfig {
    /// Loads the config file (if any), applies flag overrides and validates the result.
    pub fn settings(&self) -> Result<FixtureConfig> {
        let mut settings = match &self.config {
            Some(path) => FixtureConfig::from_file(path)?,
            None => FixtureConfig::default(),
        };

        if let Some(mode) = self.mode {
            settings.calculator.mode = mode;
        }
        if let Some(Command::Scenarios {
            format: Some(format),
        }) = &self.command
        {
            settings.report.format = *format;
        }

        settings.validate()?;
        Ok(settings)
    }
}
