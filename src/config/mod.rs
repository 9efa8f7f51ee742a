pub mod scenario;

use clap::Parser;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

#[derive(Debug, Clone, Parser)]
#[command(name = "shelter-queue")]
#[command(about = "A first-in-first-out animal shelter adoption queue")]
pub struct CliConfig {
    /// Scenario file (TOML) to run; omit to run the built-in demo
    #[arg(long)]
    pub scenario: Option<String>,

    /// Write the adoption report as JSON to this path
    #[arg(long)]
    pub report: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(scenario) = &self.scenario {
            validation::validate_path("scenario", scenario)?;
        }
        if let Some(report) = &self.report {
            validation::validate_path("report", report)?;
        }
        Ok(())
    }
}
