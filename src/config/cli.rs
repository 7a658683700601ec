use crate::config::toml_config::ShowcaseConfig;
use crate::domain::model::ExampleKind;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "design-patterns")]
#[command(about = "Runs small design-pattern demonstrations")]
pub struct CliArgs {
    /// Examples to run, in order. Defaults to the config's list.
    #[arg(value_enum)]
    pub examples: Vec<ExampleKind>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where the SRP example writes its report
    #[arg(long)]
    pub report_path: Option<String>,

    /// Input data for the SRP example's report
    #[arg(long)]
    pub report_data: Option<String>,

    /// Delay of the async example, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Loads the config file (or defaults) and applies command-line overrides.
    pub fn resolve_config(&self) -> Result<ShowcaseConfig> {
        let mut config = match &self.config {
            Some(path) => ShowcaseConfig::from_file(path)?,
            None => ShowcaseConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut ShowcaseConfig) {
        if !self.examples.is_empty() {
            config.examples = self.examples.clone();
        }
        if let Some(path) = &self.report_path {
            config.reporting.output_path = path.clone();
        }
        if let Some(data) = &self.report_data {
            config.reporting.data = data.clone();
        }
        if let Some(delay_ms) = self.delay_ms {
            config.deferred.delay_ms = delay_ms;
        }
    }
}
