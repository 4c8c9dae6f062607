pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "klaviyo-models")]
#[command(about = "Build Klaviyo API models from JSON payloads and print their serialized form")]
pub struct CliConfig {
    /// Payload file, or "-" for stdin
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Model type to use instead of the payload's "object" field
    #[arg(short = 't', long)]
    pub model_type: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Attribute to delete from a person before printing (repeatable)
    #[arg(long = "unset")]
    pub unset: Vec<String>,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;

        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }

        if let Some(model_type) = &self.model_type {
            validate_non_empty_string("model_type", model_type)?;
        }

        for key in &self.unset {
            validate_non_empty_string("unset", key)?;
        }

        Ok(())
    }
}
