pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_entry_name, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "plugin-packer")]
#[command(about = "Packages a plugin source file into a zip archive for distribution")]
pub struct CliConfig {
    /// Plugin source file to package.
    #[arg(long, default_value = "universalis_price_checker.py")]
    pub source: String,

    /// Output zip archive path.
    #[arg(long, default_value = "UniversalisPriceChecker.zip")]
    pub output: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn source_path(&self) -> &str {
        &self.source
    }

    fn archive_path(&self) -> &str {
        &self.output
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("source", &self.source)?;
        validate_entry_name("source", &self.source)?;
        validate_path("output", &self.output)?;
        Ok(())
    }
}
