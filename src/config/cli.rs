use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_socket_addr, Validate};
use crate::config::{DEFAULT_BIND, DEFAULT_MAX_UPLOAD_BYTES};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "hisui-research")]
#[command(about = "Reads research levels from a Legends: Arceus save and reports shiny rolls")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_BIND)]
    pub bind: String,

    #[arg(long, help = "CSV species catalog (defaults to the bundled Hisui dex)")]
    pub catalog: Option<String>,

    #[arg(long, default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    pub max_upload_bytes: usize,

    #[arg(long, help = "TOML configuration file; replaces the server flags above")]
    pub config: Option<String>,

    #[arg(long, help = "Read this save file, print the rolls as JSON and exit")]
    pub save: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn bind_address(&self) -> &str {
        &self.bind
    }

    fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    fn catalog_path(&self) -> Option<&str> {
        self.catalog.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("bind", &self.bind)?;
        validate_positive_number("max_upload_bytes", self.max_upload_bytes, 1)?;
        if let Some(path) = &self.catalog {
            validate_path("catalog", path)?;
        }
        if let Some(path) = &self.save {
            validate_path("save", path)?;
        }
        Ok(())
    }
}
