pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{CsvCatalogProvider, JsonResearchDecoder};
pub use core::aggregator::aggregate;
pub use core::reader::{ResearchReader, SaveUpload};
pub use utils::error::{DecodeError, ResearchError, Result};
