#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

pub const DEFAULT_BIND: &str = "127.0.0.1:8100";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 2_000_000;
