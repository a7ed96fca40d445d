use thiserror::Error;

/// Failure reported by a save decoder. The message is shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct DecodeError(pub String);

impl DecodeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

#[derive(Error, Debug)]
pub enum ResearchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Catalog error: {message}")]
    CatalogError { message: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

impl ResearchError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ResearchError::IoError(e) => format!("Could not access a file: {}", e),
            ResearchError::CsvError(e) => format!("The species catalog could not be parsed: {}", e),
            ResearchError::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            ResearchError::ConfigError { message } => format!("Invalid configuration: {}", message),
            ResearchError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for '{}': {}", field, reason)
            }
            ResearchError::CatalogError { message } => format!("Invalid species catalog: {}", message),
            ResearchError::ServerError { message } => format!("The server stopped: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ResearchError::IoError(_) => "Check that the path exists and is readable",
            ResearchError::CsvError(_) | ResearchError::CatalogError { .. } => {
                "Check the catalog file has the columns id,name,dex_national,dex_hisui and unique names"
            }
            ResearchError::SerializationError(_) => "Report this as a bug",
            ResearchError::ConfigError { .. }
            | ResearchError::InvalidConfigValueError { .. } => {
                "Review the command line flags or the TOML configuration file"
            }
            ResearchError::ServerError { .. } => "Check that the bind address is free and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, ResearchError>;
