//! Error types for the Salone interests core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SaloneError>;

#[derive(Error, Debug)]
pub enum SaloneError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl SaloneError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SaloneError::Config(_) => 2,
            SaloneError::Catalog(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Unknown catalog source: {0}")]
    UnknownSource(String),
}

/// Failures a catalog source can surface to its caller.
///
/// Retrieval errors are data, not panics: consumers branch on the result and
/// degrade to an empty or previously cached catalog. The fixed in-memory
/// source never constructs one of these; they exist so file- and
/// network-backed sources fit the same contract.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Catalog source unavailable: {0}")]
    Unavailable(String),
}
