use thiserror::Error;

/// Main error type for Benchtop
#[derive(Error, Debug)]
pub enum BenchtopError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Manifest error: {0}")]
    ManifestError(String),

    #[error("UI error: {0}")]
    UIError(String),
}
