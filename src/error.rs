use crate::config::ConfigError;

/// Failures that stop the service from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum VitalcheckError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(String),
}
