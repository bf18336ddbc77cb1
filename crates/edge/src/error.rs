use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Seed decode error: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("adapt error: {0}")]
    Adapt(#[from] adapt::Error),
}
