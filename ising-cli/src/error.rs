use ising_sim::SimError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Simulation(#[from] SimError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse config file '{path}': {source}", path = path.display())]
    ConfigParsing {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write results: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
