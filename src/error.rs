//! Error types for DishaTurn

use thiserror::Error;

/// DishaTurn error type
#[derive(Error, Debug)]
pub enum DishaError {
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DishaError>;
