// src/error.rs

use thiserror::Error;

/// Core error types for Codestrap
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Session log setup error
    #[error("Failed to initialize session log: {0}")]
    LogInit(String),

    /// Interactive input ended unexpectedly (stdin closed)
    #[error("Input stream closed while waiting for an answer")]
    InputClosed,
}

/// Result type alias using Codestrap's Error type
pub type Result<T> = std::result::Result<T, Error>;
