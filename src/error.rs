//! Error types and exit codes for stockroom

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

use crate::product::FieldError;

/// Main error type for stockroom operations
#[derive(Error, Debug)]
pub enum StockroomError {
    #[error("Invalid input: {}", format_field_errors(.errors))]
    InvalidInput { errors: Vec<FieldError> },

    #[error("No products selected for deletion.")]
    NothingSelected,

    #[error("No product matches id '{query}'")]
    ProductNotFound { query: String },

    #[error("Id '{query}' is ambiguous ({matches} products match); use more characters")]
    AmbiguousId { query: String, matches: usize },

    #[error("Store error: {message}")]
    Store { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to access {path}: {message}")]
    IoError { path: PathBuf, message: String },
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl StockroomError {
    /// Convert error to an exit code:
    /// - 0: Success
    /// - 1: IO, store or configuration failure
    /// - 2: Invalid input
    /// - 3: Bulk delete with nothing selected
    /// - 4: Unknown or ambiguous product id
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidInput { .. } => ExitCode::from(2),
            Self::NothingSelected => ExitCode::from(3),
            Self::ProductNotFound { .. } => ExitCode::from(4),
            Self::AmbiguousId { .. } => ExitCode::from(4),
            Self::Store { .. } => ExitCode::from(1),
            Self::Config { .. } => ExitCode::from(1),
            Self::IoError { .. } => ExitCode::from(1),
        }
    }
}

/// Result type alias for stockroom operations
pub type Result<T> = std::result::Result<T, StockroomError>;
