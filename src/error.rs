//! Error types for dailycode.
//!
//! Uses thiserror for derive macros and maps every variant onto an exit code.

use crate::exit_codes;
use crate::generator::TemplateError;
use thiserror::Error;

/// Main error type for dailycode operations.
#[derive(Error, Debug)]
pub enum DailyCodeError {
    /// An algorithm was called with an argument outside its domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The result does not fit the return type.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),

    /// A selector produced indices the generator cannot use.
    #[error("invalid template selection: {0}")]
    InvalidSelection(String),

    /// Header or file-name template failed to render.
    #[error("template rendering failed: {0}")]
    Template(#[from] TemplateError),

    /// The generated file name would not land directly in the output directory.
    #[error("invalid output file name: {0}")]
    InvalidOutputPath(String),

    /// Configuration could not be parsed or failed validation.
    #[error("{0}")]
    Config(String),

    /// Filesystem operation failed.
    #[error("{0}")]
    Io(String),
}

impl DailyCodeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DailyCodeError::InvalidArgument(_) | DailyCodeError::Overflow(_) => {
                exit_codes::ALGORITHM_FAILURE
            }
            DailyCodeError::InvalidSelection(_)
            | DailyCodeError::Template(_)
            | DailyCodeError::InvalidOutputPath(_)
            | DailyCodeError::Config(_) => exit_codes::USER_ERROR,
            DailyCodeError::Io(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for dailycode operations.
pub type Result<T> = std::result::Result<T, DailyCodeError>;
