/*!
 * Error types for the fichatecnica application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;

use thiserror::Error;

use crate::record::{EMAIL_FIELD, MANDATORY_FIELD, PHONE_FIELD};

/// Reasons a submitted record is rejected before any file is written.
///
/// The display text is the message shown to the user by the front ends.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The mandatory field is empty or whitespace only
    #[error("O campo '{}' é obrigatório.", MANDATORY_FIELD)]
    MissingMandatoryField,

    /// The email field fails the coarse syntactic check
    #[error("Por favor, insira um email válido (campo '{}').", EMAIL_FIELD)]
    InvalidEmail,

    /// The phone field does not start with at least nine digits
    #[error("Por favor, insira um número de telefone válido (campo '{}', mínimo 9 dígitos).", PHONE_FIELD)]
    InvalidPhone,
}

impl ValidationError {
    /// Name of the field the user has to correct
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingMandatoryField => MANDATORY_FIELD,
            Self::InvalidEmail => EMAIL_FIELD,
            Self::InvalidPhone => PHONE_FIELD,
        }
    }
}

/// Errors that can occur while producing the PDF and text artifacts
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Writing an artifact to disk failed
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        /// Target path of the artifact
        path: PathBuf,
        /// Underlying system error
        #[source]
        source: std::io::Error,
    },

    /// The PDF backend could not serialize the document
    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

impl DocumentError {
    pub fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailure { path: path.into(), source }
    }
}

impl From<lopdf::Error> for DocumentError {
    fn from(error: lopdf::Error) -> Self {
        Self::Pdf(error.to_string())
    }
}

/// Errors raised by the front ends while collecting a record
#[derive(Error, Debug)]
pub enum FormError {
    /// A field name that is not part of the field list
    #[error("Unknown field: '{0}'")]
    UnknownField(String),

    /// A `--set` argument without the `NAME=VALUE` shape
    #[error("Expected NAME=VALUE, got '{0}'")]
    MalformedAssignment(String),

    /// The record file could not be read or parsed
    #[error("Failed to read record file {}: {message}", path.display())]
    RecordFile {
        path: PathBuf,
        message: String,
    },

    /// Terminal input ended before the form was complete
    #[error("Input closed before the form was complete")]
    InputClosed,
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// The record was rejected
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Artifact generation failed
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Record collection failed
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
