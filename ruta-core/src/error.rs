//! Error types for Ruta.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`RutaError`] - Top-level error type for all Ruta operations
//! - [`TableError`] - Errors while building a route table
//! - [`PatternError`] - Errors while parsing a path pattern

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Ruta operations.
#[derive(Error, Debug)]
pub enum RutaError {
    /// An error occurred while building a route table.
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// An error occurred while parsing a path pattern.
    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur while parsing a path pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern does not begin with `/`.
    #[error("pattern must begin with '/': `{0}`")]
    MissingLeadingSlash(String),

    /// A parameter segment has no name (a bare `:`).
    #[error("empty parameter name in pattern `{0}`")]
    EmptyParameter(String),

    /// A parameter name contains characters outside `[A-Za-z0-9_]`.
    #[error("invalid parameter name `{name}` in pattern `{pattern}`")]
    InvalidParameter {
        /// The offending pattern.
        pattern: String,
        /// The offending parameter name.
        name: String,
    },

    /// The same parameter name appears twice in one pattern.
    #[error("duplicate parameter name `{name}` in pattern `{pattern}`")]
    DuplicateParameter {
        /// The offending pattern.
        pattern: String,
        /// The repeated parameter name.
        name: String,
    },
}

/// Errors that can occur while building a route table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Two routes were declared under the same logical name.
    #[error("duplicate route name: {0}")]
    DuplicateName(&'static str),

    /// The table was built without a fallback page.
    #[error("route table has no fallback page")]
    MissingFallback,

    /// A route was declared with an unparsable pattern.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] PatternError),
}

// Convenience conversions
impl From<BoxError> for RutaError {
    fn from(err: BoxError) -> Self {
        RutaError::Custom(err)
    }
}
