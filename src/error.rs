//! Error types for Standings Web
//!
//! This module provides the error type hierarchy using `thiserror`
//! for proper error handling across all components.

use thiserror::Error;

/// The main error type for Standings Web operations
#[derive(Error, Debug)]
pub enum Error {
    /// Source page retrieval errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Table extraction errors
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Source page retrieval errors
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to construct the HTTP client
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// The request could not be completed (DNS, connect, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The source answered with a non-success status
    #[error("Source returned HTTP {status}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
    },

    /// The response body could not be read as text
    #[error("Failed to read response body: {0}")]
    BodyRead(String),
}

/// Table extraction errors
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A configured CSS selector would not parse
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

/// Result type alias for Standings Web operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a generic error from a string
    pub fn generic<S: Into<String>>(msg: S) -> Self {
        Error::Generic(msg.into())
    }
}

/// Convert reqwest errors into the fetch error family
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::RequestFailed(err.to_string())
    }
}
