//! Error types for course deck generation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a course deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read an input file or write the output artifact.
    #[error("Failed to read or write file: {0}")]
    IoError(#[from] std::io::Error),

    /// ZIP archive error while assembling the PPTX package.
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML writing error while composing a package part.
    #[error("XML error: {0}")]
    XmlError(String),
}
