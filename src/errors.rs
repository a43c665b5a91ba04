// ABOUTME: Error types for the aqilha-deck application
// ABOUTME: Provides structured error handling for building and saving the deck

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Failed to write file: {0}")]
    FileWriteError(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    ArchiveError(String),

    #[error("XML generation error: {0}")]
    XmlError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

// Implement conversion from anyhow::Error to our DeckError
impl From<anyhow::Error> for DeckError {
    fn from(err: anyhow::Error) -> Self {
        DeckError::UnknownError(err.to_string())
    }
}

// Implement conversion from zip errors
impl From<zip::result::ZipError> for DeckError {
    fn from(err: zip::result::ZipError) -> Self {
        DeckError::ArchiveError(format!("ZIP operation failed: {}", err))
    }
}

impl From<quick_xml::Error> for DeckError {
    fn from(err: quick_xml::Error) -> Self {
        DeckError::XmlError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
