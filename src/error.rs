//! Custom error types for the Deen Dashboard application
//!
//! This module defines custom error types and implements the necessary traits
//! to properly handle errors throughout the application. Component operations
//! never surface these to the page; they collapse them into fixed placeholder
//! strings and log the detail instead.

use std::fmt;

/// Main error type for the Deen Dashboard application
#[derive(Debug)]
pub enum DeenError {
    /// Error occurred while parsing address
    AddressParse(std::net::AddrParseError),

    /// Error occurred while binding or running the server
    ServerRun(std::io::Error),

    /// Error occurred while reading configuration file
    ConfigRead(std::io::Error),

    /// Error occurred while parsing configuration
    ConfigParse(json5::Error),

    /// A configured or derived URL could not be built
    InvalidUrl(url::ParseError),

    /// The remote service could not be reached or answered with a non-success status
    Transport(reqwest::Error),

    /// The remote service answered with a body that is not the expected JSON shape
    Decode(serde_json::Error),

    /// User input was rejected before any request was made
    Validation(String),

    /// Generic error with a message
    Generic(String),
}

impl fmt::Display for DeenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeenError::AddressParse(e) => {
                write!(f, "Failed to parse network address: {e}")
            }
            DeenError::ServerRun(e) => {
                write!(f, "Server runtime error: {e}")
            }
            DeenError::ConfigRead(e) => {
                write!(f, "Failed to read configuration file: {e}")
            }
            DeenError::ConfigParse(e) => {
                write!(f, "Failed to parse configuration: {e}")
            }
            DeenError::InvalidUrl(e) => {
                write!(f, "Invalid URL: {e}")
            }
            DeenError::Transport(e) => {
                write!(f, "Request to remote service failed: {e}")
            }
            DeenError::Decode(e) => {
                write!(f, "Unexpected response from remote service: {e}")
            }
            DeenError::Validation(msg) => {
                write!(f, "Invalid input: {msg}")
            }
            DeenError::Generic(msg) => {
                write!(f, "Error: {msg}")
            }
        }
    }
}

impl std::error::Error for DeenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeenError::AddressParse(e) => Some(e),
            DeenError::ServerRun(e) | DeenError::ConfigRead(e) => Some(e),
            DeenError::ConfigParse(e) => Some(e),
            DeenError::InvalidUrl(e) => Some(e),
            DeenError::Transport(e) => Some(e),
            DeenError::Decode(e) => Some(e),
            DeenError::Validation(_) | DeenError::Generic(_) => None,
        }
    }
}

impl From<std::net::AddrParseError> for DeenError {
    fn from(error: std::net::AddrParseError) -> Self {
        DeenError::AddressParse(error)
    }
}

impl From<std::io::Error> for DeenError {
    fn from(error: std::io::Error) -> Self {
        DeenError::ConfigRead(error)
    }
}

impl From<json5::Error> for DeenError {
    fn from(error: json5::Error) -> Self {
        DeenError::ConfigParse(error)
    }
}

impl From<url::ParseError> for DeenError {
    fn from(error: url::ParseError) -> Self {
        DeenError::InvalidUrl(error)
    }
}

impl From<reqwest::Error> for DeenError {
    fn from(error: reqwest::Error) -> Self {
        DeenError::Transport(error)
    }
}

impl From<serde_json::Error> for DeenError {
    fn from(error: serde_json::Error) -> Self {
        DeenError::Decode(error)
    }
}

impl From<&str> for DeenError {
    fn from(message: &str) -> Self {
        DeenError::Generic(message.to_string())
    }
}

impl From<String> for DeenError {
    fn from(message: String) -> Self {
        DeenError::Generic(message)
    }
}

/// Result type alias using our custom error type
pub type Result<T> = std::result::Result<T, DeenError>;
