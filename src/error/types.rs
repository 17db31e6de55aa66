//! Error types
//!
//! Defines domain-specific error types for each module of the chat server.

use std::fmt;
use std::io;

use crate::client::ClientId;

/// Client registry errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateIdentity(ClientId),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateIdentity(id) => {
                write!(f, "Client {} is already registered", id)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Session errors
///
/// Every variant ends the session; none of them cross into other sessions.
#[derive(Debug)]
pub enum SessionError {
    /// The peer went away before sending a name
    HandshakeAborted,
    Registry(RegistryError),
    IoError(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::HandshakeAborted => {
                write!(f, "Client disconnected before sending a name")
            }
            SessionError::Registry(e) => write!(f, "Registry error: {}", e),
            SessionError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<RegistryError> for SessionError {
    fn from(error: RegistryError) -> Self {
        SessionError::Registry(error)
    }
}

impl From<io::Error> for SessionError {
    fn from(error: io::Error) -> Self {
        SessionError::IoError(error)
    }
}

/// Top-level server error
#[derive(Debug)]
pub enum ServerError {
    Config(config::ConfigError),
    Bind { addr: String, source: io::Error },
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Config(e) => write!(f, "Configuration error: {}", e),
            ServerError::Bind { addr, source } => {
                write!(f, "Failed to bind to {}: {}", addr, source)
            }
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::Config(e) => Some(e),
            ServerError::Bind { source, .. } => Some(source),
        }
    }
}

impl From<config::ConfigError> for ServerError {
    fn from(error: config::ConfigError) -> Self {
        ServerError::Config(error)
    }
}
