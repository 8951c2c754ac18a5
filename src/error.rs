//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Domain validation failures live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// What a command looked up and did not find.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    /// No record under the given name
    #[error("Contact not found.")]
    Contact,

    /// The contact is unknown or has no birthday
    #[error("Birthday not found for the contact.")]
    Birthday,

    /// The contact has no phone equal to the one being changed
    #[error("Old phone number not found.")]
    Phone,
}

/// Errors that can occur while executing a single command.
///
/// Every variant is recoverable: the session prints the message and keeps
/// reading commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command received fewer arguments than it needs
    #[error("Not enough arguments.")]
    InsufficientArguments,

    /// A lookup came back empty
    #[error(transparent)]
    NotFound(#[from] NotFound),

    /// A phone number or birthday failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
