//! Error types for Connecto.

/// Top-level error type for the application.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    #[error("Situation error: {0}")]
    Situation(#[from] SituationError),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised while resolving an address into a route.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Malformed address: {0}")]
    Malformed(String),
}

/// Situation lookup errors.
///
/// The situation set is closed, so the only failure is text that names none of
/// its members.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SituationError {
    #[error("Unknown situation: {0} (expected awkward, tension or surface)")]
    Unknown(String),
}

/// Errors from interpreting a line of user input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument for {command}")]
    MissingArgument { command: String },

    #[error("'{command}' is not available on the {screen} screen")]
    Unavailable { command: String, screen: String },

    #[error("Navigation failed: {0}")]
    Navigation(#[from] NavigationError),

    #[error("Invalid situation: {0}")]
    Situation(#[from] SituationError),
}

/// Channel-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Failed to send response on channel {name}: {reason}")]
    SendFailed { name: String, reason: String },
}
