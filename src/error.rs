//! Crate-level error types.

use std::fmt;

/// Errors produced by the animus crate.
///
/// Transitions and per-frame ticks never fail; these only surface while
/// building forms from options or while loading/saving option presets.
#[derive(Debug)]
pub enum AnimusError {
    /// A form or option section failed construction-time validation.
    InvalidConfig(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for AnimusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => {
                write!(f, "invalid configuration: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for AnimusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AnimusError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Shorthand for building an [`AnimusError::InvalidConfig`].
pub(crate) fn invalid(msg: impl Into<String>) -> AnimusError {
    AnimusError::InvalidConfig(msg.into())
}
