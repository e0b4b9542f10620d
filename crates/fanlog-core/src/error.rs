//! Logging error types

use thiserror::Error;

/// Errors that can occur while configuring destinations or emitting messages
#[derive(Error, Debug)]
pub enum Error {
    /// Destination kind cannot accept this operation (reserved kinds, or a
    /// property applied to the wrong kind)
    #[error("invalid destination: {0}")]
    InvalidDestination(String),

    /// Attempted write to a disabled destination
    ///
    /// Only reachable internally; dispatch skips disabled destinations
    /// before any write is attempted.
    #[error("destination is disabled")]
    DestinationDisabled,

    /// Open/read/write/mkdir failure on a destination sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A single rendered message is larger than the destination's byte budget
    #[error("message of {message_len} bytes can never fit a {max_size}-byte file limit")]
    RotationImpossible { message_len: u64, max_size: u64 },

    /// Template/argument mismatch while rendering
    #[error("format error: {0}")]
    Format(String),

    /// Invalid logger configuration
    #[error("config error: {0}")]
    Config(String),
}

impl Error {
    /// Create an invalid-destination error
    pub fn invalid_destination(message: impl Into<String>) -> Self {
        Self::InvalidDestination(message.into())
    }

    /// Create a format error
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_destination("udp is reserved");
        assert_eq!(err.to_string(), "invalid destination: udp is reserved");

        let err = Error::RotationImpossible {
            message_len: 200,
            max_size: 100,
        };
        assert!(err.to_string().contains("200"));
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
