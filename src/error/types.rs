//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for pydock operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PydockError {
    /// Configuration Error - missing or invalid configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Environment Error - unknown or duplicate environment name
    #[error("Environment error: {message}")]
    Environment { message: String },

    /// Engine Error - the container engine returned a non-zero status
    #[error("Engine error: {message}")]
    Engine { message: String, status: i32 },

    /// Filesystem Error - file operation failed
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },
}

impl PydockError {
    /// Get the appropriate exit code for this error type
    ///
    /// Engine failures propagate the underlying command's exit status
    /// verbatim; everything else maps to a small fixed code.
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Environment { .. } => 2,
            Self::Engine { status, .. } => status,
            Self::Filesystem { .. } => 4,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an environment error
    #[inline]
    pub fn environment<S: Into<String>>(message: S) -> Self {
        Self::Environment {
            message: message.into(),
        }
    }

    /// Create an engine error carrying the command's exit status
    #[inline]
    pub fn engine<S: Into<String>>(message: S, status: i32) -> Self {
        Self::Engine {
            message: message.into(),
            status,
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_propagate_status() {
        let err = PydockError::engine("docker build failed", 125);
        assert_eq!(err.exit_code(), 125);
    }

    #[test]
    fn fixed_codes_for_local_errors() {
        assert_eq!(PydockError::configuration("bad").exit_code(), 1);
        assert_eq!(PydockError::environment("missing").exit_code(), 2);
        assert_eq!(PydockError::filesystem("denied").exit_code(), 4);
    }
}
