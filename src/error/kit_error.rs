//! Error type for the fallible edges of the widget kit.
//!
//! Widget operations themselves never fail: empty lists, zero slides and
//! detached affordances are valid steady states, and contract violations
//! (out-of-range row indices) panic. `KitError` covers the ambient surface
//! around the widgets: loading configuration, scheduling timers and driving
//! the terminal in the demo binary.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised outside the widgets' own state machines.
#[derive(Debug, Error)]
pub enum KitError {
    /// Configuration text was not valid JSON for the expected shape.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("Failed to read configuration file '{}': {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A timer was requested outside of a running tokio runtime.
    #[error("No async runtime available to schedule '{operation}'")]
    NoRuntime { operation: String },

    /// Terminal setup or teardown failed.
    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),
}

impl KitError {
    /// Check if the caller can keep going after this error.
    ///
    /// A missing runtime only disables autoplay; everything else means the
    /// requested surface is unusable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, KitError::NoRuntime { .. })
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            KitError::InvalidConfig(_) => "E_KIT_CONFIG",
            KitError::ConfigIo { .. } => "E_KIT_CONFIG_IO",
            KitError::NoRuntime { .. } => "E_KIT_RUNTIME",
            KitError::Terminal(_) => "E_KIT_TERMINAL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            KitError::InvalidConfig(serde_json::from_str::<u8>("x").unwrap_err()),
            KitError::ConfigIo {
                path: PathBuf::from("/nope"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            },
            KitError::NoRuntime {
                operation: "autoplay".to_string(),
            },
            KitError::Terminal(std::io::Error::new(std::io::ErrorKind::Other, "tty")),
        ];

        let mut codes: Vec<_> = errors.iter().map(|e| e.error_code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_only_missing_runtime_is_recoverable() {
        assert!(KitError::NoRuntime {
            operation: "autoplay".to_string()
        }
        .is_recoverable());
        assert!(!KitError::Terminal(std::io::Error::new(std::io::ErrorKind::Other, "tty"))
            .is_recoverable());
    }

    #[test]
    fn test_display_includes_path() {
        let err = KitError::ConfigIo {
            path: PathBuf::from("/etc/swipekit.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/etc/swipekit.json"));
        assert!(msg.contains("missing"));
    }
}
