//! Unified error types for ccref.
//!
//! The browsing core has exactly one user-triggerable failure mode (an
//! invalid regex pattern) and that one is absorbed by the query
//! compiler's literal fallback, so it never surfaces here. What remains
//! is the ambient surface: terminal and output I/O, JSON serialization,
//! and unknown names passed on the command line.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ccref operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReferenceError {
    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization errors
    #[error("JSON serialization failed: {0}")]
    Json(String),

    /// A `--category` name that matches no category in the dataset
    #[error("Unknown category: {name:?} (run `ccref list` for valid names)")]
    UnknownCategory { name: String },

    /// A `--type` name that matches no item kind
    #[error("Unknown item type: {name:?} (valid: {valid})")]
    UnknownKind { name: String, valid: String },
}

/// Convenient Result type for ccref operations
pub type Result<T> = std::result::Result<T, ReferenceError>;

impl ReferenceError {
    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create an unknown-category error
    pub fn unknown_category(name: impl Into<String>) -> Self {
        Self::UnknownCategory { name: name.into() }
    }

    /// Create an unknown-kind error listing the valid kind names
    pub fn unknown_kind(name: impl Into<String>, valid: impl Into<String>) -> Self {
        Self::UnknownKind {
            name: name.into(),
            valid: valid.into(),
        }
    }
}

impl From<std::io::Error> for ReferenceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ReferenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing message,
/// building a chain that shows the path through the code.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (only evaluated on the error path).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ReferenceError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing message.
fn add_context_to_error(err: ReferenceError, new_ctx: &str) -> ReferenceError {
    match err {
        ReferenceError::Io {
            path,
            message,
            source,
        } => ReferenceError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        ReferenceError::Json(msg) => ReferenceError::Json(chain_context(new_ctx, &msg)),
        other => other,
    }
}

/// Chain two context strings together.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ReferenceError::io("/tmp/results.json", io_err);
        assert!(err.to_string().contains("/tmp/results.json"));
    }

    #[test]
    fn test_unknown_category_display() {
        let err = ReferenceError::unknown_category("Nonexistent");
        let display = err.to_string();
        assert!(display.contains("Nonexistent"));
        assert!(display.contains("ccref list"));
    }

    #[test]
    fn test_unknown_kind_lists_valid_names() {
        let err = ReferenceError::unknown_kind("widget", "slash, keyboard, flag");
        let display = err.to_string();
        assert!(display.contains("widget"));
        assert!(display.contains("slash, keyboard, flag"));
    }

    #[test]
    fn test_context_chaining() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let result: Result<()> = Err(ReferenceError::from(io_err)).context("writing results");

        match result {
            Err(ReferenceError::Io { message, .. }) => {
                assert!(message.contains("writing results"), "got: {message}");
                assert!(message.contains("denied"), "got: {message}");
            }
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(ReferenceError::Json("bad".to_string()));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
