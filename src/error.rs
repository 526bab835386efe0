//! Error types for the overlay and the shell around it.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can fail while capturing, configuring or drawing.
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal failure: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Diagnostic Logging Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to initialize diagnostic logging: {message}")]
    LoggingInit { message: String },

    // ─────────────────────────────────────────────────────────────
    // Facade Interception Errors
    // ─────────────────────────────────────────────────────────────
    #[error("A capture listener is already installed")]
    AlreadyInstalled,

    #[error("Log facade error: {message}")]
    Facade { message: String },

    // ─────────────────────────────────────────────────────────────
    // Template Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Template file not found: {path}")]
    TemplateNotFound { path: PathBuf },

    #[error("Invalid template {path}: {message}")]
    TemplateInvalid { path: PathBuf, message: String },
}

// ─────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn logging_init(message: impl Into<String>) -> Self {
        Self::LoggingInit {
            message: message.into(),
        }
    }

    pub fn facade(message: impl Into<String>) -> Self {
        Self::Facade {
            message: message.into(),
        }
    }

    pub fn template_invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::TemplateInvalid {
            path: path.into(),
            message: message.into(),
        }
    }

    /// True when the app keeps running in a degraded but usable state
    /// (capture without chrome, chrome without capture).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::AlreadyInstalled
                | Error::Facade { .. }
                | Error::TemplateNotFound { .. }
                | Error::TemplateInvalid { .. }
        )
    }

    /// True when there is nothing left to degrade to and the app must exit.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Terminal { .. } | Error::LoggingInit { .. })
    }
}

// ─────────────────────────────────────────────────────────────────
// Result Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Attach a context line to a failing `Result` on its way up.
///
/// The context lands in the diagnostic log, never on the intercepted
/// facade, so error reporting cannot feed back into the capture buffer.
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Lazy variant for contexts that cost something to build.
    fn with_context(self, f: impl FnOnce() -> String) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!(error = ?err, "{}", context.into());
            err
        })
    }

    fn with_context(self, f: impl FnOnce() -> String) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!(error = ?err, "{}", f());
            err
        })
    }
}
