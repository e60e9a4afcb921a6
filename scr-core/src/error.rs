//! Error types for scr-core.
//!
//! Parameter errors come in two presentations selected by [`ErrorMode`]:
//! a distinguishable pair (`ParamType`/`ParamValue`) when debugging, and
//! generic type/value errors otherwise. The message text never changes.

use thiserror::Error;

/// Custom error types for scr
#[derive(Error, Debug)]
pub enum ScrError {
    #[error("{0}")]
    ParamType(String),

    #[error("{0}")]
    ParamValue(String),

    #[error("{0}")]
    InvalidType(String),

    #[error("{0}")]
    InvalidValue(String),

    #[error("unknown {table}: '{key}'")]
    Lookup { table: &'static str, key: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("{0}")]
    Command(String),
}

/// Result type for scr operations
pub type ScrResult<T> = std::result::Result<T, ScrError>;

impl ScrError {
    pub fn code(&self) -> &'static str {
        match self {
            ScrError::ParamType(_) => "PARAM_TYPE_ERROR",
            ScrError::ParamValue(_) => "PARAM_VALUE_ERROR",
            ScrError::InvalidType(_) => "TYPE_ERROR",
            ScrError::InvalidValue(_) => "VALUE_ERROR",
            ScrError::Lookup { .. } => "LOOKUP_ERROR",
            ScrError::Io(_) => "IO_ERROR",
            ScrError::Json(_) => "JSON_ERROR",
            ScrError::Logging(_) => "LOGGING_ERROR",
            ScrError::Command(_) => "COMMAND_ERROR",
        }
    }

    /// True for errors a CLI layer should report as a bad argument.
    ///
    /// Unknown placeholder tokens and level names are grouped here with the
    /// parameter kinds even though they keep their own variant.
    pub fn is_param_error(&self) -> bool {
        matches!(
            self,
            ScrError::ParamType(_)
                | ScrError::ParamValue(_)
                | ScrError::InvalidType(_)
                | ScrError::InvalidValue(_)
                | ScrError::Lookup { .. }
        )
    }

    /// True when the error was raised for a structurally wrong value.
    pub fn is_type_error(&self) -> bool {
        matches!(self, ScrError::ParamType(_) | ScrError::InvalidType(_))
    }
}

/// Selects how parameter errors are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Generic type/value errors, as an end user expects from bad arguments.
    #[default]
    Plain,
    /// Dedicated parameter error kinds, for tests and stack-trace display.
    Debug,
}

impl ErrorMode {
    pub fn from_debug(debug: bool) -> Self {
        if debug { ErrorMode::Debug } else { ErrorMode::Plain }
    }

    pub fn is_debug(self) -> bool {
        self == ErrorMode::Debug
    }

    /// Builds a parameter error of the kind this mode reports.
    pub fn param_error(self, msg: impl Into<String>, bad_type: bool) -> ScrError {
        let msg = msg.into();
        match (self, bad_type) {
            (ErrorMode::Debug, true) => ScrError::ParamType(msg),
            (ErrorMode::Debug, false) => ScrError::ParamValue(msg),
            (ErrorMode::Plain, true) => ScrError::InvalidType(msg),
            (ErrorMode::Plain, false) => ScrError::InvalidValue(msg),
        }
    }

    /// Shorthand for a value error, the common case.
    pub fn value_error(self, msg: impl Into<String>) -> ScrError {
        self.param_error(msg, false)
    }
}
