// ============================================================================
// scr-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// This module provides error handling utilities for the CLI that integrate
// with the scr-core error types while adding CLI-specific error contexts.
//
// KEY COMPONENTS:
// - CliResult: Type alias for CLI operations
// - CliErrorContext: prefixes errors without changing their kind
// - exit_code: maps an error to the process exit status

// ---- Internal crate imports ----
use scr_core::{ScrError, ScrResult};

// ---- Standard library imports ----
use std::fmt;

use crate::config::{EXIT_FAILURE, EXIT_PARAM_ERROR};

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Type alias for CLI results using ScrError.
pub type CliResult<T> = ScrResult<T>;

// ============================================================================
// ERROR CONVERSION UTILITIES
// ============================================================================

/// Extension trait for adding context to errors in the CLI.
///
/// Parameter errors keep their kind so the exit status still reports a bad
/// argument; everything else becomes a command error.
pub trait CliErrorContext<T> {
    /// Add context to an error.
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<ScrError>,
{
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| with_context(e.into(), context))
    }
}

fn with_context<C: fmt::Display>(error: ScrError, context: C) -> ScrError {
    match error {
        ScrError::ParamType(msg) => ScrError::ParamType(format!("{context}: {msg}")),
        ScrError::ParamValue(msg) => ScrError::ParamValue(format!("{context}: {msg}")),
        ScrError::InvalidType(msg) => ScrError::InvalidType(format!("{context}: {msg}")),
        ScrError::InvalidValue(msg) => ScrError::InvalidValue(format!("{context}: {msg}")),
        lookup @ ScrError::Lookup { .. } => lookup,
        other => ScrError::Command(format!("{context}: {other}")),
    }
}

/// Process exit status for a failed command.
pub fn exit_code(error: &ScrError) -> i32 {
    if error.is_param_error() {
        EXIT_PARAM_ERROR
    } else {
        EXIT_FAILURE
    }
}
