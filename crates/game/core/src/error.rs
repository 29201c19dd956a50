//! Common error infrastructure for buster-core.
//!
//! Domain-specific errors (e.g., `TurnError`) are defined in their respective
//! modules alongside the operations they guard. This module only provides the
//! shared classification used to decide whether a turn can continue.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each operation has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Invariants as Fatal**: Stack discipline violations abort the session

use stack_fsm::StackError;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Recoverable error - the turn can proceed without the failed step.
    Recoverable,

    /// Validation error - invalid input that is skipped, not retried.
    ///
    /// Examples: report for an unknown ghost id
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - an invariant of the decision engine was violated.
    ///
    /// Examples: activation stack overflow or underflow
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the turn may continue after this error.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all buster-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl GameError for StackError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            StackError::Overflow { .. } => "STACK_OVERFLOW",
            StackError::Underflow => "STACK_UNDERFLOW",
        }
    }
}
