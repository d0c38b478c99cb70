//! Common error infrastructure for game-core.
//!
//! This module provides the shared classification used by every error type in
//! game-core. Domain-specific errors (e.g., `StateError`, `SelectionError`) are
//! defined in their respective modules alongside the operations that raise
//! them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each component has its own error type with specific variants
//! - **Local Handling**: Recoverable errors are converted to events where they occur
//! - **Severity Classification**: Errors are categorized for recovery strategies

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Errors are classified by their recoverability and expected handling:
/// - **Recoverable**: Conditions the player can fix by choosing differently
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Unrecoverable errors, the session cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with the same or an alternative choice.
    ///
    /// Examples: not enough money for a hero
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: selection token is not a number, malformed unit record
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: unit id allocator exhausted, battle never converges
    /// These indicate bugs or broken content and should be investigated.
    Internal,

    /// Fatal error - the session cannot continue.
    ///
    /// Examples: selection input closed or unreadable
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

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// This trait provides a uniform interface for error classification across all
/// error types in the crate.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    ///
    /// This is used for error handling strategies and logging priorities.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, log fields, and testing.
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
