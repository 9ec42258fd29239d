//! # Error Taxonomy
//!
//! The structured error hierarchy shared by the store, the services, and
//! the API surface. All errors use `thiserror` for derive-based `Display`
//! and `Error` implementations.
//!
//! ## Design
//!
//! - `Validation` carries every violated constraint, not just the first,
//!   so a caller can correct a submission in one round trip.
//! - `Unauthorized` is never downgraded to success anywhere in the stack.
//! - `StoreUnavailable` is an infrastructure failure: propagated unchanged,
//!   retried by the caller, never by this core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error type for registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Malformed or constraint-violating input. Recoverable by the caller
    /// resubmitting corrected data.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A referenced entity does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// The kind of entity ("package", "version", "org").
        kind: &'static str,
        /// The identifier that failed to resolve.
        id: String,
    },

    /// Missing or insufficient identity for a mutating operation.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Infrastructure failure in the backing store.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl RegistryError {
    /// Build a single-violation validation error.
    pub fn validation(violation: impl Into<String>) -> Self {
        Self::Validation(ValidationError::single(violation))
    }

    /// Build a not-found error for the given entity kind and id.
    pub fn not_found(kind: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

/// A constraint-violation report.
///
/// Collects *all* violated constraints from one validation pass. The
/// `Display` form joins them so log lines and error bodies stay readable,
/// while the structured list survives for API serialization.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}", .violations.join("; "))]
pub struct ValidationError {
    /// Every constraint the input violated, in check order.
    pub violations: Vec<String>,
}

impl ValidationError {
    /// A report with a single violation.
    pub fn single(violation: impl Into<String>) -> Self {
        Self {
            violations: vec![violation.into()],
        }
    }

    /// A report from a collected list of violations.
    ///
    /// Callers must ensure the list is non-empty; an empty report would
    /// reject an input without saying why.
    pub fn from_violations(violations: Vec<String>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }
}

/// A builder that accumulates violations during a multi-field check.
#[derive(Debug, Default)]
pub struct ConstraintCheck {
    violations: Vec<String>,
}

impl ConstraintCheck {
    /// Start an empty check.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation.
    pub fn fail(&mut self, violation: impl Into<String>) {
        self.violations.push(violation.into());
    }

    /// Record a violation unless the condition holds.
    pub fn require(&mut self, ok: bool, violation: impl Into<String>) {
        if !ok {
            self.fail(violation);
        }
    }

    /// Finish the check: `Ok(())` if nothing was violated, otherwise the
    /// full report.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::from_violations(self.violations))
        }
    }
}
