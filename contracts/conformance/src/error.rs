//! Error types for convention verification.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The assertion phases of a verification run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Legacy: `hasDefault` reports no default
    NoDefaultPresent,
    /// `getDefault` returns the absence sentinel
    DefaultIsAbsent,
    /// `has` is false before anything is stored
    HasNoValue,
    /// `set` then `get` returns the stored value
    RoundTrip,
    /// `get` falls back to an overridden `getDefault`
    DefaultSubstitution,
}

impl Phase {
    /// All phases in execution order.
    pub fn all() -> &'static [Phase] {
        &[
            Self::NoDefaultPresent,
            Self::DefaultIsAbsent,
            Self::HasNoValue,
            Self::RoundTrip,
            Self::DefaultSubstitution,
        ]
    }

    /// Short machine-friendly label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoDefaultPresent => "no_default_present",
            Self::DefaultIsAbsent => "default_is_absent",
            Self::HasNoValue => "has_no_value",
            Self::RoundTrip => "round_trip",
            Self::DefaultSubstitution => "default_substitution",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A behavioural assertion that did not hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionFailure {
    /// Phase that failed
    pub phase: Phase,
    /// Derived name of the operation under test, e.g. `getName`
    pub operation: String,
    /// Failure message (default or caller supplied)
    pub message: String,
    /// Expected value, for value mismatches
    pub expected: Option<String>,
    /// Observed value, for value mismatches
    pub actual: Option<String>,
}

impl AssertionFailure {
    pub fn new(phase: Phase, operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            phase,
            operation: operation.into(),
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Attach the expected and observed values
    pub fn with_values(mut self, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self.actual = Some(actual.into());
        self
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(): {}", self.operation, self.message)?;
        if let (Some(expected), Some(actual)) = (&self.expected, &self.actual) {
            write!(f, " (expected {}, got {})", expected, actual)?;
        }
        Ok(())
    }
}

/// Errors raised while verifying a unit.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConformanceError {
    /// The unit does not declare exactly one managed field.
    #[error("unit {unit} declares {found} managed fields; only a single field can be verified")]
    IncorrectFieldCount { unit: String, found: usize },

    /// A behavioural assertion failed.
    #[error("assertion failed in {phase}: {0}", phase = .0.phase)]
    Assertion(AssertionFailure),
}

impl ConformanceError {
    /// The assertion failure, if this is one
    pub fn as_assertion(&self) -> Option<&AssertionFailure> {
        match self {
            Self::Assertion(failure) => Some(failure),
            Self::IncorrectFieldCount { .. } => None,
        }
    }

    /// Whether this is a structural (field count) error
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::IncorrectFieldCount { .. })
    }
}

impl From<AssertionFailure> for ConformanceError {
    fn from(failure: AssertionFailure) -> Self {
        Self::Assertion(failure)
    }
}

/// Result type for verification operations.
pub type ConformanceResult<T> = Result<T, ConformanceError>;
