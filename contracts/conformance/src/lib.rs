//! Getter-Setter Conformance Suite
//!
//! This crate mechanically verifies that a getter-setter unit follows the
//! accessor convention, so test authors do not have to write the same
//! assertions for every unit by hand.
//!
//! # Verification sequence
//!
//! 1. **Structure**: the unit declares exactly one managed field
//! 2. **Naming**: `set`, `get`, `has`, `getDefault`, `hasDefault` names are
//!    derived from the capitalised field name
//! 3. **Legacy**: `hasDefault` reports no default (only when requested)
//! 4. **Absent default**: `getDefault` returns `None`
//! 5. **No value**: `has` is false before anything is stored
//! 6. **Round trip**: `set(v)` then `get()` returns `v`
//! 7. **Default substitution**: with `getDefault` overridden to return `d`,
//!    `get()` on a fresh double returns `d`
//!
//! # Example
//!
//! ```rust,ignore
//! use gst_conformance::{ConventionVerifier, VerifierConfig};
//!
//! let verifier = ConventionVerifier::new(VerifierConfig::default());
//! verifier.verify::<Person>("Alice".to_string(), "Bob".to_string())?;
//! ```

pub mod assertions;
pub mod compat;
pub mod diagnostics;
pub mod double;
pub mod error;
pub mod framework;
pub mod harness;
pub mod naming;
pub mod reports;
pub mod structure;

pub use double::{Overrides, TestDouble};
pub use error::{AssertionFailure, ConformanceError, ConformanceResult, Phase};
pub use framework::{ConventionVerifier, FailureMessages, VerifierConfig, VERBOSE_FLAGS};
pub use gst_contract::{GetterSetter, Identity, Instance, Receiver, UnitDescriptor};
pub use harness::TestHarness;
pub use naming::{capitalize, Operation, OperationNames};
pub use reports::{ConformanceReport, PhaseResult, ReportSummary, TestStatus};
pub use structure::{operation_names, resolve_field_name};
