//! Verbose trace output
//!
//! Trace lines describe what the verifier is about to exercise. They are
//! emitted as `tracing` events under the `gst::verify` target, and only
//! when the verifier runs in verbose mode. They never affect the outcome.

use std::fmt;

/// Target used for every trace line.
pub const TRACE_TARGET: &str = "gst::verify";

/// Gate for trace output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostics {
    verbose: bool,
}

impl Diagnostics {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn enabled(&self) -> bool {
        self.verbose
    }

    /// Emit a trace line when verbose
    pub fn line(&self, message: impl fmt::Display) {
        if self.verbose {
            tracing::info!(target: TRACE_TARGET, "{}", message);
        }
    }

    /// `testing getName()`
    pub fn testing(&self, operation: &str) {
        self.line(format_args!(" testing {}()", operation));
    }

    /// `testing setName("Alice")`
    pub fn testing_with<V: fmt::Debug>(&self, operation: &str, value: &V) {
        self.line(format_args!(" testing {}({:?})", operation, value));
    }

    /// `mocking getDefaultName(), must return "Bob"`
    pub fn mocking<V: fmt::Debug>(&self, operation: &str, value: &V) {
        self.line(format_args!(" mocking {}(), must return {:?}", operation, value));
    }
}

/// Render an observed accessor result for failure messages.
pub fn describe<V: fmt::Debug>(value: Option<&V>) -> String {
    match value {
        Some(v) => format!("{:?}", v),
        None => "none".to_string(),
    }
}
