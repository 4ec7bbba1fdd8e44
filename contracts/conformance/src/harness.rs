//! Test harness for running conformance checks from `#[test]` functions

use crate::error::ConformanceResult;
use crate::reports::ConformanceReport;
use crate::{ConventionVerifier, VerifierConfig};
use gst_contract::GetterSetter;

/// Test harness for conformance testing
#[derive(Debug, Clone, Default)]
pub struct TestHarness {
    verifier: ConventionVerifier,
}

impl TestHarness {
    /// Create a new test harness with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a test harness with custom configuration
    pub fn with_config(config: VerifierConfig) -> Self {
        Self {
            verifier: ConventionVerifier::new(config),
        }
    }

    pub fn verifier(&self) -> &ConventionVerifier {
        &self.verifier
    }

    /// Verify a unit, stopping at the first failure
    pub fn verify<U: GetterSetter>(
        &self,
        sample_value: U::Value,
        sample_default: U::Value,
    ) -> ConformanceResult<()> {
        self.verifier.verify::<U>(sample_value, sample_default)
    }

    /// Verify a unit and return the full report
    pub fn run<U: GetterSetter>(
        &self,
        sample_value: U::Value,
        sample_default: U::Value,
    ) -> ConformanceReport {
        self.verifier.run::<U>(sample_value, sample_default)
    }

    /// Run the checks and panic with the text report unless the unit conforms
    pub fn assert_conformant<U: GetterSetter>(
        &self,
        sample_value: U::Value,
        sample_default: U::Value,
    ) {
        let report = self.verifier.run::<U>(sample_value, sample_default);

        if !report.is_conformant() {
            panic!(
                "Unit '{}' is not conformant:\n{}",
                report.unit,
                report.to_text()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creation() {
        let harness = TestHarness::new();
        assert!(!harness.verifier().config().verbose);
    }

    #[test]
    fn test_harness_with_config() {
        let config = VerifierConfig::default()
            .with_verbose(true)
            .with_legacy_has_default_check(true);
        let harness = TestHarness::with_config(config);
        assert!(harness.verifier().config().verbose);
        assert!(harness.verifier().config().check_has_default);
    }
}
