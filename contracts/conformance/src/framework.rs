//! Convention verification framework

use crate::diagnostics::Diagnostics;
use crate::double::TestDouble;
use crate::error::{ConformanceResult, Phase};
use crate::naming::OperationNames;
use crate::reports::{ConformanceReport, PhaseResult};
use crate::structure::resolve_field_name;
use gst_contract::{GetterSetter, Receiver};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Command-line flags that switch on verbose trace output.
pub const VERBOSE_FLAGS: &[&str] = &["--debug", "-vvv", "--verbose"];

/// Failure messages for each assertion phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureMessages {
    pub no_default_present: String,
    pub default_is_absent: String,
    pub has_no_value: String,
    pub round_trip: String,
    pub default_substitution: String,
}

impl FailureMessages {
    /// Message used when the given phase fails
    pub fn for_phase(&self, phase: Phase) -> &str {
        match phase {
            Phase::NoDefaultPresent => &self.no_default_present,
            Phase::DefaultIsAbsent => &self.default_is_absent,
            Phase::HasNoValue => &self.has_no_value,
            Phase::RoundTrip => &self.round_trip,
            Phase::DefaultSubstitution => &self.default_substitution,
        }
    }

    /// Replace the message for one phase
    pub fn with(mut self, phase: Phase, message: impl Into<String>) -> Self {
        let message = message.into();
        match phase {
            Phase::NoDefaultPresent => self.no_default_present = message,
            Phase::DefaultIsAbsent => self.default_is_absent = message,
            Phase::HasNoValue => self.has_no_value = message,
            Phase::RoundTrip => self.round_trip = message,
            Phase::DefaultSubstitution => self.default_substitution = message,
        }
        self
    }
}

impl Default for FailureMessages {
    fn default() -> Self {
        Self {
            no_default_present: "Should not contain default value".to_string(),
            default_is_absent: "Default value should be absent".to_string(),
            has_no_value: "Should not have a value set".to_string(),
            round_trip: "Incorrect value obtained".to_string(),
            default_substitution: "Incorrect default value returned".to_string(),
        }
    }
}

/// Configuration for convention verification
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Emit trace lines for each exercised operation
    pub verbose: bool,

    /// Run the legacy `hasDefault` check when the unit exposes it
    pub check_has_default: bool,

    /// Failure messages per phase
    #[serde(default)]
    pub messages: FailureMessages,
}

impl VerifierConfig {
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Turn verbose output on if any argument is a recognised verbose flag.
    ///
    /// The caller decides which arguments to pass, typically
    /// `std::env::args()`.
    pub fn with_verbose_from_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.verbose = self.verbose || Self::verbose_from_args(args);
        self
    }

    /// Whether any argument is one of [`VERBOSE_FLAGS`]
    pub fn verbose_from_args<I, S>(args: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        args.into_iter()
            .any(|arg| VERBOSE_FLAGS.contains(&arg.as_ref()))
    }

    pub fn with_legacy_has_default_check(mut self, enabled: bool) -> Self {
        self.check_has_default = enabled;
        self
    }

    pub fn with_messages(mut self, messages: FailureMessages) -> Self {
        self.messages = messages;
        self
    }
}

/// Verifies that units follow the getter-setter convention
#[derive(Debug, Clone, Default)]
pub struct ConventionVerifier {
    pub(crate) config: VerifierConfig,
    pub(crate) diagnostics: Diagnostics,
}

impl ConventionVerifier {
    /// Create a new verifier
    pub fn new(config: VerifierConfig) -> Self {
        let diagnostics = Diagnostics::new(config.verbose);
        Self {
            config,
            diagnostics,
        }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Verify that `U` follows the convention.
    ///
    /// `sample_value` is stored and read back; `sample_default` is injected
    /// through an overridden `getDefault`. Stops at the first failure.
    pub fn verify<U: GetterSetter>(
        &self,
        sample_value: U::Value,
        sample_default: U::Value,
    ) -> ConformanceResult<()> {
        self.execute::<U>(sample_value, sample_default, &mut Vec::new())
    }

    /// Run the same sequence as [`verify`](Self::verify) and record every
    /// phase in a report. Phases after the first failure are skipped.
    pub fn run<U: GetterSetter>(
        &self,
        sample_value: U::Value,
        sample_default: U::Value,
    ) -> ConformanceReport {
        let start = Instant::now();
        let descriptor = U::descriptor();
        let mut report = ConformanceReport::new(descriptor.unit);
        let mut results = Vec::new();

        match self.execute::<U>(sample_value, sample_default, &mut results) {
            Err(err) if err.is_structural() => {
                report.structural_error = Some(err.to_string());
            }
            _ => {
                if let Some(field) = descriptor.single_field() {
                    let names = OperationNames::derive(field);
                    for phase in Phase::all() {
                        if !results.iter().any(|r| r.phase == *phase) {
                            results.push(PhaseResult::skipped(
                                *phase,
                                operation_label(*phase, &names),
                                "not run after earlier failure",
                            ));
                        }
                    }
                    report.field = Some(field.to_string());
                }
            }
        }

        report.results = results;
        report.duration = start.elapsed();
        report.finalize();

        if self.diagnostics.enabled() {
            tracing::info!(
                "Verification of {} complete: {} passed, {} failed, {} skipped",
                report.unit,
                report.passed_count(),
                report.failed_count(),
                report.skipped_count()
            );
        }

        report
    }

    fn execute<U: GetterSetter>(
        &self,
        sample_value: U::Value,
        sample_default: U::Value,
        record: &mut Vec<PhaseResult>,
    ) -> ConformanceResult<()> {
        self.diagnostics
            .line(format_args!("Asserting \"{}\"", U::unit_name()));

        let field = resolve_field_name(&U::descriptor())?;
        let names = OperationNames::derive(field);
        let mut double = TestDouble::<U>::neutral();

        let has_default = names.has_default();
        if !self.config.check_has_default {
            record.push(PhaseResult::skipped(
                Phase::NoDefaultPresent,
                has_default,
                "legacy check not requested",
            ));
        } else if double.has_default().is_none() {
            self.diagnostics
                .line(format_args!(" skipping {}(), not exposed by unit", has_default));
            record.push(PhaseResult::skipped(
                Phase::NoDefaultPresent,
                has_default,
                "operation not exposed by unit",
            ));
        } else {
            timed(record, Phase::NoDefaultPresent, &has_default, || {
                self.assert_no_default_present(&double, &has_default)
            })?;
        }

        let get_default = names.get_default();
        timed(record, Phase::DefaultIsAbsent, &get_default, || {
            self.assert_default_is_absent(&double, &get_default)
        })?;

        let has = names.has();
        timed(record, Phase::HasNoValue, &has, || {
            self.assert_has_no_value(&double, &has)
        })?;

        let (set, get) = (names.set(), names.get());
        timed(
            record,
            Phase::RoundTrip,
            &operation_label(Phase::RoundTrip, &names),
            || self.assert_round_trip(&mut double, &set, &get, sample_value),
        )?;

        timed(record, Phase::DefaultSubstitution, &get, || {
            self.assert_default_substitution::<U>(&get_default, &get, sample_default)
        })
    }
}

/// Operation(s) a phase exercises, as shown in reports
pub(crate) fn operation_label(phase: Phase, names: &OperationNames) -> String {
    match phase {
        Phase::NoDefaultPresent => names.has_default(),
        Phase::DefaultIsAbsent => names.get_default(),
        Phase::HasNoValue => names.has(),
        Phase::RoundTrip => format!("{}/{}", names.set(), names.get()),
        Phase::DefaultSubstitution => names.get(),
    }
}

fn timed(
    record: &mut Vec<PhaseResult>,
    phase: Phase,
    operation: &str,
    check: impl FnOnce() -> ConformanceResult<()>,
) -> ConformanceResult<()> {
    let start = Instant::now();
    let outcome = check();
    let duration = start.elapsed();

    record.push(match &outcome {
        Ok(()) => PhaseResult::passed(phase, operation, duration),
        Err(err) => PhaseResult::failed(phase, operation, err.to_string(), duration),
    });

    outcome
}
