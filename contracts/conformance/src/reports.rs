//! Conformance reporting

use crate::error::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Phase status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
}

/// Outcome of one assertion phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseResult {
    pub phase: Phase,
    /// Operation(s) exercised, e.g. `setName/getName`
    pub operation: String,
    pub status: TestStatus,
    pub duration: Duration,
    pub error: Option<String>,
    /// Why the phase was skipped
    pub reason: Option<String>,
}

impl PhaseResult {
    /// Create a passed result
    pub fn passed(phase: Phase, operation: impl Into<String>, duration: Duration) -> Self {
        Self {
            phase,
            operation: operation.into(),
            status: TestStatus::Passed,
            duration,
            error: None,
            reason: None,
        }
    }

    /// Create a failed result
    pub fn failed(
        phase: Phase,
        operation: impl Into<String>,
        error: String,
        duration: Duration,
    ) -> Self {
        Self {
            phase,
            operation: operation.into(),
            status: TestStatus::Failed,
            duration,
            error: Some(error),
            reason: None,
        }
    }

    /// Create a skipped result
    pub fn skipped(phase: Phase, operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            phase,
            operation: operation.into(),
            status: TestStatus::Skipped,
            duration: Duration::ZERO,
            error: None,
            reason: Some(reason.into()),
        }
    }
}

/// Report summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub conformant: bool,
}

/// Complete report for one verified unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub unit: String,
    /// Managed field, when one could be resolved
    pub field: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub duration: Duration,
    pub results: Vec<PhaseResult>,
    /// Set when the unit was rejected before any phase ran
    pub structural_error: Option<String>,
    pub summary: ReportSummary,
}

impl ConformanceReport {
    /// Create a new report
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            field: None,
            timestamp: Utc::now(),
            duration: Duration::ZERO,
            results: Vec::new(),
            structural_error: None,
            summary: ReportSummary::default(),
        }
    }

    /// Finalize the report and compute summary
    pub fn finalize(&mut self) {
        let mut passed = 0;
        let mut failed = 0;
        let mut skipped = 0;

        for result in &self.results {
            match result.status {
                TestStatus::Passed => passed += 1,
                TestStatus::Failed => failed += 1,
                TestStatus::Skipped => skipped += 1,
            }
        }

        self.summary = ReportSummary {
            total: self.results.len(),
            passed,
            failed,
            skipped,
            conformant: failed == 0 && self.structural_error.is_none(),
        };
    }

    pub fn passed_count(&self) -> usize {
        self.summary.passed
    }

    pub fn failed_count(&self) -> usize {
        self.summary.failed
    }

    pub fn skipped_count(&self) -> usize {
        self.summary.skipped
    }

    /// Check if conformant
    pub fn is_conformant(&self) -> bool {
        self.summary.conformant
    }

    /// Result recorded for a phase
    pub fn result_for(&self, phase: Phase) -> Option<&PhaseResult> {
        self.results.iter().find(|r| r.phase == phase)
    }

    /// Generate a text report
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str("╔════════════════════════════════════════════════════════════╗\n");
        output.push_str("║  Getter-Setter Conformance Report                          ║\n");
        output.push_str("╠════════════════════════════════════════════════════════════╣\n");
        output.push_str(&format!("║  Unit: {:<51} ║\n", self.unit));
        output.push_str(&format!(
            "║  Field: {:<50} ║\n",
            self.field.as_deref().unwrap_or("-")
        ));
        output.push_str(&format!(
            "║  Timestamp: {:<46} ║\n",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
        ));
        output.push_str(&format!(
            "║  Duration: {:<47} ║\n",
            format!("{:?}", self.duration)
        ));
        output.push_str("╠════════════════════════════════════════════════════════════╣\n");

        if let Some(error) = &self.structural_error {
            push_row(&mut output, &format!("Structural error: {}", error));
        }

        for result in &self.results {
            let status_icon = match result.status {
                TestStatus::Passed => "✓",
                TestStatus::Failed => "✗",
                TestStatus::Skipped => "○",
            };

            push_row(
                &mut output,
                &format!(
                    "{} {:<21} {:<24} {:>8?}",
                    status_icon,
                    result.phase.label(),
                    result.operation,
                    result.duration
                ),
            );

            if let Some(error) = &result.error {
                push_row(&mut output, &format!("    Error: {}", error));
            }

            if let Some(reason) = &result.reason {
                push_row(&mut output, &format!("    Skipped: {}", reason));
            }
        }

        output.push_str("╠════════════════════════════════════════════════════════════╣\n");
        output.push_str(&format!(
            "║    Total: {:<5}  Passed: {:<5}  Failed: {:<5}  Skipped: {:<2} ║\n",
            self.summary.total, self.summary.passed, self.summary.failed, self.summary.skipped
        ));

        if self.summary.conformant {
            output.push_str("║  Result: ✓ CONFORMANT                                      ║\n");
        } else {
            output.push_str("║  Result: ✗ NON-CONFORMANT                                  ║\n");
        }

        output.push_str("╚════════════════════════════════════════════════════════════╝\n");

        output
    }

    /// Generate JSON report
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Text columns between the box borders
const ROW_WIDTH: usize = 57;

/// Append `text` as one or more bordered rows, wrapping at [`ROW_WIDTH`]
fn push_row(output: &mut String, text: &str) {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        output.push_str(&format!("║  {:<width$} ║\n", "", width = ROW_WIDTH));
    }
    for chunk in chars.chunks(ROW_WIDTH) {
        let line: String = chunk.iter().collect();
        output.push_str(&format!("║  {:<width$} ║\n", line, width = ROW_WIDTH));
    }
}
