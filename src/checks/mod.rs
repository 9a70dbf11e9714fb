//! Pairwise compatibility checks.
//!
//! Each check is a pure function from two component records to a
//! [`Verdict`]. All of them share one fallback policy: when the determining
//! attribute is missing on either side they degrade to a coarser signal
//! (brand, then "cannot be determined, assume compatible") instead of
//! rejecting. Hiding a viable part over incomplete catalog data is the worse
//! failure mode, so "unknown" always resolves to `compatible: true` with an
//! explanatory reason.

pub mod board;
pub mod memory;
pub mod physical;

pub use board::{case_motherboard, cpu_motherboard};
pub use memory::{cpu_ram, ram_motherboard};
pub use physical::{cooler_case, gpu_case};

use serde::Serialize;
use serde_json::Value;

/// Which pairwise rule produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    CpuMotherboard,
    RamMotherboard,
    CpuRam,
    CaseMotherboard,
    PsuPower,
    GpuCase,
    CoolerCase,
}

/// Severity of a single finding inside a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Flips the verdict to incompatible.
    Blocking,
    /// Surfaced to the user but does not gate the part.
    Advisory,
}

/// One finding inside a check. Checks that can fail for several independent
/// reasons (RAM fit, GPU clearance) accumulate these and fold them into a
/// verdict at the end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckIssue {
    pub severity: Severity,
    pub message: String,
}

impl CheckIssue {
    pub fn blocking(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Blocking,
            message: message.into(),
        }
    }

    pub fn advisory(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Advisory,
            message: message.into(),
        }
    }

    /// User-facing rendering; advisory findings keep the "Warning:" prefix
    /// the UI already keys its badge styling on.
    fn render(&self) -> String {
        match self.severity {
            Severity::Blocking => self.message.clone(),
            Severity::Advisory => format!("Warning: {}", self.message),
        }
    }
}

/// Outcome of one pairwise check.
///
/// `details` always echoes the normalized values that were compared, so a
/// verdict can be audited without re-running the extraction. `warnings`
/// counts advisory findings folded into `reason`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub compatible: bool,
    pub reason: String,
    pub details: Value,
    #[serde(skip_serializing_if = "is_zero")]
    pub warnings: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl Verdict {
    pub fn pass(reason: impl Into<String>, details: Value) -> Self {
        Self {
            compatible: true,
            reason: reason.into(),
            details,
            warnings: 0,
        }
    }

    pub fn fail(reason: impl Into<String>, details: Value) -> Self {
        Self {
            compatible: false,
            reason: reason.into(),
            details,
            warnings: 0,
        }
    }

    /// Fold an issue list into a verdict: compatible unless any finding is
    /// blocking, reason is the rendered findings joined with "; ", and
    /// `all_clear` is used when there are none.
    pub fn from_issues(issues: Vec<CheckIssue>, all_clear: &str, details: Value) -> Self {
        if issues.is_empty() {
            return Self::pass(all_clear, details);
        }
        let compatible = issues.iter().all(|i| i.severity != Severity::Blocking);
        let warnings = issues
            .iter()
            .filter(|i| i.severity == Severity::Advisory)
            .count();
        let reason = issues
            .iter()
            .map(CheckIssue::render)
            .collect::<Vec<_>>()
            .join("; ");
        Self {
            compatible,
            reason,
            details,
            warnings,
        }
    }
}
