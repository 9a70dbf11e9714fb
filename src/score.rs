//! Candidate filtering and the build-wide compatibility score.

use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::checks::{self, CheckKind, Verdict};
use crate::component::{Category, Component, Selection};
use crate::power;

/// A candidate's fit against the current selection, as produced by the
/// per-category dispatcher. `issues` holds the reasons of every failed
/// check; `reason` is the joined user-facing summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitReport {
    pub compatible: bool,
    pub issues: Vec<String>,
    pub reason: String,
}

/// One candidate with its fit report attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateVerdict {
    pub component: Component,
    pub compatibility: FitReport,
}

/// Partition of a candidate list into compatible/incompatible buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOutcome {
    pub compatible: Vec<CandidateVerdict>,
    pub incompatible: Vec<CandidateVerdict>,
}

/// One check's verdict inside a [`CompatibilityScore`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCheck {
    #[serde(rename = "type")]
    pub kind: CheckKind,
    #[serde(flatten)]
    pub verdict: Verdict,
}

/// Build-wide score rollup.
///
/// Invariant: `score == round(passed_checks / total_checks * 100)` when
/// `total_checks > 0`. A score of 0 with `total_checks == 0` means nothing
/// identity-bearing is selected; a score of 100 with `total_checks == 0`
/// means at least one component is selected but no pairwise check applies
/// yet. Callers must branch on `total_checks` to tell a perfect build from
/// a trivially-unchecked one; `score` alone cannot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityScore {
    pub score: u32,
    pub total_checks: usize,
    pub passed_checks: usize,
    pub checks: Vec<ScoredCheck>,
}

/// Partition `candidates` for `target` into compatible and incompatible
/// buckets against the current selection. O(N) over the candidate list; call
/// once per filter operation, not per candidate.
pub fn filter_candidates(
    candidates: &[Component],
    selected: &Selection,
    target: Category,
) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();
    for candidate in candidates {
        let report = component_compatibility(candidate, selected, target);
        let entry = CandidateVerdict {
            component: candidate.clone(),
            compatibility: report,
        };
        if entry.compatibility.compatible {
            outcome.compatible.push(entry);
        } else {
            outcome.incompatible.push(entry);
        }
    }
    debug!(
        target = target.key(),
        compatible = outcome.compatible.len(),
        incompatible = outcome.incompatible.len(),
        "filtered candidate list"
    );
    outcome
}

/// Route a candidate through the checks relevant to its target category.
/// Checks against categories that have not been chosen yet are skipped; a
/// check never blocks on data that is not there.
pub fn component_compatibility(
    candidate: &Component,
    selected: &Selection,
    target: Category,
) -> FitReport {
    let mut failures: Vec<String> = Vec::new();

    let mut apply = |verdict: Verdict| {
        if !verdict.compatible {
            failures.push(verdict.reason);
        }
    };

    match target {
        Category::Motherboard => {
            if let Some(cpu) = &selected.cpu {
                apply(checks::cpu_motherboard(cpu, candidate));
            }
        }
        Category::Ram => {
            if let Some(motherboard) = &selected.motherboard {
                apply(checks::ram_motherboard(candidate, motherboard));
            }
            if let Some(cpu) = &selected.cpu {
                apply(checks::cpu_ram(cpu, candidate));
            }
        }
        Category::Case => {
            if let Some(motherboard) = &selected.motherboard {
                apply(checks::case_motherboard(candidate, motherboard));
            }
        }
        Category::Psu => {
            apply(power::psu_power(candidate, selected));
        }
        Category::Gpu => {
            if let Some(case) = &selected.case {
                apply(checks::gpu_case(
                    candidate,
                    case,
                    selected.motherboard.as_ref(),
                ));
                // Re-budget power with the candidate card in place of any
                // current GPU.
                if let Some(psu) = &selected.psu {
                    let what_if = selected.replacing(Category::Gpu, candidate);
                    apply(power::psu_power(psu, &what_if));
                }
            }
        }
        Category::Cooler => {
            if let Some(case) = &selected.case {
                apply(checks::cooler_case(candidate, case));
            }
        }
        Category::Cpu | Category::Storage => {}
    }

    let compatible = failures.is_empty();
    let reason = if compatible {
        "Compatible with current selections".to_string()
    } else {
        failures.join("; ")
    };
    FitReport {
        compatible,
        issues: failures,
        reason,
    }
}

/// Run every pairwise check whose operands are both selected and roll them
/// into a single 0-100 score. See [`CompatibilityScore`] for the edge-case
/// semantics at `total_checks == 0`.
pub fn compatibility_score(selected: &Selection) -> CompatibilityScore {
    let mut checks_run: Vec<ScoredCheck> = Vec::new();

    if let (Some(cpu), Some(motherboard)) = (&selected.cpu, &selected.motherboard) {
        checks_run.push(ScoredCheck {
            kind: CheckKind::CpuMotherboard,
            verdict: checks::cpu_motherboard(cpu, motherboard),
        });
    }
    if let (Some(ram), Some(motherboard)) = (&selected.ram, &selected.motherboard) {
        checks_run.push(ScoredCheck {
            kind: CheckKind::RamMotherboard,
            verdict: checks::ram_motherboard(ram, motherboard),
        });
    }
    if let (Some(case), Some(motherboard)) = (&selected.case, &selected.motherboard) {
        checks_run.push(ScoredCheck {
            kind: CheckKind::CaseMotherboard,
            verdict: checks::case_motherboard(case, motherboard),
        });
    }
    if let Some(psu) = &selected.psu {
        checks_run.push(ScoredCheck {
            kind: CheckKind::PsuPower,
            verdict: power::psu_power(psu, selected),
        });
    }
    if let (Some(gpu), Some(case)) = (&selected.gpu, &selected.case) {
        checks_run.push(ScoredCheck {
            kind: CheckKind::GpuCase,
            verdict: checks::gpu_case(gpu, case, None),
        });
    }
    if let (Some(cooler), Some(case)) = (&selected.cooler, &selected.case) {
        checks_run.push(ScoredCheck {
            kind: CheckKind::CoolerCase,
            verdict: checks::cooler_case(cooler, case),
        });
    }

    let total_checks = checks_run.len();
    let passed_checks = checks_run.iter().filter(|c| c.verdict.compatible).count();

    let score = if !selected.has_any_selected() {
        0
    } else if total_checks > 0 {
        (passed_checks as f64 / total_checks as f64 * 100.0).round() as u32
    } else {
        100
    };

    debug!(score, total_checks, passed_checks, "scored build");
    CompatibilityScore {
        score,
        total_checks,
        passed_checks,
        checks: checks_run,
    }
}

/// Dispatcher over the pure two-argument checks, for callers that carry the
/// check kind as data. PSU budgeting needs the whole selection and lives on
/// [`power::psu_power`] instead.
pub fn run_check(kind: CheckKind, a: &Component, b: &Component) -> Verdict {
    match kind {
        CheckKind::CpuMotherboard => checks::cpu_motherboard(a, b),
        CheckKind::RamMotherboard => checks::ram_motherboard(a, b),
        CheckKind::CpuRam => checks::cpu_ram(a, b),
        CheckKind::CaseMotherboard => checks::case_motherboard(a, b),
        CheckKind::GpuCase => checks::gpu_case(a, b, None),
        CheckKind::CoolerCase => checks::cooler_case(a, b),
        CheckKind::PsuPower => Verdict::pass(
            "No specific compatibility check defined",
            json!({}),
        ),
    }
}
