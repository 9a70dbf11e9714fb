//! BuildFit - PC part compatibility engine
//!
//! This library takes a partially-selected set of PC hardware parts (CPU,
//! motherboard, RAM, GPU, PSU, case, cooler, storage) and determines
//! pairwise and system-wide compatibility: rule-table matching over
//! normalized specs, name-text inference for half-filled catalog rows, a
//! power budget estimate and a build-wide 0-100 score.
//!
//! # Quick Start
//!
//! ```
//! use buildfit::{checks, Component, Selection, Category};
//!
//! let cpu = Component::named(1, "AMD Ryzen 5 5600X");
//! let mobo = Component::named(2, "MSI B550M PRO-VDH").with_field("socket", "AM4");
//!
//! let verdict = checks::cpu_motherboard(&cpu, &mobo);
//! assert!(verdict.compatible);
//!
//! let build = Selection::default()
//!     .with(Category::Cpu, cpu)
//!     .with(Category::Motherboard, mobo);
//! let score = buildfit::compatibility_score(&build);
//! assert_eq!(score.score, 100);
//! ```
//!
//! # Design
//!
//! - **Never fails**: missing or malformed catalog data degrades each check
//!   to a coarser signal (socket → brand → "assume compatible"), never to an
//!   error. Hiding a viable part is treated as worse than showing a
//!   questionable one with a clear warning.
//! - **Pure and synchronous**: every exported function is a pure function of
//!   its arguments plus static rule tables. No I/O, no shared mutable
//!   state; safe to call from any thread.
//! - **Auditable verdicts**: every verdict echoes the normalized values it
//!   compared in its `details`.

pub mod advise;
pub mod checks;
pub mod component;
pub mod extract;
pub mod normalize;
pub mod power;
pub mod rules;
pub mod score;

// Re-export main types
pub use advise::{forecast_category, ram_guidance, case_guidance, smart_recommendations};
pub use checks::{CheckIssue, CheckKind, Severity, Verdict};
pub use component::{
    component_from_json, components_from_json, CatalogError, Category, Component, Selection,
};
pub use power::{estimate_power, psu_power, recommended_wattage, PowerBreakdown};
pub use score::{
    compatibility_score, component_compatibility, filter_candidates, run_check,
    CandidateVerdict, CompatibilityScore, FilterOutcome, FitReport, ScoredCheck,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        compatibility_score, filter_candidates, CatalogError, Category, CheckKind,
        CompatibilityScore, Component, PowerBreakdown, Selection, Severity, Verdict,
    };
}
