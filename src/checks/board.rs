//! Socket and form-factor checks: CPU↔motherboard and case↔motherboard.

use serde_json::json;
use tracing::debug;

use crate::component::Component;
use crate::extract;
use crate::normalize::{normalize_form_factor, normalize_socket};
use crate::rules;

use super::Verdict;

/// CPU and motherboard must share a socket. With a socket missing on either
/// side, brand is the coarser gate (AMD boards take AMD CPUs); with no brand
/// either, the part is let through with an explicit reason.
pub fn cpu_motherboard(cpu: &Component, motherboard: &Component) -> Verdict {
    let cpu_socket = extract::socket(cpu);
    let mobo_socket = extract::socket(motherboard);

    if let (Some(cs), Some(ms)) = (&cpu_socket, &mobo_socket) {
        let cpu_norm = normalize_socket(cs);
        let mobo_norm = normalize_socket(ms);
        let compatible = cpu_norm == mobo_norm;
        let reason = if compatible {
            "Socket compatible".to_string()
        } else {
            format!("Socket mismatch: {cpu_norm} vs {mobo_norm}")
        };
        return Verdict {
            compatible,
            reason,
            details: json!({ "cpu_socket": cpu_norm, "mobo_socket": mobo_norm }),
            warnings: 0,
        };
    }

    debug!("socket unknown on at least one side, degrading to brand comparison");
    let cpu_brand = extract::brand(cpu);
    let mobo_brand = extract::brand(motherboard);

    if let (Some(cb), Some(mb)) = (&cpu_brand, &mobo_brand) {
        let compatible =
            (cb == "AMD" && mb == "AMD") || (cb == "Intel" && mb == "Intel");
        let reason = if compatible {
            format!("Brand compatible: {cb} CPU with {mb} motherboard")
        } else {
            format!("Brand mismatch: {cb} CPU with {mb} motherboard")
        };
        return Verdict {
            compatible,
            reason,
            details: json!({
                "cpu_brand": cb,
                "mobo_brand": mb,
                "cpu_socket": cpu_socket,
                "mobo_socket": mobo_socket,
            }),
            warnings: 0,
        };
    }

    Verdict::pass(
        "Compatibility cannot be determined - assuming compatible",
        json!({
            "cpu_socket": cpu_socket,
            "mobo_socket": mobo_socket,
            "cpu_brand": cpu_brand,
            "mobo_brand": mobo_brand,
        }),
    )
}

/// A case must physically hold the motherboard's form factor, per the
/// asymmetric containment table. Unrecognized form factors, and the
/// brand-only fallback, always pass: case fit is the one constraint where
/// the catalog is too noisy to block on anything but a table hit.
pub fn case_motherboard(case: &Component, motherboard: &Component) -> Verdict {
    let case_ff = extract::form_factor(case);
    let mobo_ff = extract::form_factor(motherboard);

    if let (Some(cf), Some(mf)) = (&case_ff, &mobo_ff) {
        let case_norm = normalize_form_factor(cf);
        let mobo_norm = normalize_form_factor(mf);
        if let Some(supported) = rules::case_supports(&case_norm) {
            let compatible = supported.contains(&mobo_norm.as_str());
            let reason = if compatible {
                "Form factor compatible".to_string()
            } else {
                format!("Form factor mismatch: {mobo_norm} motherboard cannot fit in {case_norm} case")
            };
            return Verdict {
                compatible,
                reason,
                details: json!({ "case_form_factor": case_norm, "mobo_form_factor": mobo_norm }),
                warnings: 0,
            };
        }
        return Verdict::pass(
            "Form factor unknown or unrecognized - assuming compatible",
            json!({ "case_form_factor": case_norm, "mobo_form_factor": mobo_norm }),
        );
    }

    debug!("form factor unknown on at least one side, degrading to brand comparison");
    let case_brand = extract::brand(case);
    let mobo_brand = extract::brand(motherboard);

    if let (Some(cb), Some(mb)) = (&case_brand, &mobo_brand) {
        // Case brand is not a real constraint; any pairing passes.
        return Verdict::pass(
            format!("Case brand compatible: {cb} case with {mb} motherboard"),
            json!({
                "case_brand": cb,
                "mobo_brand": mb,
                "case_form_factor": case_ff,
                "mobo_form_factor": mobo_ff,
            }),
        );
    }

    Verdict::pass(
        "Case compatibility cannot be determined - assuming compatible",
        json!({
            "case_form_factor": case_ff,
            "mobo_form_factor": mobo_ff,
            "case_brand": case_brand,
            "mobo_brand": mobo_brand,
        }),
    )
}
