//! Physical clearance checks: GPU↔case and cooler↔case.

use serde_json::json;
use tracing::debug;

use crate::component::Component;
use crate::extract;
use crate::rules::gpu_fit;

use super::{CheckIssue, Verdict};

/// GPU against case clearance: length, width, expansion-slot thickness and
/// vertical-mount feasibility, plus a free PCIe slot on the motherboard when
/// one is supplied. Every finding here is blocking; a card that does not fit
/// does not fit.
pub fn gpu_case(
    gpu: &Component,
    case: &Component,
    motherboard: Option<&Component>,
) -> Verdict {
    let gpu_length = extract::length(gpu);
    let gpu_width = extract::number(gpu, "width")
        .map(|w| w as i64)
        .unwrap_or(gpu_fit::DEFAULT_GPU_WIDTH_MM);
    let slot_thickness = extract::integer(gpu, "slot_thickness")
        .unwrap_or(gpu_fit::DEFAULT_SLOT_THICKNESS);
    let case_max_length = extract::integer(case, "max_gpu_length");
    let case_max_width = extract::integer(case, "max_gpu_width")
        .unwrap_or(gpu_fit::DEFAULT_CASE_MAX_WIDTH_MM);
    let case_max_slots = extract::integer(case, "expansion_slots")
        .unwrap_or(gpu_fit::DEFAULT_EXPANSION_SLOTS);

    let details = json!({
        "gpu_length": gpu_length,
        "gpu_width": gpu_width,
        "gpu_slot_thickness": slot_thickness,
        "case_max_length": case_max_length,
        "case_max_width": case_max_width,
        "case_max_slots": case_max_slots,
    });

    let mut issues = Vec::new();

    if let (Some(length), Some(max_length)) = (gpu_length, case_max_length) {
        if length as i64 > max_length {
            issues.push(CheckIssue::blocking(format!(
                "GPU length ({length}mm) exceeds case maximum ({max_length}mm)"
            )));
        }
    }

    if gpu_width > case_max_width {
        issues.push(CheckIssue::blocking(format!(
            "GPU width ({gpu_width}mm) exceeds case maximum ({case_max_width}mm)"
        )));
    }

    if slot_thickness > 2 {
        // Round up to an even slot count; bracket mounting comes in pairs.
        let required_slots = (slot_thickness + 1) / 2 * 2;
        if required_slots > case_max_slots {
            issues.push(CheckIssue::blocking(format!(
                "GPU requires {required_slots} slots but case only has {case_max_slots}"
            )));
        }
    }

    if let Some(mobo) = motherboard {
        let pcie_slots =
            extract::integer(mobo, "pcie_slots").unwrap_or(gpu_fit::DEFAULT_PCIE_SLOTS);
        if pcie_slots < 1 {
            issues.push(CheckIssue::blocking(
                "Motherboard has no available PCIe slots",
            ));
        }
    }

    // Only an explicit `false` blocks; absent data must not.
    if extract::flag(case, "vertical_gpu_mount") == Some(false) && slot_thickness > 2 {
        issues.push(CheckIssue::blocking(
            "Case does not support vertical GPU mounting for thick cards",
        ));
    }

    Verdict::from_issues(issues, "GPU is compatible with case", details)
}

/// Cooler against case clearance. Liquid coolers are gated on the case's
/// declared radiator sizes, air coolers on height. Any missing signal on
/// either side assumes compatible.
pub fn cooler_case(cooler: &Component, case: &Component) -> Verdict {
    let cooler_type = extract::text(cooler, "type").map(|t| t.to_lowercase());
    let is_liquid = cooler_type
        .as_deref()
        .is_some_and(|t| t.contains("liquid") || t.contains("aio"));

    if is_liquid {
        return radiator_fit(cooler, case);
    }
    air_cooler_fit(cooler, case, cooler_type.as_deref())
}

fn radiator_fit(cooler: &Component, case: &Component) -> Verdict {
    let Some(rad_size) = extract::millimeters_from_name(cooler) else {
        debug!("liquid cooler without a radiator size in its name, assuming compatible");
        return Verdict::pass(
            "Radiator size cannot be determined - assuming compatible",
            json!({ "cooler_type": "liquid" }),
        );
    };
    let Some(support) = extract::text(case, "radiator_support") else {
        return Verdict::pass(
            "Case radiator support unknown - assuming compatible",
            json!({ "cooler_type": "liquid", "radiator_size": rad_size }),
        );
    };

    let wanted = format!("{rad_size}mm");
    let supported: Vec<String> = support.split(',').map(|s| s.trim().to_string()).collect();
    let details = json!({
        "cooler_type": "liquid",
        "radiator_size": rad_size,
        "case_radiator_support": supported,
    });
    if supported.iter().any(|s| s == &wanted) {
        Verdict::pass("Cooler is compatible with case", details)
    } else {
        Verdict::fail(
            format!("Case does not support {rad_size}mm radiator"),
            details,
        )
    }
}

fn air_cooler_fit(cooler: &Component, case: &Component, cooler_type: Option<&str>) -> Verdict {
    let cooler_height = extract::height(cooler)
        .map(|h| h as i64)
        .or_else(|| extract::millimeters_from_name(cooler));
    let max_height = extract::integer(case, "max_cooler_height");

    let details = json!({
        "cooler_type": cooler_type.unwrap_or("air"),
        "cooler_height": cooler_height,
        "case_max_cooler_height": max_height,
    });

    match (cooler_height, max_height) {
        (Some(height), Some(max)) if height > max => Verdict::fail(
            format!("Cooler height ({height}mm) exceeds case maximum ({max}mm)"),
            details,
        ),
        (Some(_), Some(_)) => Verdict::pass("Cooler is compatible with case", details),
        _ => Verdict::pass(
            "Cooler clearance cannot be determined - assuming compatible",
            details,
        ),
    }
}
