//! Power budget estimation and the PSU check.
//!
//! Per-component draws are hand-tuned heuristics over TDP, stick counts and
//! device class, not a physical model. The sum gets a 15% margin for
//! capacitor aging and conversion loss; the PSU passes iff its rated wattage
//! covers the margined total. A recommended wattage is reported separately,
//! scaled by the PSU's declared 80+ efficiency tier.

use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::checks::Verdict;
use crate::component::{Component, Selection};
use crate::extract;
use crate::rules::{self, power};

/// Per-component wattage contributions for the current selection. A slot
/// with no component selected contributes nothing and serializes as absent;
/// fans and peripherals always draw.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PowerBreakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motherboard: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ram: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooling: Option<i64>,
    pub fans: i64,
    pub peripherals: i64,
    /// Sum of all contributions with the 15% aging margin applied.
    pub total_power_needed: i64,
}

/// Estimate the system draw for the currently-selected components.
pub fn estimate_power(build: &Selection) -> PowerBreakdown {
    let mut breakdown = PowerBreakdown::default();
    let mut total: i64 = 0;

    if let Some(cpu) = &build.cpu {
        let tdp = extract::tdp(cpu)
            .map(|t| t as f64)
            .unwrap_or(power::CPU_DEFAULT_TDP);
        let headroom = if extract::flag(cpu, "unlocked_multiplier") == Some(true) {
            power::CPU_OC_HEADROOM
        } else {
            power::CPU_STOCK_HEADROOM
        };
        let draw = (tdp * headroom).ceil() as i64;
        breakdown.cpu = Some(draw);
        total += draw;
    }

    if let Some(gpu) = &build.gpu {
        let tdp = extract::tdp(gpu)
            .map(|t| t as f64)
            .unwrap_or(power::GPU_DEFAULT_TDP);
        // High-end cards spike harder.
        let buffer = if tdp > power::GPU_HIGH_END_TDP {
            power::GPU_SPIKE_HIGH
        } else {
            power::GPU_SPIKE_STANDARD
        };
        let draw = (tdp * buffer).ceil() as i64;
        breakdown.gpu = Some(draw);
        total += draw;
    }

    if let Some(motherboard) = &build.motherboard {
        let chipset = extract::text(motherboard, "chipset").unwrap_or_default();
        let high_end = rules::HIGH_POWER_CHIPSETS
            .iter()
            .any(|c| chipset.contains(c));
        let draw = if high_end {
            power::MOBO_HIGH_END
        } else {
            power::MOBO_STANDARD
        };
        breakdown.motherboard = Some(draw);
        total += draw;
    }

    if let Some(ram) = &build.ram {
        let sticks = extract::integer(ram, "modules")
            .map(|m| m as f64)
            .unwrap_or(power::RAM_DEFAULT_MODULES);
        let speed = extract::speed(ram)
            .map(|s| s as f64)
            .unwrap_or(power::RAM_DEFAULT_SPEED);
        let voltage = extract::number(ram, "voltage").unwrap_or(power::RAM_DEFAULT_VOLTAGE);
        let draw = (sticks * (speed / power::RAM_BASE_SPEED) * power::RAM_WATTS_PER_MODULE
            * voltage)
            .ceil() as i64;
        breakdown.ram = Some(draw);
        total += draw;
    }

    if let Some(storage) = &build.storage {
        let kind = extract::text(storage, "type").unwrap_or_else(|| "SSD".to_string());
        let draw = if kind.eq_ignore_ascii_case("hdd") {
            power::STORAGE_HDD
        } else {
            power::STORAGE_SSD
        };
        breakdown.storage = Some(draw);
        total += draw;
    }

    if let Some(cooler) = &build.cooler {
        let kind = extract::text(cooler, "type").unwrap_or_else(|| "air".to_string());
        let draw = if kind.eq_ignore_ascii_case("aio") {
            power::COOLER_AIO
        } else {
            power::COOLER_AIR
        };
        breakdown.cooling = Some(draw);
        total += draw;
    }

    let fans = build
        .case
        .as_ref()
        .and_then(|case| extract::integer(case, "fans"))
        .unwrap_or(power::DEFAULT_CASE_FANS);
    breakdown.fans = fans * power::WATTS_PER_FAN;
    total += breakdown.fans;

    breakdown.peripherals = power::PERIPHERALS;
    total += breakdown.peripherals;

    breakdown.total_power_needed = (total as f64 * power::AGING_MARGIN).ceil() as i64;
    debug!(
        total = breakdown.total_power_needed,
        "estimated system power draw"
    );
    breakdown
}

/// Recommended PSU rating for a margined draw, adjusted by efficiency tier.
pub fn recommended_wattage(total_power_needed: i64, efficiency_tier: Option<&str>) -> i64 {
    (total_power_needed as f64 / rules::efficiency_factor(efficiency_tier)).ceil() as i64
}

/// PSU against the system power budget. A PSU with no discoverable wattage
/// passes with a verify-the-specs reason rather than blocking the build.
pub fn psu_power(psu: &Component, build: &Selection) -> Verdict {
    let Some(psu_wattage) = extract::wattage(psu) else {
        return Verdict::pass(
            "PSU wattage unknown - assuming compatible (verify PSU specs)",
            json!({ "psu_wattage": null }),
        );
    };
    let efficiency = extract::text(psu, "efficiency");

    let breakdown = estimate_power(build);
    let total = breakdown.total_power_needed;
    let recommended = recommended_wattage(total, efficiency.as_deref());

    let compatible = psu_wattage >= total;
    let reason = if compatible {
        format!("Sufficient power ({psu_wattage}W PSU for {total}W system load)")
    } else {
        format!(
            "Insufficient power: {psu_wattage}W PSU for {total}W system load ({recommended}W recommended)"
        )
    };
    Verdict {
        compatible,
        reason,
        details: json!({
            "psu_wattage": psu_wattage,
            "total_power_needed": total,
            "recommended_wattage": recommended,
            "efficiency": efficiency.as_deref().unwrap_or("unspecified"),
            "power_breakdown": breakdown,
        }),
        warnings: 0,
    }
}
