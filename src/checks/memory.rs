//! Memory checks: RAM↔motherboard fit and CPU↔RAM platform support.
//!
//! Unlike the socket checks these collect every independent finding before
//! folding, so a kit that is both the wrong type and too fast reports both.
//! Dual-channel findings are advisory only.

use serde_json::json;

use crate::component::Component;
use crate::extract;
use crate::normalize::normalize_socket;
use crate::rules;

use super::{CheckIssue, Verdict};

/// RAM module/kit against a motherboard's declared memory limits. Up to six
/// independent findings; any check whose inputs are missing is skipped.
pub fn ram_motherboard(ram: &Component, motherboard: &Component) -> Verdict {
    let ram_type = extract::ram_type(ram);
    let mobo_ram_type = extract::ram_type(motherboard);
    let ram_speed = extract::speed(ram);
    let mobo_max_speed = extract::integer(motherboard, "max_ram_speed");
    let ram_capacity = extract::capacity(ram);
    let mobo_max_capacity = extract::integer(motherboard, "max_ram_capacity");
    let ram_sticks = extract::integer(ram, "modules").unwrap_or(1);
    let mobo_ram_slots = extract::integer(motherboard, "ram_slots");

    let details = json!({
        "ram_type": ram_type,
        "mobo_ram_type": mobo_ram_type,
        "ram_speed": ram_speed,
        "mobo_max_speed": mobo_max_speed,
        "ram_capacity": ram_capacity,
        "mobo_max_capacity": mobo_max_capacity,
        "ram_sticks": ram_sticks,
        "mobo_ram_slots": mobo_ram_slots,
    });

    let mut issues = Vec::new();

    if let (Some(rt), Some(mt)) = (&ram_type, &mobo_ram_type) {
        if rt != mt {
            issues.push(CheckIssue::blocking(format!(
                "RAM type mismatch: {rt} vs {mt}"
            )));
        }
    }

    if let (Some(speed), Some(max_speed)) = (ram_speed, mobo_max_speed) {
        if speed > max_speed {
            issues.push(CheckIssue::blocking(format!(
                "RAM speed ({speed}MHz) exceeds motherboard maximum ({max_speed}MHz)"
            )));
        } else if speed < rules::RAM_SPEED_FLOOR {
            issues.push(CheckIssue::blocking(format!(
                "RAM speed ({speed}MHz) is below minimum supported ({}MHz)",
                rules::RAM_SPEED_FLOOR
            )));
        }
    }

    if let (Some(capacity), Some(max_capacity)) = (ram_capacity, mobo_max_capacity) {
        // Undeclared or zero slot counts assume the common four.
        let slots = mobo_ram_slots.filter(|&s| s > 0).unwrap_or(4);
        let max_per_module = max_capacity / slots;
        if capacity > max_per_module {
            issues.push(CheckIssue::blocking(format!(
                "RAM module size ({capacity}GB) exceeds maximum supported ({max_per_module}GB per module)"
            )));
        }
    }

    if let Some(slots) = mobo_ram_slots.filter(|&s| s > 0) {
        if ram_sticks > slots {
            issues.push(CheckIssue::blocking(format!(
                "Number of RAM modules ({ram_sticks}) exceeds motherboard slots ({slots})"
            )));
        }
    }

    if let (Some(capacity), Some(max_capacity)) = (ram_capacity, mobo_max_capacity) {
        let total = capacity * ram_sticks;
        if total > max_capacity {
            issues.push(CheckIssue::blocking(format!(
                "Total RAM ({total}GB) exceeds motherboard maximum ({max_capacity}GB)"
            )));
        }
    }

    if ram_sticks == 1 && mobo_ram_slots.is_some_and(|s| s >= 2) {
        issues.push(CheckIssue::advisory(
            "Single RAM stick detected - consider dual-channel setup for better performance",
        ));
    }
    if ram_sticks > 1 && ram_sticks % 2 != 0 {
        issues.push(CheckIssue::advisory(
            "Odd number of RAM sticks may not enable dual-channel mode",
        ));
    }

    Verdict::from_issues(issues, "RAM is compatible with motherboard", details)
}

/// RAM generation and speed against what the CPU's memory controller
/// supports, keyed by normalized socket. Slow-RAM pairings on Ryzen and
/// Intel 11th gen are advisory.
pub fn cpu_ram(cpu: &Component, ram: &Component) -> Verdict {
    let cpu_socket = extract::socket(cpu).map(|s| normalize_socket(&s));
    let ram_type = extract::ram_type(ram);
    let ram_speed = extract::speed(ram);

    let details = json!({
        "cpu_socket": cpu_socket,
        "ram_type": ram_type,
        "ram_speed": ram_speed,
    });

    let mut issues = Vec::new();

    if let (Some(socket), Some(rt)) = (&cpu_socket, &ram_type) {
        if let Some(supported) = rules::socket_ram_types(socket) {
            if !supported.contains(&rt.as_str()) {
                issues.push(CheckIssue::blocking(format!(
                    "CPU socket {socket} does not support {rt} RAM"
                )));
            }
        }
    }

    if let (Some(speed), Some(_)) = (ram_speed, &cpu_socket) {
        // Untyped kits are assumed DDR4, by far the common case here.
        let type_for_speed = ram_type.as_deref().unwrap_or("DDR4");
        if let Some(range) = rules::ram_speed_range(type_for_speed) {
            if speed < range.min {
                issues.push(CheckIssue::blocking(format!(
                    "RAM speed ({speed}MHz) is below minimum for {type_for_speed} ({}MHz)",
                    range.min
                )));
            } else if speed > range.max {
                issues.push(CheckIssue::blocking(format!(
                    "RAM speed ({speed}MHz) exceeds maximum for {type_for_speed} ({}MHz)",
                    range.max
                )));
            }
        }
    }

    let cpu_name = cpu.name.as_deref().unwrap_or("").to_lowercase();
    if cpu_name.contains("ryzen") {
        if ram_speed.is_some_and(|s| s < rules::RYZEN_RECOMMENDED_RAM_SPEED) {
            issues.push(CheckIssue::advisory(format!(
                "Ryzen CPUs benefit from faster RAM ({}MHz+)",
                rules::RYZEN_RECOMMENDED_RAM_SPEED
            )));
        }
    }
    if cpu_name.contains("i7-11700") || cpu_name.contains("i5-11600") {
        if ram_speed.is_some_and(|s| s < rules::INTEL_11TH_GEN_RECOMMENDED_RAM_SPEED) {
            issues.push(CheckIssue::advisory(format!(
                "Intel 11th gen CPUs work better with faster RAM ({}MHz+)",
                rules::INTEL_11TH_GEN_RECOMMENDED_RAM_SPEED
            )));
        }
    }

    Verdict::from_issues(issues, "RAM is compatible with CPU", details)
}
