//! Tests for the pairwise compatibility checks.

use buildfit::checks;
use buildfit::Component;

fn named(id: i64, name: &str) -> Component {
    Component::named(id, name)
}

#[test]
fn cpu_motherboard_socket_equality() {
    // Socket inferred from the tray-CPU shorthand, board declares it as a field.
    let cpu = named(1, "R5 5600X (TRAY) 6-core 12-thread");
    let mobo = named(2, "MSI B550M PRO-VDH").with_field("socket", "AM4");

    let verdict = checks::cpu_motherboard(&cpu, &mobo);
    assert!(verdict.compatible);
    assert_eq!(verdict.details["cpu_socket"], "AMD AM4");
    assert_eq!(verdict.details["mobo_socket"], "AMD AM4");
}

#[test]
fn cpu_motherboard_socket_mismatch_names_both_sockets() {
    let cpu = named(1, "AMD Ryzen 7 7700X").with_field("socket", "AM5");
    let mobo = named(2, "Gigabyte Z690 UD").with_field("socket", "LGA1700");

    let verdict = checks::cpu_motherboard(&cpu, &mobo);
    assert!(!verdict.compatible);
    assert!(verdict.reason.contains("AMD AM5"));
    assert!(verdict.reason.contains("Intel LGA1700"));
}

#[test]
fn cpu_motherboard_degrades_to_brand() {
    // No socket on either side, but brands are inferable and disagree.
    let cpu = named(1, "Intel Core i5 (unknown gen)");
    let mobo = named(2, "AMD B550 chipset board");

    let verdict = checks::cpu_motherboard(&cpu, &mobo);
    assert!(!verdict.compatible);
    assert!(verdict.reason.contains("Brand mismatch"));

    let amd_cpu = named(3, "AMD Ryzen (unknown model)");
    let verdict = checks::cpu_motherboard(&amd_cpu, &mobo);
    assert!(verdict.compatible);
    assert!(verdict.reason.contains("Brand compatible"));
}

#[test]
fn checks_fall_back_to_compatible_when_nothing_is_known() {
    let a = named(1, "Mystery Part Alpha");
    let b = named(2, "Mystery Part Beta");

    let verdict = checks::cpu_motherboard(&a, &b);
    assert!(verdict.compatible);
    assert!(verdict.reason.contains("cannot be determined"));

    let verdict = checks::case_motherboard(&a, &b);
    assert!(verdict.compatible);
    assert!(
        verdict.reason.contains("cannot be determined")
            || verdict.reason.contains("assuming compatible")
    );

    let verdict = checks::cooler_case(&a, &b);
    assert!(verdict.compatible);
}

#[test]
fn form_factor_containment_is_asymmetric() {
    let small_case = named(1, "Cooler Master NR200").with_field("form_factor", "Mini-ITX");
    let big_case = named(2, "NZXT H510 Flow").with_field("form_factor", "ATX");
    let atx_board = named(3, "MSI B550 Tomahawk").with_field("form_factor", "ATX");
    let itx_board = named(4, "ASUS ROG Strix B550-I").with_field("form_factor", "Mini-ITX");

    let verdict = checks::case_motherboard(&small_case, &atx_board);
    assert!(!verdict.compatible);
    assert!(verdict.reason.contains("cannot fit"));

    let verdict = checks::case_motherboard(&big_case, &itx_board);
    assert!(verdict.compatible);
}

#[test]
fn form_factor_aliases_normalize_before_containment() {
    // "matx" case cannot hold a full ATX board.
    let case = named(1, "Compact case").with_field("form_factor", "matx");
    let board = named(2, "Full size board").with_field("form_factor", "atx");

    let verdict = checks::case_motherboard(&case, &board);
    assert!(!verdict.compatible);
    assert_eq!(verdict.details["case_form_factor"], "Micro-ATX");
    assert_eq!(verdict.details["mobo_form_factor"], "ATX");
}

#[test]
fn unrecognized_form_factor_assumes_compatible() {
    let case = named(1, "Server chassis").with_field("form_factor", "SSI-EEB");
    let board = named(2, "board").with_field("form_factor", "ATX");

    let verdict = checks::case_motherboard(&case, &board);
    assert!(verdict.compatible);
    assert!(verdict.reason.contains("unknown or unrecognized"));
}

#[test]
fn ram_speed_ceiling_depends_on_generation() {
    // LGA1700 supports both generations, so only the speed envelope differs.
    let cpu = named(1, "Intel Core i7-12700K");
    let ddr4_5000 = named(2, "Fast DDR4 kit")
        .with_field("ram_type", "DDR4")
        .with_field("speed", 5000);
    let ddr5_5000 = named(3, "DDR5 kit")
        .with_field("ram_type", "DDR5")
        .with_field("speed", 5000);

    let verdict = checks::cpu_ram(&cpu, &ddr4_5000);
    assert!(!verdict.compatible);
    assert!(verdict.reason.contains("exceeds maximum for DDR4"));

    let verdict = checks::cpu_ram(&cpu, &ddr5_5000);
    assert!(verdict.compatible);
}

#[test]
fn cpu_ram_generation_gate() {
    let am4_cpu = named(1, "AMD Ryzen 5 5600X").with_field("socket", "AM4");
    let ddr5 = named(2, "DDR5 kit")
        .with_field("ram_type", "DDR5")
        .with_field("speed", 5200);

    let verdict = checks::cpu_ram(&am4_cpu, &ddr5);
    assert!(!verdict.compatible);
    assert!(verdict.reason.contains("does not support DDR5"));
}

#[test]
fn ryzen_slow_ram_is_advisory_only() {
    let cpu = named(1, "AMD Ryzen 5 5600X").with_field("socket", "AM4");
    let slow = named(2, "Value DDR4")
        .with_field("ram_type", "DDR4")
        .with_field("speed", 2400);

    let verdict = checks::cpu_ram(&cpu, &slow);
    assert!(verdict.compatible);
    assert_eq!(verdict.warnings, 1);
    assert!(verdict.reason.contains("Warning:"));
    assert!(verdict.reason.contains("3000MHz+"));
}

#[test]
fn ram_motherboard_collects_independent_issues() {
    let ram = named(1, "Mixed-up kit")
        .with_field("ram_type", "DDR5")
        .with_field("speed", 5600)
        .with_field("capacity", 32)
        .with_field("modules", 3);
    let mobo = named(2, "B550 board")
        .with_field("ram_type", "DDR4")
        .with_field("max_ram_speed", 4400)
        .with_field("max_ram_capacity", 64)
        .with_field("ram_slots", 2);

    let verdict = checks::ram_motherboard(&ram, &mobo);
    assert!(!verdict.compatible);
    // Type mismatch, over-speed, 32GB > 32GB-per-module is fine but 3 sticks
    // in 2 slots and 96GB total both fire, plus the odd-stick advisory.
    assert!(verdict.reason.contains("RAM type mismatch: DDR5 vs DDR4"));
    assert!(verdict.reason.contains("exceeds motherboard maximum (4400MHz)"));
    assert!(verdict.reason.contains("exceeds motherboard slots (2)"));
    assert!(verdict.reason.contains("Total RAM (96GB)"));
    assert!(verdict.reason.contains("Odd number of RAM sticks"));
    assert_eq!(verdict.warnings, 1);
}

#[test]
fn ram_below_absolute_floor_is_blocking() {
    let ram = named(1, "Ancient DDR4")
        .with_field("ram_type", "DDR4")
        .with_field("speed", 1600);
    let mobo = named(2, "board")
        .with_field("ram_type", "DDR4")
        .with_field("max_ram_speed", 3200);

    let verdict = checks::ram_motherboard(&ram, &mobo);
    assert!(!verdict.compatible);
    assert!(verdict.reason.contains("below minimum supported (2133MHz)"));
}

#[test]
fn single_stick_is_advisory_not_blocking() {
    let ram = named(1, "Single 8GB stick")
        .with_field("ram_type", "DDR4")
        .with_field("speed", 3200)
        .with_field("modules", 1);
    let mobo = named(2, "board")
        .with_field("ram_type", "DDR4")
        .with_field("max_ram_speed", 4400)
        .with_field("ram_slots", 4);

    let verdict = checks::ram_motherboard(&ram, &mobo);
    assert!(verdict.compatible);
    assert_eq!(verdict.warnings, 1);
    assert!(verdict.reason.starts_with("Warning: Single RAM stick"));
}

#[test]
fn gpu_length_and_slot_clearance() {
    let long_gpu = named(1, "RTX 4090").with_field("length", 400);
    let case = named(2, "Compact case").with_field("max_gpu_length", 350);

    let verdict = checks::gpu_case(&long_gpu, &case, None);
    assert!(!verdict.compatible);
    assert!(verdict.reason.contains("GPU length (400mm)"));

    // Thick card, tight expansion slots: 3 slots round up to 4 brackets.
    let thick_gpu = named(3, "Triple-slot card").with_field("slot_thickness", 3);
    let slim_case = named(4, "Slim case").with_field("expansion_slots", 2);
    let verdict = checks::gpu_case(&thick_gpu, &slim_case, None);
    assert!(!verdict.compatible);
    assert!(verdict.reason.contains("requires 4 slots"));

    // Same card in a default 7-slot case fits.
    let verdict = checks::gpu_case(&thick_gpu, &named(5, "Roomy case"), None);
    assert!(verdict.compatible);
}

#[test]
fn thick_gpu_blocked_when_vertical_mount_is_explicitly_off() {
    let thick_gpu = named(1, "Triple-slot card").with_field("slot_thickness", 3);
    let case = named(2, "case").with_field("vertical_gpu_mount", false);

    let verdict = checks::gpu_case(&thick_gpu, &case, None);
    assert!(!verdict.compatible);
    assert!(verdict.reason.contains("vertical GPU mounting"));

    // Absent flag must not fire.
    let verdict = checks::gpu_case(&thick_gpu, &named(3, "case"), None);
    assert!(verdict.compatible);
}

#[test]
fn gpu_requires_a_free_pcie_slot_when_motherboard_is_known() {
    let gpu = named(1, "RTX 3060");
    let case = named(2, "case");
    let no_slots = named(3, "weird board").with_field("pcie_slots", 0);

    let verdict = checks::gpu_case(&gpu, &case, Some(&no_slots));
    assert!(!verdict.compatible);
    assert!(verdict.reason.contains("no available PCIe slots"));

    // Boards that don't declare slots assume one.
    let verdict = checks::gpu_case(&gpu, &case, Some(&named(4, "normal board")));
    assert!(verdict.compatible);
}

#[test]
fn liquid_cooler_radiator_support() {
    let aio = named(1, "NZXT Kraken X53 240mm").with_field("type", "Liquid");
    let good_case = named(2, "case").with_field("radiator_support", "120mm, 240mm, 360mm");
    let bad_case = named(3, "case").with_field("radiator_support", "120mm, 140mm");

    assert!(checks::cooler_case(&aio, &good_case).compatible);

    let verdict = checks::cooler_case(&aio, &bad_case);
    assert!(!verdict.compatible);
    assert!(verdict.reason.contains("240mm radiator"));

    // Case with no declared radiator support assumes compatible.
    assert!(checks::cooler_case(&aio, &named(4, "case")).compatible);
}

#[test]
fn air_cooler_height_clearance() {
    let tall = named(1, "Noctua NH-D15 165mm");
    let short_case = named(2, "case").with_field("max_cooler_height", 160);
    let tall_case = named(3, "case").with_field("max_cooler_height", 170);

    let verdict = checks::cooler_case(&tall, &short_case);
    assert!(!verdict.compatible);
    assert!(verdict.reason.contains("165mm"));

    assert!(checks::cooler_case(&tall, &tall_case).compatible);

    // No height signal anywhere: assume compatible.
    assert!(checks::cooler_case(&named(4, "Hyper 212"), &short_case).compatible);
}

#[test]
fn checks_are_idempotent() {
    let cpu = named(1, "AMD Ryzen 5 5600X");
    let mobo = named(2, "MSI B550M").with_field("socket", "AM4");
    assert_eq!(
        checks::cpu_motherboard(&cpu, &mobo),
        checks::cpu_motherboard(&cpu, &mobo)
    );

    let ram = named(3, "kit").with_field("ram_type", "DDR4").with_field("speed", 2400);
    assert_eq!(checks::cpu_ram(&cpu, &ram), checks::cpu_ram(&cpu, &ram));
}
