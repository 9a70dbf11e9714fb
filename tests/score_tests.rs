//! Tests for candidate filtering and the build score rollup.

use buildfit::{
    compatibility_score, component_compatibility, filter_candidates, Category, CheckKind,
    Component, Selection,
};

fn am4_cpu() -> Component {
    Component::named(1, "AMD Ryzen 5 5600X").with_field("socket", "AM4")
}

#[test]
fn empty_selection_scores_zero() {
    let score = compatibility_score(&Selection::default());
    assert_eq!(score.score, 0);
    assert_eq!(score.total_checks, 0);
    assert_eq!(score.passed_checks, 0);
    assert!(score.checks.is_empty());
}

#[test]
fn single_component_scores_hundred_with_no_checks() {
    // Only a CPU: nothing to check yet. Callers must branch on total_checks
    // to tell this apart from a genuinely perfect build.
    let build = Selection::default().with(Category::Cpu, am4_cpu());
    let score = compatibility_score(&build);
    assert_eq!(score.score, 100);
    assert_eq!(score.total_checks, 0);
}

#[test]
fn identity_less_components_do_not_count_as_selected() {
    // A placeholder row without an id is not a meaningful selection.
    let placeholder = Component {
        name: Some("draft".to_string()),
        ..Component::default()
    };
    let build = Selection::default().with(Category::Cpu, placeholder);
    let score = compatibility_score(&build);
    assert_eq!(score.score, 0);
    assert_eq!(score.total_checks, 0);
}

#[test]
fn score_is_the_rounded_pass_ratio() {
    let build = Selection::default()
        .with(Category::Cpu, am4_cpu())
        .with(
            Category::Motherboard,
            Component::named(2, "B550 board")
                .with_field("socket", "AM4")
                .with_field("ram_type", "DDR4"),
        )
        .with(
            Category::Ram,
            Component::named(3, "DDR5 kit").with_field("ram_type", "DDR5"),
        );

    // cpu-motherboard passes, ram-motherboard fails on type: 1/2.
    let score = compatibility_score(&build);
    assert_eq!(score.total_checks, 2);
    assert_eq!(score.passed_checks, 1);
    assert_eq!(score.score, 50);

    let kinds: Vec<CheckKind> = score.checks.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, vec![CheckKind::CpuMotherboard, CheckKind::RamMotherboard]);
}

#[test]
fn all_checks_participate_once_their_operands_are_selected() {
    let build = Selection::default()
        .with(Category::Cpu, am4_cpu())
        .with(
            Category::Motherboard,
            Component::named(2, "B550")
                .with_field("socket", "AM4")
                .with_field("form_factor", "ATX"),
        )
        .with(
            Category::Ram,
            Component::named(3, "DDR4 kit")
                .with_field("ram_type", "DDR4")
                .with_field("speed", 3200),
        )
        .with(Category::Psu, Component::named(4, "650W PSU").with_field("wattage", 650))
        .with(
            Category::Case,
            Component::named(5, "ATX case").with_field("form_factor", "ATX"),
        )
        .with(Category::Gpu, Component::named(6, "RTX 3060").with_field("length", 242))
        .with(Category::Cooler, Component::named(7, "Hyper 212"));

    let score = compatibility_score(&build);
    assert_eq!(score.total_checks, 6);
    assert_eq!(score.passed_checks, 6);
    assert_eq!(score.score, 100);
}

#[test]
fn score_serializes_with_snake_case_check_types() {
    let build = Selection::default()
        .with(Category::Cpu, am4_cpu())
        .with(Category::Motherboard, Component::named(2, "B550").with_field("socket", "AM4"));
    let encoded = serde_json::to_value(compatibility_score(&build)).unwrap();
    assert_eq!(encoded["checks"][0]["type"], "cpu_motherboard");
    assert_eq!(encoded["checks"][0]["compatible"], true);
    assert_eq!(encoded["score"], 100);
}

#[test]
fn filter_partitions_candidates_for_the_target_category() {
    let build = Selection::default().with(Category::Cpu, am4_cpu());
    let candidates = vec![
        Component::named(10, "B550 board").with_field("socket", "AM4"),
        Component::named(11, "Z690 board").with_field("socket", "LGA1700"),
        Component::named(12, "Mystery board"),
    ];

    let outcome = filter_candidates(&candidates, &build, Category::Motherboard);
    // The unknown board passes on the assume-compatible policy.
    assert_eq!(outcome.compatible.len(), 2);
    assert_eq!(outcome.incompatible.len(), 1);
    assert_eq!(outcome.incompatible[0].component.id, Some(11));
    assert!(outcome.incompatible[0]
        .compatibility
        .reason
        .contains("Socket mismatch"));
}

#[test]
fn checks_against_unselected_categories_are_skipped() {
    // No case selected: GPU candidates have nothing to be checked against.
    let build = Selection::default().with(Category::Cpu, am4_cpu());
    let report = component_compatibility(
        &Component::named(10, "RTX 4090").with_field("length", 400),
        &build,
        Category::Gpu,
    );
    assert!(report.compatible);
    assert_eq!(report.reason, "Compatible with current selections");
}

#[test]
fn gpu_candidates_are_rebudgeted_against_the_selected_psu() {
    let build = Selection::default()
        .with(Category::Cpu, Component::named(1, "CPU").with_field("tdp", 65))
        .with(Category::Case, Component::named(2, "Roomy case"))
        .with(Category::Psu, Component::named(3, "300W PSU").with_field("wattage", 300));

    // 400W card blows the 300W budget even though it fits the case.
    let hungry = Component::named(10, "Hungry GPU").with_field("tdp", 400);
    let report = component_compatibility(&hungry, &build, Category::Gpu);
    assert!(!report.compatible);
    assert!(report.reason.contains("Insufficient power"));

    let modest = Component::named(11, "Modest GPU").with_field("tdp", 75);
    let report = component_compatibility(&modest, &build, Category::Gpu);
    assert!(report.compatible);
}

#[test]
fn ram_candidates_are_checked_against_both_cpu_and_motherboard() {
    let build = Selection::default()
        .with(Category::Cpu, am4_cpu())
        .with(
            Category::Motherboard,
            Component::named(2, "B550")
                .with_field("ram_type", "DDR4")
                .with_field("max_ram_speed", 4400),
        );

    // Wrong generation for both the board and the AM4 memory controller.
    let ddr5 = Component::named(10, "DDR5 kit")
        .with_field("ram_type", "DDR5")
        .with_field("speed", 5200);
    let report = component_compatibility(&ddr5, &build, Category::Ram);
    assert!(!report.compatible);
    assert_eq!(report.issues.len(), 2);
}

#[test]
fn scoring_is_idempotent() {
    let build = Selection::default()
        .with(Category::Cpu, am4_cpu())
        .with(Category::Motherboard, Component::named(2, "B550").with_field("socket", "AM4"));
    assert_eq!(compatibility_score(&build), compatibility_score(&build));
}
