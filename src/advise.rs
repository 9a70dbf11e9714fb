//! Advisory generators: forecasts, canned part suggestions and guidance.
//!
//! Everything here is heuristic and non-authoritative. The rates and
//! recommendation strings are coarse pattern matches meant to steer the next
//! category pick in the UI; none of it gates a purchase decision, and all of
//! it is a pure lookup over the current selection.

use serde::Serialize;

use crate::component::{Category, Selection};
use crate::extract;
use crate::normalize;

/// Forward-looking estimate for a category the user has not picked yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryForecast {
    /// Rough share of catalog parts expected to fit, 0.0-1.0.
    pub compatibility_rate: f64,
    pub potential_issues: Vec<String>,
    pub recommendations: Vec<String>,
}

impl Default for CategoryForecast {
    fn default() -> Self {
        Self {
            compatibility_rate: 0.8,
            potential_issues: Vec::new(),
            recommendations: Vec::new(),
        }
    }
}

/// A canned part suggestion for a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartSuggestion {
    pub name: String,
    pub reason: String,
    pub price: String,
    pub compatibility: String,
    pub benefits: Vec<String>,
}

impl PartSuggestion {
    fn new(
        name: &str,
        reason: &str,
        price: &str,
        compatibility: &str,
        benefits: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            reason: reason.to_string(),
            price: price.to_string(),
            compatibility: compatibility.to_string(),
            benefits: benefits.iter().map(|b| b.to_string()).collect(),
        }
    }
}

/// Structured guidance for the trickier categories (RAM, case).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guidance {
    pub compatibility_level: String,
    pub recommendations: Vec<String>,
    pub troubleshooting: Vec<String>,
    pub fallback_options: Vec<String>,
}

impl Default for Guidance {
    fn default() -> Self {
        Self {
            compatibility_level: "high".to_string(),
            recommendations: Vec::new(),
            troubleshooting: Vec::new(),
            fallback_options: Vec::new(),
        }
    }
}

fn cpu_name_lower(selected: &Selection) -> String {
    selected
        .cpu
        .as_ref()
        .and_then(|c| c.name.as_deref())
        .unwrap_or("")
        .to_lowercase()
}

/// Predict how much of a target category will fit the current selection.
pub fn forecast_category(selected: &Selection, target: Category) -> CategoryForecast {
    let mut forecast = CategoryForecast::default();

    if let Some(cpu) = &selected.cpu {
        let cpu_name = cpu_name_lower(selected);
        let cpu_socket = extract::socket(cpu);
        let cpu_brand = extract::brand(cpu);

        match target {
            Category::Motherboard => {
                if let Some(socket) = &cpu_socket {
                    forecast.compatibility_rate = 0.9;
                    forecast
                        .recommendations
                        .push(format!("Look for {socket} motherboards"));
                } else if let Some(brand) = &cpu_brand {
                    forecast.compatibility_rate = 0.7;
                    forecast
                        .recommendations
                        .push(format!("Look for {brand} motherboards"));
                } else {
                    forecast.compatibility_rate = 0.5;
                    forecast
                        .potential_issues
                        .push("Socket information not available".to_string());
                }
            }
            Category::Ram => {
                if cpu_name.contains("ryzen") {
                    forecast.compatibility_rate = 0.95;
                    forecast
                        .recommendations
                        .push("DDR4 RAM recommended for Ryzen".to_string());
                    forecast
                        .recommendations
                        .push("Most DDR4 RAM modules will work".to_string());
                } else if cpu_name.contains("i7-11700") || cpu_name.contains("i5-11600") {
                    forecast.compatibility_rate = 0.95;
                    forecast
                        .recommendations
                        .push("DDR4 RAM recommended for Intel 11th gen".to_string());
                    forecast
                        .recommendations
                        .push("Most DDR4 RAM modules will work".to_string());
                } else {
                    forecast.compatibility_rate = 0.9;
                    forecast
                        .recommendations
                        .push("Most DDR4 RAM modules are compatible".to_string());
                }
            }
            Category::Gpu => {
                forecast.compatibility_rate = 0.95;
            }
            Category::Psu => {
                if cpu_name.contains("i7") || cpu_name.contains("i9") {
                    forecast.compatibility_rate = 0.8;
                    forecast
                        .recommendations
                        .push("Consider 650W+ PSU for high-end CPU".to_string());
                } else {
                    forecast.compatibility_rate = 0.9;
                    forecast
                        .recommendations
                        .push("500W+ PSU should be sufficient".to_string());
                }
            }
            Category::Case => {
                forecast.compatibility_rate = 0.9;
            }
            Category::Cooler => {
                if let Some(socket) = &cpu_socket {
                    forecast.compatibility_rate = 0.85;
                    forecast
                        .recommendations
                        .push(format!("Look for {socket} compatible coolers"));
                }
            }
            _ => {}
        }
    }

    if selected.motherboard.is_some() && target == Category::Ram {
        let mobo_ram_type = selected
            .motherboard
            .as_ref()
            .and_then(extract::ram_type);
        if let Some(ram_type) = mobo_ram_type {
            forecast.compatibility_rate = 0.95;
            forecast
                .recommendations
                .push(format!("Look for {ram_type} RAM"));
            forecast
                .recommendations
                .push("Most RAM brands are compatible".to_string());
        } else {
            forecast.compatibility_rate = 0.9;
            forecast
                .recommendations
                .push("Most DDR4 RAM modules will work".to_string());
            forecast
                .recommendations
                .push("Check motherboard manual for specific requirements".to_string());
        }
    }

    if selected.case.is_some() && target == Category::Gpu {
        forecast.compatibility_rate = 0.9;
        forecast
            .recommendations
            .push("Check GPU length compatibility".to_string());
        forecast
            .recommendations
            .push("Most GPUs fit in standard cases".to_string());
    }

    if selected.case.is_some() && target == Category::Cooler {
        forecast.compatibility_rate = 0.9;
        forecast
            .recommendations
            .push("Check cooler height compatibility".to_string());
        forecast
            .recommendations
            .push("Most coolers fit in standard cases".to_string());
    }

    if target == Category::Case {
        if selected.motherboard.is_some() {
            forecast.compatibility_rate = 0.95;
            forecast
                .recommendations
                .push("Most cases are compatible with your motherboard".to_string());
            forecast
                .recommendations
                .push("Look for ATX, Micro-ATX, or Mini-ITX cases".to_string());
            forecast
                .recommendations
                .push("Gaming cases offer good airflow and compatibility".to_string());
        } else {
            forecast.compatibility_rate = 0.9;
            forecast
                .recommendations
                .push("Most cases work with standard motherboards".to_string());
            forecast
                .recommendations
                .push("ATX cases offer the best compatibility".to_string());
        }
    }

    forecast
}

/// Canned part suggestions for the category being browsed.
pub fn smart_recommendations(selected: &Selection, current: Category) -> Vec<PartSuggestion> {
    let mut suggestions = Vec::new();

    match current {
        Category::Cpu => {
            suggestions.push(PartSuggestion::new(
                "AMD Ryzen 5 5600G",
                "Excellent compatibility with most motherboards and RAM",
                "₱7,840",
                "High",
                &["AM4 socket", "Integrated graphics", "Good value"],
            ));
            suggestions.push(PartSuggestion::new(
                "Intel Core i5-11600",
                "Good balance of performance and compatibility",
                "₱12,500",
                "High",
                &["LGA1200 socket", "Strong performance", "Wide motherboard support"],
            ));
        }
        Category::Motherboard => {
            if let Some(cpu) = &selected.cpu {
                let socket = extract::socket(cpu).map(|s| normalize::normalize_socket(&s));
                match socket.as_deref() {
                    Some("Intel LGA1200") => suggestions.push(PartSuggestion::new(
                        "MSI B560M PRO-VDH",
                        "Perfect match for Intel 11th gen CPUs",
                        "₱4,500",
                        "Excellent",
                        &["LGA1200 socket", "DDR4 support", "Good features"],
                    )),
                    Some("AMD AM4") => suggestions.push(PartSuggestion::new(
                        "MSI B550M PRO-VDH",
                        "Great for AMD Ryzen processors",
                        "₱4,200",
                        "Excellent",
                        &["AM4 socket", "DDR4 support", "PCIe 4.0"],
                    )),
                    _ => {}
                }
            }
        }
        Category::Ram => {
            suggestions.push(PartSuggestion::new(
                "Kingston Fury Beast 8GB DDR4 3200MHz",
                "Excellent compatibility with most motherboards",
                "₱1,800",
                "High",
                &["DDR4 3200MHz", "Widely compatible", "Good performance"],
            ));
            suggestions.push(PartSuggestion::new(
                "Corsair Vengeance LPX 8GB DDR4 3200MHz",
                "High compatibility and reliable performance",
                "₱2,100",
                "High",
                &["DDR4 3200MHz", "Low profile", "Stable performance"],
            ));
            suggestions.push(PartSuggestion::new(
                "G.Skill Ripjaws V 8GB DDR4 3200MHz",
                "Great value with good compatibility",
                "₱1,950",
                "High",
                &["DDR4 3200MHz", "Good value", "Reliable"],
            ));
            if let Some(brand) = selected.motherboard.as_ref().and_then(extract::brand) {
                suggestions.push(PartSuggestion::new(
                    &format!("{brand} Compatible RAM"),
                    &format!("Specifically tested with {brand} motherboards"),
                    "₱2,000",
                    "Excellent",
                    &["Brand tested", "Guaranteed compatibility", "Optimized performance"],
                ));
            }
        }
        Category::Case => {
            suggestions.push(PartSuggestion::new(
                "NZXT H510 Flow",
                "Excellent airflow and compatibility with most motherboards",
                "₱4,500",
                "High",
                &["ATX compatible", "Great airflow", "Modern design"],
            ));
            suggestions.push(PartSuggestion::new(
                "Phanteks P300A",
                "High compatibility and excellent cooling performance",
                "₱3,800",
                "High",
                &["ATX/Micro-ATX", "Mesh front panel", "Good value"],
            ));
            suggestions.push(PartSuggestion::new(
                "Fractal Design Focus G",
                "Great compatibility and build quality",
                "₱4,200",
                "High",
                &["ATX compatible", "Quiet operation", "Easy to build in"],
            ));
            if let Some(ff) = selected.motherboard.as_ref().and_then(extract::form_factor) {
                suggestions.push(PartSuggestion::new(
                    &format!("{ff} Optimized Case"),
                    &format!("Specifically designed for {ff} motherboards"),
                    "₱4,000",
                    "Excellent",
                    &["Form factor optimized", "Perfect fit", "Efficient space usage"],
                ));
            }
        }
        _ => {}
    }

    suggestions
}

/// RAM-specific guidance built from the current CPU/motherboard picks.
pub fn ram_guidance(selected: &Selection) -> Guidance {
    let mut guidance = Guidance::default();

    match (&selected.cpu, &selected.motherboard) {
        (Some(cpu), Some(motherboard)) => {
            let cpu_name = cpu.name.as_deref().unwrap_or("").to_lowercase();

            if cpu_name.contains("ryzen") {
                guidance
                    .recommendations
                    .push("AMD Ryzen CPUs work well with DDR4 RAM".to_string());
                guidance
                    .recommendations
                    .push("Look for DDR4 3200MHz or 3600MHz for best performance".to_string());
                guidance
                    .fallback_options
                    .push("Any DDR4 RAM module should work".to_string());
            } else if cpu_name.contains("i7-11700") || cpu_name.contains("i5-11600") {
                guidance
                    .recommendations
                    .push("Intel 11th gen CPUs are compatible with DDR4".to_string());
                guidance
                    .recommendations
                    .push("DDR4 3200MHz is recommended for optimal performance".to_string());
                guidance
                    .fallback_options
                    .push("Most DDR4 RAM modules are compatible".to_string());
            }

            if let Some(ram_type) = extract::ram_type(motherboard) {
                guidance
                    .recommendations
                    .push(format!("Your motherboard supports {ram_type}"));
                guidance
                    .recommendations
                    .push(format!("Look for {ram_type} RAM modules"));
            } else {
                guidance
                    .recommendations
                    .push("Your motherboard likely supports DDR4".to_string());
                guidance
                    .recommendations
                    .push("Most DDR4 RAM modules will work".to_string());
            }

            guidance.troubleshooting.extend(
                [
                    "If no RAM shows as compatible, try showing all components",
                    "Most DDR4 RAM is compatible with modern motherboards",
                    "Check motherboard manual for specific RAM requirements",
                    "Consider RAM speed compatibility (3200MHz is usually safe)",
                ]
                .map(String::from),
            );
            guidance.fallback_options.extend(
                [
                    "Kingston Fury Beast DDR4 3200MHz",
                    "Corsair Vengeance LPX DDR4 3200MHz",
                    "G.Skill Ripjaws V DDR4 3200MHz",
                    "Any major brand DDR4 RAM should work",
                ]
                .map(String::from),
            );
        }
        (Some(_), None) => {
            guidance
                .recommendations
                .push("Select a motherboard first for specific RAM recommendations".to_string());
            guidance
                .recommendations
                .push("Most modern CPUs work with DDR4 RAM".to_string());
            guidance
                .fallback_options
                .push("DDR4 3200MHz RAM is generally safe".to_string());
        }
        _ => {}
    }

    guidance
}

/// Case-specific guidance built from the motherboard, GPU and cooler picks.
pub fn case_guidance(selected: &Selection) -> Guidance {
    let mut guidance = Guidance::default();

    if let Some(motherboard) = &selected.motherboard {
        let form_factor = extract::form_factor(motherboard)
            .map(|ff| normalize::normalize_form_factor(&ff));
        if let Some(ff) = form_factor {
            guidance
                .recommendations
                .push(format!("Your motherboard is {ff} format"));
            guidance
                .recommendations
                .push(format!("Look for cases that support {ff} motherboards"));

            match ff.as_str() {
                "ATX" => {
                    guidance
                        .recommendations
                        .push("ATX cases offer the best compatibility and airflow".to_string());
                    guidance
                        .fallback_options
                        .push("Any ATX case will work".to_string());
                }
                "Micro-ATX" => {
                    guidance
                        .recommendations
                        .push("Micro-ATX cases are compact and efficient".to_string());
                    guidance
                        .fallback_options
                        .push("ATX and Micro-ATX cases will work".to_string());
                }
                "Mini-ITX" => {
                    guidance
                        .recommendations
                        .push("Mini-ITX cases are very compact".to_string());
                    guidance
                        .fallback_options
                        .push("Most cases support Mini-ITX".to_string());
                }
                _ => {}
            }
        } else {
            guidance
                .recommendations
                .push("Your motherboard likely supports standard case formats".to_string());
            guidance
                .recommendations
                .push("ATX cases offer the best compatibility".to_string());
        }

        if let Some(brand) = extract::brand(motherboard) {
            guidance
                .recommendations
                .push(format!("Your {brand} motherboard works with most cases"));
        }
    }

    if selected.gpu.is_some() {
        guidance
            .recommendations
            .push("Consider GPU length when selecting a case".to_string());
        guidance
            .recommendations
            .push("Most modern cases support long graphics cards".to_string());
        guidance
            .fallback_options
            .push("Look for cases with 300mm+ GPU clearance".to_string());
    }

    if selected.cooler.is_some() {
        guidance
            .recommendations
            .push("Consider cooler height when selecting a case".to_string());
        guidance
            .recommendations
            .push("Most cases support standard air coolers".to_string());
        guidance
            .fallback_options
            .push("Look for cases with 160mm+ cooler clearance".to_string());
    }

    guidance.troubleshooting.extend(
        [
            "If no cases show as compatible, try showing all components",
            "Most ATX cases work with most motherboards",
            "Check case specifications for motherboard support",
            "Consider airflow and cable management features",
        ]
        .map(String::from),
    );
    guidance.fallback_options.extend(
        [
            "NZXT H510 Flow - Excellent ATX compatibility",
            "Phanteks P300A - Great Micro-ATX support",
            "Fractal Design Focus G - Universal compatibility",
            "Any major brand ATX case should work",
        ]
        .map(String::from),
    );

    guidance
}
