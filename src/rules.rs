//! Static compatibility rule tables.
//!
//! Every vocabulary and threshold the checks consult lives here as const
//! data, decoupling what a rule is from how it is applied. The tables are
//! closed sets; extending support means adding a row, not touching control
//! flow.

/// Canonical CPU socket vocabulary.
pub const CPU_SOCKETS: &[&str] = &[
    "AMD AM4",
    "AMD AM5",
    "Intel LGA1200",
    "Intel LGA1700",
    "Intel LGA1851",
    "Intel LGA1151",
    "Intel LGA2066",
    "Intel LGA2011-3",
    "Intel LGA3647",
    "Intel LGA4189",
];

/// Canonical RAM generation vocabulary.
pub const RAM_TYPES: &[&str] = &["DDR3", "DDR4", "DDR5"];

/// Canonical motherboard/case form factors.
pub const FORM_FACTORS: &[&str] = &["Mini-ITX", "Micro-ATX", "ATX", "E-ATX"];

/// Supported speed envelope for a RAM generation, in MHz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedRange {
    pub min: i64,
    pub max: i64,
}

/// JEDEC-ish speed envelopes. DDR3 is carried in the type vocabulary but has
/// no envelope; speed checks simply do not apply to it.
pub fn ram_speed_range(ram_type: &str) -> Option<SpeedRange> {
    match ram_type {
        "DDR4" => Some(SpeedRange { min: 2133, max: 4800 }),
        "DDR5" => Some(SpeedRange { min: 4800, max: 6400 }),
        _ => None,
    }
}

/// Absolute floor below which no modern platform runs, in MHz.
pub const RAM_SPEED_FLOOR: i64 = 2133;

/// RAM generations a CPU socket's memory controller accepts.
pub fn socket_ram_types(socket: &str) -> Option<&'static [&'static str]> {
    match socket {
        "Intel LGA1200" => Some(&["DDR4"]),
        "Intel LGA1700" => Some(&["DDR4", "DDR5"]),
        "Intel LGA1851" => Some(&["DDR5"]),
        "Intel LGA1151" => Some(&["DDR4"]),
        "AMD AM4" => Some(&["DDR4"]),
        "AMD AM5" => Some(&["DDR5"]),
        _ => None,
    }
}

/// Motherboard form factors a case form factor can physically hold.
/// Asymmetric containment: an ATX case holds smaller boards, never the
/// reverse.
pub fn case_supports(case_form_factor: &str) -> Option<&'static [&'static str]> {
    match case_form_factor {
        "ATX" => Some(&["ATX", "Micro-ATX", "Mini-ITX"]),
        "Micro-ATX" => Some(&["Micro-ATX", "Mini-ITX"]),
        "Mini-ITX" => Some(&["Mini-ITX"]),
        "E-ATX" => Some(&["E-ATX", "ATX", "Micro-ATX", "Mini-ITX"]),
        _ => None,
    }
}

/// Efficiency factor for a declared 80+ certification tier. Unspecified or
/// unrecognized tiers fall back to 0.85.
pub fn efficiency_factor(tier: Option<&str>) -> f64 {
    match tier {
        Some("80+") => 0.80,
        Some("80+ Bronze") => 0.82,
        Some("80+ Silver") => 0.85,
        Some("80+ Gold") => 0.87,
        Some("80+ Platinum") => 0.89,
        Some("80+ Titanium") => 0.92,
        _ => 0.85,
    }
}

/// Chipset names that mark a power-hungry motherboard class.
pub const HIGH_POWER_CHIPSETS: &[&str] = &["X570", "Z690", "X670", "Z790"];

/// Power budget heuristic constants, in watts unless noted. Hand-tuned
/// estimates, not a physical simulation.
pub mod power {
    /// Assumed CPU TDP when none is declared.
    pub const CPU_DEFAULT_TDP: f64 = 95.0;
    /// Headroom multiplier for unlocked-multiplier CPUs.
    pub const CPU_OC_HEADROOM: f64 = 1.4;
    /// Headroom multiplier for locked CPUs.
    pub const CPU_STOCK_HEADROOM: f64 = 1.2;

    /// Assumed GPU TDP when none is declared.
    pub const GPU_DEFAULT_TDP: f64 = 150.0;
    /// TDP above which transient spikes get the bigger buffer.
    pub const GPU_HIGH_END_TDP: f64 = 200.0;
    pub const GPU_SPIKE_HIGH: f64 = 1.5;
    pub const GPU_SPIKE_STANDARD: f64 = 1.3;

    pub const MOBO_HIGH_END: i64 = 80;
    pub const MOBO_STANDARD: i64 = 50;

    pub const RAM_DEFAULT_MODULES: f64 = 1.0;
    pub const RAM_DEFAULT_SPEED: f64 = 3200.0;
    pub const RAM_DEFAULT_VOLTAGE: f64 = 1.35;
    /// Baseline speed the RAM draw estimate is scaled against, in MHz.
    pub const RAM_BASE_SPEED: f64 = 2133.0;
    pub const RAM_WATTS_PER_MODULE: f64 = 1.5;

    pub const STORAGE_HDD: i64 = 10;
    pub const STORAGE_SSD: i64 = 5;

    pub const COOLER_AIO: i64 = 15;
    pub const COOLER_AIR: i64 = 5;

    pub const WATTS_PER_FAN: i64 = 2;
    pub const DEFAULT_CASE_FANS: i64 = 2;

    /// USB devices, RGB and other always-on draw.
    pub const PERIPHERALS: i64 = 20;

    /// Margin covering capacitor aging and conversion loss.
    pub const AGING_MARGIN: f64 = 1.15;
}

/// Advisory RAM speed floors for platforms that are unusually sensitive to
/// slow memory, in MHz. Below these the pairing still works, it just leaves
/// performance on the table.
pub const RYZEN_RECOMMENDED_RAM_SPEED: i64 = 3000;
pub const INTEL_11TH_GEN_RECOMMENDED_RAM_SPEED: i64 = 2666;

/// GPU fit defaults used when a card or case omits physical data, in mm and
/// slots.
pub mod gpu_fit {
    pub const DEFAULT_GPU_WIDTH_MM: i64 = 120;
    pub const DEFAULT_CASE_MAX_WIDTH_MM: i64 = 140;
    pub const DEFAULT_SLOT_THICKNESS: i64 = 2;
    pub const DEFAULT_EXPANSION_SLOTS: i64 = 7;
    pub const DEFAULT_PCIE_SLOTS: i64 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_vocabulary_is_closed_and_complete() {
        assert_eq!(CPU_SOCKETS.len(), 10);
        assert!(CPU_SOCKETS.contains(&"AMD AM5"));
        assert!(CPU_SOCKETS.contains(&"Intel LGA2011-3"));
    }

    #[test]
    fn speed_ranges_cover_ddr4_and_ddr5_only() {
        assert_eq!(ram_speed_range("DDR4"), Some(SpeedRange { min: 2133, max: 4800 }));
        assert_eq!(ram_speed_range("DDR5"), Some(SpeedRange { min: 4800, max: 6400 }));
        assert_eq!(ram_speed_range("DDR3"), None);
    }

    #[test]
    fn containment_is_asymmetric() {
        assert!(case_supports("ATX").unwrap().contains(&"Mini-ITX"));
        assert!(!case_supports("Mini-ITX").unwrap().contains(&"ATX"));
        assert_eq!(case_supports("E-ATX").unwrap().len(), 4);
        assert!(case_supports("Tower").is_none());
    }

    #[test]
    fn efficiency_tiers_and_fallback() {
        assert_eq!(efficiency_factor(Some("80+")), 0.80);
        assert_eq!(efficiency_factor(Some("80+ Titanium")), 0.92);
        assert_eq!(efficiency_factor(Some("85 Plus")), 0.85);
        assert_eq!(efficiency_factor(None), 0.85);
    }

    #[test]
    fn lga1700_is_the_transition_socket() {
        assert_eq!(socket_ram_types("Intel LGA1700"), Some(&["DDR4", "DDR5"][..]));
        assert_eq!(socket_ram_types("AMD AM5"), Some(&["DDR5"][..]));
        assert_eq!(socket_ram_types("AMD sTRX4"), None);
    }
}
