//! Spec extraction: best-known attribute values for a component.
//!
//! Lookup order is always structured-first: a top-level field of the same
//! name, then the `specs` bag, and only for socket/brand/wattage/TDP a
//! name-text inference pass over the free-text product name. Absence of data
//! is `None`, never an error — catalog rows are frequently half-filled and
//! the checks are built to degrade around that.
//!
//! The name inference is deliberately data-driven: ordered `(pattern,
//! result)` tables evaluated in priority order, so individual rules are
//! testable and new hardware means new rows, not new branches.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::component::Component;

/// Socket tokens matched against the lowercased, punctuation-stripped name.
/// Explicit tokens outrank every model-number heuristic.
const SOCKET_TOKEN_RULES: &[(&str, &str)] = &[
    ("am4", "AMD AM4"),
    ("amd4", "AMD AM4"),
    ("am5", "AMD AM5"),
    ("amd5", "AMD AM5"),
    ("lga1200", "Intel LGA1200"),
    ("lga1700", "Intel LGA1700"),
    ("lga1151", "Intel LGA1151"),
    ("lga2066", "Intel LGA2066"),
];

/// Literal model substrings matched against the lowercased name, after the
/// Ryzen shorthand heuristic. Covers the Intel generations and AMD parts the
/// catalog actually stocks.
const MODEL_SOCKET_RULES: &[(&str, &str)] = &[
    // Intel 10th/11th gen (LGA1200)
    ("i7-11700", "Intel LGA1200"),
    ("i5-11600", "Intel LGA1200"),
    ("i5-11500", "Intel LGA1200"),
    ("i5-11400", "Intel LGA1200"),
    ("i3-11100", "Intel LGA1200"),
    ("i9-11900", "Intel LGA1200"),
    ("i9-10900", "Intel LGA1200"),
    ("i5-10400", "Intel LGA1200"),
    ("i5-10600", "Intel LGA1200"),
    ("i3-10100", "Intel LGA1200"),
    ("i3-10300", "Intel LGA1200"),
    // Intel 12th/13th gen (LGA1700)
    ("i7-12700", "Intel LGA1700"),
    ("i7-13700", "Intel LGA1700"),
    ("i5-12600", "Intel LGA1700"),
    ("i5-13600", "Intel LGA1700"),
    ("i3-12100", "Intel LGA1700"),
    ("i3-13100", "Intel LGA1700"),
    ("i9-12900", "Intel LGA1700"),
    ("i9-13900", "Intel LGA1700"),
    // Intel 14th gen (LGA1851)
    ("i7-14700", "Intel LGA1851"),
    ("i5-14600", "Intel LGA1851"),
    ("i3-14100", "Intel LGA1851"),
    ("i9-14900", "Intel LGA1851"),
    // Intel 8th/9th gen (LGA1151)
    ("i7-8700", "Intel LGA1151"),
    ("i7-9700", "Intel LGA1151"),
    ("i5-8400", "Intel LGA1151"),
    ("i5-9400", "Intel LGA1151"),
    ("i3-8100", "Intel LGA1151"),
    ("i3-9100", "Intel LGA1151"),
    // AMD full model names
    ("ryzen 3 3200g", "AMD AM4"),
    ("ryzen 5 5600g", "AMD AM4"),
    ("ryzen 5 5600gt", "AMD AM4"),
    ("ryzen 7 5800", "AMD AM4"),
    ("ryzen 9 5900", "AMD AM4"),
    ("ryzen 5 5600", "AMD AM4"),
    ("ryzen 7 5700", "AMD AM4"),
    ("ryzen 9 5950", "AMD AM4"),
    ("ryzen 7 7700", "AMD AM5"),
    ("ryzen 9 7900", "AMD AM5"),
    ("ryzen 5 7600", "AMD AM5"),
    ("ryzen 7 7800", "AMD AM5"),
    ("ryzen 9 7950", "AMD AM5"),
    // AMD Athlon / A-series (AM4)
    ("athlon 200ge", "AMD AM4"),
    ("athlon 300ge", "AMD AM4"),
    ("athlon 3000g", "AMD AM4"),
    ("a8 7680", "AMD AM4"),
];

/// Brand tokens matched against the lowercased name; first hit wins, so
/// "ryzen" resolves before the generic "rx".
const BRAND_RULES: &[(&str, &str)] = &[
    ("amd", "AMD"),
    ("ryzen", "AMD"),
    ("intel", "Intel"),
    ("core", "Intel"),
    ("nvidia", "NVIDIA"),
    ("rtx", "NVIDIA"),
    ("gtx", "NVIDIA"),
    ("radeon", "AMD"),
    ("rx", "AMD"),
];

// Ryzen shorthand like "R5 5600X", "r7-5700G", "R5 7600". Model >= 7000 is
// AM5, 1000-6999 is AM4 (6000-series desktop APUs default to AM4).
static RYZEN_SHORTHAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\br[3579]\s*-?\s*(\d{4})[a-z0-9]*").expect("valid regex"));

static WATTAGE_IN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*w").expect("valid regex"));

static TDP_IN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*w\s*tdp").expect("valid regex"));

static MILLIMETERS_IN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*mm").expect("valid regex"));

/// String view of an attribute. Numbers stringify so a numeric `socket`
/// column still compares; other JSON shapes are absent.
pub fn text(component: &Component, key: &str) -> Option<String> {
    match component.field(key)? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numeric view of an attribute, tolerant of strings with a numeric prefix
/// ("3200MHz" reads as 3200). Malformed values are `None`, never an error.
pub fn number(component: &Component, key: &str) -> Option<f64> {
    coerce_number(component.field(key)?)
}

/// Integer view of [`number`].
pub fn integer(component: &Component, key: &str) -> Option<i64> {
    number(component, key).map(|n| n as i64)
}

/// Boolean view of an attribute. Only a literal JSON boolean counts: checks
/// that key off `Some(false)` (vertical GPU mount) must not fire on absent
/// data.
pub fn flag(component: &Component, key: &str) -> Option<bool> {
    component.field(key)?.as_bool()
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let digits: String = s.trim().chars().take_while(char::is_ascii_digit).collect();
            if digits.is_empty() {
                None
            } else {
                digits.parse().ok()
            }
        }
        _ => None,
    }
}

fn lower_name(component: &Component) -> Option<String> {
    component
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_lowercase)
}

/// CPU/motherboard socket, inferred from the name when no structured field
/// is present.
pub fn socket(component: &Component) -> Option<String> {
    if let Some(s) = text(component, "socket") {
        return Some(s);
    }
    socket_from_name(&lower_name(component)?)
}

fn socket_from_name(lower: &str) -> Option<String> {
    let stripped: String = lower
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .collect();
    for (token, socket) in SOCKET_TOKEN_RULES {
        if stripped.contains(token) {
            return Some((*socket).to_string());
        }
    }

    if let Some(caps) = RYZEN_SHORTHAND.captures(lower) {
        if let Ok(series) = caps[1].parse::<i64>() {
            if series >= 7000 {
                return Some("AMD AM5".to_string());
            }
            if series >= 1000 {
                return Some("AMD AM4".to_string());
            }
        }
    }

    for (model, socket) in MODEL_SOCKET_RULES {
        if lower.contains(model) {
            return Some((*socket).to_string());
        }
    }
    None
}

/// Vendor brand (AMD / Intel / NVIDIA), inferred from the name when no
/// structured field is present.
pub fn brand(component: &Component) -> Option<String> {
    if let Some(b) = text(component, "brand") {
        return Some(b);
    }
    let lower = lower_name(component)?;
    BRAND_RULES
        .iter()
        .find(|(token, _)| lower.contains(token))
        .map(|(_, brand)| (*brand).to_string())
}

/// RAM generation; memory modules often carry it under `type` instead of
/// `ram_type`.
pub fn ram_type(component: &Component) -> Option<String> {
    text(component, "ram_type").or_else(|| text(component, "type"))
}

pub fn form_factor(component: &Component) -> Option<String> {
    text(component, "form_factor")
}

/// PSU rated wattage; "650W" style names are good enough when the field is
/// missing.
pub fn wattage(component: &Component) -> Option<i64> {
    if let Some(w) = integer(component, "wattage") {
        return Some(w);
    }
    let lower = lower_name(component)?;
    WATTAGE_IN_NAME
        .captures(&lower)
        .and_then(|caps| caps[1].parse().ok())
}

/// Thermal design power; names rarely spell it ("65W TDP") but when they do
/// it beats guessing.
pub fn tdp(component: &Component) -> Option<i64> {
    if let Some(t) = integer(component, "tdp") {
        return Some(t);
    }
    let lower = lower_name(component)?;
    TDP_IN_NAME
        .captures(&lower)
        .and_then(|caps| caps[1].parse().ok())
}

/// Physical length in mm; GPUs sometimes nest it under `dimensions`.
pub fn length(component: &Component) -> Option<f64> {
    number(component, "length").or_else(|| dimension(component, "length"))
}

/// Physical height in mm; coolers sometimes nest it under `dimensions`.
pub fn height(component: &Component) -> Option<f64> {
    number(component, "height").or_else(|| dimension(component, "height"))
}

fn dimension(component: &Component, key: &str) -> Option<f64> {
    component
        .field("dimensions")?
        .as_object()?
        .get(key)
        .and_then(coerce_number)
}

/// Module capacity in GB.
pub fn capacity(component: &Component) -> Option<i64> {
    integer(component, "capacity")
}

/// Clock speed in MHz.
pub fn speed(component: &Component) -> Option<i64> {
    integer(component, "speed")
}

/// First millimeter figure in the product name ("240mm", "158 mm"); how
/// radiator sizes and air-cooler heights usually travel.
pub fn millimeters_from_name(component: &Component) -> Option<i64> {
    let lower = lower_name(component)?;
    MILLIMETERS_IN_NAME
        .captures(&lower)
        .and_then(|caps| caps[1].parse().ok())
}
