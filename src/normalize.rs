//! Canonicalization of noisy socket and form-factor strings.
//!
//! Catalog data spells the same socket a dozen ways ("AM4", "Socket AM4",
//! "amd-4"). Both normalizers map into the closed vocabularies in
//! [`crate::rules`]; strings they cannot place pass through so a later
//! loose comparison still has something to work with.

/// Ordered (needle, canonical) rules matched against the cleaned socket
/// string. First hit wins; LGA2011 absorbs the "-3" suffix variants.
const SOCKET_RULES: &[(&str, &str)] = &[
    ("AM4", "AMD AM4"),
    ("AM5", "AMD AM5"),
    ("LGA1200", "Intel LGA1200"),
    ("LGA1700", "Intel LGA1700"),
    ("LGA1851", "Intel LGA1851"),
    ("LGA1151", "Intel LGA1151"),
    ("LGA2066", "Intel LGA2066"),
    ("LGA2011", "Intel LGA2011-3"),
    ("LGA3647", "Intel LGA3647"),
    ("LGA4189", "Intel LGA4189"),
];

/// Canonicalize a socket string.
///
/// Uppercases, strips a leading `SOCKET` word and all
/// whitespace/hyphen/underscore punctuation, tolerates the common `AMD4` /
/// `AMD5` typo, then substring-matches against the canonical socket list.
/// Unrecognized input comes back uppercased and stripped, unchanged beyond
/// that.
pub fn normalize_socket(raw: &str) -> String {
    let mut s: String = raw.trim().to_uppercase();
    if let Some(rest) = s.strip_prefix("SOCKET") {
        s = rest.to_string();
    }
    s.retain(|c| !c.is_whitespace() && c != '-' && c != '_');
    // AMD4/AMD5 typo, and "AMDAM4" style vendor-prefixed spellings.
    let s = match s.as_str() {
        "AMD4" => "AM4".to_string(),
        "AMD5" => "AM5".to_string(),
        _ => match s.strip_prefix("AMD") {
            Some(rest) => format!("AM{rest}"),
            None => s,
        },
    };
    for (needle, canonical) in SOCKET_RULES {
        if s.contains(needle) {
            return (*canonical).to_string();
        }
    }
    s
}

/// Canonicalize a form-factor string.
///
/// Lowercases, folds `_` and whitespace runs into `-`, resolves the common
/// alias spellings, then falls back to substring heuristics. Input that
/// matches nothing passes through untouched (not uppercased), so caller-side
/// display stays faithful to the catalog.
pub fn normalize_form_factor(raw: &str) -> String {
    let folded = raw
        .trim()
        .to_lowercase()
        .replace('_', "-")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");

    match folded.as_str() {
        "atx" => return "ATX".to_string(),
        "e-atx" | "eatx" => return "E-ATX".to_string(),
        "micro-atx" | "matx" | "u-atx" | "uatx" | "m-atx" | "microatx" => {
            return "Micro-ATX".to_string()
        }
        "mini-itx" | "mitx" | "miniitx" => return "Mini-ITX".to_string(),
        _ => {}
    }

    if folded.contains("micro") && folded.contains("atx") {
        return "Micro-ATX".to_string();
    }
    if folded.contains("mini") && folded.contains("itx") {
        return "Mini-ITX".to_string();
    }
    if folded.contains("atx") {
        return "ATX".to_string();
    }
    raw.to_string()
}
