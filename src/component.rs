//! Component records and build selections.
//!
//! Components arrive from the catalog API as loosely-typed JSON: a numeric
//! `id`, a free-text `name`, an optional `specs` object and an arbitrary set
//! of top-level fields mirroring common spec keys (`socket`, `wattage`, ...).
//! The engine never mutates a component; everything derived from one is
//! computed fresh on each call.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Error decoding catalog payloads into engine types.
///
/// This is the only fallible surface of the crate: every compatibility
/// operation degrades to a weaker verdict instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid component payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Hardware category a component belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cpu,
    Motherboard,
    Ram,
    Gpu,
    Psu,
    Case,
    Cooler,
    Storage,
}

impl Category {
    /// All categories, in selection-wizard order.
    pub const ALL: [Category; 8] = [
        Category::Cpu,
        Category::Motherboard,
        Category::Ram,
        Category::Gpu,
        Category::Psu,
        Category::Case,
        Category::Cooler,
        Category::Storage,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Cpu => "cpu",
            Category::Motherboard => "motherboard",
            Category::Ram => "ram",
            Category::Gpu => "gpu",
            Category::Psu => "psu",
            Category::Case => "case",
            Category::Cooler => "cooler",
            Category::Storage => "storage",
        }
    }
}

/// A catalog component record.
///
/// `name` is often the only reliable signal; structured attributes may live
/// either in `specs` or as top-level fields (captured by the flattened
/// `fields` map). Attribute access goes through [`crate::extract`], which
/// knows the lookup order and the name-inference fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Structured attribute bag, JSON-decoded from the catalog.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub specs: Map<String, Value>,
    /// Top-level fields mirroring common spec keys.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Component {
    /// A named component with no structured data, for callers assembling
    /// records by hand (tests, fixtures).
    pub fn named(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Builder-style top-level field assignment.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Builder-style `specs` entry assignment.
    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.specs.insert(key.into(), value.into());
        self
    }

    /// Raw attribute lookup: top-level field first, then the `specs` bag.
    /// JSON `null` counts as absent.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields
            .get(key)
            .filter(|v| !v.is_null())
            .or_else(|| self.specs.get(key).filter(|v| !v.is_null()))
    }

    /// Whether this record is meaningfully selected: it carries both an id
    /// and a non-empty name. Placeholder rows fail this and do not count
    /// toward the build score.
    pub fn has_identity(&self) -> bool {
        self.id.is_some() && self.name.as_deref().is_some_and(|n| !n.trim().is_empty())
    }
}

/// Decode one component from a catalog JSON payload.
pub fn component_from_json(payload: &str) -> Result<Component, CatalogError> {
    Ok(serde_json::from_str(payload)?)
}

/// Decode a catalog listing (JSON array of components).
pub fn components_from_json(payload: &str) -> Result<Vec<Component>, CatalogError> {
    Ok(serde_json::from_str(payload)?)
}

/// The caller's current pick per category. Lifecycle is owned by the caller
/// (typically UI state); the engine only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<Component>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motherboard: Option<Component>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<Component>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu: Option<Component>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psu: Option<Component>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<Component>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooler: Option<Component>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<Component>,
}

impl Selection {
    pub fn get(&self, category: Category) -> Option<&Component> {
        match category {
            Category::Cpu => self.cpu.as_ref(),
            Category::Motherboard => self.motherboard.as_ref(),
            Category::Ram => self.ram.as_ref(),
            Category::Gpu => self.gpu.as_ref(),
            Category::Psu => self.psu.as_ref(),
            Category::Case => self.case.as_ref(),
            Category::Cooler => self.cooler.as_ref(),
            Category::Storage => self.storage.as_ref(),
        }
    }

    pub fn set(&mut self, category: Category, component: Option<Component>) {
        match category {
            Category::Cpu => self.cpu = component,
            Category::Motherboard => self.motherboard = component,
            Category::Ram => self.ram = component,
            Category::Gpu => self.gpu = component,
            Category::Psu => self.psu = component,
            Category::Case => self.case = component,
            Category::Cooler => self.cooler = component,
            Category::Storage => self.storage = component,
        }
    }

    /// Builder-style assignment, used heavily in tests.
    pub fn with(mut self, category: Category, component: Component) -> Self {
        self.set(category, Some(component));
        self
    }

    /// A copy of this selection with one slot replaced, for what-if checks
    /// (e.g. power budget with a candidate GPU substituted in).
    pub fn replacing(&self, category: Category, component: &Component) -> Self {
        let mut next = self.clone();
        next.set(category, Some(component.clone()));
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &Component)> {
        Category::ALL
            .iter()
            .filter_map(move |&cat| self.get(cat).map(|c| (cat, c)))
    }

    /// True when at least one slot holds an identity-bearing component.
    pub fn has_any_selected(&self) -> bool {
        self.iter().any(|(_, c)| c.has_identity())
    }
}
