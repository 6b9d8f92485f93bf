//! Named groups of units.

use rustc_hash::FxHashMap;

use ba_core::UnitId;

/// Group name for the units fitted with musical speakers.
pub const MUSICAL_GROUP: &str = "musical";

/// Looks up the ordered members of a named unit group.
///
/// Behaviors call this once, while they are built; the result is fixed for
/// the behavior's lifetime.
pub trait UnitCatalog {
    /// Members of `group` in catalog order.  Unknown groups are empty.
    fn units_in_group(&self, group: &str) -> Vec<UnitId>;
}

/// An in-memory catalog assembled by the application.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    groups: FxHashMap<String, Vec<UnitId>>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a group.
    pub fn with_group(mut self, group: impl Into<String>, units: impl IntoIterator<Item = UnitId>) -> Self {
        self.groups.insert(group.into(), units.into_iter().collect());
        self
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

impl UnitCatalog for StaticCatalog {
    fn units_in_group(&self, group: &str) -> Vec<UnitId> {
        self.groups.get(group).cloned().unwrap_or_default()
    }
}
