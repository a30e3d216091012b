use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A creature from the upstream catalog.
///
/// Immutable value object. Equality (and hashing) is by `id` alone: two
/// records that share an identifier are the same creature even if their
/// display fields differ. Team membership tests rely on this -- toggling a
/// renamed creature removes the stored member rather than merging fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    /// Stable catalog identifier (the national dex number).
    pub id: u32,
    /// Display name (e.g., "Bulbasaur").
    pub name: String,
    /// Primary type label (e.g., "Grass").
    #[serde(rename = "type")]
    pub type_name: String,
}

impl PartialEq for Creature {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Creature {}

impl Hash for Creature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
