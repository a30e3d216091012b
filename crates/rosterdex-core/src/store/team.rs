//! Per-user team storage backed by `DashMap`.
//!
//! Values are cloned on read to avoid holding a `DashMap` guard outside the
//! store. Mutation happens entirely under the entry guard, so the capacity
//! check and the append are one atomic step per user.

use std::sync::Arc;

use dashmap::DashMap;

use rosterdex_types::creature::Creature;

/// Maximum number of creatures in one user's team.
pub const TEAM_CAPACITY: usize = 6;

/// Concurrent map of user id to team, shared across all callers.
///
/// Cloning produces a shared view of the same underlying data (backed by
/// `Arc`). Entries are created lazily on the first successful add; a missing
/// key and an empty team are indistinguishable to callers.
#[derive(Debug, Clone, Default)]
pub(crate) struct TeamStore {
    inner: Arc<DashMap<String, Vec<Creature>>>,
}

impl TeamStore {
    /// Create an empty store.
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
        }
    }

    /// Cloned snapshot of a user's team, empty if none exists.
    pub(crate) fn get(&self, user_id: &str) -> Vec<Creature> {
        self.inner
            .get(user_id)
            .map(|team| team.value().clone())
            .unwrap_or_default()
    }

    /// Drop a user's team entirely. No-op for unknown users.
    pub(crate) fn clear(&self, user_id: &str) {
        self.inner.remove(user_id);
    }

    /// Add-or-remove `creature` in the user's team, keyed on its id.
    ///
    /// Returns `false` only when the creature is absent and the team is
    /// already at [`TEAM_CAPACITY`]; the team is left untouched in that
    /// case. Removal matches on id alone -- stored display fields are never
    /// compared or updated.
    ///
    /// The entry guard is held across the whole check-then-act, so two
    /// racing toggles for the same user serialize and the cap holds.
    pub(crate) fn toggle(&self, user_id: &str, creature: Creature) -> bool {
        let mut team = self.inner.entry(user_id.to_string()).or_default();
        match team.iter().position(|member| member.id == creature.id) {
            Some(index) => {
                team.remove(index);
                true
            }
            None if team.len() >= TEAM_CAPACITY => false,
            None => {
                team.push(creature);
                true
            }
        }
    }
}
