//! Team management service.
//!
//! Single source of truth for per-user team membership and the single
//! delegation point to the catalog provider. Team state is ephemeral and
//! scoped to the process lifetime.

use rosterdex_types::creature::Creature;
use rosterdex_types::error::UpstreamError;

use crate::catalog::gateway::CatalogGateway;
use crate::store::team::TeamStore;

/// Service owning per-user team state.
///
/// Generic over the catalog gateway trait to maintain clean architecture --
/// rosterdex-core never depends on rosterdex-infra. The team store is a
/// private field; the four public operations are the only way in.
pub struct TeamService<G: CatalogGateway> {
    gateway: G,
    teams: TeamStore,
}

impl<G: CatalogGateway> TeamService<G> {
    /// Create a new TeamService with an empty store.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            teams: TeamStore::new(),
        }
    }

    /// Retrieve the full creature catalog from the provider.
    ///
    /// Pure delegation: the result is returned unchanged, failures propagate
    /// as [`UpstreamError`], and team state is never touched.
    pub async fn fetch_catalog(&self) -> Result<Vec<Creature>, UpstreamError> {
        self.gateway.fetch_catalog().await
    }

    /// Current team for `user_id`, empty if none exists. Never fails.
    pub fn get_team(&self, user_id: &str) -> Vec<Creature> {
        self.teams.get(user_id)
    }

    /// Remove all creatures from `user_id`'s team.
    ///
    /// Idempotent -- clearing an empty or unknown team is a no-op.
    pub fn clear_team(&self, user_id: &str) {
        self.teams.clear(user_id);
    }

    /// Add-or-remove `creature` in the user's team.
    ///
    /// Present (by id) -> removed, returns `true`. Absent with room ->
    /// appended in insertion order, returns `true`. Absent at capacity
    /// ([`crate::TEAM_CAPACITY`]) -> team unchanged, returns `false`. The boolean
    /// is the sole rejection signal; a full team is an expected outcome,
    /// not an error.
    pub fn toggle_membership(&self, user_id: &str, creature: Creature) -> bool {
        let accepted = self.teams.toggle(user_id, creature);
        if !accepted {
            tracing::debug!(user_id, "toggle rejected: team at capacity");
        }
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::future::Future;
    use std::sync::Arc;

    use crate::TEAM_CAPACITY;

    // --- Mock gateway ---

    struct MockGateway {
        result: MockResult,
    }

    #[derive(Clone)]
    enum MockResult {
        Catalog(Vec<Creature>),
        Unavailable,
    }

    impl MockGateway {
        fn ok(creatures: Vec<Creature>) -> Self {
            Self {
                result: MockResult::Catalog(creatures),
            }
        }

        fn failing() -> Self {
            Self {
                result: MockResult::Unavailable,
            }
        }
    }

    impl CatalogGateway for MockGateway {
        fn fetch_catalog(
            &self,
        ) -> impl Future<Output = Result<Vec<Creature>, UpstreamError>> + Send {
            let result = self.result.clone();
            async move {
                match result {
                    MockResult::Catalog(creatures) => Ok(creatures),
                    MockResult::Unavailable => Err(UpstreamError::Status {
                        status: 503,
                        body: "upstream unavailable".to_string(),
                    }),
                }
            }
        }
    }

    fn creature(id: u32, name: &str, type_name: &str) -> Creature {
        Creature {
            id,
            name: name.to_string(),
            type_name: type_name.to_string(),
        }
    }

    fn service() -> TeamService<MockGateway> {
        TeamService::new(MockGateway::ok(Vec::new()))
    }

    /// Six distinct creatures, toggled in for `user_id`.
    fn fill_team(service: &TeamService<MockGateway>, user_id: &str) -> Vec<Creature> {
        let members = vec![
            creature(1, "Bulbasaur", "Grass"),
            creature(4, "Charmander", "Fire"),
            creature(7, "Squirtle", "Water"),
            creature(16, "Pidgey", "Flying"),
            creature(19, "Rattata", "Normal"),
            creature(39, "Jigglypuff", "Fairy"),
        ];
        for member in &members {
            assert!(service.toggle_membership(user_id, member.clone()));
        }
        members
    }

    #[test]
    fn get_team_on_fresh_store_is_empty() {
        let service = service();
        assert!(service.get_team("user1").is_empty());
        assert!(service.get_team("someone-else").is_empty());
    }

    #[test]
    fn add_first_creature() {
        let service = service();
        let bulbasaur = creature(1, "Bulbasaur", "Grass");

        assert!(service.toggle_membership("user1", bulbasaur.clone()));
        assert_eq!(service.get_team("user1"), vec![bulbasaur]);
    }

    #[test]
    fn remove_sole_creature() {
        let service = service();
        let bulbasaur = creature(1, "Bulbasaur", "Grass");
        service.toggle_membership("user1", bulbasaur.clone());

        assert!(service.toggle_membership("user1", bulbasaur));
        assert_eq!(service.get_team("user1"), Vec::<Creature>::new());
    }

    #[test]
    fn toggle_twice_restores_prior_state() {
        let service = service();
        service.toggle_membership("user1", creature(1, "Bulbasaur", "Grass"));
        service.toggle_membership("user1", creature(4, "Charmander", "Fire"));
        let before = service.get_team("user1");

        let squirtle = creature(7, "Squirtle", "Water");
        assert!(service.toggle_membership("user1", squirtle.clone()));
        assert!(service.toggle_membership("user1", squirtle));

        assert_eq!(service.get_team("user1"), before);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let service = service();
        let members = fill_team(&service, "user1");
        let ids: Vec<u32> = service.get_team("user1").iter().map(|c| c.id).collect();
        let expected: Vec<u32> = members.iter().map(|c| c.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn full_team_rejects_new_creature() {
        let service = service();
        let members = fill_team(&service, "user1");

        let snorlax = creature(143, "Snorlax", "Normal");
        assert!(!service.toggle_membership("user1", snorlax.clone()));

        let team = service.get_team("user1");
        assert_eq!(team, members);
        assert!(!team.contains(&snorlax));
    }

    #[test]
    fn full_team_still_allows_removal() {
        let service = service();
        let members = fill_team(&service, "user1");

        assert!(service.toggle_membership("user1", members[2].clone()));
        assert_eq!(service.get_team("user1").len(), 5);
    }

    #[test]
    fn capacity_holds_across_operation_sequences() {
        let service = service();
        for id in 1..=20 {
            service.toggle_membership("user1", creature(id, "n", "t"));
            assert!(service.get_team("user1").len() <= TEAM_CAPACITY);
        }
        service.clear_team("user1");
        for id in (1..=20).rev() {
            service.toggle_membership("user1", creature(id, "n", "t"));
            service.toggle_membership("user1", creature(id, "n", "t"));
            assert!(service.get_team("user1").len() <= TEAM_CAPACITY);
        }
    }

    #[test]
    fn clear_team_resets_any_prior_state() {
        let service = service();
        fill_team(&service, "user1");

        service.clear_team("user1");
        assert!(service.get_team("user1").is_empty());
    }

    #[test]
    fn clear_team_is_idempotent() {
        let service = service();
        service.toggle_membership("user1", creature(1, "Bulbasaur", "Grass"));

        service.clear_team("user1");
        service.clear_team("user1");
        assert!(service.get_team("user1").is_empty());

        // Unknown users are a no-op too, not an error.
        service.clear_team("never-seen");
        assert!(service.get_team("never-seen").is_empty());
    }

    #[test]
    fn toggle_matches_by_id_not_display_fields() {
        let service = service();
        service.toggle_membership("user1", creature(1, "Bulbasaur", "Grass"));

        // Same id, different display fields: this is a removal, not a merge.
        let renamed = creature(1, "Fushigidane", "Kusa");
        assert!(service.toggle_membership("user1", renamed));
        assert!(service.get_team("user1").is_empty());
    }

    #[test]
    fn stored_fields_are_never_updated_in_place() {
        let service = service();
        service.toggle_membership("user1", creature(1, "Bulbasaur", "Grass"));
        for id in 2..=6 {
            service.toggle_membership("user1", creature(id, "filler", "Normal"));
        }
        // Team is now full; this add is rejected and must not touch anything.
        assert!(!service.toggle_membership("user1", creature(25, "Pikachu", "Electric")));

        // The stored Bulbasaur keeps its original display fields.
        let team = service.get_team("user1");
        assert_eq!(team[0].name, "Bulbasaur");
        assert_eq!(team[0].type_name, "Grass");
    }

    #[test]
    fn teams_are_partitioned_by_user() {
        let service = service();
        service.toggle_membership("user1", creature(1, "Bulbasaur", "Grass"));
        service.toggle_membership("user2", creature(4, "Charmander", "Fire"));

        assert_eq!(service.get_team("user1").len(), 1);
        assert_eq!(service.get_team("user2").len(), 1);

        service.clear_team("user1");
        assert!(service.get_team("user1").is_empty());
        assert_eq!(service.get_team("user2").len(), 1);
    }

    #[test]
    fn concurrent_toggles_never_exceed_capacity() {
        let service = Arc::new(service());

        let handles: Vec<_> = (1..=12)
            .map(|id| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || {
                    service.toggle_membership("user1", creature(id, "n", "t"))
                })
            })
            .collect();

        let accepted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&accepted| accepted)
            .count();

        let team = service.get_team("user1");
        assert_eq!(team.len(), TEAM_CAPACITY);
        assert_eq!(accepted, TEAM_CAPACITY);
    }

    #[tokio::test]
    async fn fetch_catalog_delegates_unchanged() {
        let catalog = vec![
            creature(1, "Bulbasaur", "Grass"),
            creature(4, "Charmander", "Fire"),
        ];
        let service = TeamService::new(MockGateway::ok(catalog.clone()));

        let fetched = service.fetch_catalog().await.unwrap();
        assert_eq!(fetched, catalog);
        assert_eq!(fetched[0].name, "Bulbasaur");
    }

    #[tokio::test]
    async fn fetch_catalog_propagates_upstream_error() {
        let service = TeamService::new(MockGateway::failing());
        service.toggle_membership("user1", creature(1, "Bulbasaur", "Grass"));

        let err = service.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, UpstreamError::Status { status: 503, .. }));

        // The failure leaves team state untouched.
        assert_eq!(service.get_team("user1").len(), 1);
    }
}
