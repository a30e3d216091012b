//! Application state wiring the service together.
//!
//! AppState holds the concrete service instance used by both the CLI and
//! the REST API. The service is generic over the gateway trait, but
//! AppState pins it to the concrete infra implementation.

use std::sync::Arc;
use std::time::Duration;

use rosterdex_core::service::team::TeamService;
use rosterdex_infra::cache::CachedCatalog;
use rosterdex_infra::config::load_global_config;
use rosterdex_infra::paths::resolve_data_dir;
use rosterdex_infra::pokeapi::PokeApiCatalog;
use rosterdex_types::config::GlobalConfig;

/// Concrete type alias for the service generic pinned to the infra gateway.
pub type ConcreteTeamService = TeamService<CachedCatalog<PokeApiCatalog>>;

/// Shared application state.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub team_service: Arc<ConcreteTeamService>,
    pub config: GlobalConfig,
}

impl AppState {
    /// Initialize the application state: load config, wire the service.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tracing::debug!(path = %data_dir.display(), "resolved data directory");

        // Ensure the data directory exists so users can drop a config.toml in it.
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_global_config(&data_dir).await;

        let gateway = PokeApiCatalog::new(&config.catalog);
        let cached = CachedCatalog::new(
            gateway,
            Duration::from_secs(config.catalog.cache_ttl_secs),
        );
        let team_service = TeamService::new(cached);

        Ok(Self {
            team_service: Arc::new(team_service),
            config,
        })
    }
}
