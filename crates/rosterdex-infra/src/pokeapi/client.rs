//! PokeApiCatalog -- concrete [`CatalogGateway`] implementation for PokeAPI.
//!
//! Fetches the paginated creature listing, then each creature's detail for
//! its dex id and primary type. Detail requests run concurrently with a
//! small bound so a full catalog fetch doesn't hammer the upstream.

use std::time::Duration;

use futures_util::stream::{self, StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;

use rosterdex_core::catalog::gateway::CatalogGateway;
use rosterdex_types::config::CatalogConfig;
use rosterdex_types::creature::Creature;
use rosterdex_types::error::UpstreamError;

use super::types::{PokemonDetail, PokemonPage};

/// PokeAPI catalog provider.
///
/// Implements [`CatalogGateway`] over the public REST API. All failure modes
/// (transport, non-2xx status, body decoding) surface as [`UpstreamError`].
pub struct PokeApiCatalog {
    client: reqwest::Client,
    base_url: String,
    limit: u32,
}

impl PokeApiCatalog {
    /// How many detail requests are in flight at once.
    const DETAIL_CONCURRENCY: usize = 8;

    /// Create a new provider from catalog settings.
    pub fn new(config: &CatalogConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: config.base_url.clone(),
            limit: config.limit,
        }
    }

    /// Override the base URL (useful for proxies or tests).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON body, mapping every failure mode
    /// into the corresponding [`UpstreamError`] variant.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, UpstreamError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }

    async fn fetch_detail(&self, name: &str) -> Result<Creature, UpstreamError> {
        let detail = self
            .get_json::<PokemonDetail>(&format!("/api/v2/pokemon/{name}"))
            .await?;
        Ok(creature_from_detail(detail))
    }
}

impl CatalogGateway for PokeApiCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<Creature>, UpstreamError> {
        let page = self
            .get_json::<PokemonPage>(&format!("/api/v2/pokemon?limit={}", self.limit))
            .await?;

        let creatures: Vec<Creature> = stream::iter(page.results)
            .map(|entry| async move { self.fetch_detail(&entry.name).await })
            .buffered(Self::DETAIL_CONCURRENCY)
            .try_collect()
            .await?;

        tracing::debug!(count = creatures.len(), "fetched catalog from PokeAPI");
        Ok(creatures)
    }
}

/// Flatten a PokeAPI detail payload into the domain shape: dex id, display
/// name, and the slot-1 type, all title-cased the way they are shown.
fn creature_from_detail(detail: PokemonDetail) -> Creature {
    let primary = detail
        .types
        .iter()
        .min_by_key(|slot| slot.slot)
        .map(|slot| slot.type_ref.name.as_str())
        .unwrap_or("unknown");

    Creature {
        id: detail.id,
        name: title_case(&detail.name),
        type_name: title_case(primary),
    }
}

/// Uppercase the first character ("bulbasaur" -> "Bulbasaur").
fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
