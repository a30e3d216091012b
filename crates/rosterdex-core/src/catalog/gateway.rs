//! CatalogGateway trait definition.
//!
//! This is the boundary between the team service and whatever supplies the
//! creature catalog. Uses native async fn in traits (RPITIT, Rust 2024
//! edition, no async_trait macro).

use rosterdex_types::creature::Creature;
use rosterdex_types::error::UpstreamError;

/// Trait for catalog provider backends.
///
/// The provider is stateless from the service's point of view: one operation
/// that returns the full, current catalog. It may fail (surfaced as
/// [`UpstreamError`]) and it may be slow -- caching, retries, and timeouts
/// are the provider's own business, never the caller's.
///
/// Implementations live in `rosterdex-infra` (e.g., `PokeApiCatalog`).
pub trait CatalogGateway: Send + Sync {
    /// Retrieve the full creature catalog.
    ///
    /// No ordering guarantee is relied upon by callers.
    fn fetch_catalog(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Creature>, UpstreamError>> + Send;
}
