//! Global configuration types for rosterdex.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls the
//! HTTP server bind address and the upstream catalog client.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the rosterdex service.
///
/// Loaded from `~/.rosterdex/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream catalog client settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Bind address for the REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8420
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Settings for the upstream catalog provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the provider (override for proxies or tests).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// How many creatures to request from the catalog listing.
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How long a fetched catalog stays fresh before it is refetched.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_base_url() -> String {
    "https://pokeapi.co".to_string()
}

fn default_limit() -> u32 {
    151
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_cache_ttl_secs() -> u64 {
    300
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            limit: default_limit(),
            request_timeout_secs: default_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}
