//! Infrastructure layer for rosterdex.
//!
//! Contains implementations of the gateway trait defined in `rosterdex-core`:
//! the PokeAPI HTTP client, the TTL catalog cache, the config loader, and
//! data-directory resolution.

pub mod cache;
pub mod config;
pub mod paths;
pub mod pokeapi;
