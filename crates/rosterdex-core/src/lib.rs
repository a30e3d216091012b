//! Business logic and gateway trait definitions for rosterdex.
//!
//! This crate defines the "ports" (the [`catalog::gateway::CatalogGateway`]
//! trait) that the infrastructure layer implements, plus the team service
//! built on them. It depends only on `rosterdex-types` -- never on
//! `rosterdex-infra` or any HTTP/IO crate.

pub mod catalog;
pub mod service;
pub(crate) mod store;

pub use store::team::TEAM_CAPACITY;
