//! Shared domain types for rosterdex.
//!
//! This crate contains the core domain types used across the rosterdex
//! service: Creature, the global configuration, and the upstream error type.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod creature;
pub mod error;
