//! REST API: router, handlers, envelope responses, error mapping.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
