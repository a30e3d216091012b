use thiserror::Error;

/// Failure of the upstream catalog provider.
///
/// This is the single error kind surfaced at the catalog boundary: whatever
/// goes wrong between the service and the provider (transport, HTTP status,
/// response decoding) arrives at the caller as an `UpstreamError`. The core
/// performs no retries -- retry policy belongs to the gateway or the caller.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("catalog request failed: {0}")]
    Transport(String),

    #[error("catalog returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode catalog response: {0}")]
    Decode(String),
}
