//! Provider error taxonomy.
//!
//! Only transport and configuration failures reach the handlers; a
//! completion that parses but contains garbage is degraded to a fallback
//! payload further down and never becomes an error.

use thiserror::Error;

/// Errors from a single provider invocation
#[derive(Debug, Error)]
pub enum AiError {
    /// Required API key absent from configuration; raised before any
    /// network call is attempted.
    #[error("{0} not configured")]
    MissingApiKey(&'static str),

    /// Provider answered with a non-success HTTP status. The response body
    /// is logged at the call site, not carried to the client.
    #[error("{provider} API error: {status}")]
    Provider { provider: &'static str, status: u16 },

    /// Provider answered 2xx but the body lacks the expected nested fields
    #[error("Invalid response from {0} API")]
    ResponseShape(&'static str),

    /// The HTTP request itself failed (connect, TLS, body read)
    #[error("{provider} request failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
}
