/// Errors from the gateway boundary.
///
/// Opaque to the rest of the client: callers only ever decide whether a
/// failure mutates visible state (it never does) and whether it is
/// translated at a user-facing boundary.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The call never reached the backend (network, DNS, TLS, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend rejected the operation.
    #[error("backend error ({status}): {message}")]
    Backend {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Raw response body, kept for diagnostics.
        message: String,
    },

    /// The backend replied with a payload the expected shape does not fit.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
