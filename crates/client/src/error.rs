use curio_core::CoreError;
use curio_gateway::GatewayError;

/// User-facing, status-coded error from the record boundary.
///
/// Carries an HTTP-style status so a routing or error layer can render
/// it directly: 400 for input rejected client-side, 500 for backend
/// failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{status}: {message}")]
pub struct LoadError {
    pub status: u16,
    pub message: String,
}

impl LoadError {
    /// Input was rejected before reaching the backend.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: 400,
            message: message.into(),
        }
    }

    /// The backend failed unexpectedly.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: 500,
            message: message.into(),
        }
    }
}

impl From<CoreError> for LoadError {
    fn from(err: CoreError) -> Self {
        LoadError::bad_request(err.to_string())
    }
}

impl From<GatewayError> for LoadError {
    fn from(err: GatewayError) -> Self {
        LoadError::internal(err.to_string())
    }
}
