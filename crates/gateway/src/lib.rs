//! Asynchronous call boundary to the archive backend.
//!
//! Provides the [`Gateway`] trait (named operation in, JSON value or
//! failure out), an HTTP implementation over reqwest, env-driven
//! configuration, and typed wrappers for the remote operations the
//! client layer uses.

pub mod config;
pub mod error;
pub mod http;
pub mod ops;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use http::HttpGateway;

use async_trait::async_trait;

/// The abstract asynchronous call boundary to the backend.
///
/// An implementation executes the named remote operation with the given
/// argument bag and resolves to the operation's raw JSON result or a
/// failure. Callers get no latency or ordering guarantees: two calls
/// issued in sequence may complete in either order.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn invoke(
        &self,
        operation: &str,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, GatewayError>;
}
