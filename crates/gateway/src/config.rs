/// Gateway configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development; override via
/// environment variables in production.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the archive backend (default: `http://127.0.0.1:3000`).
    pub backend_url: String,
    /// Per-request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl GatewayConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                 |
    /// |------------------------------|-------------------------|
    /// | `CURIO_BACKEND_URL`          | `http://127.0.0.1:3000` |
    /// | `CURIO_REQUEST_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Self {
        let backend_url = std::env::var("CURIO_BACKEND_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:3000".into());

        let request_timeout_secs: u64 = std::env::var("CURIO_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("CURIO_REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            backend_url,
            request_timeout_secs,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:3000".into(),
            request_timeout_secs: 30,
        }
    }
}
