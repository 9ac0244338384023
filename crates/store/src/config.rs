/// Remote store connection settings loaded from environment variables.
///
/// All fields have defaults suitable for local development; load a `.env`
/// file first via `dotenvy::dotenv()` if the caller wants file-based config.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the authoritative store API (default: `http://localhost:4000`).
    pub base_url: String,
    /// Per-request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl StoreConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                 |
    /// |------------------------------|-------------------------|
    /// | `STORE_BASE_URL`             | `http://localhost:4000` |
    /// | `STORE_REQUEST_TIMEOUT_SECS` | `30`                    |
    pub fn from_env() -> Self {
        let base_url = std::env::var("STORE_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:4000".into());

        let request_timeout_secs: u64 = std::env::var("STORE_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("STORE_REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url,
            request_timeout_secs,
        }
    }
}
