//! Quote service configuration constants and the runtime settings built from them.

/// Endpoints of the remote quote service
pub struct FeedEndpoints {
    pub base_url: &'static str,
    /// POST credentials here to receive a bearer token
    pub auth_path: &'static str,
    /// GET the flat observation list here
    pub stocks_path: &'static str,
}

/// Default values for the HTTP client
pub struct ClientDefaults {
    pub timeout_ms: u64,
}

/// The Master Feed Configuration
pub struct FeedConfig {
    pub endpoints: FeedEndpoints,
    pub client: ClientDefaults,
    /// One full refresh per interval
    pub poll_interval_ms: u64,
    /// Floor applied to user supplied intervals
    pub min_poll_interval_ms: u64,
}

pub const FEED: FeedConfig = FeedConfig {
    endpoints: FeedEndpoints {
        base_url: "http://20.244.56.144/evaluation-service",
        auth_path: "/auth",
        stocks_path: "/stocks",
    },
    client: ClientDefaults { timeout_ms: 4000 },
    poll_interval_ms: 5000,
    min_poll_interval_ms: 500,
};

/// Runtime feed settings (the constants above, optionally overridden by the CLI)
#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub base_url: String,
    pub credentials_path: Option<std::path::PathBuf>,
    /// Skip the remote service entirely and use synthetic data
    pub offline: bool,
    pub poll_interval_ms: u64,
    pub timeout_ms: u64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            base_url: FEED.endpoints.base_url.to_string(),
            credentials_path: None,
            offline: false,
            poll_interval_ms: FEED.poll_interval_ms,
            timeout_ms: FEED.client.timeout_ms,
        }
    }
}

impl FeedSettings {
    pub fn auth_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), FEED.endpoints.auth_path)
    }

    pub fn stocks_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), FEED.endpoints.stocks_path)
    }

    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.poll_interval_ms.max(FEED.min_poll_interval_ms))
    }
}
