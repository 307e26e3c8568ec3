//! Quote providers and the fallback chain that picks the first one to succeed.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::Utc;

use crate::config::SYNTHETIC;
use crate::data::synthetic;
use crate::domain::Observation;

#[cfg(not(target_arch = "wasm32"))]
pub use remote::{ApiQuoteSource, Credentials, parse_observations};

#[async_trait]
pub trait CreateQuoteSnapshot: Send + Sync {
    // Either produce observations OR return an anyhow::Error
    async fn create_observations(&self) -> Result<Vec<Observation>>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Try each provider in order; the first success wins.
pub async fn get_snapshot_async(
    providers: &[Box<dyn CreateQuoteSnapshot>],
) -> Result<(Vec<Observation>, &'static str)> {
    for provider in providers {
        match provider.create_observations().await {
            Ok(observations) => return Ok((observations, provider.signature())),
            Err(e) => {
                log::info!("{} failed: {:#}", provider.signature(), e);
                // Continue to the next provider
            }
        }
    }
    Err(anyhow!("All {} quote providers failed", providers.len()))
}

/// Locally generated random-walk data.
pub struct SyntheticQuoteSource {
    pub symbols: Vec<String>,
    pub points_per_symbol: usize,
}

impl Default for SyntheticQuoteSource {
    fn default() -> Self {
        Self {
            symbols: synthetic::default_symbols(),
            points_per_symbol: SYNTHETIC.points_per_symbol,
        }
    }
}

impl SyntheticQuoteSource {
    pub fn generate(&self) -> Vec<Observation> {
        synthetic::generate_snapshot(
            &mut rand::rng(),
            &self.symbols,
            self.points_per_symbol,
            Utc::now(),
        )
    }
}

#[async_trait]
impl CreateQuoteSnapshot for SyntheticQuoteSource {
    fn signature(&self) -> &'static str {
        "Synthetic random walk"
    }

    async fn create_observations(&self) -> Result<Vec<Observation>> {
        Ok(self.generate())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod remote {
    use anyhow::{Context, Result, bail};
    use async_trait::async_trait;
    use serde::{Deserialize, Serialize};
    use std::path::Path;
    use std::time::Duration;

    use super::CreateQuoteSnapshot;
    use crate::config::FeedSettings;
    use crate::domain::Observation;

    /// Body of the token exchange. Loaded from a JSON file, never compiled in.
    #[derive(Serialize, Deserialize, Debug, Clone)]
    pub struct Credentials {
        pub email: String,
        pub name: String,
        #[serde(rename = "rollNo")]
        pub roll_no: String,
        #[serde(rename = "accessCode")]
        pub access_code: String,
        #[serde(rename = "clientID")]
        pub client_id: String,
        #[serde(rename = "clientSecret")]
        pub client_secret: String,
    }

    impl Credentials {
        pub fn load(path: &Path) -> Result<Self> {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading credentials from {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("parsing credentials in {}", path.display()))
        }
    }

    #[derive(Deserialize)]
    struct AuthResponse {
        access_token: String,
    }

    /// Accept only a non-empty JSON array of observations.
    pub fn parse_observations(body: serde_json::Value) -> Result<Vec<Observation>> {
        match body {
            serde_json::Value::Array(rows) if !rows.is_empty() => {
                let observations: Vec<Observation> =
                    serde_json::from_value(serde_json::Value::Array(rows))
                        .context("decoding observation rows")?;
                Ok(observations)
            }
            serde_json::Value::Array(_) => bail!("quote service returned an empty list"),
            other => bail!("quote service returned a non-list payload: {}", kind_of(&other)),
        }
    }

    fn kind_of(value: &serde_json::Value) -> &'static str {
        match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "bool",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        }
    }

    /// Remote quote service: bearer token exchange, then one list fetch.
    pub struct ApiQuoteSource {
        client: reqwest::Client,
        auth_url: String,
        stocks_url: String,
        credentials: Credentials,
    }

    impl ApiQuoteSource {
        pub fn new(settings: &FeedSettings, credentials: Credentials) -> Result<Self> {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_millis(settings.timeout_ms))
                .build()
                .context("building HTTP client")?;
            Ok(Self {
                client,
                auth_url: settings.auth_url(),
                stocks_url: settings.stocks_url(),
                credentials,
            })
        }

        async fn fetch_token(&self) -> Result<String> {
            let response = self
                .client
                .post(&self.auth_url)
                .json(&self.credentials)
                .send()
                .await
                .context("auth request failed")?
                .error_for_status()
                .context("auth rejected")?;
            let auth: AuthResponse = response.json().await.context("decoding auth response")?;
            Ok(auth.access_token)
        }
    }

    #[async_trait]
    impl CreateQuoteSnapshot for ApiQuoteSource {
        fn signature(&self) -> &'static str {
            "Quote API"
        }

        async fn create_observations(&self) -> Result<Vec<Observation>> {
            let token = self.fetch_token().await?;
            let body: serde_json::Value = self
                .client
                .get(&self.stocks_url)
                .bearer_auth(token)
                .send()
                .await
                .context("stocks request failed")?
                .error_for_status()
                .context("stocks request rejected")?
                .json()
                .await
                .context("decoding stocks response")?;
            parse_observations(body)
        }
    }
}

/// Provider chain for the given settings: remote first (when configured), then synthetic.
#[cfg(not(target_arch = "wasm32"))]
pub fn build_providers(settings: &crate::config::FeedSettings) -> Vec<Box<dyn CreateQuoteSnapshot>> {
    let mut providers: Vec<Box<dyn CreateQuoteSnapshot>> = Vec::new();

    if settings.offline {
        log::info!("Offline mode: using synthetic quotes only");
    } else {
        match &settings.credentials_path {
            Some(path) => match Credentials::load(path)
                .and_then(|credentials| ApiQuoteSource::new(settings, credentials))
            {
                Ok(api) => providers.push(Box::new(api)),
                Err(e) => log::warn!("⚠️  Quote API disabled: {:#}", e),
            },
            None => log::warn!("⚠️  No credentials file given; using synthetic quotes"),
        }
    }

    providers.push(Box::new(SyntheticQuoteSource::default()));
    providers
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    #[async_trait]
    impl CreateQuoteSnapshot for Failing {
        fn signature(&self) -> &'static str {
            "failing"
        }
        async fn create_observations(&self) -> Result<Vec<Observation>> {
            Err(anyhow!("connection refused"))
        }
    }

    struct Fixed(Vec<Observation>);

    #[async_trait]
    impl CreateQuoteSnapshot for Fixed {
        fn signature(&self) -> &'static str {
            "fixed"
        }
        async fn create_observations(&self) -> Result<Vec<Observation>> {
            Ok(self.0.clone())
        }
    }

    fn one_obs() -> Vec<Observation> {
        vec![Observation::new("AAPL", 150.0, 0.5, Utc::now())]
    }

    #[tokio::test]
    async fn falls_back_past_failing_provider() {
        let providers: Vec<Box<dyn CreateQuoteSnapshot>> =
            vec![Box::new(Failing), Box::new(Fixed(one_obs()))];

        let (observations, source) = get_snapshot_async(&providers).await.unwrap();
        assert_eq!(source, "fixed");
        assert_eq!(observations.len(), 1);
    }

    #[tokio::test]
    async fn first_success_wins() {
        let providers: Vec<Box<dyn CreateQuoteSnapshot>> = vec![
            Box::new(Fixed(one_obs())),
            Box::new(SyntheticQuoteSource::default()),
        ];
        let (_, source) = get_snapshot_async(&providers).await.unwrap();
        assert_eq!(source, "fixed");
    }

    #[tokio::test]
    async fn errors_only_when_every_provider_fails() {
        let providers: Vec<Box<dyn CreateQuoteSnapshot>> =
            vec![Box::new(Failing), Box::new(Failing)];
        assert!(get_snapshot_async(&providers).await.is_err());
        assert!(get_snapshot_async(&[]).await.is_err());
    }

    #[tokio::test]
    async fn synthetic_source_covers_every_symbol() {
        let source = SyntheticQuoteSource {
            symbols: vec!["AAPL".into(), "TSLA".into()],
            points_per_symbol: 4,
        };
        let observations = source.create_observations().await.unwrap();
        assert_eq!(observations.len(), 8);
        assert_eq!(observations.iter().filter(|o| o.symbol == "TSLA").count(), 4);
    }

    #[test]
    fn api_payload_must_be_a_non_empty_list() {
        let rows = serde_json::json!([
            {"symbol": "AAPL", "price": 150.25, "change": 0.3, "timestamp": "2025-05-01T10:00:00Z"},
            {"symbol": "AAPL", "price": 150.55, "change": 0.3, "timestamp": "2025-05-01T10:01:00Z"}
        ]);
        assert_eq!(parse_observations(rows).unwrap().len(), 2);

        assert!(parse_observations(serde_json::json!([])).is_err());
        assert!(parse_observations(serde_json::json!({"stocks": []})).is_err());
        assert!(parse_observations(serde_json::json!([{"symbol": "AAPL"}])).is_err());
    }

    #[test]
    fn credentials_use_wire_field_names() {
        let json = r#"{"email":"a@b.c","name":"n","rollNo":"r","accessCode":"x","clientID":"id","clientSecret":"s"}"#;
        let credentials: Credentials = serde_json::from_str(json).unwrap();
        assert_eq!(credentials.client_id, "id");

        let back = serde_json::to_value(&credentials).unwrap();
        assert_eq!(back["clientSecret"], "s");
        assert_eq!(back["rollNo"], "r");
    }

    #[test]
    fn offline_settings_only_build_synthetic() {
        let settings = crate::config::FeedSettings {
            offline: true,
            ..Default::default()
        };
        let providers = build_providers(&settings);
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].signature(), "Synthetic random walk");
    }
}
