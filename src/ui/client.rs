use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::config::endpoint;
use crate::models::{CreativeResult, GenerationRequest};
use crate::ui::controller::CreativeApi;

pub const PROXY_PATH: &str = "/api/generate-creative";

const FALLBACK_MESSAGE: &str = "Failed to generate creative";

#[derive(Debug, Error)]
pub enum ClientError {
    /// Proxy answered with a non-OK status.
    #[error("{0}")]
    Rejected(String),
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Picks the banner message from an error body: `details`, then `error`, then a fallback.
pub(crate) fn rejection_message(body: &str) -> String {
    let envelope: Value = serde_json::from_str(body).unwrap_or_else(|_| Value::Object(Default::default()));
    ["details", "error"]
        .into_iter()
        .filter_map(|key| envelope.get(key).and_then(Value::as_str))
        .find(|message| !message.is_empty())
        .unwrap_or(FALLBACK_MESSAGE)
        .to_string()
}

/// Posts form submissions to the proxy endpoint over HTTP.
pub struct HttpCreativeApi {
    client: Client,
    url: String,
}

impl HttpCreativeApi {
    pub fn new(proxy_url: &Url) -> Self {
        Self { client: Client::new(), url: endpoint(proxy_url, PROXY_PATH) }
    }

    pub async fn request(&self, request: &GenerationRequest) -> Result<CreativeResult, ClientError> {
        let response = self.client.post(&self.url).json(request).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Proxy rejected submission with {}", status);
            return Err(ClientError::Rejected(rejection_message(&body)));
        }
        Ok(response.json::<CreativeResult>().await?)
    }
}

#[async_trait]
impl CreativeApi for HttpCreativeApi {
    async fn generate(&self, request: &GenerationRequest) -> Result<CreativeResult, String> {
        self.request(request).await.map_err(|e| e.to_string())
    }
}
