use rand::Rng;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{sleep, timeout};
use tracing::{error, info, warn};

use crate::config::{endpoint, BackendConfig};
use crate::models::GenerationRequest;

pub const GENERATE_PATH: &str = "/generate-creative";

const LOG_BODY_LIMIT: usize = 1000;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend returned {status}")]
    Status { status: StatusCode, body: String },
    #[error("no response from creative backend within {after:?}")]
    Timeout { after: Duration },
    #[error("{0}")]
    Connect(String),
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
}

/// Renders an error together with its source chain, e.g.
/// `error sending request for url (...): tcp connect error: Connection refused`.
fn describe(err: reqwest::Error) -> String {
    format!("{:#}", anyhow::Error::from(err))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    Timeout,
    Connect,
    Other,
}

impl Failure {
    // A connect timeout reports both flags; it is a timeout, not a retryable refusal
    fn of(is_timeout: bool, is_connect: bool) -> Self {
        if is_timeout {
            Failure::Timeout
        } else if is_connect {
            Failure::Connect
        } else {
            Failure::Other
        }
    }
}

fn classify(err: reqwest::Error, connect_timeout: Duration) -> BackendError {
    match Failure::of(err.is_timeout(), err.is_connect()) {
        Failure::Timeout => BackendError::Timeout { after: connect_timeout },
        Failure::Connect => BackendError::Connect(describe(err)),
        Failure::Other => BackendError::Transport(describe(err)),
    }
}

// Keeps log lines readable when the backend sends large payloads
fn truncate_for_log(text: &str) -> String {
    match text.char_indices().nth(LOG_BODY_LIMIT) {
        Some((cut, _)) => format!("{}...[truncated {} bytes]", &text[..cut], text.len() - cut),
        None => text.to_string(),
    }
}

/// Single-endpoint client for the external creative-generation backend.
pub struct BackendClient {
    client: Client,
    config: BackendConfig,
    url: String,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| BackendError::Transport(describe(e)))?;
        let url = endpoint(&config.base_url, GENERATE_PATH);
        Ok(Self { client, config, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Forwards the request and returns the backend's JSON body untouched.
    ///
    /// Connection failures are retried up to `max_retries` times. Timeouts and
    /// error statuses are returned immediately since the backend may already
    /// be working on the request.
    pub async fn generate_creative(&self, request: &GenerationRequest) -> Result<Value, BackendError> {
        let mut attempt: u32 = 0;
        loop {
            let outcome = match timeout(self.config.timeout, self.perform_call(request)).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    error!("⏱️ Backend did not answer within {:?}", self.config.timeout);
                    return Err(BackendError::Timeout { after: self.config.timeout });
                }
            };

            match outcome {
                Err(BackendError::Connect(message)) if attempt < self.config.max_retries => {
                    let delay = self.backoff(attempt);
                    attempt += 1;
                    warn!(
                        "🔄 Backend connection failed ({}), retry {}/{} in {:?}",
                        message, attempt, self.config.max_retries, delay
                    );
                    sleep(delay).await;
                }
                other => return other,
            }
        }
    }

    fn backoff(&self, attempt: u32) -> Duration {
        let base = self.config.retry_backoff.as_millis() as u64;
        let exp = base.saturating_mul(1u64 << attempt.min(10));
        let jitter = if base > 1 { rand::thread_rng().gen_range(0..=base / 2) } else { 0 };
        Duration::from_millis(exp + jitter)
    }

    async fn perform_call(&self, request: &GenerationRequest) -> Result<Value, BackendError> {
        info!("🔗 Forwarding creative request for brand '{}' to: {}", request.brand_name, self.url);

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| classify(e, self.config.connect_timeout))?;

        let status = response.status();
        info!("📥 Backend response status: {}", status);

        let body = response.text().await.map_err(|e| classify(e, self.config.connect_timeout))?;

        if !status.is_success() {
            error!("❌ Backend error response: {}", truncate_for_log(&body));
            return Err(BackendError::Status { status, body });
        }

        info!("📥 Raw backend response: {}", truncate_for_log(&body));

        serde_json::from_str(&body)
            .map_err(|e| BackendError::Decode(format!("backend returned invalid JSON: {e}")))
    }
}
