//! Shared test utilities.

#![allow(dead_code)]

pub mod mock_backend;

use refmorph::backend::BackendClient;
use refmorph::config::BackendConfig;
use refmorph::ui::{CreativeApi, HttpCreativeApi, PageRenderer};
use refmorph::{build_router, AppState};
use reqwest::Url;
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use std::time::Duration;

pub const CREATIVE_JSON: &str = r#"{"headline":"Stay cold, stay bold","primary_text":"Meet the bottle that keeps up.","cta":"Shop Now","generated_image_url":"https://picsum.photos/seed/refmorph-demo/800/800"}"#;

/// An address nothing listens on, so connecting is refused.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn backend_config(base_url: &str) -> BackendConfig {
    BackendConfig {
        base_url: Url::parse(base_url).unwrap(),
        timeout: Duration::from_secs(2),
        connect_timeout: Duration::from_secs(1),
        max_retries: 1,
        retry_backoff: Duration::from_millis(10),
    }
}

pub fn test_state(backend: BackendConfig, creative_api: Arc<dyn CreativeApi>) -> AppState {
    AppState {
        backend: Arc::new(BackendClient::new(backend).unwrap()),
        pages: Arc::new(PageRenderer::new().unwrap()),
        creative_api,
    }
}

/// Serves the whole app on an ephemeral port, with the form posting to the app itself.
pub async fn spawn_app(backend: BackendConfig) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let proxy_url = Url::parse(&format!("http://{addr}")).unwrap();
    let state = test_state(backend, Arc::new(HttpCreativeApi::new(&proxy_url)));
    tokio::spawn(async move {
        axum::serve(listener, build_router(state)).await.ok();
    });
    addr
}
