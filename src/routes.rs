use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use bytes::Bytes;
use serde_json::Value;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::{
    backend::BackendClient,
    error::ApiError,
    models::{GenerationRequest, HealthStatus},
    ui::{static_asset, CreativeApi, FormController, FormState, PageRenderer},
};

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<BackendClient>,
    pub pages: Arc<PageRenderer>,
    /// Where form submissions go; normally the proxy endpoint of this server.
    pub creative_api: Arc<dyn CreativeApi>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(submit_form))
        .route("/api/generate-creative", post(generate_creative))
        .route("/health", get(health))
        .route("/static/*path", get(static_file))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

/// Proxy endpoint: validate, forward to the creative backend, relay the answer.
pub async fn generate_creative(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>, ApiError> {
    let request_id = Uuid::new_v4();
    async move {
        let request = serde_json::from_slice::<GenerationRequest>(&body)
            .map_err(|e| ApiError::Validation(format!("invalid request body: {e}")))
            .and_then(|request| request.validate().map_err(ApiError::Validation))
            .inspect_err(|e| warn!("⚠️ Rejected creative request: {}", e))?;

        info!(
            "🚀 Generating creative for brand '{}' (goal: {})",
            request.brand_name, request.campaign_goal
        );

        match state.backend.generate_creative(&request).await {
            Ok(creative) => {
                info!("✅ Creative generated");
                Ok(Json(creative))
            }
            Err(err) => {
                let err = ApiError::from(err);
                match err {
                    ApiError::Unexpected(ref details) => error!("❌ API route error: {}", details),
                    ref other => warn!("❌ Creative generation failed: {}", other.summary()),
                }
                Err(err)
            }
        }
    }
    .instrument(info_span!("generate_creative", %request_id))
    .await
}

pub async fn index(State(state): State<AppState>) -> Response {
    render_page(&state, &FormState::default())
}

/// Plain HTML form submission: replay every field as an edit, then submit.
pub async fn submit_form(State(state): State<AppState>, Form(fields): Form<Vec<(String, String)>>) -> Response {
    let mut controller = FormController::new(state.creative_api.clone());
    for (name, value) in fields {
        controller.edit(&name, value);
    }
    controller.submit().await;
    render_page(&state, controller.state())
}

fn render_page(state: &AppState, form_state: &FormState) -> Response {
    match state.pages.render(form_state) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("❌ Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

pub async fn static_file(Path(path): Path<String>) -> Response {
    match static_asset(&path) {
        Some((content_type, body)) => ([(header::CONTENT_TYPE, content_type)], body).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy", service: "refmorph" })
}
