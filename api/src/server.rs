//! Axum HTTP server configuration with GraphQL support

use std::sync::Arc;

use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderValue, Method, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use hyrule_db_api::SharedStore;
use serde::Serialize;
use serde_json::Value;
use tower_http::{
    CompressionLevel,
    compression::{CompressionLayer, predicate::SizeAbove},
    cors::CorsLayer,
    trace::TraceLayer,
};
use tracing::error;

use crate::{
    config::ApiConfig,
    schema::{CatalogSchema, build_schema},
};

/// Health check response for liveness probe
#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: &'static str,
}

/// Readiness check response
#[derive(Serialize)]
struct ReadinessResponse {
    status: String,
    version: &'static str,
    checks: ReadinessChecks,
}

#[derive(Serialize)]
struct ReadinessChecks {
    database: CheckStatus,
}

#[derive(Serialize)]
struct CheckStatus {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub schema: Arc<CatalogSchema>,
    pub store: SharedStore,
    pub playground_enabled: bool,
}

/// Build the Axum application router
pub fn build_app(store: SharedStore, config: &ApiConfig) -> Router {
    let app_state = AppState {
        schema: Arc::new(build_schema(store.clone())),
        store,
        playground_enabled: config.playground_enabled,
    };

    Router::new()
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        // Health check endpoints for Kubernetes probes
        .route("/healthz", get(healthz_handler))
        .route("/readyz", get(readyz_handler))
        .layer(cors_layer(&config.cors_allowed_origins))
        // Only responses > 1KB are worth compressing
        .layer(
            CompressionLayer::new()
                .zstd(true)
                .gzip(true)
                .quality(CompressionLevel::Default)
                .compress_when(SizeAbove::new(1024)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

fn cors_layer(allowed: &[String]) -> CorsLayer {
    if allowed.iter().any(|origin| origin == "*") {
        // Permissive CORS for development
        return CorsLayer::permissive();
    }

    let allowed_origins: Vec<HeaderValue> = allowed
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// GraphQL query/mutation handler
async fn graphql_handler(State(state): State<AppState>, Json(request): Json<Value>) -> Response {
    let request = match serde_json::from_value::<async_graphql::Request>(request) {
        Ok(req) => req,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "errors": [{
                        "message": format!("Invalid GraphQL request: {}", e)
                    }]
                })),
            )
                .into_response();
        }
    };

    let response = state.schema.execute(request).await;

    Json(serde_json::to_value(response).unwrap_or_else(|_| {
        serde_json::json!({
            "errors": [{"message": "Failed to serialize response"}]
        })
    }))
    .into_response()
}

/// GraphQL Playground UI (only enabled if playground_enabled config is true)
async fn graphql_playground(State(state): State<AppState>) -> impl IntoResponse {
    if state.playground_enabled {
        Html(playground_source(GraphQLPlaygroundConfig::new("/graphql"))).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            "GraphQL Playground is disabled. Use POST /graphql for queries.",
        )
            .into_response()
    }
}

/// Liveness probe endpoint - minimal check that process is alive
async fn healthz_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness probe endpoint - the store must answer a ping
async fn readyz_handler(State(state): State<AppState>) -> impl IntoResponse {
    let (status_code, status, database) = match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            "ready",
            CheckStatus {
                status: "healthy".to_string(),
                error: None,
            },
        ),
        Err(e) => {
            error!(error = %e, "Database readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "not_ready",
                CheckStatus {
                    status: "unhealthy".to_string(),
                    error: Some("unreachable".to_string()),
                },
            )
        }
    };

    (
        status_code,
        Json(ReadinessResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION"),
            checks: ReadinessChecks { database },
        }),
    )
}
