use std::path::Path;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use common::types::Health;
use service::CustomerId;
use tower_http::{
    cors::CorsLayer,
    services::ServeFile,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::metrics;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod customers;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// The stored-records gauge is read from the store on every scrape.
async fn metrics_handler<K: CustomerId>(State(state): State<AppState<K>>) -> (StatusCode, String) {
    metrics::set_stored(state.customers.len().await);
    metrics::encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router for a store keyed by `K`.
///
/// `frontend_dir` holds `index.html`, served at `/`.
pub fn build_router<K: CustomerId>(state: AppState<K>, cors: CorsLayer, frontend_dir: &str) -> Router {
    let index = ServeFile::new(Path::new(frontend_dir).join("index.html"));

    let public = Router::new()
        .route_service("/", index)
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let api = Router::new()
        .route("/metrics", get(metrics_handler::<K>))
        .route(
            "/customers",
            get(customers::list_customers::<K>).post(customers::create_customer::<K>),
        )
        .route(
            "/customers/:id",
            get(customers::get_customer::<K>)
                .patch(customers::replace_customer::<K>)
                .delete(customers::delete_customer::<K>),
        )
        .with_state(state);

    public
        .merge(api)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
