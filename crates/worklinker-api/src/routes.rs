//! API routes.

use axum::middleware;
use axum::routing::{delete, get, patch, post, put};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::bids::{create_bid, list_bids, update_bid_status};
use crate::handlers::health::{health, liveness, ready};
use crate::handlers::jobs::{
    create_job, delete_job, get_job, list_jobs, list_jobs_by_buyer, update_job,
};
use crate::middleware::{cors_layer, request_id, request_logging};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let job_routes = Router::new()
        .route("/add-job", post(create_job))
        .route("/jobs", get(list_jobs))
        .route("/jobs/:email", get(list_jobs_by_buyer))
        .route("/job/:id", get(get_job))
        .route("/job/:id", delete(delete_job))
        .route("/update-job/:id", put(update_job));

    let bid_routes = Router::new()
        .route("/add-bid", post(create_bid))
        .route("/bids/:email", get(list_bids))
        .route("/bid-status-update/:id", patch(update_bid_status));

    let health_routes = Router::new()
        .route("/", get(liveness))
        .route("/health", get(health))
        .route("/ready", get(ready));

    Router::new()
        .merge(job_routes)
        .merge(bid_routes)
        .merge(health_routes)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
