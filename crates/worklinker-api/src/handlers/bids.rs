//! Bid management handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::{info, warn};
use validator::Validate;

use worklinker_models::{Bid, BidFields, BidStatusUpdate};
use worklinker_store::parse_object_id;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Query parameters for the bid listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListBidsQuery {
    /// Present and non-empty: list bids on jobs the user posted.
    /// Absent or empty: list bids the user placed.
    #[serde(default)]
    pub buyer: Option<String>,
}

impl ListBidsQuery {
    fn is_buyer_mode(&self) -> bool {
        self.buyer.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// POST /add-bid
///
/// The unique (email, jobId) index is the duplicate gate: a second bid by
/// the same user on the same job fails the insert atomically, before any
/// side effect.
pub async fn create_bid(
    State(state): State<AppState>,
    Json(payload): Json<BidFields>,
) -> ApiResult<(StatusCode, Json<Bid>)> {
    payload.validate()?;
    parse_object_id(&payload.job_id)?;

    let bid = state.bids.insert(payload).await?;

    // The counter is derived data; the bid itself is already durable, so an
    // increment failure is logged rather than failing the request.
    match state.jobs.increment_bid_count(&bid.fields.job_id).await {
        Ok(true) => {}
        Ok(false) => warn!(
            job_id = %bid.fields.job_id,
            "Bid references a missing job; bid_count not incremented"
        ),
        Err(e) => warn!(
            job_id = %bid.fields.job_id,
            error = %e,
            "Failed to increment bid_count"
        ),
    }

    info!(bid_id = %bid.id, job_id = %bid.fields.job_id, bidder = %bid.fields.email, "Bid created");
    Ok((StatusCode::CREATED, Json(bid)))
}

/// GET /bids/:email
///
/// One endpoint, two queries: with a non-empty `buyer` query flag it lists
/// bids on jobs the user posted, otherwise bids the user placed.
pub async fn list_bids(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Query(query): Query<ListBidsQuery>,
) -> ApiResult<Json<Vec<Bid>>> {
    let bids = if query.is_buyer_mode() {
        state.bids.list_for_buyer(&email).await?
    } else {
        state.bids.list_for_bidder(&email).await?
    };
    Ok(Json(bids))
}

/// PATCH /bid-status-update/:id
///
/// Partial update of the `status` field only. Any non-empty value is
/// accepted; no transition graph is enforced.
pub async fn update_bid_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<BidStatusUpdate>,
) -> ApiResult<Json<Bid>> {
    payload.validate()?;

    let bid = state
        .bids
        .update_status(&id, &payload.status)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No bid with id {id}")))?;

    info!(bid_id = %bid.id, status = %bid.status, "Bid status updated");
    Ok(Json(bid))
}
