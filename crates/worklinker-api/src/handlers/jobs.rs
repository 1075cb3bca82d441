//! Job management handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;
use validator::Validate;

use worklinker_models::{Job, JobFields};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Response for a job deletion.
#[derive(Debug, Serialize)]
pub struct DeleteJobResponse {
    /// Number of documents removed (always 1 on success).
    pub deleted: u64,
}

/// POST /add-job
///
/// Inserts a new job with `bid_count` at zero and returns the stored
/// document including its assigned id.
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<JobFields>,
) -> ApiResult<(StatusCode, Json<Job>)> {
    payload.validate()?;

    let job = state.jobs.insert(payload).await?;
    info!(job_id = %job.id, buyer = %job.fields.buyer.email, "Job created");

    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /jobs
pub async fn list_jobs(State(state): State<AppState>) -> ApiResult<Json<Vec<Job>>> {
    let jobs = state.jobs.list_all().await?;
    Ok(Json(jobs))
}

/// GET /jobs/:email
///
/// Jobs whose nested buyer email matches the path address.
pub async fn list_jobs_by_buyer(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<Vec<Job>>> {
    let jobs = state.jobs.list_by_buyer(&email).await?;
    Ok(Json(jobs))
}

/// GET /job/:id
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Job>> {
    let job = state
        .jobs
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No job with id {id}")))?;
    Ok(Json(job))
}

/// PUT /update-job/:id
///
/// Overwrites the caller-supplied fields of an existing job. Strictly
/// conditional on existence; a missing id is 404, never an upsert.
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<JobFields>,
) -> ApiResult<Json<Job>> {
    payload.validate()?;

    let job = state
        .jobs
        .update(&id, payload)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No job with id {id}")))?;

    info!(job_id = %job.id, "Job updated");
    Ok(Json(job))
}

/// DELETE /job/:id
///
/// Bids referencing the job are deliberately left in place.
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteJobResponse>> {
    let deleted = state.jobs.delete(&id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found(format!("No job with id {id}")));
    }

    info!(job_id = %id, "Job deleted");
    Ok(Json(DeleteJobResponse { deleted }))
}
