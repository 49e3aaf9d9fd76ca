//! Axum route handlers for the Jobs API.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::jobs::validation::{validate_job_update, validate_new_job, JobPayload};
use crate::models::job::{Job, JobId};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SalaryRangeQuery {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct JobCreatedResponse {
    pub job_id: JobId,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn job_not_found(id: JobId) -> AppError {
    AppError::NotFound(format!("Job {id} not found"))
}

/// GET /jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, AppError> {
    Ok(Json(state.store.list_jobs().await?))
}

/// GET /jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    path: Result<Path<JobId>, PathRejection>,
) -> Result<Json<Job>, AppError> {
    let Path(id) = path?;
    let job = state.store.get_job(id).await?.ok_or_else(|| job_not_found(id))?;
    Ok(Json(job))
}

/// POST /jobs
///
/// Rejects the request before touching the store if any field is missing.
pub async fn handle_create_job(
    State(state): State<AppState>,
    payload: Result<Json<JobPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<JobCreatedResponse>), AppError> {
    let Json(payload) = payload?;
    let new_job = validate_new_job(&payload)?;

    let job_id = state.store.create_job(&new_job).await?;
    info!("Created job {job_id} for employer {}", new_job.employer_id);

    Ok((
        StatusCode::CREATED,
        Json(JobCreatedResponse {
            job_id,
            message: "Job created successfully!".to_string(),
        }),
    ))
}

/// PUT /jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    path: Result<Path<JobId>, PathRejection>,
    payload: Result<Json<JobPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;
    let update = validate_job_update(&payload)?;

    if !state.store.update_job(id, &update).await? {
        return Err(job_not_found(id));
    }
    info!("Updated job {id}");

    Ok(Json(MessageResponse {
        message: "Job updated successfully!".to_string(),
    }))
}

/// DELETE /jobs/:id
///
/// Applications for the job are left in place.
pub async fn handle_delete_job(
    State(state): State<AppState>,
    path: Result<Path<JobId>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = path?;
    if !state.store.delete_job(id).await? {
        return Err(job_not_found(id));
    }
    info!("Deleted job {id}");

    Ok(Json(MessageResponse {
        message: "Job deleted successfully!".to_string(),
    }))
}

/// GET /jobs/location/:location
pub async fn handle_jobs_by_location(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Job>>, AppError> {
    let Path(location) = path?;
    Ok(Json(state.store.jobs_by_location(&location).await?))
}

/// GET /jobs/salary?min=&max=
pub async fn handle_jobs_by_salary(
    State(state): State<AppState>,
    query: Result<Query<SalaryRangeQuery>, QueryRejection>,
) -> Result<Json<Vec<Job>>, AppError> {
    let Query(range) = query?;
    let (Some(min), Some(max)) = (range.min, range.max) else {
        return Err(AppError::Validation(
            "Both 'min' and 'max' query parameters are required".to_string(),
        ));
    };
    if !min.is_finite() || !max.is_finite() {
        return Err(AppError::Validation(
            "'min' and 'max' must be finite numbers".to_string(),
        ));
    }
    Ok(Json(state.store.jobs_by_salary_range(min, max).await?))
}
