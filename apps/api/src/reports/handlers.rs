use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::application::Application;
use crate::models::job::JobId;
use crate::models::report::{
    ApplicationCountRow, ApplicationStatusRow, CompanyNameRow, EmailRow, EmployerLatestJobRow,
    IndustrySalaryRow, JobApplicationCountRow, JobSalaryRow, JobSummaryRow, JobTitleRow,
    LocationTopSalaryRow, SeekerCountRow, UserApplicationRow, UserContactRow, UsernameRow,
};
use crate::state::AppState;

type ReportResult<T> = Result<Json<Vec<T>>, AppError>;

/// GET /reports/jobs-in-newyork
pub async fn handle_jobs_in_new_york(State(state): State<AppState>) -> ReportResult<JobTitleRow> {
    Ok(Json(state.store.jobs_in_new_york().await?))
}

/// GET /reports/users-applied/:job_id
pub async fn handle_users_applied(
    State(state): State<AppState>,
    path: Result<Path<JobId>, PathRejection>,
) -> ReportResult<UsernameRow> {
    let Path(job_id) = path?;
    Ok(Json(state.store.users_applied_to_job(job_id).await?))
}

/// GET /reports/application-count/:job_id
///
/// Single-row array, the shape an aggregate query result has on the wire.
pub async fn handle_application_count(
    State(state): State<AppState>,
    path: Result<Path<JobId>, PathRejection>,
) -> ReportResult<ApplicationCountRow> {
    let Path(job_id) = path?;
    let application_count = state.store.application_count(job_id).await?;
    Ok(Json(vec![ApplicationCountRow { application_count }]))
}

/// GET /reports/high-salary-jobs
pub async fn handle_high_salary_jobs(State(state): State<AppState>) -> ReportResult<JobSalaryRow> {
    Ok(Json(state.store.high_salary_jobs().await?))
}

/// GET /reports/emails-for-job/:job_title
pub async fn handle_emails_for_job(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ReportResult<EmailRow> {
    let Path(job_title) = path?;
    Ok(Json(state.store.emails_for_job_title(&job_title).await?))
}

/// GET /reports/applications-under-review
pub async fn handle_applications_under_review(
    State(state): State<AppState>,
) -> ReportResult<Application> {
    Ok(Json(state.store.applications_under_review().await?))
}

/// GET /reports/top-highest-paying-jobs
pub async fn handle_top_highest_paying_jobs(
    State(state): State<AppState>,
) -> ReportResult<JobSalaryRow> {
    Ok(Json(state.store.top_highest_paying_jobs().await?))
}

/// GET /reports/jobs-by-employer/:employer_id
pub async fn handle_jobs_by_employer(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ReportResult<JobTitleRow> {
    let Path(employer_id) = path?;
    Ok(Json(state.store.jobs_by_employer(employer_id).await?))
}

/// GET /reports/employers-by-industry/:industry
pub async fn handle_employers_by_industry(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ReportResult<CompanyNameRow> {
    let Path(industry) = path?;
    Ok(Json(state.store.employers_by_industry(&industry).await?))
}

/// GET /reports/applications-past-week
pub async fn handle_applications_past_week(
    State(state): State<AppState>,
) -> ReportResult<Application> {
    Ok(Json(state.store.applications_past_week().await?))
}

/// GET /reports/jobs-with-applications
pub async fn handle_jobs_with_applications(
    State(state): State<AppState>,
) -> ReportResult<JobSummaryRow> {
    Ok(Json(state.store.jobs_with_applications().await?))
}

/// GET /reports/jobs-without-applications
pub async fn handle_jobs_without_applications(
    State(state): State<AppState>,
) -> ReportResult<JobSummaryRow> {
    Ok(Json(state.store.jobs_without_applications().await?))
}

/// GET /reports/average-salary-by-industry
pub async fn handle_average_salary_by_industry(
    State(state): State<AppState>,
) -> ReportResult<IndustrySalaryRow> {
    Ok(Json(state.store.average_salary_by_industry().await?))
}

/// GET /reports/total-job-seekers
pub async fn handle_total_job_seekers(
    State(state): State<AppState>,
) -> ReportResult<SeekerCountRow> {
    let total_job_seekers = state.store.total_job_seekers().await?;
    Ok(Json(vec![SeekerCountRow { total_job_seekers }]))
}

/// GET /reports/top-applied-jobs
pub async fn handle_top_applied_jobs(
    State(state): State<AppState>,
) -> ReportResult<JobApplicationCountRow> {
    Ok(Json(state.store.top_applied_jobs().await?))
}

/// GET /reports/user-applications/:user_id
pub async fn handle_user_applications(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ReportResult<UserApplicationRow> {
    let Path(user_id) = path?;
    Ok(Json(state.store.user_applications(user_id).await?))
}

/// GET /reports/highest-paying-jobs-by-location
pub async fn handle_highest_paying_jobs_by_location(
    State(state): State<AppState>,
) -> ReportResult<LocationTopSalaryRow> {
    Ok(Json(state.store.highest_paying_jobs_by_location().await?))
}

/// GET /reports/job-application-status/:job_id
pub async fn handle_job_application_status(
    State(state): State<AppState>,
    path: Result<Path<JobId>, PathRejection>,
) -> ReportResult<ApplicationStatusRow> {
    let Path(job_id) = path?;
    Ok(Json(state.store.job_application_status(job_id).await?))
}

/// GET /reports/job-seekers-no-applications
pub async fn handle_job_seekers_no_applications(
    State(state): State<AppState>,
) -> ReportResult<UserContactRow> {
    Ok(Json(state.store.job_seekers_without_applications().await?))
}

/// GET /reports/most-recent-jobs-by-employer
pub async fn handle_most_recent_jobs_by_employer(
    State(state): State<AppState>,
) -> ReportResult<EmployerLatestJobRow> {
    Ok(Json(state.store.most_recent_jobs_by_employer().await?))
}
