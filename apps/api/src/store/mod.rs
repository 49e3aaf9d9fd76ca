//! Query layer — a fixed catalog of job-board statements behind one trait.
//!
//! `PgStore` runs each operation as a single parameterized SQL statement.
//! `MemoryStore` reproduces the same semantics over in-process tables and backs
//! demo mode and the router tests.
//!
//! `AppState` holds an `Arc<dyn JobBoardStore>`, chosen at startup via config.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::application::Application;
use crate::models::job::{Job, JobId, JobUpdate, NewJob};
use crate::models::report::{
    ApplicationStatusRow, CompanyNameRow, EmailRow, EmployerLatestJobRow, IndustrySalaryRow,
    JobApplicationCountRow, JobSalaryRow, JobSummaryRow, JobTitleRow, LocationTopSalaryRow,
    UserApplicationRow, UserContactRow, UsernameRow,
};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Location matched by the New York report.
pub const NEW_YORK: &str = "New York, NY";
/// Jobs paying strictly more than this are "high salary".
pub const HIGH_SALARY_THRESHOLD: f64 = 80_000.0;
pub const TOP_PAYING_LIMIT: i64 = 5;
pub const TOP_APPLIED_LIMIT: i64 = 3;
/// Window for the recent-applications report.
pub const RECENT_APPLICATION_DAYS: i64 = 7;

#[async_trait]
pub trait JobBoardStore: Send + Sync {
    // ── Jobs ────────────────────────────────────────────────────────────────

    async fn list_jobs(&self) -> Result<Vec<Job>, AppError>;

    async fn get_job(&self, id: JobId) -> Result<Option<Job>, AppError>;

    async fn create_job(&self, job: &NewJob) -> Result<JobId, AppError>;

    /// Returns `false` when no job has `id`.
    async fn update_job(&self, id: JobId, update: &JobUpdate) -> Result<bool, AppError>;

    /// Returns `false` when no job has `id`.
    async fn delete_job(&self, id: JobId) -> Result<bool, AppError>;

    async fn jobs_by_location(&self, location: &str) -> Result<Vec<Job>, AppError>;

    /// Inclusive on both ends; `min > max` matches nothing.
    async fn jobs_by_salary_range(&self, min: f64, max: f64) -> Result<Vec<Job>, AppError>;

    // ── Reports ─────────────────────────────────────────────────────────────

    async fn jobs_in_new_york(&self) -> Result<Vec<JobTitleRow>, AppError>;

    async fn users_applied_to_job(&self, job_id: JobId) -> Result<Vec<UsernameRow>, AppError>;

    async fn application_count(&self, job_id: JobId) -> Result<i64, AppError>;

    async fn high_salary_jobs(&self) -> Result<Vec<JobSalaryRow>, AppError>;

    async fn emails_for_job_title(&self, job_title: &str) -> Result<Vec<EmailRow>, AppError>;

    async fn applications_under_review(&self) -> Result<Vec<Application>, AppError>;

    async fn top_highest_paying_jobs(&self) -> Result<Vec<JobSalaryRow>, AppError>;

    async fn jobs_by_employer(&self, employer_id: i32) -> Result<Vec<JobTitleRow>, AppError>;

    async fn employers_by_industry(&self, industry: &str)
        -> Result<Vec<CompanyNameRow>, AppError>;

    async fn applications_past_week(&self) -> Result<Vec<Application>, AppError>;

    async fn jobs_with_applications(&self) -> Result<Vec<JobSummaryRow>, AppError>;

    async fn jobs_without_applications(&self) -> Result<Vec<JobSummaryRow>, AppError>;

    async fn average_salary_by_industry(&self) -> Result<Vec<IndustrySalaryRow>, AppError>;

    async fn total_job_seekers(&self) -> Result<i64, AppError>;

    async fn top_applied_jobs(&self) -> Result<Vec<JobApplicationCountRow>, AppError>;

    async fn user_applications(&self, user_id: i32)
        -> Result<Vec<UserApplicationRow>, AppError>;

    async fn highest_paying_jobs_by_location(
        &self,
    ) -> Result<Vec<LocationTopSalaryRow>, AppError>;

    async fn job_application_status(
        &self,
        job_id: JobId,
    ) -> Result<Vec<ApplicationStatusRow>, AppError>;

    async fn job_seekers_without_applications(&self) -> Result<Vec<UserContactRow>, AppError>;

    async fn most_recent_jobs_by_employer(&self) -> Result<Vec<EmployerLatestJobRow>, AppError>;
}
