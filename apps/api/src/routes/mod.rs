pub mod health;
pub mod ui;

use axum::{routing::get, Router};

use crate::jobs::handlers as jobs;
use crate::reports::handlers as reports;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::welcome_handler))
        .route("/health", get(health::health_handler))
        // Jobs API
        .route("/jobs", get(jobs::handle_list_jobs).post(jobs::handle_create_job))
        .route("/jobs/salary", get(jobs::handle_jobs_by_salary))
        .route(
            "/jobs/location/:location",
            get(jobs::handle_jobs_by_location),
        )
        .route(
            "/jobs/:id",
            get(jobs::handle_get_job)
                .put(jobs::handle_update_job)
                .delete(jobs::handle_delete_job),
        )
        // Reports API
        .route(
            "/reports/jobs-in-newyork",
            get(reports::handle_jobs_in_new_york),
        )
        .route(
            "/reports/users-applied/:job_id",
            get(reports::handle_users_applied),
        )
        .route(
            "/reports/application-count/:job_id",
            get(reports::handle_application_count),
        )
        .route(
            "/reports/high-salary-jobs",
            get(reports::handle_high_salary_jobs),
        )
        .route(
            "/reports/emails-for-job/:job_title",
            get(reports::handle_emails_for_job),
        )
        .route(
            "/reports/applications-under-review",
            get(reports::handle_applications_under_review),
        )
        .route(
            "/reports/top-highest-paying-jobs",
            get(reports::handle_top_highest_paying_jobs),
        )
        .route(
            "/reports/jobs-by-employer/:employer_id",
            get(reports::handle_jobs_by_employer),
        )
        .route(
            "/reports/employers-by-industry/:industry",
            get(reports::handle_employers_by_industry),
        )
        .route(
            "/reports/applications-past-week",
            get(reports::handle_applications_past_week),
        )
        .route(
            "/reports/jobs-with-applications",
            get(reports::handle_jobs_with_applications),
        )
        .route(
            "/reports/jobs-without-applications",
            get(reports::handle_jobs_without_applications),
        )
        .route(
            "/reports/average-salary-by-industry",
            get(reports::handle_average_salary_by_industry),
        )
        .route(
            "/reports/total-job-seekers",
            get(reports::handle_total_job_seekers),
        )
        .route(
            "/reports/top-applied-jobs",
            get(reports::handle_top_applied_jobs),
        )
        .route(
            "/reports/user-applications/:user_id",
            get(reports::handle_user_applications),
        )
        .route(
            "/reports/highest-paying-jobs-by-location",
            get(reports::handle_highest_paying_jobs_by_location),
        )
        .route(
            "/reports/job-application-status/:job_id",
            get(reports::handle_job_application_status),
        )
        .route(
            "/reports/job-seekers-no-applications",
            get(reports::handle_job_seekers_no_applications),
        )
        .route(
            "/reports/most-recent-jobs-by-employer",
            get(reports::handle_most_recent_jobs_by_employer),
        )
        // Browser client
        .route("/app", get(ui::index_handler))
        .route("/app/index.html", get(ui::index_handler))
        .route("/app/add_job.html", get(ui::add_job_handler))
        .route("/app/edit_job.html", get(ui::edit_job_handler))
        .route("/app/reports.html", get(ui::reports_handler))
        .route("/app/app.js", get(ui::script_handler))
        .route("/app/styles.css", get(ui::stylesheet_handler))
        .with_state(state)
}
