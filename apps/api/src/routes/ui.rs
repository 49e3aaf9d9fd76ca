use axum::{
    http::header,
    response::{Html, IntoResponse},
};

static INDEX_HTML: &str = include_str!("../../web/index.html");
static ADD_JOB_HTML: &str = include_str!("../../web/add_job.html");
static EDIT_JOB_HTML: &str = include_str!("../../web/edit_job.html");
static REPORTS_HTML: &str = include_str!("../../web/reports.html");
static APP_JS: &str = include_str!("../../web/app.js");
static STYLES_CSS: &str = include_str!("../../web/styles.css");

/// GET /app — job listings.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /app/add_job.html
pub async fn add_job_handler() -> Html<&'static str> {
    Html(ADD_JOB_HTML)
}

/// GET /app/edit_job.html?job_id=
pub async fn edit_job_handler() -> Html<&'static str> {
    Html(EDIT_JOB_HTML)
}

/// GET /app/reports.html
pub async fn reports_handler() -> Html<&'static str> {
    Html(REPORTS_HTML)
}

pub async fn script_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript; charset=utf-8")], APP_JS)
}

pub async fn stylesheet_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLES_CSS)
}
