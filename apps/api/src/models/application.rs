use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Status assigned to applications that have not been decided yet.
pub const UNDER_REVIEW: &str = "under review";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub application_id: i32,
    pub user_id: i32,
    pub job_id: i32,
    pub application_date: DateTime<Utc>,
    pub status: String,
}
