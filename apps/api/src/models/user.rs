use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// `user_type` value that marks a job seeker.
pub const SEEKER: &str = "seeker";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub email: String,
    pub user_type: String,
}
