use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Employer {
    pub employer_id: i32,
    pub company_name: String,
    pub industry: String,
}
