use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub type JobId = i32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub job_id: JobId,
    pub job_title: String,
    pub job_description: String,
    pub salary: f64,
    pub location: String,
    pub employer_id: i32,
}

/// A validated job ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub job_title: String,
    pub job_description: String,
    pub salary: f64,
    pub location: String,
    pub employer_id: i32,
}

/// A validated replacement for the mutable columns of an existing job.
/// `employer_id` is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct JobUpdate {
    pub job_title: String,
    pub job_description: String,
    pub salary: f64,
    pub location: String,
}
