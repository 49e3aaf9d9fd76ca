//! Turns loosely-typed job payloads into `NewJob` / `JobUpdate`.
//!
//! Browser forms post every value as a string and the create form uses the
//! short names (`title`, `description`), so the payload accepts both spellings
//! and numeric strings. A field counts as missing when it is absent, null, or
//! blank.

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::job::{JobUpdate, NewJob};

/// A JSON number or a string holding one.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberInput {
    Number(f64),
    Text(String),
}

impl NumberInput {
    /// `Ok(None)` for a blank string.
    fn to_f64(&self, field: &str) -> Result<Option<f64>, AppError> {
        match self {
            NumberInput::Number(n) => Ok(Some(*n)),
            NumberInput::Text(s) if s.trim().is_empty() => Ok(None),
            NumberInput::Text(s) => s
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| AppError::Validation(format!("{field} must be a number"))),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct JobPayload {
    #[serde(default, alias = "title")]
    pub job_title: Option<String>,
    #[serde(default, alias = "description")]
    pub job_description: Option<String>,
    #[serde(default)]
    pub salary: Option<NumberInput>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub employer_id: Option<NumberInput>,
}

/// Collects missing field names so one response can list all of them.
struct Fields {
    missing: Vec<&'static str>,
}

impl Fields {
    fn new() -> Self {
        Self {
            missing: Vec::new(),
        }
    }

    fn text(&mut self, name: &'static str, value: &Option<String>) -> String {
        match value.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    fn number(&mut self, name: &'static str, value: &Option<NumberInput>) -> Result<f64, AppError> {
        let parsed = match value {
            Some(input) => input.to_f64(name)?,
            None => None,
        };
        match parsed {
            Some(n) if n.is_finite() => Ok(n),
            Some(_) => Err(AppError::Validation(format!("{name} must be a finite number"))),
            None => {
                self.missing.push(name);
                Ok(0.0)
            }
        }
    }

    fn finish(self) -> Result<(), AppError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "All fields are required! Missing: {}",
                self.missing.join(", ")
            )))
        }
    }
}

fn check_salary(salary: f64) -> Result<f64, AppError> {
    if salary < 0.0 {
        return Err(AppError::Validation("salary must be non-negative".to_string()));
    }
    Ok(salary)
}

fn check_employer_id(raw: f64) -> Result<i32, AppError> {
    if raw.fract() != 0.0 || raw < 1.0 || raw > f64::from(i32::MAX) {
        return Err(AppError::Validation(
            "employer_id must be a positive integer".to_string(),
        ));
    }
    Ok(raw as i32)
}

pub fn validate_new_job(payload: &JobPayload) -> Result<NewJob, AppError> {
    let mut fields = Fields::new();
    let job_title = fields.text("job_title", &payload.job_title);
    let job_description = fields.text("job_description", &payload.job_description);
    let salary = fields.number("salary", &payload.salary)?;
    let location = fields.text("location", &payload.location);
    let employer_id = fields.number("employer_id", &payload.employer_id)?;
    fields.finish()?;

    Ok(NewJob {
        job_title,
        job_description,
        salary: check_salary(salary)?,
        location,
        employer_id: check_employer_id(employer_id)?,
    })
}

/// `employer_id` is ignored on update; a job never changes owner.
pub fn validate_job_update(payload: &JobPayload) -> Result<JobUpdate, AppError> {
    let mut fields = Fields::new();
    let job_title = fields.text("job_title", &payload.job_title);
    let job_description = fields.text("job_description", &payload.job_description);
    let salary = fields.number("salary", &payload.salary)?;
    let location = fields.text("location", &payload.location);
    fields.finish()?;

    Ok(JobUpdate {
        job_title,
        job_description,
        salary: check_salary(salary)?,
        location,
    })
}
