use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::info;

use crate::errors::AppError;
use crate::models::application::{Application, UNDER_REVIEW};
use crate::models::employer::Employer;
use crate::models::job::{Job, JobId, JobUpdate, NewJob};
use crate::models::report::{
    ApplicationStatusRow, CompanyNameRow, EmailRow, EmployerLatestJobRow, IndustrySalaryRow,
    JobApplicationCountRow, JobSalaryRow, JobSummaryRow, JobTitleRow, LocationTopSalaryRow,
    UserApplicationRow, UserContactRow, UsernameRow,
};
use crate::models::user::{User, SEEKER};
use crate::store::{
    JobBoardStore, HIGH_SALARY_THRESHOLD, NEW_YORK, RECENT_APPLICATION_DAYS, TOP_APPLIED_LIMIT,
    TOP_PAYING_LIMIT,
};

/// Rows keyed by primary key, so iteration is in id order like `ORDER BY <pk>`.
#[derive(Default)]
struct Tables {
    employers: BTreeMap<i32, Employer>,
    users: BTreeMap<i32, User>,
    jobs: BTreeMap<JobId, Job>,
    applications: BTreeMap<i32, Application>,
    next_employer_id: i32,
    next_user_id: i32,
    next_job_id: i32,
    next_application_id: i32,
}

impl Tables {
    fn users_by_id(&self, user_id: i32) -> Option<&User> {
        self.users.get(&user_id)
    }

    /// Inner join of applications with their job, in application order.
    /// Orphaned applications (job deleted) drop out.
    fn applications_with_jobs(&self) -> impl Iterator<Item = (&Application, &Job)> {
        self.applications
            .values()
            .filter_map(|a| self.jobs.get(&a.job_id).map(|j| (a, j)))
    }

    fn applications_with_users(&self) -> impl Iterator<Item = (&Application, &User)> {
        self.applications
            .values()
            .filter_map(|a| self.users_by_id(a.user_id).map(|u| (a, u)))
    }
}

fn next_id(counter: &mut i32) -> i32 {
    *counter += 1;
    *counter
}

/// In-process implementation of the query catalog.
///
/// Enforces what the Postgres schema enforces: serial primary keys, jobs
/// referencing an existing employer, applications referencing an existing
/// user, non-negative salaries. `applications.job_id` is unchecked, matching
/// the schema, so deleting a job leaves its applications orphaned.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_employer(&self, company_name: &str, industry: &str) -> i32 {
        let mut t = self.tables.write().await;
        let employer_id = next_id(&mut t.next_employer_id);
        t.employers.insert(
            employer_id,
            Employer {
                employer_id,
                company_name: company_name.to_string(),
                industry: industry.to_string(),
            },
        );
        employer_id
    }

    pub async fn insert_user(&self, username: &str, email: &str, user_type: &str) -> i32 {
        let mut t = self.tables.write().await;
        let user_id = next_id(&mut t.next_user_id);
        t.users.insert(
            user_id,
            User {
                user_id,
                username: username.to_string(),
                email: email.to_string(),
                user_type: user_type.to_string(),
            },
        );
        user_id
    }

    pub async fn insert_application(
        &self,
        user_id: i32,
        job_id: JobId,
        application_date: DateTime<Utc>,
        status: &str,
    ) -> Result<i32, AppError> {
        let mut t = self.tables.write().await;
        if !t.users.contains_key(&user_id) {
            return Err(AppError::Store(format!(
                "application references missing user {user_id}"
            )));
        }
        let application_id = next_id(&mut t.next_application_id);
        t.applications.insert(
            application_id,
            Application {
                application_id,
                user_id,
                job_id,
                application_date,
                status: status.to_string(),
            },
        );
        Ok(application_id)
    }

    /// Loads a small fixed dataset so every report has something to show.
    pub async fn seed_demo(&self) -> Result<(), AppError> {
        let acme = self.insert_employer("Acme Corp", "Technology").await;
        let globex = self.insert_employer("Globex", "Finance").await;
        let initech = self.insert_employer("Initech", "Technology").await;
        self.insert_employer("Umbrella Health", "Healthcare").await;

        let mut job_ids = Vec::new();
        for (title, description, salary, location, employer_id) in [
            ("Software Engineer", "Build backend services", 95_000.0, NEW_YORK, acme),
            ("Data Analyst", "Own the reporting pipeline", 72_000.0, "Chicago, IL", globex),
            ("Product Manager", "Drive the roadmap", 110_000.0, NEW_YORK, initech),
            ("Support Specialist", "Help customers succeed", 48_000.0, "Austin, TX", acme),
            ("Risk Analyst", "Model credit exposure", 88_000.0, "Chicago, IL", globex),
            ("DevOps Engineer", "Keep the lights on", 101_000.0, "Austin, TX", initech),
        ] {
            let id = self
                .create_job(&NewJob {
                    job_title: title.to_string(),
                    job_description: description.to_string(),
                    salary,
                    location: location.to_string(),
                    employer_id,
                })
                .await?;
            job_ids.push(id);
        }

        let alice = self.insert_user("alice", "alice@example.com", SEEKER).await;
        let bob = self.insert_user("bob", "bob@example.com", SEEKER).await;
        let carol = self.insert_user("carol", "carol@example.com", SEEKER).await;
        self.insert_user("dave", "dave@example.com", SEEKER).await;
        self.insert_user("erin", "erin@acme.example", "employer-admin").await;

        let now = Utc::now();
        for (user_id, job_index, days_ago, status) in [
            (alice, 0, 2, UNDER_REVIEW),
            (bob, 0, 10, "rejected"),
            (carol, 0, 1, UNDER_REVIEW),
            (alice, 2, 3, "interview"),
            (bob, 2, 20, UNDER_REVIEW),
            (carol, 4, 5, "offered"),
        ] {
            self.insert_application(
                user_id,
                job_ids[job_index],
                now - Duration::days(days_ago),
                status,
            )
            .await?;
        }

        info!("Seeded in-memory store with demo data");
        Ok(())
    }
}

fn job_matches<'a>(
    t: &'a Tables,
    pred: impl Fn(&Job) -> bool + 'a,
) -> impl Iterator<Item = &'a Job> + 'a {
    t.jobs.values().filter(move |j| pred(j))
}

#[async_trait]
impl JobBoardStore for MemoryStore {
    async fn list_jobs(&self) -> Result<Vec<Job>, AppError> {
        let t = self.tables.read().await;
        Ok(t.jobs.values().cloned().collect())
    }

    async fn get_job(&self, id: JobId) -> Result<Option<Job>, AppError> {
        let t = self.tables.read().await;
        Ok(t.jobs.get(&id).cloned())
    }

    async fn create_job(&self, job: &NewJob) -> Result<JobId, AppError> {
        let mut t = self.tables.write().await;
        if !t.employers.contains_key(&job.employer_id) {
            return Err(AppError::Store(format!(
                "job references missing employer {}",
                job.employer_id
            )));
        }
        if job.salary < 0.0 {
            return Err(AppError::Store("salary must be non-negative".to_string()));
        }
        let job_id = next_id(&mut t.next_job_id);
        t.jobs.insert(
            job_id,
            Job {
                job_id,
                job_title: job.job_title.clone(),
                job_description: job.job_description.clone(),
                salary: job.salary,
                location: job.location.clone(),
                employer_id: job.employer_id,
            },
        );
        Ok(job_id)
    }

    async fn update_job(&self, id: JobId, update: &JobUpdate) -> Result<bool, AppError> {
        if update.salary < 0.0 {
            return Err(AppError::Store("salary must be non-negative".to_string()));
        }
        let mut t = self.tables.write().await;
        let Some(job) = t.jobs.get_mut(&id) else {
            return Ok(false);
        };
        job.job_title = update.job_title.clone();
        job.job_description = update.job_description.clone();
        job.salary = update.salary;
        job.location = update.location.clone();
        Ok(true)
    }

    async fn delete_job(&self, id: JobId) -> Result<bool, AppError> {
        let mut t = self.tables.write().await;
        Ok(t.jobs.remove(&id).is_some())
    }

    async fn jobs_by_location(&self, location: &str) -> Result<Vec<Job>, AppError> {
        let t = self.tables.read().await;
        Ok(job_matches(&t, |j| j.location == location).cloned().collect())
    }

    async fn jobs_by_salary_range(&self, min: f64, max: f64) -> Result<Vec<Job>, AppError> {
        let t = self.tables.read().await;
        Ok(job_matches(&t, |j| j.salary >= min && j.salary <= max)
            .cloned()
            .collect())
    }

    async fn jobs_in_new_york(&self) -> Result<Vec<JobTitleRow>, AppError> {
        let t = self.tables.read().await;
        Ok(job_matches(&t, |j| j.location == NEW_YORK)
            .map(|j| JobTitleRow {
                job_title: j.job_title.clone(),
            })
            .collect())
    }

    async fn users_applied_to_job(&self, job_id: JobId) -> Result<Vec<UsernameRow>, AppError> {
        let t = self.tables.read().await;
        Ok(t.applications_with_users()
            .filter(|(a, _)| a.job_id == job_id)
            .map(|(_, u)| UsernameRow {
                username: u.username.clone(),
            })
            .collect())
    }

    async fn application_count(&self, job_id: JobId) -> Result<i64, AppError> {
        let t = self.tables.read().await;
        Ok(t.applications.values().filter(|a| a.job_id == job_id).count() as i64)
    }

    async fn high_salary_jobs(&self) -> Result<Vec<JobSalaryRow>, AppError> {
        let t = self.tables.read().await;
        Ok(job_matches(&t, |j| j.salary > HIGH_SALARY_THRESHOLD)
            .map(|j| JobSalaryRow {
                job_title: j.job_title.clone(),
                salary: j.salary,
            })
            .collect())
    }

    async fn emails_for_job_title(&self, job_title: &str) -> Result<Vec<EmailRow>, AppError> {
        let t = self.tables.read().await;
        Ok(t.applications_with_jobs()
            .filter(|(_, j)| j.job_title == job_title)
            .filter_map(|(a, _)| t.users_by_id(a.user_id))
            .map(|u| EmailRow {
                email: u.email.clone(),
            })
            .collect())
    }

    async fn applications_under_review(&self) -> Result<Vec<Application>, AppError> {
        let t = self.tables.read().await;
        Ok(t.applications
            .values()
            .filter(|a| a.status == UNDER_REVIEW)
            .cloned()
            .collect())
    }

    async fn top_highest_paying_jobs(&self) -> Result<Vec<JobSalaryRow>, AppError> {
        let t = self.tables.read().await;
        let mut jobs: Vec<&Job> = t.jobs.values().collect();
        // Stable sort keeps job_id order among equal salaries.
        jobs.sort_by(|a, b| b.salary.total_cmp(&a.salary));
        Ok(jobs
            .into_iter()
            .take(TOP_PAYING_LIMIT as usize)
            .map(|j| JobSalaryRow {
                job_title: j.job_title.clone(),
                salary: j.salary,
            })
            .collect())
    }

    async fn jobs_by_employer(&self, employer_id: i32) -> Result<Vec<JobTitleRow>, AppError> {
        let t = self.tables.read().await;
        Ok(job_matches(&t, |j| j.employer_id == employer_id)
            .map(|j| JobTitleRow {
                job_title: j.job_title.clone(),
            })
            .collect())
    }

    async fn employers_by_industry(
        &self,
        industry: &str,
    ) -> Result<Vec<CompanyNameRow>, AppError> {
        let t = self.tables.read().await;
        Ok(t.employers
            .values()
            .filter(|e| e.industry == industry)
            .map(|e| CompanyNameRow {
                company_name: e.company_name.clone(),
            })
            .collect())
    }

    async fn applications_past_week(&self) -> Result<Vec<Application>, AppError> {
        let cutoff = Utc::now() - Duration::days(RECENT_APPLICATION_DAYS);
        let t = self.tables.read().await;
        Ok(t.applications
            .values()
            .filter(|a| a.application_date > cutoff)
            .cloned()
            .collect())
    }

    async fn jobs_with_applications(&self) -> Result<Vec<JobSummaryRow>, AppError> {
        let t = self.tables.read().await;
        let applied: HashSet<JobId> = t.applications.values().map(|a| a.job_id).collect();
        Ok(job_matches(&t, |j| applied.contains(&j.job_id))
            .map(|j| JobSummaryRow {
                job_id: j.job_id,
                job_title: j.job_title.clone(),
            })
            .collect())
    }

    async fn jobs_without_applications(&self) -> Result<Vec<JobSummaryRow>, AppError> {
        let t = self.tables.read().await;
        let applied: HashSet<JobId> = t.applications.values().map(|a| a.job_id).collect();
        Ok(job_matches(&t, |j| !applied.contains(&j.job_id))
            .map(|j| JobSummaryRow {
                job_id: j.job_id,
                job_title: j.job_title.clone(),
            })
            .collect())
    }

    async fn average_salary_by_industry(&self) -> Result<Vec<IndustrySalaryRow>, AppError> {
        let t = self.tables.read().await;
        let mut totals: BTreeMap<&str, (f64, u32)> = BTreeMap::new();
        for job in t.jobs.values() {
            if let Some(employer) = t.employers.get(&job.employer_id) {
                let entry = totals.entry(employer.industry.as_str()).or_insert((0.0, 0));
                entry.0 += job.salary;
                entry.1 += 1;
            }
        }
        Ok(totals
            .into_iter()
            .map(|(industry, (sum, count))| IndustrySalaryRow {
                industry: industry.to_string(),
                average_salary: sum / f64::from(count),
            })
            .collect())
    }

    async fn total_job_seekers(&self) -> Result<i64, AppError> {
        let t = self.tables.read().await;
        Ok(t.users.values().filter(|u| u.user_type == SEEKER).count() as i64)
    }

    async fn top_applied_jobs(&self) -> Result<Vec<JobApplicationCountRow>, AppError> {
        let t = self.tables.read().await;
        let mut counts: BTreeMap<JobId, i64> = BTreeMap::new();
        for (application, _) in t.applications_with_jobs() {
            *counts.entry(application.job_id).or_default() += 1;
        }
        let mut ranked: Vec<(JobId, i64)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(ranked
            .into_iter()
            .take(TOP_APPLIED_LIMIT as usize)
            .filter_map(|(job_id, application_count)| {
                t.jobs.get(&job_id).map(|j| JobApplicationCountRow {
                    job_title: j.job_title.clone(),
                    application_count,
                })
            })
            .collect())
    }

    async fn user_applications(
        &self,
        user_id: i32,
    ) -> Result<Vec<UserApplicationRow>, AppError> {
        let t = self.tables.read().await;
        Ok(t.applications_with_jobs()
            .filter(|(a, _)| a.user_id == user_id)
            .map(|(a, j)| UserApplicationRow {
                application_id: a.application_id,
                job_title: j.job_title.clone(),
                application_date: a.application_date,
                status: a.status.clone(),
            })
            .collect())
    }

    async fn highest_paying_jobs_by_location(
        &self,
    ) -> Result<Vec<LocationTopSalaryRow>, AppError> {
        let t = self.tables.read().await;
        let mut best: BTreeMap<&str, &Job> = BTreeMap::new();
        for job in t.jobs.values() {
            best.entry(job.location.as_str())
                .and_modify(|current| {
                    if job.salary > current.salary {
                        *current = job;
                    }
                })
                .or_insert(job);
        }
        Ok(best
            .into_iter()
            .map(|(location, job)| LocationTopSalaryRow {
                location: location.to_string(),
                job_title: job.job_title.clone(),
                highest_salary: job.salary,
            })
            .collect())
    }

    async fn job_application_status(
        &self,
        job_id: JobId,
    ) -> Result<Vec<ApplicationStatusRow>, AppError> {
        let t = self.tables.read().await;
        Ok(t.applications_with_users()
            .filter(|(a, _)| a.job_id == job_id)
            .map(|(a, u)| ApplicationStatusRow {
                application_id: a.application_id,
                status: a.status.clone(),
                username: u.username.clone(),
            })
            .collect())
    }

    async fn job_seekers_without_applications(&self) -> Result<Vec<UserContactRow>, AppError> {
        let t = self.tables.read().await;
        let applicants: HashSet<i32> = t.applications.values().map(|a| a.user_id).collect();
        Ok(t.users
            .values()
            .filter(|u| u.user_type == SEEKER && !applicants.contains(&u.user_id))
            .map(|u| UserContactRow {
                user_id: u.user_id,
                username: u.username.clone(),
                email: u.email.clone(),
            })
            .collect())
    }

    async fn most_recent_jobs_by_employer(&self) -> Result<Vec<EmployerLatestJobRow>, AppError> {
        let t = self.tables.read().await;
        // Jobs iterate in ascending id, so the last insert per employer wins.
        let mut latest: BTreeMap<i32, &Job> = BTreeMap::new();
        for job in t.jobs.values() {
            latest.insert(job.employer_id, job);
        }
        Ok(latest
            .into_iter()
            .filter_map(|(employer_id, job)| {
                t.employers.get(&employer_id).map(|e| EmployerLatestJobRow {
                    company_name: e.company_name.clone(),
                    job_title: job.job_title.clone(),
                    most_recent_job: job.job_id,
                })
            })
            .collect())
    }
}
