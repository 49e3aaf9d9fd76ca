use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::application::{Application, UNDER_REVIEW};
use crate::models::job::{Job, JobId, JobUpdate, NewJob};
use crate::models::report::{
    ApplicationStatusRow, CompanyNameRow, EmailRow, EmployerLatestJobRow, IndustrySalaryRow,
    JobApplicationCountRow, JobSalaryRow, JobSummaryRow, JobTitleRow, LocationTopSalaryRow,
    UserApplicationRow, UserContactRow, UsernameRow,
};
use crate::models::user::SEEKER;
use crate::store::{
    JobBoardStore, HIGH_SALARY_THRESHOLD, NEW_YORK, RECENT_APPLICATION_DAYS, TOP_APPLIED_LIMIT,
    TOP_PAYING_LIMIT,
};

/// PostgreSQL-backed store. Each call checks a connection out of the pool for
/// exactly one statement.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobBoardStore for PgStore {
    async fn list_jobs(&self) -> Result<Vec<Job>, AppError> {
        Ok(sqlx::query_as::<_, Job>("SELECT * FROM jobs ORDER BY job_id")
            .fetch_all(&self.pool)
            .await?)
    }

    async fn get_job(&self, id: JobId) -> Result<Option<Job>, AppError> {
        Ok(sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE job_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create_job(&self, job: &NewJob) -> Result<JobId, AppError> {
        let id: JobId = sqlx::query_scalar(
            r#"
            INSERT INTO jobs (job_title, job_description, salary, location, employer_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING job_id
            "#,
        )
        .bind(&job.job_title)
        .bind(&job.job_description)
        .bind(job.salary)
        .bind(&job.location)
        .bind(job.employer_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update_job(&self, id: JobId, update: &JobUpdate) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE jobs
            SET job_title = $1, job_description = $2, salary = $3, location = $4
            WHERE job_id = $5
            "#,
        )
        .bind(&update.job_title)
        .bind(&update.job_description)
        .bind(update.salary)
        .bind(&update.location)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_job(&self, id: JobId) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM jobs WHERE job_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn jobs_by_location(&self, location: &str) -> Result<Vec<Job>, AppError> {
        Ok(
            sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE location = $1 ORDER BY job_id")
                .bind(location)
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn jobs_by_salary_range(&self, min: f64, max: f64) -> Result<Vec<Job>, AppError> {
        Ok(sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs WHERE salary BETWEEN $1 AND $2 ORDER BY job_id",
        )
        .bind(min)
        .bind(max)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn jobs_in_new_york(&self) -> Result<Vec<JobTitleRow>, AppError> {
        Ok(sqlx::query_as::<_, JobTitleRow>(
            "SELECT job_title FROM jobs WHERE location = $1 ORDER BY job_id",
        )
        .bind(NEW_YORK)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn users_applied_to_job(&self, job_id: JobId) -> Result<Vec<UsernameRow>, AppError> {
        Ok(sqlx::query_as::<_, UsernameRow>(
            r#"
            SELECT u.username
            FROM users u
            JOIN applications a ON u.user_id = a.user_id
            WHERE a.job_id = $1
            ORDER BY a.application_id
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn application_count(&self, job_id: JobId) -> Result<i64, AppError> {
        Ok(
            sqlx::query_scalar("SELECT COUNT(*) FROM applications WHERE job_id = $1")
                .bind(job_id)
                .fetch_one(&self.pool)
                .await?,
        )
    }

    async fn high_salary_jobs(&self) -> Result<Vec<JobSalaryRow>, AppError> {
        Ok(sqlx::query_as::<_, JobSalaryRow>(
            "SELECT job_title, salary FROM jobs WHERE salary > $1 ORDER BY job_id",
        )
        .bind(HIGH_SALARY_THRESHOLD)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn emails_for_job_title(&self, job_title: &str) -> Result<Vec<EmailRow>, AppError> {
        Ok(sqlx::query_as::<_, EmailRow>(
            r#"
            SELECT u.email
            FROM users u
            JOIN applications a ON u.user_id = a.user_id
            JOIN jobs j ON a.job_id = j.job_id
            WHERE j.job_title = $1
            ORDER BY a.application_id
            "#,
        )
        .bind(job_title)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn applications_under_review(&self) -> Result<Vec<Application>, AppError> {
        Ok(sqlx::query_as::<_, Application>(
            "SELECT * FROM applications WHERE status = $1 ORDER BY application_id",
        )
        .bind(UNDER_REVIEW)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn top_highest_paying_jobs(&self) -> Result<Vec<JobSalaryRow>, AppError> {
        Ok(sqlx::query_as::<_, JobSalaryRow>(
            "SELECT job_title, salary FROM jobs ORDER BY salary DESC, job_id LIMIT $1",
        )
        .bind(TOP_PAYING_LIMIT)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn jobs_by_employer(&self, employer_id: i32) -> Result<Vec<JobTitleRow>, AppError> {
        Ok(sqlx::query_as::<_, JobTitleRow>(
            "SELECT job_title FROM jobs WHERE employer_id = $1 ORDER BY job_id",
        )
        .bind(employer_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn employers_by_industry(
        &self,
        industry: &str,
    ) -> Result<Vec<CompanyNameRow>, AppError> {
        Ok(sqlx::query_as::<_, CompanyNameRow>(
            "SELECT company_name FROM employers WHERE industry = $1 ORDER BY employer_id",
        )
        .bind(industry)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn applications_past_week(&self) -> Result<Vec<Application>, AppError> {
        Ok(sqlx::query_as::<_, Application>(
            r#"
            SELECT * FROM applications
            WHERE application_date > NOW() - make_interval(days => $1)
            ORDER BY application_id
            "#,
        )
        .bind(RECENT_APPLICATION_DAYS as i32)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn jobs_with_applications(&self) -> Result<Vec<JobSummaryRow>, AppError> {
        Ok(sqlx::query_as::<_, JobSummaryRow>(
            r#"
            SELECT DISTINCT j.job_id, j.job_title
            FROM jobs j
            JOIN applications a ON j.job_id = a.job_id
            ORDER BY j.job_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn jobs_without_applications(&self) -> Result<Vec<JobSummaryRow>, AppError> {
        Ok(sqlx::query_as::<_, JobSummaryRow>(
            r#"
            SELECT j.job_id, j.job_title
            FROM jobs j
            LEFT JOIN applications a ON j.job_id = a.job_id
            WHERE a.job_id IS NULL
            ORDER BY j.job_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn average_salary_by_industry(&self) -> Result<Vec<IndustrySalaryRow>, AppError> {
        Ok(sqlx::query_as::<_, IndustrySalaryRow>(
            r#"
            SELECT e.industry, AVG(j.salary) AS average_salary
            FROM jobs j
            JOIN employers e ON j.employer_id = e.employer_id
            GROUP BY e.industry
            ORDER BY e.industry COLLATE "C"
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn total_job_seekers(&self) -> Result<i64, AppError> {
        Ok(
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE user_type = $1")
                .bind(SEEKER)
                .fetch_one(&self.pool)
                .await?,
        )
    }

    async fn top_applied_jobs(&self) -> Result<Vec<JobApplicationCountRow>, AppError> {
        Ok(sqlx::query_as::<_, JobApplicationCountRow>(
            r#"
            SELECT j.job_title, COUNT(a.application_id) AS application_count
            FROM jobs j
            JOIN applications a ON j.job_id = a.job_id
            GROUP BY j.job_id
            ORDER BY application_count DESC, j.job_id
            LIMIT $1
            "#,
        )
        .bind(TOP_APPLIED_LIMIT)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn user_applications(
        &self,
        user_id: i32,
    ) -> Result<Vec<UserApplicationRow>, AppError> {
        Ok(sqlx::query_as::<_, UserApplicationRow>(
            r#"
            SELECT a.application_id, j.job_title, a.application_date, a.status
            FROM applications a
            JOIN jobs j ON a.job_id = j.job_id
            WHERE a.user_id = $1
            ORDER BY a.application_id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn highest_paying_jobs_by_location(
        &self,
    ) -> Result<Vec<LocationTopSalaryRow>, AppError> {
        Ok(sqlx::query_as::<_, LocationTopSalaryRow>(
            r#"
            SELECT location, job_title, highest_salary
            FROM (
                SELECT DISTINCT ON (location)
                    location, job_title, salary AS highest_salary
                FROM jobs
                ORDER BY location, salary DESC, job_id
            ) best
            ORDER BY location COLLATE "C"
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn job_application_status(
        &self,
        job_id: JobId,
    ) -> Result<Vec<ApplicationStatusRow>, AppError> {
        Ok(sqlx::query_as::<_, ApplicationStatusRow>(
            r#"
            SELECT a.application_id, a.status, u.username
            FROM applications a
            JOIN users u ON a.user_id = u.user_id
            WHERE a.job_id = $1
            ORDER BY a.application_id
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn job_seekers_without_applications(&self) -> Result<Vec<UserContactRow>, AppError> {
        Ok(sqlx::query_as::<_, UserContactRow>(
            r#"
            SELECT u.user_id, u.username, u.email
            FROM users u
            LEFT JOIN applications a ON u.user_id = a.user_id
            WHERE u.user_type = $1 AND a.application_id IS NULL
            ORDER BY u.user_id
            "#,
        )
        .bind(SEEKER)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn most_recent_jobs_by_employer(&self) -> Result<Vec<EmployerLatestJobRow>, AppError> {
        Ok(sqlx::query_as::<_, EmployerLatestJobRow>(
            r#"
            SELECT DISTINCT ON (e.employer_id)
                e.company_name, j.job_title, j.job_id AS most_recent_job
            FROM jobs j
            JOIN employers e ON j.employer_id = e.employer_id
            ORDER BY e.employer_id, j.job_id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }
}

/// These run only when `TEST_DATABASE_URL` points at a disposable database.
#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};

    use super::*;
    use crate::db::{create_pool, run_migrations};

    /// `None` only when `TEST_DATABASE_URL` is unset; a configured but
    /// unreachable database fails the test.
    async fn test_store() -> Option<(PgStore, PgPool)> {
        let url = std::env::var("TEST_DATABASE_URL").ok()?;
        let pool = create_pool(&url, 2)
            .await
            .expect("TEST_DATABASE_URL is set but the database is unreachable");
        run_migrations(&pool)
            .await
            .expect("failed to apply migrations to the test database");
        Some((PgStore::new(pool.clone()), pool))
    }

    async fn insert_employer(pool: &PgPool, name: &str, industry: &str) -> i32 {
        sqlx::query_scalar(
            "INSERT INTO employers (company_name, industry) VALUES ($1, $2) RETURNING employer_id",
        )
        .bind(name)
        .bind(industry)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    fn new_job(title: &str, salary: f64, location: &str, employer_id: i32) -> NewJob {
        NewJob {
            job_title: title.to_string(),
            job_description: format!("{title} role"),
            salary,
            location: location.to_string(),
            employer_id,
        }
    }

    #[tokio::test]
    async fn test_job_crud_roundtrip() {
        let Some((store, pool)) = test_store().await else {
            return;
        };
        let employer_id = insert_employer(&pool, "Pg Crud Co", "Testing").await;

        let id = store
            .create_job(&new_job("Pg Engineer", 90_000.0, NEW_YORK, employer_id))
            .await
            .unwrap();
        let fetched = store.get_job(id).await.unwrap().unwrap();
        assert_eq!(fetched.job_title, "Pg Engineer");

        let update = JobUpdate {
            job_title: "Pg Staff Engineer".to_string(),
            job_description: "updated".to_string(),
            salary: 120_000.0,
            location: "Remote".to_string(),
        };
        assert!(store.update_job(id, &update).await.unwrap());
        assert_eq!(store.get_job(id).await.unwrap().unwrap().salary, 120_000.0);

        assert!(store.delete_job(id).await.unwrap());
        assert!(!store.delete_job(id).await.unwrap());
        assert!(!store.update_job(id, &update).await.unwrap());

        sqlx::query("DELETE FROM employers WHERE employer_id = $1")
            .bind(employer_id)
            .execute(&pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_salary_range_is_inclusive() {
        let Some((store, pool)) = test_store().await else {
            return;
        };
        let employer_id = insert_employer(&pool, "Pg Range Co", "Testing").await;
        let low = store
            .create_job(&new_job("Pg Low", 50_000.0, "Austin, TX", employer_id))
            .await
            .unwrap();
        let high = store
            .create_job(&new_job("Pg High", 100_000.0, "Austin, TX", employer_id))
            .await
            .unwrap();
        let above = store
            .create_job(&new_job("Pg Above", 100_000.5, "Austin, TX", employer_id))
            .await
            .unwrap();

        let ids: Vec<JobId> = store
            .jobs_by_salary_range(50_000.0, 100_000.0)
            .await
            .unwrap()
            .into_iter()
            .map(|j| j.job_id)
            .collect();
        assert!(ids.contains(&low));
        assert!(ids.contains(&high));
        assert!(!ids.contains(&above));

        sqlx::query("DELETE FROM jobs WHERE employer_id = $1")
            .bind(employer_id)
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("DELETE FROM employers WHERE employer_id = $1")
            .bind(employer_id)
            .execute(&pool)
            .await
            .unwrap();
    }

    const REPORT_PREFIX: &str = "pgreport-";

    async fn insert_user(pool: &PgPool, username: &str, user_type: &str) -> i32 {
        sqlx::query_scalar(
            "INSERT INTO users (username, email, user_type) VALUES ($1, $2, $3) RETURNING user_id",
        )
        .bind(username)
        .bind(format!("{username}@example.com"))
        .bind(user_type)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    async fn insert_application(
        pool: &PgPool,
        user_id: i32,
        job_id: JobId,
        application_date: DateTime<Utc>,
        status: &str,
    ) -> i32 {
        sqlx::query_scalar(
            r#"
            INSERT INTO applications (user_id, job_id, application_date, status)
            VALUES ($1, $2, $3, $4)
            RETURNING application_id
            "#,
        )
        .bind(user_id)
        .bind(job_id)
        .bind(application_date)
        .bind(status)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    /// Removes every row written by the report test, including leftovers
    /// from an earlier run that panicked.
    async fn clear_report_rows(pool: &PgPool) {
        let pattern = format!("{REPORT_PREFIX}%");
        for statement in [
            "DELETE FROM applications WHERE user_id IN (SELECT user_id FROM users WHERE username LIKE $1)",
            "DELETE FROM users WHERE username LIKE $1",
            "DELETE FROM jobs WHERE job_title LIKE $1",
            "DELETE FROM employers WHERE company_name LIKE $1",
        ] {
            sqlx::query(statement)
                .bind(&pattern)
                .execute(pool)
                .await
                .unwrap();
        }
    }

    /// Seeds a tagged dataset and checks every report. Assertions are scoped
    /// to the seeded ids and names so concurrent tests in the same database
    /// do not disturb them. Salaries sit far above anything else the tests
    /// write so the top-N reports are fully determined by this dataset.
    #[tokio::test]
    async fn test_reports_against_seeded_data() {
        let Some((store, pool)) = test_store().await else {
            return;
        };
        clear_report_rows(&pool).await;

        let tag = format!("{REPORT_PREFIX}{}", Utc::now().timestamp_micros());
        let named = |name: &str| format!("{tag} {name}");
        let technology = named("Technology");
        let finance = named("Finance");
        let chicago = named("Chicago");
        // Lowercase sorts after uppercase in byte order.
        let austin = named("austin");

        let seekers_before = store.total_job_seekers().await.unwrap();

        let acme = insert_employer(&pool, &named("Acme"), &technology).await;
        let globex = insert_employer(&pool, &named("Globex"), &finance).await;
        let initech = insert_employer(&pool, &named("Initech"), &technology).await;
        let umbrella = insert_employer(&pool, &named("Umbrella"), &named("Healthcare")).await;

        const TITLES: [&str; 6] = [
            "Software Engineer",
            "Data Analyst",
            "Product Manager",
            "Support Specialist",
            "Risk Analyst",
            "DevOps Engineer",
        ];
        let title_of = |index: usize| named(TITLES[index]);

        let mut jobs = Vec::new();
        for (index, salary, location, employer_id) in [
            (0, 1_095_000.0, NEW_YORK, acme),
            (1, 1_072_000.0, chicago.as_str(), globex),
            (2, 1_110_000.0, NEW_YORK, initech),
            (3, 1_048_000.0, austin.as_str(), acme),
            (4, 1_088_000.0, chicago.as_str(), globex),
            (5, 1_101_000.0, austin.as_str(), initech),
        ] {
            let id = store
                .create_job(&new_job(&title_of(index), salary, location, employer_id))
                .await
                .unwrap();
            jobs.push(id);
        }
        let job_ids: Vec<JobId> = jobs.clone();

        let alice = insert_user(&pool, &named("alice"), SEEKER).await;
        let bob = insert_user(&pool, &named("bob"), SEEKER).await;
        let carol = insert_user(&pool, &named("carol"), SEEKER).await;
        let dave = insert_user(&pool, &named("dave"), SEEKER).await;
        insert_user(&pool, &named("erin"), "employer-admin").await;
        let user_ids = [alice, bob, carol, dave];

        let now = Utc::now();
        for (user_id, job_index, days_ago, status) in [
            (alice, 0, 2, UNDER_REVIEW),
            (bob, 0, 10, "rejected"),
            (carol, 0, 1, UNDER_REVIEW),
            (alice, 2, 3, "interview"),
            (bob, 2, 20, UNDER_REVIEW),
            (carol, 4, 5, "offered"),
        ] {
            insert_application(
                &pool,
                user_id,
                jobs[job_index],
                now - Duration::days(days_ago),
                status,
            )
            .await;
        }

        let ours = |title: &str| title.starts_with(&tag);

        // 1. jobs in New York
        let ny: Vec<String> = store
            .jobs_in_new_york()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.job_title)
            .filter(|t| ours(t))
            .collect();
        assert_eq!(ny, vec![title_of(0), title_of(2)]);

        // 2. users who applied
        let applied: Vec<String> = store
            .users_applied_to_job(jobs[0])
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.username)
            .collect();
        assert_eq!(applied, vec![named("alice"), named("bob"), named("carol")]);

        // 3. application count
        assert_eq!(store.application_count(jobs[0]).await.unwrap(), 3);
        assert_eq!(store.application_count(jobs[1]).await.unwrap(), 0);

        // 4. high salary
        let high: Vec<String> = store
            .high_salary_jobs()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.job_title)
            .filter(|t| ours(t))
            .collect();
        assert_eq!(high.len(), 6);

        // 5. emails for a title
        let emails: Vec<String> = store
            .emails_for_job_title(&title_of(2))
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.email)
            .collect();
        assert_eq!(
            emails,
            vec![
                format!("{}@example.com", named("alice")),
                format!("{}@example.com", named("bob"))
            ]
        );

        // 6. under review
        let review = store
            .applications_under_review()
            .await
            .unwrap()
            .into_iter()
            .filter(|a| user_ids.contains(&a.user_id))
            .count();
        assert_eq!(review, 3);

        // 7. top five by salary
        let top: Vec<String> = store
            .top_highest_paying_jobs()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.job_title)
            .collect();
        assert_eq!(
            top,
            vec![title_of(2), title_of(5), title_of(0), title_of(4), title_of(1)]
        );

        // 8. jobs by employer
        let acme_jobs: Vec<String> = store
            .jobs_by_employer(acme)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.job_title)
            .collect();
        assert_eq!(acme_jobs, vec![title_of(0), title_of(3)]);

        // 9. employers by industry
        let tech: Vec<String> = store
            .employers_by_industry(&technology)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.company_name)
            .collect();
        assert_eq!(tech, vec![named("Acme"), named("Initech")]);

        // 10. past week
        let recent = store
            .applications_past_week()
            .await
            .unwrap()
            .into_iter()
            .filter(|a| user_ids.contains(&a.user_id))
            .count();
        assert_eq!(recent, 4);

        // 11 / 12. with and without applications
        let with: Vec<JobId> = store
            .jobs_with_applications()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.job_id)
            .filter(|id| job_ids.contains(id))
            .collect();
        assert_eq!(with, vec![jobs[0], jobs[2], jobs[4]]);
        let without = |rows: Vec<JobSummaryRow>| -> Vec<JobId> {
            rows.into_iter()
                .map(|r| r.job_id)
                .filter(|id| job_ids.contains(id))
                .collect()
        };
        assert_eq!(
            without(store.jobs_without_applications().await.unwrap()),
            vec![jobs[1], jobs[3], jobs[5]]
        );

        // 13. average salary by industry, byte-ordered
        let averages: Vec<(String, f64)> = store
            .average_salary_by_industry()
            .await
            .unwrap()
            .into_iter()
            .filter(|r| ours(&r.industry))
            .map(|r| (r.industry, r.average_salary))
            .collect();
        assert_eq!(
            averages,
            vec![(finance.clone(), 1_080_000.0), (technology.clone(), 1_088_500.0)]
        );

        // 14. total seekers
        assert_eq!(
            store.total_job_seekers().await.unwrap() - seekers_before,
            4
        );

        // 15. top applied
        let top_applied: Vec<(String, i64)> = store
            .top_applied_jobs()
            .await
            .unwrap()
            .into_iter()
            .map(|r| (r.job_title, r.application_count))
            .collect();
        assert_eq!(
            top_applied,
            vec![(title_of(0), 3), (title_of(2), 2), (title_of(4), 1)]
        );

        // 16. a user's applications
        let alice_apps: Vec<(String, String)> = store
            .user_applications(alice)
            .await
            .unwrap()
            .into_iter()
            .map(|r| (r.job_title, r.status))
            .collect();
        assert_eq!(
            alice_apps,
            vec![
                (title_of(0), UNDER_REVIEW.to_string()),
                (title_of(2), "interview".to_string())
            ]
        );

        // 17. best-paid job per location, byte-ordered
        let by_location: Vec<(String, String, f64)> = store
            .highest_paying_jobs_by_location()
            .await
            .unwrap()
            .into_iter()
            .filter(|r| ours(&r.location))
            .map(|r| (r.location, r.job_title, r.highest_salary))
            .collect();
        assert_eq!(
            by_location,
            vec![
                (chicago.clone(), title_of(4), 1_088_000.0),
                (austin.clone(), title_of(5), 1_101_000.0)
            ]
        );

        // 18. status per applicant
        let statuses: Vec<(String, String)> = store
            .job_application_status(jobs[0])
            .await
            .unwrap()
            .into_iter()
            .map(|r| (r.username, r.status))
            .collect();
        assert_eq!(
            statuses,
            vec![
                (named("alice"), UNDER_REVIEW.to_string()),
                (named("bob"), "rejected".to_string()),
                (named("carol"), UNDER_REVIEW.to_string())
            ]
        );

        // 19. idle seekers
        let idle: Vec<i32> = store
            .job_seekers_without_applications()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.user_id)
            .filter(|id| user_ids.contains(id))
            .collect();
        assert_eq!(idle, vec![dave]);

        // 20. most recent job per employer
        let latest: Vec<(String, String, JobId)> = store
            .most_recent_jobs_by_employer()
            .await
            .unwrap()
            .into_iter()
            .filter(|r| ours(&r.company_name))
            .map(|r| (r.company_name, r.job_title, r.most_recent_job))
            .collect();
        assert_eq!(
            latest,
            vec![
                (named("Acme"), title_of(3), jobs[3]),
                (named("Globex"), title_of(4), jobs[4]),
                (named("Initech"), title_of(5), jobs[5])
            ]
        );
        assert!(store.jobs_by_employer(umbrella).await.unwrap().is_empty());

        // A new application removes its job from the left-join report.
        insert_application(&pool, dave, jobs[1], Utc::now(), UNDER_REVIEW).await;
        assert_eq!(
            without(store.jobs_without_applications().await.unwrap()),
            vec![jobs[3], jobs[5]]
        );

        // Deleting a job leaves its applications counted but unjoined.
        assert!(store.delete_job(jobs[4]).await.unwrap());
        assert_eq!(store.application_count(jobs[4]).await.unwrap(), 1);
        assert!(store
            .user_applications(carol)
            .await
            .unwrap()
            .iter()
            .all(|r| r.job_title == title_of(0)));

        clear_report_rows(&pool).await;
    }
}
