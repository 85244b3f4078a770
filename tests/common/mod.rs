#![allow(dead_code)]

use async_trait::async_trait;
use bootcamp_service::domain::report::{BootcampReport, ReportError, ReportNotifier};
use bootcamp_service::infrastructure::persistence::PgBootcampRepository;
use bootcamp_service::state::AppState;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};

/// Notifier that keeps every report in memory.
#[derive(Default)]
pub struct RecordingNotifier {
    reports: Mutex<Vec<BootcampReport>>,
    fail_with: Option<u16>,
}

impl RecordingNotifier {
    pub fn failing(status: u16) -> Self {
        Self {
            reports: Mutex::new(Vec::new()),
            fail_with: Some(status),
        }
    }

    pub fn reports(&self) -> Vec<BootcampReport> {
        self.reports.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportNotifier for RecordingNotifier {
    async fn send(&self, report: BootcampReport) -> Result<(), ReportError> {
        if let Some(status) = self.fail_with {
            return Err(ReportError::Status(status));
        }
        self.reports.lock().unwrap().push(report);
        Ok(())
    }
}

pub async fn create_test_technology(pool: &PgPool, id: &str, name: &str) {
    sqlx::query("INSERT INTO bootcamp.technologies (id, name) VALUES ($1, $2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_capability(pool: &PgPool, id: &str, name: &str, technology_ids: &[&str]) {
    sqlx::query("INSERT INTO bootcamp.capabilities (id, name, description) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(name)
        .bind(format!("{name} description"))
        .execute(pool)
        .await
        .unwrap();

    for technology_id in technology_ids {
        sqlx::query(
            "INSERT INTO bootcamp.capability_technology (capability_id, technology_id) VALUES ($1, $2)",
        )
        .bind(id)
        .bind(technology_id)
        .execute(pool)
        .await
        .unwrap();
    }
}

/// Seeds `t1` Java, `t2` Rust, `t3` SQL plus `c1` APIs (t1, t2) and `c2` Ops (none).
pub async fn seed_catalog(pool: &PgPool) {
    create_test_technology(pool, "t1", "Java").await;
    create_test_technology(pool, "t2", "Rust").await;
    create_test_technology(pool, "t3", "SQL").await;
    create_test_capability(pool, "c1", "APIs", &["t2", "t1"]).await;
    create_test_capability(pool, "c2", "Ops", &[]).await;
}

pub async fn create_test_bootcamp(pool: &PgPool, id: &str, name: &str, capability_ids: &[&str]) {
    sqlx::query(
        r#"
        INSERT INTO bootcamp.bootcamps (id, name, description, launch_date, duration_weeks)
        VALUES ($1, $2, 'd', DATE '2024-01-01', 8)
        "#,
    )
    .bind(id)
    .bind(name)
    .execute(pool)
    .await
    .unwrap();

    for capability_id in capability_ids {
        sqlx::query(
            "INSERT INTO bootcamp.bootcamp_capability (bootcamp_id, capability_id) VALUES ($1, $2)",
        )
        .bind(id)
        .bind(capability_id)
        .execute(pool)
        .await
        .unwrap();
    }
}

pub async fn count_links(pool: &PgPool, bootcamp_id: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM bootcamp.bootcamp_capability WHERE bootcamp_id = $1")
        .bind(bootcamp_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> (AppState, Arc<RecordingNotifier>) {
    create_test_state_with(pool, RecordingNotifier::default())
}

pub fn create_test_state_with(
    pool: PgPool,
    notifier: RecordingNotifier,
) -> (AppState, Arc<RecordingNotifier>) {
    let repository = Arc::new(PgBootcampRepository::new(Arc::new(pool)));
    let notifier = Arc::new(notifier);

    let state = AppState::new(repository, notifier.clone());

    (state, notifier)
}
