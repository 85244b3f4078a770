//! PostgreSQL implementation of the bootcamp repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::aggregation::FlatRow;
use crate::domain::entities::{Bootcamp, MemberCollection, SortDirection, SortField};
use crate::domain::repositories::BootcampRepository;
use crate::error::AppError;
use crate::utils::db_error::{
    BOOTCAMP_CAPABILITY_FK, BOOTCAMP_NAME_KEY, is_foreign_key_violation_on, is_unique_violation_on,
};

/// Columns of the detail read path. `pb` is a relation shaped like
/// `bootcamp_counts` (bootcamp columns plus `capability_count`).
const DETAIL_SELECT: &str = r#"
    SELECT
        pb.id             AS bootcamp_id,
        pb.name           AS bootcamp_name,
        pb.description    AS bootcamp_description,
        pb.launch_date    AS bootcamp_launch_date,
        pb.duration_weeks AS bootcamp_duration_weeks,
        pb.capability_count,
        c.id              AS capability_id,
        c.name            AS capability_name,
        c.description     AS capability_description,
        t.id              AS technology_id,
        t.name            AS technology_name
    FROM {source} pb
    LEFT JOIN bootcamp.bootcamp_capability bc ON bc.bootcamp_id = pb.id
    LEFT JOIN bootcamp.capabilities c ON c.id = bc.capability_id
    LEFT JOIN bootcamp.capability_technology ct ON ct.capability_id = c.id
    LEFT JOIN bootcamp.technologies t ON t.id = ct.technology_id
"#;

const BOOTCAMP_COUNTS: &str = r#"
    SELECT
        b.id,
        b.name,
        b.description,
        b.launch_date,
        b.duration_weeks,
        COUNT(DISTINCT bc.capability_id) AS capability_count
    FROM bootcamp.bootcamps b
    LEFT JOIN bootcamp.bootcamp_capability bc ON bc.bootcamp_id = b.id
"#;

#[derive(Debug, FromRow)]
struct BootcampRecord {
    id: String,
    name: String,
    description: String,
    launch_date: NaiveDate,
    duration_weeks: i32,
    capabilities: Vec<String>,
}

impl From<BootcampRecord> for Bootcamp {
    fn from(r: BootcampRecord) -> Self {
        Bootcamp::from_storage(
            r.id,
            r.name,
            r.description,
            r.launch_date,
            r.duration_weeks,
            r.capabilities,
        )
    }
}

#[derive(Debug, FromRow)]
struct FlatRowRecord {
    bootcamp_id: String,
    bootcamp_name: String,
    bootcamp_description: String,
    bootcamp_launch_date: NaiveDate,
    bootcamp_duration_weeks: i32,
    capability_count: i64,
    capability_id: Option<String>,
    capability_name: Option<String>,
    capability_description: Option<String>,
    technology_id: Option<String>,
    technology_name: Option<String>,
}

impl From<FlatRowRecord> for FlatRow {
    fn from(r: FlatRowRecord) -> Self {
        FlatRow {
            bootcamp_id: r.bootcamp_id,
            bootcamp_name: r.bootcamp_name,
            bootcamp_description: r.bootcamp_description,
            launch_date: r.bootcamp_launch_date,
            duration_weeks: r.bootcamp_duration_weeks,
            capability_count: r.capability_count,
            capability_id: r.capability_id,
            capability_name: r.capability_name,
            capability_description: r.capability_description,
            technology_id: r.technology_id,
            technology_name: r.technology_name,
        }
    }
}

/// Page query: counts per bootcamp, one page of bootcamps, then the fan-out.
///
/// The sort column and direction come from closed enums, never from raw input.
fn page_query(sort_by: SortField, direction: SortDirection) -> String {
    let column = sort_by.column();
    let dir = direction.as_sql();
    format!(
        r#"
        WITH bootcamp_counts AS (
            {BOOTCAMP_COUNTS}
            GROUP BY b.id
        ),
        paged_bootcamps AS (
            SELECT * FROM bootcamp_counts
            ORDER BY {column} {dir}, id ASC
            LIMIT $1 OFFSET $2
        )
        {select}
        ORDER BY pb.{column} {dir}, pb.id, c.name, c.id, t.name, t.id
        "#,
        select = DETAIL_SELECT.replace("{source}", "paged_bootcamps"),
    )
}

fn detail_query() -> String {
    format!(
        r#"
        WITH bootcamp_counts AS (
            {BOOTCAMP_COUNTS}
            WHERE b.id = $1
            GROUP BY b.id
        )
        {select}
        ORDER BY c.name, c.id, t.name, t.id
        "#,
        select = DETAIL_SELECT.replace("{source}", "bootcamp_counts"),
    )
}

const FIND_BOOTCAMP: &str = r#"
    SELECT
        b.id,
        b.name,
        b.description,
        b.launch_date,
        b.duration_weeks,
        COALESCE(
            array_agg(bc.capability_id ORDER BY bc.id) FILTER (WHERE bc.capability_id IS NOT NULL),
            ARRAY[]::TEXT[]
        ) AS capabilities
    FROM bootcamp.bootcamps b
    LEFT JOIN bootcamp.bootcamp_capability bc ON bc.bootcamp_id = b.id
"#;

/// PostgreSQL repository for bootcamps.
///
/// Every method runs a single statement. Capability links keep their insertion
/// order through the serial id of `bootcamp_capability`.
pub struct PgBootcampRepository {
    pool: Arc<PgPool>,
}

impl PgBootcampRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BootcampRepository for PgBootcampRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Bootcamp>, AppError> {
        let sql = format!("{FIND_BOOTCAMP} WHERE b.name = $1 GROUP BY b.id");
        let record = sqlx::query_as::<_, BootcampRecord>(&sql)
            .bind(name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(record.map(Bootcamp::from))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Bootcamp>, AppError> {
        let sql = format!("{FIND_BOOTCAMP} WHERE b.id = $1 GROUP BY b.id");
        let record = sqlx::query_as::<_, BootcampRecord>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(record.map(Bootcamp::from))
    }

    async fn insert_bootcamp(&self, bootcamp: &Bootcamp) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO bootcamp.bootcamps (id, name, description, launch_date, duration_weeks)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(bootcamp.id())
        .bind(bootcamp.name())
        .bind(bootcamp.description())
        .bind(bootcamp.launch_date())
        .bind(bootcamp.duration_weeks())
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on(&e, BOOTCAMP_NAME_KEY) {
                AppError::conflict(
                    "bootcamp.name.already.exists",
                    json!({ "name": bootcamp.name() }),
                )
            } else {
                AppError::from(e)
            }
        })?;

        Ok(())
    }

    async fn insert_capability_link(
        &self,
        bootcamp_id: &str,
        capability_id: &str,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO bootcamp.bootcamp_capability (bootcamp_id, capability_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(bootcamp_id)
        .bind(capability_id)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_foreign_key_violation_on(&e, BOOTCAMP_CAPABILITY_FK) {
                AppError::bad_request(
                    "bootcamp.capability.not.found",
                    json!({ "capabilityId": capability_id }),
                )
            } else {
                AppError::from(e)
            }
        })?;

        Ok(())
    }

    async fn delete_cascade(&self, id: &str) -> Result<u64, AppError> {
        let removed: i64 = sqlx::query_scalar("SELECT bootcamp.delete_bootcamp($1)")
            .bind(id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(u64::try_from(removed).unwrap_or_default())
    }

    async fn fetch_page(
        &self,
        sort_by: SortField,
        direction: SortDirection,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FlatRow>, AppError> {
        let sql = page_query(sort_by, direction);
        let records = sqlx::query_as::<_, FlatRowRecord>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(records.into_iter().map(FlatRow::from).collect())
    }

    async fn count_bootcamps(&self) -> Result<i64, AppError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bootcamp.bootcamps")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(total)
    }

    async fn fetch_detail_rows(&self, bootcamp_id: &str) -> Result<Vec<FlatRow>, AppError> {
        let sql = detail_query();
        let records = sqlx::query_as::<_, FlatRowRecord>(&sql)
            .bind(bootcamp_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(records.into_iter().map(FlatRow::from).collect())
    }
}
