//! Folding flat join rows into nested bootcamp summaries.
//!
//! The listing query joins bootcamps → links → capabilities → links →
//! technologies with outer joins, so a bootcamp with two capabilities of three
//! technologies each arrives as six rows repeating the bootcamp columns. This
//! module inverts that fan-out:
//!
//! 1. rows are grouped by bootcamp id, keeping first-appearance order;
//! 2. inside a bootcamp, rows are grouped by capability id (null ids are skipped);
//! 3. inside a capability, technologies are deduplicated by id (first wins,
//!    null ids are skipped).
//!
//! `capability_count` comes from the distinct-count column of the query. The
//! grouped list is counted independently and a disagreement is reported as
//! [`AggregationError::CountMismatch`] rather than papered over.

use chrono::NaiveDate;
use indexmap::IndexMap;
use thiserror::Error;

use crate::domain::entities::{BootcampSummary, CapabilitySummary, TechnologySummary};

/// One denormalized row of the bootcamp detail query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow {
    pub bootcamp_id: String,
    pub bootcamp_name: String,
    pub bootcamp_description: String,
    pub launch_date: NaiveDate,
    pub duration_weeks: i32,
    pub capability_count: i64,
    pub capability_id: Option<String>,
    pub capability_name: Option<String>,
    pub capability_description: Option<String>,
    pub technology_id: Option<String>,
    pub technology_name: Option<String>,
}

/// The rows handed to the aggregator contradict each other.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    #[error("bootcamp row group is empty")]
    EmptyBootcampGroup,

    #[error("capability row group of bootcamp {bootcamp_id} is empty")]
    EmptyCapabilityGroup { bootcamp_id: String },

    #[error("capability {capability_id} is missing column {column}")]
    MissingColumn {
        capability_id: String,
        column: &'static str,
    },

    #[error("bootcamp {bootcamp_id} reports {expected} capabilities but {actual} were joined")]
    CountMismatch {
        bootcamp_id: String,
        expected: i64,
        actual: i64,
    },
}

impl AggregationError {
    /// Message key surfaced to API callers.
    pub fn key(&self) -> &'static str {
        match self {
            AggregationError::EmptyBootcampGroup => "bootcamp.rows.empty",
            AggregationError::EmptyCapabilityGroup { .. } => "capability.rows.empty",
            AggregationError::MissingColumn { .. } => "capability.row.incomplete",
            AggregationError::CountMismatch { .. } => "bootcamp.capability.count.mismatch",
        }
    }
}

/// Groups rows into summaries, preserving the order in which bootcamps,
/// capabilities and technologies first appear.
pub fn aggregate_rows(rows: Vec<FlatRow>) -> Result<Vec<BootcampSummary>, AggregationError> {
    let mut bootcamps: IndexMap<String, Vec<FlatRow>> = IndexMap::new();
    for row in rows {
        bootcamps.entry(row.bootcamp_id.clone()).or_default().push(row);
    }

    bootcamps.into_values().map(summarize_bootcamp).collect()
}

fn summarize_bootcamp(rows: Vec<FlatRow>) -> Result<BootcampSummary, AggregationError> {
    let first = rows.first().ok_or(AggregationError::EmptyBootcampGroup)?;

    let mut groups: IndexMap<&str, Vec<&FlatRow>> = IndexMap::new();
    for row in &rows {
        if let Some(capability_id) = row.capability_id.as_deref() {
            groups.entry(capability_id).or_default().push(row);
        }
    }

    let capabilities = groups
        .into_values()
        .map(|group| summarize_capability(&first.bootcamp_id, &group))
        .collect::<Result<Vec<_>, _>>()?;

    let joined = capabilities.len() as i64;
    if joined != first.capability_count {
        return Err(AggregationError::CountMismatch {
            bootcamp_id: first.bootcamp_id.clone(),
            expected: first.capability_count,
            actual: joined,
        });
    }

    Ok(BootcampSummary {
        id: first.bootcamp_id.clone(),
        name: first.bootcamp_name.clone(),
        description: first.bootcamp_description.clone(),
        launch_date: first.launch_date,
        duration_weeks: first.duration_weeks,
        capabilities,
        capability_count: first.capability_count,
    })
}

fn summarize_capability(
    bootcamp_id: &str,
    rows: &[&FlatRow],
) -> Result<CapabilitySummary, AggregationError> {
    let first = rows
        .first()
        .ok_or_else(|| AggregationError::EmptyCapabilityGroup {
            bootcamp_id: bootcamp_id.to_string(),
        })?;

    let id = first.capability_id.clone().unwrap_or_default();
    let name = required(&first.capability_name, &id, "capability_name")?;
    let description = required(&first.capability_description, &id, "capability_description")?;

    let mut technologies: IndexMap<&str, TechnologySummary> = IndexMap::new();
    for row in rows {
        if let (Some(tech_id), Some(tech_name)) = (&row.technology_id, &row.technology_name) {
            technologies
                .entry(tech_id.as_str())
                .or_insert_with(|| TechnologySummary {
                    id: tech_id.clone(),
                    name: tech_name.clone(),
                });
        }
    }

    let technologies: Vec<TechnologySummary> = technologies.into_values().collect();

    Ok(CapabilitySummary {
        id,
        name,
        description,
        technology_count: technologies.len() as i64,
        technologies,
    })
}

fn required(
    value: &Option<String>,
    capability_id: &str,
    column: &'static str,
) -> Result<String, AggregationError> {
    value.clone().ok_or_else(|| AggregationError::MissingColumn {
        capability_id: capability_id.to_string(),
        column,
    })
}
