//! Read models rendered by listings.
//!
//! Summaries are rebuilt from joined rows on every read and never persisted.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnologySummary {
    pub id: String,
    pub name: String,
}

/// A capability with the technologies it groups.
///
/// `technology_count` is the authoritative count and is reported separately
/// from the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<TechnologySummary>,
    pub technology_count: i64,
}

/// A bootcamp with its capabilities, in listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootcampSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub launch_date: NaiveDate,
    pub duration_weeks: i32,
    pub capabilities: Vec<CapabilitySummary>,
    pub capability_count: i64,
}
