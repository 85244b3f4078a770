//! Bootcamp report sent to the reporting service after a bootcamp is created.

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::{Bootcamp, BootcampSummary, MemberCollection};

/// Report payload, serialized with the reporting service's camelCase names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootcampReport {
    pub bootcamp_id: String,
    pub name: String,
    pub description: String,
    pub capacities: Vec<CapabilityPayload>,
    pub technologies: Vec<TechnologyPayload>,
    pub participants: Vec<ParticipantPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityPayload {
    pub id: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechnologyPayload {
    pub id: String,
    pub name: String,
}

/// Enrolled participant. A new bootcamp has none yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantPayload {
    pub id: String,
    pub full_name: String,
    pub email: String,
}

impl BootcampReport {
    /// Builds the report from the created bootcamp and its freshly read summary.
    ///
    /// Identity fields come from the bootcamp; capabilities come from the
    /// summary. Technologies are flattened across capabilities and
    /// deduplicated by id, first occurrence wins.
    pub fn from_summary(bootcamp: &Bootcamp, summary: &BootcampSummary) -> Self {
        let capacities = summary
            .capabilities
            .iter()
            .map(|c| CapabilityPayload {
                id: c.id.clone(),
                name: c.name.clone(),
                description: c.description.clone(),
            })
            .collect();

        let mut technologies: IndexMap<&str, TechnologyPayload> = IndexMap::new();
        for technology in summary.capabilities.iter().flat_map(|c| &c.technologies) {
            technologies
                .entry(technology.id.as_str())
                .or_insert_with(|| TechnologyPayload {
                    id: technology.id.clone(),
                    name: technology.name.clone(),
                });
        }

        Self {
            bootcamp_id: bootcamp.id().to_string(),
            name: bootcamp.name().to_string(),
            description: bootcamp.description().to_string(),
            capacities,
            technologies: technologies.into_values().collect(),
            participants: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report endpoint unreachable: {0}")]
    Transport(String),

    #[error("report endpoint responded with status {0}")]
    Status(u16),
}

/// Delivers bootcamp reports to the reporting service.
///
/// # Implementations
///
/// - [`crate::infrastructure::report::HttpReportClient`] - JSON over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportNotifier: Send + Sync {
    /// Sends one report. Completion is awaited so failures reach the caller.
    async fn send(&self, report: BootcampReport) -> Result<(), ReportError>;
}
