//! DTOs for bootcamp endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::domain::entities::{
    BootcampSummary, CapabilitySummary, NewBootcamp, PageResult, TechnologySummary,
};
use crate::error::AppError;

/// Request to create a bootcamp.
///
/// Only shape checks live here. Capability count, blank and duplicated ids
/// are enforced by the aggregate so every entry point shares them.
///
/// `launchDate` and `capabilities` are optional on the wire so that an absent
/// or `null` value is reported with its own rule key when converting into
/// [`NewBootcamp`].
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBootcampRequest {
    #[validate(length(min = 1, max = 100, message = "invalid.bootcamp.name"))]
    pub name: String,

    #[validate(length(min = 1, message = "invalid.bootcamp.description"))]
    pub description: String,

    #[serde(default)]
    pub launch_date: Option<NaiveDate>,

    #[validate(range(min = 1, message = "invalid.bootcamp.duration"))]
    pub duration_weeks: i32,

    #[serde(default)]
    pub capabilities: Option<Vec<String>>,
}

impl TryFrom<CreateBootcampRequest> for NewBootcamp {
    type Error = AppError;

    fn try_from(r: CreateBootcampRequest) -> Result<Self, Self::Error> {
        let launch_date = r.launch_date.ok_or_else(|| {
            AppError::bad_request("invalid.bootcamp.launch.date", json!({ "field": "launchDate" }))
        })?;
        let capabilities = r.capabilities.ok_or_else(|| {
            AppError::bad_request(
                "invalid.bootcamp.capabilities.required",
                json!({ "field": "capabilities" }),
            )
        })?;

        Ok(NewBootcamp {
            name: r.name,
            description: r.description,
            launch_date,
            duration_weeks: r.duration_weeks,
            capabilities,
        })
    }
}

/// Identifier of a newly created resource.
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct TechnologyItem {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technology_count: i64,
    pub technologies: Vec<TechnologyItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootcampItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub launch_date: NaiveDate,
    pub duration_weeks: i32,
    pub capability_count: i64,
    pub capabilities: Vec<CapabilityItem>,
}

/// One page of bootcamps.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BootcampPageResponse {
    pub content: Vec<BootcampItem>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl From<TechnologySummary> for TechnologyItem {
    fn from(t: TechnologySummary) -> Self {
        TechnologyItem {
            id: t.id,
            name: t.name,
        }
    }
}

impl From<CapabilitySummary> for CapabilityItem {
    fn from(c: CapabilitySummary) -> Self {
        CapabilityItem {
            id: c.id,
            name: c.name,
            description: c.description,
            technology_count: c.technology_count,
            technologies: c.technologies.into_iter().map(TechnologyItem::from).collect(),
        }
    }
}

impl From<BootcampSummary> for BootcampItem {
    fn from(b: BootcampSummary) -> Self {
        BootcampItem {
            id: b.id,
            name: b.name,
            description: b.description,
            launch_date: b.launch_date,
            duration_weeks: b.duration_weeks,
            capability_count: b.capability_count,
            capabilities: b.capabilities.into_iter().map(CapabilityItem::from).collect(),
        }
    }
}

impl From<PageResult<BootcampSummary>> for BootcampPageResponse {
    fn from(page: PageResult<BootcampSummary>) -> Self {
        BootcampPageResponse {
            content: page.content.into_iter().map(BootcampItem::from).collect(),
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
        }
    }
}
