//! Bootcamp aggregate.

use chrono::NaiveDate;
use uuid::Uuid;

use super::aggregate::{
    DomainViolation, MemberCollection, MemberRules, validate_description, validate_members,
    validate_name,
};

/// A bootcamp: a dated, time-boxed program built from one to four capabilities.
///
/// Values can only be obtained through [`Bootcamp::new`] or [`Bootcamp::create`],
/// which enforce every invariant, so a `Bootcamp` in hand is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bootcamp {
    id: String,
    name: String,
    description: String,
    launch_date: NaiveDate,
    duration_weeks: i32,
    capabilities: Vec<String>,
}

/// Input data for creating a new bootcamp.
#[derive(Debug, Clone)]
pub struct NewBootcamp {
    pub name: String,
    pub description: String,
    pub launch_date: NaiveDate,
    pub duration_weeks: i32,
    pub capabilities: Vec<String>,
}

impl Bootcamp {
    /// Builds a bootcamp with an explicit id.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule, checked in this order: name,
    /// description, duration, capability count, blank ids, duplicated ids.
    pub fn new(
        id: String,
        name: String,
        description: String,
        launch_date: NaiveDate,
        duration_weeks: i32,
        capabilities: Vec<String>,
    ) -> Result<Self, DomainViolation> {
        validate_name(&name, &Self::RULES)?;
        validate_description(&description, &Self::RULES)?;
        if duration_weeks <= 0 {
            return Err(DomainViolation::Duration {
                kind: Self::RULES.kind,
            });
        }
        validate_members(&capabilities, &Self::RULES)?;

        Ok(Self {
            id,
            name,
            description,
            launch_date,
            duration_weeks,
            capabilities,
        })
    }

    /// Builds a bootcamp with a freshly generated id.
    pub fn create(new_bootcamp: NewBootcamp) -> Result<Self, DomainViolation> {
        Self::new(
            Uuid::new_v4().to_string(),
            new_bootcamp.name,
            new_bootcamp.description,
            new_bootcamp.launch_date,
            new_bootcamp.duration_weeks,
            new_bootcamp.capabilities,
        )
    }

    /// Rebuilds a bootcamp from stored columns without re-checking invariants.
    ///
    /// Stored rows may legitimately lag the rules (for example a root whose
    /// capability links failed to insert), and reads must still succeed.
    pub(crate) fn from_storage(
        id: String,
        name: String,
        description: String,
        launch_date: NaiveDate,
        duration_weeks: i32,
        capabilities: Vec<String>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            launch_date,
            duration_weeks,
            capabilities,
        }
    }

    pub fn launch_date(&self) -> NaiveDate {
        self.launch_date
    }

    pub fn duration_weeks(&self) -> i32 {
        self.duration_weeks
    }

    pub fn capabilities(&self) -> &[String] {
        &self.capabilities
    }
}

impl MemberCollection for Bootcamp {
    const RULES: MemberRules = MemberRules {
        kind: "bootcamp",
        members: "capabilities",
        name_max_len: 100,
        description_max_len: None,
        min_members: 1,
        max_members: 4,
    };

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn member_ids(&self) -> &[String] {
        &self.capabilities
    }
}
