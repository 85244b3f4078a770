//! Capability aggregate.

use super::aggregate::{
    DomainViolation, MemberCollection, MemberRules, validate_description, validate_members,
    validate_name,
};

/// A capability groups between 3 and 20 technologies under a short name.
///
/// Capabilities are referenced by bootcamps and rendered in listings; they are
/// never created through this service's HTTP API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capability {
    id: String,
    name: String,
    description: String,
    technologies: Vec<String>,
}

impl Capability {
    pub fn new(
        id: String,
        name: String,
        description: String,
        technologies: Vec<String>,
    ) -> Result<Self, DomainViolation> {
        validate_name(&name, &Self::RULES)?;
        validate_description(&description, &Self::RULES)?;
        validate_members(&technologies, &Self::RULES)?;

        Ok(Self {
            id,
            name,
            description,
            technologies,
        })
    }

    pub fn technologies(&self) -> &[String] {
        &self.technologies
    }
}

impl MemberCollection for Capability {
    const RULES: MemberRules = MemberRules {
        kind: "capability",
        members: "technologies",
        name_max_len: 50,
        description_max_len: Some(90),
        min_members: 3,
        max_members: 20,
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
        &self.technologies
    }
}
