//! Shared validation shape for aggregates that own an ordered set of member ids.
//!
//! A bootcamp owns capability ids and a capability owns technology ids. Both
//! are named, described, and bounded in how many members they may hold, but
//! they are distinct aggregate kinds with their own limits.

use serde_json::{Value, json};
use std::collections::HashSet;
use thiserror::Error;

/// A violated domain rule.
///
/// The `Display` output is the stable message key returned to API callers,
/// e.g. `invalid.bootcamp.capabilities.min`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainViolation {
    #[error("invalid.{kind}.name")]
    Name { kind: &'static str, max_len: usize },

    #[error("invalid.{kind}.description")]
    Description { kind: &'static str, max_len: Option<usize> },

    #[error("invalid.{kind}.duration")]
    Duration { kind: &'static str },

    #[error("invalid.{kind}.{members}.min")]
    TooFewMembers {
        kind: &'static str,
        members: &'static str,
        min: usize,
    },

    #[error("invalid.{kind}.{members}.max")]
    TooManyMembers {
        kind: &'static str,
        members: &'static str,
        max: usize,
    },

    #[error("invalid.{kind}.{members}.blank")]
    BlankMember {
        kind: &'static str,
        members: &'static str,
    },

    #[error("invalid.{kind}.{members}.duplicated")]
    DuplicatedMember {
        kind: &'static str,
        members: &'static str,
        id: String,
    },

    #[error("invalid.pagination.page")]
    Page,

    #[error("invalid.pagination.size")]
    Size,

    #[error("invalid.sort.by")]
    SortBy,

    #[error("invalid.sort.order")]
    SortOrder,
}

impl DomainViolation {
    /// Structured context for the violated rule.
    pub fn details(&self) -> Value {
        match self {
            DomainViolation::Name { max_len, .. } => json!({ "min": 1, "max": max_len }),
            DomainViolation::Description { max_len, .. } => json!({ "min": 1, "max": max_len }),
            DomainViolation::Duration { .. } => json!({ "min": 1 }),
            DomainViolation::TooFewMembers { min, .. } => json!({ "min": min }),
            DomainViolation::TooManyMembers { max, .. } => json!({ "max": max }),
            DomainViolation::DuplicatedMember { id, .. } => json!({ "duplicated": id }),
            DomainViolation::BlankMember { .. }
            | DomainViolation::Page
            | DomainViolation::Size
            | DomainViolation::SortBy
            | DomainViolation::SortOrder => json!({}),
        }
    }
}

/// Bounds applied to one aggregate kind.
#[derive(Debug, Clone, Copy)]
pub struct MemberRules {
    /// Aggregate kind used in message keys (`bootcamp`, `capability`).
    pub kind: &'static str,
    /// Plural member name used in message keys (`capabilities`, `technologies`).
    pub members: &'static str,
    pub name_max_len: usize,
    pub description_max_len: Option<usize>,
    pub min_members: usize,
    pub max_members: usize,
}

/// A named aggregate holding an ordered, duplicate-free list of member ids.
pub trait MemberCollection {
    const RULES: MemberRules;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn member_ids(&self) -> &[String];

    fn member_count(&self) -> usize {
        self.member_ids().len()
    }
}

pub(crate) fn validate_name(name: &str, rules: &MemberRules) -> Result<(), DomainViolation> {
    if name.trim().is_empty() || name.chars().count() > rules.name_max_len {
        return Err(DomainViolation::Name {
            kind: rules.kind,
            max_len: rules.name_max_len,
        });
    }
    Ok(())
}

pub(crate) fn validate_description(
    description: &str,
    rules: &MemberRules,
) -> Result<(), DomainViolation> {
    let too_long = rules
        .description_max_len
        .is_some_and(|max| description.chars().count() > max);

    if description.trim().is_empty() || too_long {
        return Err(DomainViolation::Description {
            kind: rules.kind,
            max_len: rules.description_max_len,
        });
    }
    Ok(())
}

/// Checks count, blank and duplicate rules, in that order.
pub(crate) fn validate_members(
    members: &[String],
    rules: &MemberRules,
) -> Result<(), DomainViolation> {
    if members.len() < rules.min_members {
        return Err(DomainViolation::TooFewMembers {
            kind: rules.kind,
            members: rules.members,
            min: rules.min_members,
        });
    }
    if members.len() > rules.max_members {
        return Err(DomainViolation::TooManyMembers {
            kind: rules.kind,
            members: rules.members,
            max: rules.max_members,
        });
    }
    if members.iter().any(|m| m.trim().is_empty()) {
        return Err(DomainViolation::BlankMember {
            kind: rules.kind,
            members: rules.members,
        });
    }

    let mut seen = HashSet::with_capacity(members.len());
    for id in members {
        if !seen.insert(id.as_str()) {
            return Err(DomainViolation::DuplicatedMember {
                kind: rules.kind,
                members: rules.members,
                id: id.clone(),
            });
        }
    }

    Ok(())
}
