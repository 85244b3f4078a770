//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Bootcamp`] - A dated program built from capabilities
//! - [`Capability`] - A named group of technologies
//! - [`BootcampSummary`] / [`CapabilitySummary`] / [`TechnologySummary`] - Read models
//! - [`PageRequest`] / [`PageResult`] - Listing input and output
//!
//! # Design Pattern
//!
//! Aggregates validate on construction and expose read-only accessors. Input
//! for creation travels in a separate `NewBootcamp` struct.

pub mod aggregate;
pub mod bootcamp;
pub mod capability;
pub mod page;
pub mod summary;

pub use aggregate::{DomainViolation, MemberCollection, MemberRules};
pub use bootcamp::{Bootcamp, NewBootcamp};
pub use capability::Capability;
pub use page::{PageRequest, PageResult, SortDirection, SortField, total_pages};
pub use summary::{BootcampSummary, CapabilitySummary, TechnologySummary};
