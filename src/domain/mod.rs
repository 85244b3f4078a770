//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Aggregates, read models and paging types
//! - [`aggregation`] - Flat join rows to nested summaries
//! - [`repositories`] - Data access trait definitions
//! - [`report`] - Report payload and notifier trait
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository and notifier traits define contracts implemented by infrastructure
//! - Workflows live in services (see [`crate::application::services`])

pub mod aggregation;
pub mod entities;
pub mod report;
pub mod repositories;
