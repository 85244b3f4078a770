//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and report delivery.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`report`] - HTTP client for the reporting service

pub mod persistence;
pub mod report;
