//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` records.
//!
//! # Repositories
//!
//! - [`PgBootcampRepository`] - Bootcamp storage, listing and cascading delete

pub mod pg_bootcamp_repository;

pub use pg_bootcamp_repository::PgBootcampRepository;
