//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and notifications. Services consume repository and notifier
//! traits and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::bootcamp_service::BootcampService`] - Bootcamp creation, reporting and deletion
//! - [`services::listing_service::ListingService`] - Paginated bootcamp listing

pub mod services;
