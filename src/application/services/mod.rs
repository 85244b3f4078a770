//! Business logic services for the application layer.

pub mod bootcamp_service;
pub mod listing_service;

pub use bootcamp_service::BootcampService;
pub use listing_service::ListingService;
