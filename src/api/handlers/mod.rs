//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod bootcamps;
pub mod health;

pub use bootcamps::{create_bootcamp_handler, delete_bootcamp_handler, list_bootcamps_handler};
pub use health::health_handler;
