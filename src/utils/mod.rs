//! Utility functions shared across layers.
//!
//! - [`db_error`] - Recognizing named constraint violations
//! - [`url`] - Joining base URLs with endpoint paths

pub mod db_error;
pub mod url;
