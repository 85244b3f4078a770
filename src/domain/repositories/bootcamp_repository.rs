//! Repository trait for bootcamp storage.

use crate::domain::aggregation::FlatRow;
use crate::domain::entities::{Bootcamp, SortDirection, SortField};
use crate::error::AppError;
use async_trait::async_trait;

/// Store gateway for bootcamps and their capability links.
///
/// The gateway only runs single statements; orchestration (uniqueness check,
/// link ordering, summary re-fetch) lives in the services.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBootcampRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_bootcamp.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BootcampRepository: Send + Sync {
    /// Finds a bootcamp by its exact name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<Bootcamp>, AppError>;

    /// Finds a bootcamp by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Bootcamp>, AppError>;

    /// Inserts the bootcamp row only; capability links are inserted separately.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_bootcamp(&self, bootcamp: &Bootcamp) -> Result<(), AppError>;

    /// Links one capability to a bootcamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the capability does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_capability_link(
        &self,
        bootcamp_id: &str,
        capability_id: &str,
    ) -> Result<(), AppError>;

    /// Removes a bootcamp together with its links in one store-side routine.
    ///
    /// Returns the number of bootcamp rows removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_cascade(&self, id: &str) -> Result<u64, AppError>;

    /// Fetches the detail rows for one page of bootcamps.
    ///
    /// Rows are totally ordered: sort column, bootcamp id, capability name and
    /// id, technology name and id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn fetch_page(
        &self,
        sort_by: SortField,
        direction: SortDirection,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<FlatRow>, AppError>;

    /// Counts all bootcamps, ignoring pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_bootcamps(&self) -> Result<i64, AppError>;

    /// Fetches the detail rows of a single bootcamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn fetch_detail_rows(&self, bootcamp_id: &str) -> Result<Vec<FlatRow>, AppError>;
}
