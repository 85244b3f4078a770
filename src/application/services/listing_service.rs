//! Paginated bootcamp listing.

use std::sync::Arc;

use crate::domain::aggregation::aggregate_rows;
use crate::domain::entities::{BootcampSummary, PageRequest, PageResult};
use crate::domain::repositories::BootcampRepository;
use crate::error::AppError;

/// Service for listing bootcamps with their capabilities and technologies.
pub struct ListingService<R: BootcampRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: BootcampRepository + ?Sized> ListingService<R> {
    /// Creates a new listing service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists one page of bootcamp summaries.
    ///
    /// The page rows and the total count are fetched concurrently. The total
    /// ignores pagination, so a page past the end yields empty content with
    /// the real totals.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `size <= 0` or `page < 0`, before
    /// the store is touched.
    /// Returns [`AppError::Internal`] on database errors or inconsistent rows.
    pub async fn list_bootcamps(
        &self,
        request: PageRequest,
    ) -> Result<PageResult<BootcampSummary>, AppError> {
        request.validate()?;

        let (rows, total) = tokio::try_join!(
            self.repository.fetch_page(
                request.sort_by,
                request.direction,
                request.limit(),
                request.offset(),
            ),
            self.repository.count_bootcamps(),
        )?;

        let content = aggregate_rows(rows)?;
        tracing::debug!(
            page = request.page,
            size = request.size,
            returned = content.len(),
            total,
            "bootcamp page listed"
        );

        Ok(PageResult::new(content, &request, total))
    }

    /// Counts all stored bootcamps.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_bootcamps(&self) -> Result<i64, AppError> {
        self.repository.count_bootcamps().await
    }
}
