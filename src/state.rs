//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{BootcampService, ListingService};
use crate::domain::report::ReportNotifier;
use crate::domain::repositories::BootcampRepository;

/// Services shared by all handlers.
///
/// Services hold trait objects so tests can swap the store and the notifier
/// without touching the router.
#[derive(Clone)]
pub struct AppState {
    pub bootcamp_service: Arc<BootcampService<dyn BootcampRepository, dyn ReportNotifier>>,
    pub listing_service: Arc<ListingService<dyn BootcampRepository>>,
}

impl AppState {
    pub fn new(repository: Arc<dyn BootcampRepository>, notifier: Arc<dyn ReportNotifier>) -> Self {
        Self {
            bootcamp_service: Arc::new(BootcampService::new(repository.clone(), notifier)),
            listing_service: Arc::new(ListingService::new(repository)),
        }
    }
}
