//! Bootcamp creation and deletion workflows.

use std::sync::Arc;

use crate::domain::aggregation::aggregate_rows;
use crate::domain::entities::{Bootcamp, MemberCollection, NewBootcamp};
use crate::domain::report::{BootcampReport, ReportNotifier};
use crate::domain::repositories::BootcampRepository;
use crate::error::AppError;
use serde_json::json;

pub const NAME_ALREADY_EXISTS: &str = "bootcamp.name.already.exists";
pub const NOT_FOUND: &str = "bootcamp.not.found";
pub const SUMMARY_NOT_FOUND: &str = "bootcamp.summary.not.found";
pub const REPORT_FAILED: &str = "bootcamp.report.failed";

/// Service for creating and deleting bootcamps.
///
/// Creation runs check-unique → validate → persist → re-fetch summary →
/// notify, stopping at the first failure. Nothing is retried.
pub struct BootcampService<R, N>
where
    R: BootcampRepository + ?Sized,
    N: ReportNotifier + ?Sized,
{
    repository: Arc<R>,
    notifier: Arc<N>,
}

impl<R, N> BootcampService<R, N>
where
    R: BootcampRepository + ?Sized,
    N: ReportNotifier + ?Sized,
{
    /// Creates a new bootcamp service.
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Creates a bootcamp and reports it.
    ///
    /// Capability links are inserted one statement at a time in request
    /// order. The report is built from the summary read back from the store,
    /// so it reflects exactly what is now readable. The returned value is the
    /// bootcamp as constructed, not the summary.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is already taken, either by
    /// the pre-check or by the store's unique constraint.
    /// Returns [`AppError::Validation`] tagged with the violated rule if the
    /// input breaks a bootcamp invariant; nothing is persisted then.
    /// Returns [`AppError::Internal`] if the summary cannot be read back or
    /// the report cannot be delivered. The bootcamp stays persisted.
    pub async fn create_bootcamp(&self, new_bootcamp: NewBootcamp) -> Result<Bootcamp, AppError> {
        if self
            .repository
            .find_by_name(&new_bootcamp.name)
            .await?
            .is_some()
        {
            tracing::warn!(name = %new_bootcamp.name, "bootcamp name already taken");
            return Err(AppError::conflict(
                NAME_ALREADY_EXISTS,
                json!({ "name": new_bootcamp.name }),
            ));
        }

        let bootcamp = Bootcamp::create(new_bootcamp)?;

        self.repository.insert_bootcamp(&bootcamp).await?;
        for capability_id in bootcamp.capabilities() {
            self.repository
                .insert_capability_link(bootcamp.id(), capability_id)
                .await?;
        }

        let rows = self.repository.fetch_detail_rows(bootcamp.id()).await?;
        let summary = aggregate_rows(rows)?
            .into_iter()
            .find(|s| s.id == bootcamp.id())
            .ok_or_else(|| {
                AppError::internal(SUMMARY_NOT_FOUND, json!({ "id": bootcamp.id() }))
            })?;

        let report = BootcampReport::from_summary(&bootcamp, &summary);
        if let Err(e) = self.notifier.send(report).await {
            tracing::error!(id = bootcamp.id(), error = %e, "failed to deliver bootcamp report");
            return Err(AppError::internal(
                REPORT_FAILED,
                json!({ "id": bootcamp.id(), "reason": e.to_string() }),
            ));
        }

        tracing::info!(
            id = bootcamp.id(),
            name = bootcamp.name(),
            capabilities = summary.capability_count,
            "bootcamp created"
        );

        Ok(bootcamp)
    }

    /// Deletes a bootcamp and its capability links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no bootcamp has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_bootcamp(&self, id: &str) -> Result<(), AppError> {
        let bootcamp = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND, json!({ "id": id })))?;

        let removed = self.repository.delete_cascade(bootcamp.id()).await?;
        tracing::info!(id = bootcamp.id(), removed, "bootcamp deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregation::FlatRow;
    use crate::domain::report::{MockReportNotifier, ReportError};
    use crate::domain::repositories::MockBootcampRepository;
    use crate::error::ErrorCode;
    use chrono::NaiveDate;
    use mockall::Sequence;

    fn launch_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn new_bootcamp(name: &str, capabilities: &[&str]) -> NewBootcamp {
        NewBootcamp {
            name: name.to_string(),
            description: "d".to_string(),
            launch_date: launch_date(),
            duration_weeks: 8,
            capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn existing(name: &str) -> Bootcamp {
        Bootcamp::new(
            "existing-id".to_string(),
            name.to_string(),
            "d".to_string(),
            launch_date(),
            10,
            vec!["c1".to_string()],
        )
        .unwrap()
    }

    fn detail_rows(id: &str, name: &str) -> Vec<FlatRow> {
        let base = FlatRow {
            bootcamp_id: id.to_string(),
            bootcamp_name: name.to_string(),
            bootcamp_description: "d".to_string(),
            launch_date: launch_date(),
            duration_weeks: 8,
            capability_count: 2,
            capability_id: None,
            capability_name: None,
            capability_description: None,
            technology_id: None,
            technology_name: None,
        };
        ["c1", "c2"]
            .iter()
            .map(|c| FlatRow {
                capability_id: Some(c.to_string()),
                capability_name: Some(format!("{c} name")),
                capability_description: Some(format!("{c} description")),
                technology_id: Some("t1".to_string()),
                technology_name: Some("Java".to_string()),
                ..base.clone()
            })
            .collect()
    }

    fn accepting_repo(name: &'static str) -> MockBootcampRepository {
        let mut repo = MockBootcampRepository::new();
        repo.expect_find_by_name()
            .withf(move |n| n == name)
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_insert_bootcamp().times(1).returning(|_| Ok(()));
        repo.expect_insert_capability_link()
            .returning(|_, _| Ok(()));
        repo.expect_fetch_detail_rows()
            .times(1)
            .returning(move |id| Ok(detail_rows(id, name)));
        repo
    }

    #[tokio::test]
    async fn test_create_bootcamp_success() {
        let repo = accepting_repo("X");

        let mut notifier = MockReportNotifier::new();
        notifier
            .expect_send()
            .withf(|report| report.name == "X" && report.capacities.len() == 2)
            .times(1)
            .returning(|_| Ok(()));

        let service = BootcampService::new(Arc::new(repo), Arc::new(notifier));

        let bootcamp = service
            .create_bootcamp(new_bootcamp("X", &["c1", "c2"]))
            .await
            .unwrap();

        assert!(!bootcamp.id().is_empty());
        assert_eq!(bootcamp.name(), "X");
        assert_eq!(bootcamp.description(), "d");
        assert_eq!(bootcamp.launch_date(), launch_date());
        assert_eq!(bootcamp.duration_weeks(), 8);
        assert_eq!(bootcamp.capabilities(), ["c1".to_string(), "c2".to_string()]);
    }

    #[tokio::test]
    async fn test_create_bootcamp_links_capabilities_in_order() {
        let mut repo = MockBootcampRepository::new();
        let mut seq = Sequence::new();

        repo.expect_find_by_name().returning(|_| Ok(None));
        repo.expect_insert_bootcamp()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        for capability in ["c2", "c1", "c3"] {
            repo.expect_insert_capability_link()
                .withf(move |_, c| c == capability)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(()));
        }
        repo.expect_fetch_detail_rows()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|id| Ok(detail_rows(id, "Ordered")));

        let mut notifier = MockReportNotifier::new();
        notifier.expect_send().returning(|_| Ok(()));

        let service = BootcampService::new(Arc::new(repo), Arc::new(notifier));

        let result = service
            .create_bootcamp(new_bootcamp("Ordered", &["c2", "c1", "c3"]))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_bootcamp_twice_conflicts() {
        let mut repo = MockBootcampRepository::new();
        repo.expect_find_by_name()
            .times(1)
            .returning(|name| Ok(Some(existing(name))));

        let notifier = MockReportNotifier::new();
        let service = BootcampService::new(Arc::new(repo), Arc::new(notifier));

        let err = service
            .create_bootcamp(new_bootcamp("X", &["c1", "c2"]))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.message(), "bootcamp.name.already.exists");
    }

    #[tokio::test]
    async fn test_create_bootcamp_store_conflict_is_authoritative() {
        let mut repo = MockBootcampRepository::new();
        repo.expect_find_by_name().returning(|_| Ok(None));
        repo.expect_insert_bootcamp()
            .times(1)
            .returning(|_| Err(AppError::conflict(NAME_ALREADY_EXISTS, json!({}))));

        let service = BootcampService::new(Arc::new(repo), Arc::new(MockReportNotifier::new()));

        let err = service
            .create_bootcamp(new_bootcamp("Raced", &["c1"]))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Conflict);
    }

    #[tokio::test]
    async fn test_create_bootcamp_without_capabilities_is_validation_error() {
        let mut repo = MockBootcampRepository::new();
        repo.expect_find_by_name().times(1).returning(|_| Ok(None));
        repo.expect_insert_bootcamp().never();

        let service = BootcampService::new(Arc::new(repo), Arc::new(MockReportNotifier::new()));

        let err = service
            .create_bootcamp(new_bootcamp("X", &[]))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert_eq!(err.message(), "invalid.bootcamp.capabilities.min");
    }

    #[tokio::test]
    async fn test_create_bootcamp_missing_summary_is_internal() {
        let mut repo = MockBootcampRepository::new();
        repo.expect_find_by_name().returning(|_| Ok(None));
        repo.expect_insert_bootcamp().returning(|_| Ok(()));
        repo.expect_insert_capability_link().returning(|_, _| Ok(()));
        repo.expect_fetch_detail_rows().returning(|_| Ok(vec![]));

        let mut notifier = MockReportNotifier::new();
        notifier.expect_send().never();

        let service = BootcampService::new(Arc::new(repo), Arc::new(notifier));

        let err = service
            .create_bootcamp(new_bootcamp("X", &["c1"]))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Internal);
        assert_eq!(err.message(), "bootcamp.summary.not.found");
    }

    #[tokio::test]
    async fn test_create_bootcamp_report_failure_is_internal() {
        let repo = accepting_repo("X");

        let mut notifier = MockReportNotifier::new();
        notifier
            .expect_send()
            .times(1)
            .returning(|_| Err(ReportError::Status(503)));

        let service = BootcampService::new(Arc::new(repo), Arc::new(notifier));

        let err = service
            .create_bootcamp(new_bootcamp("X", &["c1", "c2"]))
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::Internal);
        assert_eq!(err.message(), "bootcamp.report.failed");
    }

    #[tokio::test]
    async fn test_delete_bootcamp_success() {
        let mut repo = MockBootcampRepository::new();
        repo.expect_find_by_id()
            .withf(|id| id == "existing-id")
            .times(1)
            .returning(|_| Ok(Some(existing("X"))));
        repo.expect_delete_cascade()
            .withf(|id| id == "existing-id")
            .times(1)
            .returning(|_| Ok(1));

        let service = BootcampService::new(Arc::new(repo), Arc::new(MockReportNotifier::new()));

        assert!(service.delete_bootcamp("existing-id").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_bootcamp_not_found() {
        let mut repo = MockBootcampRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));
        repo.expect_delete_cascade().never();

        let service = BootcampService::new(Arc::new(repo), Arc::new(MockReportNotifier::new()));

        let err = service.delete_bootcamp("missing").await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "bootcamp.not.found");
    }
}
