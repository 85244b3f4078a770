//! HTTP client delivering bootcamp reports.

use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

use crate::domain::report::{BootcampReport, ReportError, ReportNotifier};
use crate::utils::url::join_endpoint;

/// Posts reports as JSON to the reporting service.
///
/// The underlying `reqwest::Client` pools connections and is cheap to share.
/// Each request is bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct HttpReportClient {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl HttpReportClient {
    /// Builds the client for `base_url` + `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Transport`] if the endpoint URL is invalid or
    /// the HTTP client cannot be created.
    pub fn new(base_url: &str, path: &str, timeout: Duration) -> Result<Self, ReportError> {
        let endpoint = join_endpoint(base_url, path)
            .map_err(|e| ReportError::Transport(format!("Invalid report endpoint: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReportError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        info!("Bootcamp reports will be sent to {}", endpoint);

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[async_trait]
impl ReportNotifier for HttpReportClient {
    async fn send(&self, report: BootcampReport) -> Result<(), ReportError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&report)
            .send()
            .await
            .map_err(|e| ReportError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::Status(status.as_u16()));
        }

        debug!(bootcamp_id = %report.bootcamp_id, status = status.as_u16(), "report delivered");
        Ok(())
    }
}
