//! DTOs for the health endpoint.

use serde::Serialize;
use std::fmt;

/// Overall service state reported by `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// State of one dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Ok,
    Error,
}

/// Result of probing the bootcamp store.
#[derive(Debug, Serialize)]
pub struct DatabaseCheck {
    pub status: ComponentStatus,

    /// Number of stored bootcamps, present when the store answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootcamps: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DatabaseCheck {
    pub fn connected(bootcamps: i64) -> Self {
        Self {
            status: ComponentStatus::Ok,
            bootcamps: Some(bootcamps),
            message: None,
        }
    }

    pub fn failed(error: impl fmt::Display) -> Self {
        Self {
            status: ComponentStatus::Error,
            bootcamps: None,
            message: Some(format!("Database error: {error}")),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: DatabaseCheck,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

impl HealthResponse {
    /// Derives the overall status from the component checks.
    pub fn from_checks(checks: HealthChecks) -> Self {
        let status = match checks.database.status {
            ComponentStatus::Ok => ServiceStatus::Healthy,
            ComponentStatus::Error => ServiceStatus::Degraded,
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_connected_store_is_healthy() {
        let response = HealthResponse::from_checks(HealthChecks {
            database: DatabaseCheck::connected(3),
        });

        assert!(response.is_healthy());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(
            json["checks"]["database"],
            json!({ "status": "ok", "bootcamps": 3 })
        );
    }

    #[test]
    fn test_failed_store_is_degraded() {
        let response = HealthResponse::from_checks(HealthChecks {
            database: DatabaseCheck::failed("connection refused"),
        });

        assert!(!response.is_healthy());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["checks"]["database"]["status"], "error");
        assert_eq!(
            json["checks"]["database"]["message"],
            "Database error: connection refused"
        );
        assert!(json["checks"]["database"].get("bootcamps").is_none());
    }
}
