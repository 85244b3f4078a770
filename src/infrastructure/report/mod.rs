//! Outbound delivery of bootcamp reports.
//!
//! - [`HttpReportClient`] - JSON over HTTP via `reqwest`

pub mod http_report_client;

pub use http_report_client::HttpReportClient;
