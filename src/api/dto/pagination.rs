//! Paging and sorting query parameters.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

use crate::domain::entities::{DomainViolation, PageRequest, SortDirection, SortField};

/// Query parameters of `GET /bootcamp`.
///
/// Values are taken as raw strings so a malformed number maps to the same
/// message key as an out-of-range one. Empty values count as absent.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootcampListParams {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub page: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub size: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub sort_by: Option<String>,

    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub order: Option<String>,
}

impl BootcampListParams {
    /// Parses the parameters, applying defaults for absent values.
    ///
    /// # Defaults
    ///
    /// - `page`: 0
    /// - `size`: 10
    /// - `sortBy`: `NAME`
    /// - `order`: `ASC`
    ///
    /// Bounds are not checked here; the listing service validates the
    /// resulting request before querying.
    pub fn into_page_request(self) -> Result<PageRequest, DomainViolation> {
        let page = match self.page {
            Some(p) => p.trim().parse().map_err(|_| DomainViolation::Page)?,
            None => PageRequest::DEFAULT_PAGE,
        };
        let size = match self.size {
            Some(s) => s.trim().parse().map_err(|_| DomainViolation::Size)?,
            None => PageRequest::DEFAULT_SIZE,
        };
        let sort_by = match self.sort_by {
            Some(s) => s.parse::<SortField>()?,
            None => SortField::default(),
        };
        let direction = match self.order {
            Some(o) => o.parse::<SortDirection>()?,
            None => SortDirection::default(),
        };

        Ok(PageRequest::new(page, size, sort_by, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(query: &str) -> BootcampListParams {
        let uri: axum::http::Uri = format!("/bootcamp?{query}").parse().unwrap();
        axum::extract::Query::<BootcampListParams>::try_from_uri(&uri)
            .unwrap()
            .0
    }

    #[test]
    fn test_defaults() {
        let request = params("").into_page_request().unwrap();
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.page, 0);
        assert_eq!(request.size, 10);
    }

    #[test]
    fn test_empty_values_are_defaults() {
        let request = params("page=&size=&sortBy=&order=").into_page_request().unwrap();
        assert_eq!(request, PageRequest::default());
    }

    #[test]
    fn test_explicit_values() {
        let request = params("page=2&size=5&sortBy=capabilities&order=desc")
            .into_page_request()
            .unwrap();
        assert_eq!(request.page, 2);
        assert_eq!(request.size, 5);
        assert_eq!(request.sort_by, SortField::CapabilityCount);
        assert_eq!(request.direction, SortDirection::Desc);
    }

    #[test]
    fn test_sort_aliases() {
        for alias in ["NAME", "name"] {
            let request = params(&format!("sortBy={alias}")).into_page_request().unwrap();
            assert_eq!(request.sort_by, SortField::Name);
        }
        for alias in ["CAPABILITY_COUNT", "CAPABILITIES", "TECHNOLOGY_COUNT", "technologies"] {
            let request = params(&format!("sortBy={alias}")).into_page_request().unwrap();
            assert_eq!(request.sort_by, SortField::CapabilityCount);
        }
    }

    #[test]
    fn test_non_numeric_page() {
        assert_eq!(
            params("page=abc").into_page_request().unwrap_err(),
            DomainViolation::Page
        );
    }

    #[test]
    fn test_non_numeric_size() {
        assert_eq!(
            params("size=1.5").into_page_request().unwrap_err(),
            DomainViolation::Size
        );
    }

    #[test]
    fn test_unknown_sort_by() {
        assert_eq!(
            params("sortBy=launchDate").into_page_request().unwrap_err(),
            DomainViolation::SortBy
        );
    }

    #[test]
    fn test_unknown_order() {
        assert_eq!(
            params("order=up").into_page_request().unwrap_err(),
            DomainViolation::SortOrder
        );
    }

    #[test]
    fn test_out_of_range_values_pass_parsing() {
        let request = params("page=-1&size=0").into_page_request().unwrap();
        assert_eq!(request.page, -1);
        assert_eq!(request.size, 0);
    }
}
