//! Page request and page result for bootcamp listings.

use std::str::FromStr;

use super::aggregate::DomainViolation;

/// Sort key for bootcamp listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    CapabilityCount,
}

impl SortField {
    /// Column the page query orders by.
    pub fn column(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::CapabilityCount => "capability_count",
        }
    }
}

impl FromStr for SortField {
    type Err = DomainViolation;

    /// Accepts the legacy aliases clients still send for the count sort.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NAME" => Ok(SortField::Name),
            "CAPABILITY_COUNT" | "CAPABILITIES" | "TECHNOLOGY_COUNT" | "TECHNOLOGIES" => {
                Ok(SortField::CapabilityCount)
            }
            _ => Err(DomainViolation::SortBy),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = DomainViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            _ => Err(DomainViolation::SortOrder),
        }
    }
}

/// Zero-based page request.
///
/// Fields are not checked on construction; [`PageRequest::validate`] runs
/// before any query is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
    pub sort_by: SortField,
    pub direction: SortDirection,
}

impl PageRequest {
    pub const DEFAULT_PAGE: i64 = 0;
    pub const DEFAULT_SIZE: i64 = 10;

    pub fn new(page: i64, size: i64, sort_by: SortField, direction: SortDirection) -> Self {
        Self {
            page,
            size,
            sort_by,
            direction,
        }
    }

    /// # Errors
    ///
    /// [`DomainViolation::Size`] when `size <= 0`, [`DomainViolation::Page`]
    /// when `page < 0`. Size is checked first.
    pub fn validate(&self) -> Result<(), DomainViolation> {
        if self.size <= 0 {
            return Err(DomainViolation::Size);
        }
        if self.page < 0 {
            return Err(DomainViolation::Page);
        }
        Ok(())
    }

    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }

    pub fn limit(&self) -> i64 {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_PAGE,
            Self::DEFAULT_SIZE,
            SortField::default(),
            SortDirection::default(),
        )
    }
}

/// One page of results plus totals across all pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<T> {
    pub content: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl<T> PageResult<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: i64) -> Self {
        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages: total_pages(total_elements, request.size),
        }
    }
}

/// `ceil(total_elements / size)`; 0 when there is nothing to page over.
pub fn total_pages(total_elements: i64, size: i64) -> i64 {
    if total_elements <= 0 || size <= 0 {
        return 0;
    }
    (total_elements + size - 1) / size
}
