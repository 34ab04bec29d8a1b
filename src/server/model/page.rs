//! Page requests and paged results.

use crate::server::error::validation::ValidationError;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Fields a game listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    /// Parses `field` or `field,direction`, e.g. `title,desc`.
    ///
    /// # Returns
    /// - `Ok(SortOrder)` - Known field and direction
    /// - `Err(ValidationError::InvalidSort)` - Unknown field, direction or extra parts
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidSort(value.to_string());
        let mut parts = value.split(',').map(str::trim);

        let field = match parts.next() {
            Some("id") => SortField::Id,
            Some("title") => SortField::Title,
            Some("created_at") => SortField::CreatedAt,
            Some("updated_at") => SortField::UpdatedAt,
            _ => return Err(invalid()),
        };

        let direction = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(_) => return Err(invalid()),
        };

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self { field, direction })
    }
}

/// Zero-based page request with optional sort orders, applied in listed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
    pub sort: Vec<SortOrder>,
}

impl PageRequest {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page,
            per_page,
            sort: Vec::new(),
        }
    }

    pub fn with_sort(mut self, order: SortOrder) -> Self {
        self.sort.push(order);
        self
    }

    /// Checks the page size lies within `1..=MAX_PAGE_SIZE` and the row offset of the page
    /// fits a signed 64-bit SQL `OFFSET`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.per_page == 0 || self.per_page > MAX_PAGE_SIZE {
            return Err(ValidationError::OutOfRange {
                field: "per_page",
                min: 1,
                max: MAX_PAGE_SIZE,
            });
        }

        let last_page = i64::MAX as u64 / self.per_page;
        if self.page > last_page {
            return Err(ValidationError::OutOfRange {
                field: "page",
                min: 0,
                max: last_page,
            });
        }

        Ok(())
    }
}

/// One page of results together with the total count across all pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }

        self.total.div_ceil(self.per_page)
    }
}
