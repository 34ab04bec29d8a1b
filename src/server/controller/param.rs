//! Query parameters shared by listing endpoints.

use serde::Deserialize;

use crate::server::{
    error::validation::ValidationError,
    model::{
        filter::GameFilter,
        page::{PageRequest, SortOrder},
    },
};

const DEFAULT_PER_PAGE: u64 = 20;

/// `?page=0&per_page=20&sort=title,desc;id`
#[derive(Debug, Default, Deserialize)]
pub struct PageParam {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Sort orders separated by `;`, each `field` or `field,direction`.
    pub sort: Option<String>,
}

fn default_per_page() -> u64 {
    DEFAULT_PER_PAGE
}

impl PageParam {
    pub fn into_page_request(self) -> Result<PageRequest, ValidationError> {
        let mut request = PageRequest::new(self.page, self.per_page);

        if let Some(sort) = self.sort {
            for order in sort.split(';').filter(|part| !part.trim().is_empty()) {
                request = request.with_sort(SortOrder::parse(order)?);
            }
        }

        Ok(request)
    }
}

/// `?genre_id=1&platform_id=2&publisher_id=3&developer_id=4&franchise_id=5`
#[derive(Debug, Default, Deserialize)]
pub struct GameFilterParam {
    pub genre_id: Option<i32>,
    pub platform_id: Option<i32>,
    pub publisher_id: Option<i32>,
    pub developer_id: Option<i32>,
    pub franchise_id: Option<i32>,
}

impl GameFilterParam {
    pub fn into_filter(self) -> GameFilter {
        GameFilter {
            genre_id: self.genre_id,
            platform_id: self.platform_id,
            publisher_id: self.publisher_id,
            developer_id: self.developer_id,
            franchise_id: self.franchise_id,
        }
    }
}
