//! The `X-Pagination` response header.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use recollectable_persistence::types::Page;
use serde::Serialize;

use crate::error::{RestError, RestResult};

/// Name of the pagination metadata header.
pub const X_PAGINATION: HeaderName = HeaderName::from_static("x-pagination");

/// Page counts sent in `X-Pagination`, plus page links in plain mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    total_count: usize,
    page_size: usize,
    current_page: i64,
    total_pages: usize,
    #[serde(flatten)]
    links: Option<PageLinks>,
}

/// Previous and next page URIs. Absent pages serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLinks {
    previous_page_link: Option<String>,
    next_page_link: Option<String>,
}

impl PaginationMetadata {
    /// Copies the counts of `page`.
    pub fn from_page<T>(page: &Page<T>) -> Self {
        Self {
            total_count: page.total_count(),
            page_size: page.page_size(),
            current_page: page.current_page(),
            total_pages: page.total_pages(),
            links: None,
        }
    }

    /// Adds the previous and next page links.
    pub fn with_links(mut self, previous: Option<String>, next: Option<String>) -> Self {
        self.links = Some(PageLinks {
            previous_page_link: previous,
            next_page_link: next,
        });
        self
    }

    /// Renders the metadata as a header map holding `X-Pagination`.
    pub fn to_header_map(&self) -> RestResult<HeaderMap> {
        let json = serde_json::to_string(self)?;
        let value = HeaderValue::from_str(&json).map_err(|e| RestError::InternalError {
            message: format!("Invalid X-Pagination header: {}", e),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(X_PAGINATION, value);
        Ok(headers)
    }
}
