//! List query parameters.
//!
//! [`ListQuery`] is the decoded query string, extracted through axum's
//! [`Query`] with parameter names lower-cased. [`ResourceParameters`] is its resource-aware form: page size
//! clamped to the resource's limits, blank `orderBy` replaced by the default
//! key, and only the filters the resource accepts kept.

use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use url::form_urlencoded;

use crate::error::RestError;
use crate::resources::ResourceDescriptor;

/// The decoded query string of a list or read request.
///
/// Parameter names are matched without regard to case. Parameters that are
/// not recognized are kept in `extra` so resource-specific filters can pick
/// them up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// `page`
    pub page: Option<i64>,
    /// `pageSize`
    pub page_size: Option<i64>,
    /// `search`
    pub search: Option<String>,
    /// `orderBy`
    pub order_by: Option<String>,
    /// `fields`
    pub fields: Option<String>,
    /// Every other parameter, lower-cased name first.
    pub extra: Vec<(String, String)>,
}

impl ListQuery {
    /// Builds a query from decoded `(name, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `RestError::BadRequest` if `page` or `pageSize` is not an integer.
    pub fn from_params(params: HashMap<String, String>) -> Result<Self, RestError> {
        let mut parsed = ListQuery::default();

        for (name, value) in params {
            match name.to_ascii_lowercase().as_str() {
                "page" => parsed.page = Some(parse_number("page", &value)?),
                "pagesize" => parsed.page_size = Some(parse_number("pageSize", &value)?),
                "search" => parsed.search = Some(value),
                "orderby" => parsed.order_by = Some(value),
                "fields" => parsed.fields = Some(value),
                other => parsed.extra.push((other.to_string(), value)),
            }
        }

        Ok(parsed)
    }

    /// Decodes a raw query string.
    pub fn parse(query: &str) -> Result<Self, RestError> {
        Self::from_params(form_urlencoded::parse(query.as_bytes()).into_owned().collect())
    }

    /// Returns the value of an unrecognized parameter.
    pub fn extra(&self, name: &str) -> Option<&str> {
        self.extra
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

fn parse_number(name: &str, value: &str) -> Result<i64, RestError> {
    value.trim().parse().map_err(|_| RestError::BadRequest {
        message: format!("Query parameter '{}' must be an integer, got '{}'", name, value),
    })
}

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| RestError::BadRequest {
                message: rejection.body_text(),
            })?;

        ListQuery::from_params(params)
    }
}

/// Validated paging, search, sort, shaping, and filter input for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceParameters {
    page: i64,
    page_size: usize,
    search: String,
    order_by: String,
    fields: String,
    filters: Vec<(&'static str, String)>,
}

impl ResourceParameters {
    /// Builds parameters for the resource described by `descriptor`.
    ///
    /// The page size is clamped into `[1, max]` here, before anything is read.
    pub fn new(query: ListQuery, descriptor: &ResourceDescriptor, default_order_by: &str) -> Self {
        let page_size = descriptor
            .pages()
            .clamp_page_size(query.page_size.unwrap_or(descriptor.default_page_size()));

        let filters = descriptor
            .filters()
            .iter()
            .filter_map(|(name, _)| {
                query
                    .extra(name)
                    .map(str::trim)
                    .filter(|value| !value.is_empty())
                    .map(|value| (*name, value.to_string()))
            })
            .collect();

        let order_by = query
            .order_by
            .filter(|order_by| !order_by.trim().is_empty())
            .unwrap_or_else(|| default_order_by.to_string());

        Self {
            page: query.page.unwrap_or(1),
            page_size,
            search: query.search.unwrap_or_default().trim().to_string(),
            order_by,
            fields: query.fields.unwrap_or_default(),
            filters,
        }
    }

    /// The requested page, 1-based. Not clamped.
    pub fn page(&self) -> i64 {
        self.page
    }

    /// The clamped page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The trimmed search term, empty when absent.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// The sort expression, defaulted when blank.
    pub fn order_by(&self) -> &str {
        &self.order_by
    }

    /// The raw `fields` parameter, empty when absent.
    pub fn fields(&self) -> &str {
        &self.fields
    }

    /// Accepted filters as `(parameter, value)`, in the resource's order.
    pub fn filters(&self) -> &[(&'static str, String)] {
        &self.filters
    }

    /// A copy of these parameters pointing at `page`.
    pub fn with_page(&self, page: i64) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}
