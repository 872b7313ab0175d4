//! Hypermedia link generation.
//!
//! Collection links regenerate the request URI with only `page` changed.
//! Item links describe what a client can do with a resource, and are left
//! out entirely when the client narrowed the item with `fields`.

use serde::Serialize;
use url::form_urlencoded;
use uuid::Uuid;

use crate::query::ResourceParameters;
use crate::responses::shaping::FieldSelection;

/// A hypermedia link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Absolute target URL.
    pub href: String,
    /// Relation name, e.g. `self` or `delete_coin`.
    pub rel: String,
    /// HTTP method to use.
    pub method: String,
}

impl Link {
    /// Creates a link.
    pub fn new(href: impl Into<String>, rel: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            method: method.into(),
        }
    }
}

/// Which page a generated resource URI points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceUriType {
    /// The requested page.
    Current,
    /// The page after the requested one.
    NextPage,
    /// The page before the requested one.
    PreviousPage,
}

/// Builds links for one collection endpoint and its items.
#[derive(Debug, Clone)]
pub struct HypermediaLinkBuilder {
    collection_url: String,
    rel_name: &'static str,
}

impl HypermediaLinkBuilder {
    /// Creates a builder for the collection at `base_url` + `collection_path`.
    ///
    /// `rel_name` is the singular resource name used in item relations.
    pub fn new(base_url: &str, collection_path: &str, rel_name: &'static str) -> Self {
        Self {
            collection_url: format!(
                "{}/{}",
                base_url.trim_end_matches('/'),
                collection_path.trim_start_matches('/')
            ),
            rel_name,
        }
    }

    /// The collection's absolute URL, without a query.
    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    /// The absolute URL of the item `id`.
    pub fn item_url(&self, id: Uuid) -> String {
        format!("{}/{}", self.collection_url, id)
    }

    /// Regenerates the collection URI for `params`, pointing at the page `kind` names.
    ///
    /// Filters, `search`, `orderBy`, and `fields` are carried over when set;
    /// `page` and `pageSize` are always present.
    pub fn resource_uri(&self, params: &ResourceParameters, kind: ResourceUriType) -> String {
        let page = match kind {
            ResourceUriType::Current => params.page(),
            ResourceUriType::NextPage => params.page().saturating_add(1),
            ResourceUriType::PreviousPage => params.page().saturating_sub(1),
        };

        let mut query = form_urlencoded::Serializer::new(String::new());
        for (name, value) in params.filters() {
            query.append_pair(name, value);
        }
        for (name, value) in [
            ("search", params.search()),
            ("orderBy", params.order_by()),
            ("fields", params.fields()),
        ] {
            if !value.is_empty() {
                query.append_pair(name, value);
            }
        }
        query.append_pair("page", &page.to_string());
        query.append_pair("pageSize", &params.page_size().to_string());

        format!("{}?{}", self.collection_url, query.finish())
    }

    /// Links for a collection response: `self`, then `nextPage` and
    /// `previousPage` when those pages exist.
    pub fn build_collection_links(
        &self,
        params: &ResourceParameters,
        has_next: bool,
        has_previous: bool,
    ) -> Vec<Link> {
        let mut links = vec![Link::new(
            self.resource_uri(params, ResourceUriType::Current),
            "self",
            "GET",
        )];

        if has_next {
            links.push(Link::new(
                self.resource_uri(params, ResourceUriType::NextPage),
                "nextPage",
                "GET",
            ));
        }

        if has_previous {
            links.push(Link::new(
                self.resource_uri(params, ResourceUriType::PreviousPage),
                "previousPage",
                "GET",
            ));
        }

        links
    }

    /// Links for one item. Empty unless `selection` keeps every field.
    pub fn build_item_links(&self, id: Uuid, selection: &FieldSelection) -> Vec<Link> {
        if !selection.is_all() {
            return Vec::new();
        }

        let item_url = self.item_url(id);
        vec![
            Link::new(item_url.clone(), "self", "GET"),
            Link::new(
                self.collection_url.clone(),
                format!("create_{}", self.rel_name),
                "POST",
            ),
            Link::new(
                item_url.clone(),
                format!("update_{}", self.rel_name),
                "PUT",
            ),
            Link::new(
                item_url.clone(),
                format!("partially_update_{}", self.rel_name),
                "PATCH",
            ),
            Link::new(item_url, format!("delete_{}", self.rel_name), "DELETE"),
        ]
    }
}
