//! Response representation negotiation.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

/// Media type asking for hypermedia links.
pub const HATEOAS_MEDIA_TYPE: &str = "application/json+hateoas";

/// How a response body is rendered, decided once per request from `Accept`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Representation {
    /// `application/json`: shaped items, page links in `X-Pagination`.
    Plain,
    /// `application/json+hateoas`: shaped items wrapped with links.
    Hypermedia,
    /// Anything else: full items, no links, no `X-Pagination`.
    #[default]
    Raw,
}

impl Representation {
    /// Picks the representation for an `Accept` header value.
    ///
    /// Hypermedia wins when listed anywhere, then plain JSON.
    pub fn from_accept(accept: &str) -> Self {
        let essences: Vec<String> = accept
            .split(',')
            .filter_map(|entry| entry.trim().parse::<mime::Mime>().ok())
            .map(|mime| mime.essence_str().to_ascii_lowercase())
            .collect();

        if essences.iter().any(|e| e == HATEOAS_MEDIA_TYPE) {
            Representation::Hypermedia
        } else if essences
            .iter()
            .any(|e| e == mime::APPLICATION_JSON.essence_str())
        {
            Representation::Plain
        } else {
            Representation::Raw
        }
    }

    /// Picks the representation from request headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(header::ACCEPT)
            .and_then(|value| value.to_str().ok())
            .map(Self::from_accept)
            .unwrap_or_default()
    }
}

impl<S> FromRequestParts<S> for Representation
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Representation::from_headers(&parts.headers))
    }
}
