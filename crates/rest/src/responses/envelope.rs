//! Response bodies for each representation.
//!
//! | Representation | List body | `X-Pagination` | Item body |
//! |----------------|-----------|----------------|-----------|
//! | Plain | shaped items | counts and page links | shaped item |
//! | Hypermedia | `{value, links}` with per-item links | counts | shaped item with links |
//! | Raw | full items | none | full item |

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use recollectable_persistence::types::{Entity, Page};
use serde::Serialize;
use serde_json::Value;

use crate::error::{RestError, RestResult};
use crate::extractors::Representation;
use crate::query::ResourceParameters;
use crate::resources::CatalogResource;
use crate::responses::headers::PaginationMetadata;
use crate::responses::links::{HypermediaLinkBuilder, Link, ResourceUriType};
use crate::responses::shaping::{FieldProjector, FieldSelection, ProjectedRecord};

/// A hypermedia collection body.
#[derive(Debug, Serialize)]
pub struct LinkedCollection {
    /// The page's items, each with its own `links`.
    pub value: Vec<ProjectedRecord>,
    /// Collection links.
    pub links: Vec<Link>,
}

/// Everything needed to render one response.
#[derive(Debug, Clone, Copy)]
pub struct ResponseContext<'a> {
    /// The negotiated representation.
    pub representation: Representation,
    /// The validated `fields` selection.
    pub selection: &'a FieldSelection,
    /// Projects transfer objects.
    pub projector: &'a FieldProjector,
    /// Builds links for the endpoint.
    pub links: &'a HypermediaLinkBuilder,
}

impl ResponseContext<'_> {
    fn project_with_links<D: Serialize>(
        &self,
        dto: &D,
        links: Vec<Link>,
    ) -> RestResult<ProjectedRecord> {
        let mut record = self.projector.project(dto, self.selection)?;
        record.insert("links", serde_json::to_value(links)?);
        Ok(record)
    }
}

/// Renders a page of entities.
pub fn list_response<R: CatalogResource>(
    page: Page<R::Entity>,
    params: &ResourceParameters,
    ctx: ResponseContext<'_>,
) -> RestResult<Response> {
    let metadata = PaginationMetadata::from_page(&page);
    let (has_next, has_previous) = (page.has_next(), page.has_previous());

    match ctx.representation {
        Representation::Raw => {
            let items: Vec<R::Dto> = page
                .items()
                .iter()
                .map(|entity| R::Dto::from(entity))
                .collect();
            Ok(Json(items).into_response())
        }
        Representation::Plain => {
            let previous = has_previous
                .then(|| ctx.links.resource_uri(params, ResourceUriType::PreviousPage));
            let next = has_next.then(|| ctx.links.resource_uri(params, ResourceUriType::NextPage));
            let headers = metadata.with_links(previous, next).to_header_map()?;

            let items = page
                .items()
                .iter()
                .map(|entity| Ok(ctx.projector.project(&R::Dto::from(entity), ctx.selection)?))
                .collect::<RestResult<Vec<_>>>()?;
            Ok((headers, Json(items)).into_response())
        }
        Representation::Hypermedia => {
            let headers = metadata.to_header_map()?;

            let value = page
                .items()
                .iter()
                .map(|entity| {
                    let item_links = ctx.links.build_item_links(entity.id(), ctx.selection);
                    ctx.project_with_links(&R::Dto::from(entity), item_links)
                })
                .collect::<RestResult<Vec<_>>>()?;
            let body = LinkedCollection {
                value,
                links: ctx.links.build_collection_links(params, has_next, has_previous),
            };
            Ok((headers, Json(body)).into_response())
        }
    }
}

/// Renders a single entity.
pub fn item_response<R: CatalogResource>(
    entity: &R::Entity,
    ctx: ResponseContext<'_>,
) -> RestResult<Response> {
    let dto = R::Dto::from(entity);

    let body: Value = match ctx.representation {
        Representation::Raw => serde_json::to_value(&dto)?,
        Representation::Plain => {
            serde_json::to_value(ctx.projector.project(&dto, ctx.selection)?)?
        }
        Representation::Hypermedia => {
            let links = ctx.links.build_item_links(entity.id(), ctx.selection);
            serde_json::to_value(ctx.project_with_links(&dto, links)?)?
        }
    };

    Ok(Json(body).into_response())
}

/// Renders a newly stored entity as `201 Created`, with its URL in `Location`.
pub fn created_response<R: CatalogResource>(
    entity: &R::Entity,
    ctx: ResponseContext<'_>,
) -> RestResult<Response> {
    let location = ctx.links.item_url(entity.id());
    let location = HeaderValue::from_str(&location).map_err(|e| RestError::InternalError {
        message: format!("Invalid Location header '{}': {}", location, e),
    })?;

    let mut response = item_response::<R>(entity, ctx)?;
    *response.status_mut() = StatusCode::CREATED;
    response.headers_mut().insert(header::LOCATION, location);
    Ok(response)
}
