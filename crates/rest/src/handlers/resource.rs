//! Handlers shared by every top-level resource.
//!
//! Each handler is generic over the storage backend and the
//! [`CatalogResource`], and is mounted once per resource by the router.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use recollectable_persistence::core::ResourceStorage;
use recollectable_persistence::specification::Specification;
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::dto::EntityInput;
use crate::error::{RestError, RestResult};
use crate::extractors::{ListQuery, Representation};
use crate::handlers::pipeline::PreparedQuery;
use crate::resources::{CatalogResource, ResourceKind};
use crate::responses::{
    FieldSelection, ResponseContext, created_response, item_response, list_response,
};
use crate::state::AppState;

/// Parses a path identifier. Anything that is not a UUID names no resource.
pub(crate) fn parse_id(kind: ResourceKind, raw: &str) -> RestResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| RestError::not_found(kind.as_str(), raw))
}

/// Decodes a JSON request body.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &Bytes) -> RestResult<T> {
    if body.is_empty() {
        return Err(RestError::BadRequest {
            message: "Request body is required".to_string(),
        });
    }

    serde_json::from_slice(body).map_err(|e| RestError::BadRequest {
        message: format!("Invalid JSON body: {}", e),
    })
}

/// Applies a JSON Patch (RFC 6902) to the input form of `entity`.
pub(crate) fn apply_patch<I: EntityInput>(
    entity: &I::Entity,
    patch: &json_patch::Patch,
) -> RestResult<I> {
    let mut document = serde_json::to_value(I::from_entity(entity))?;

    json_patch::patch(&mut document, patch).map_err(|e| RestError::BadRequest {
        message: format!("Failed to apply JSON Patch: {}", e),
    })?;

    serde_json::from_value(document).map_err(|e| RestError::BadRequest {
        message: format!("Patched document is invalid: {}", e),
    })
}

/// Handler for listing a resource.
///
/// # HTTP Request
///
/// `GET /api/{resource}?page=&pageSize=&search=&orderBy=&fields=`
///
/// # Response
///
/// - `200 OK` - The requested page, rendered per `Accept`
/// - `400 Bad Request` - Unknown `orderBy` key or `fields` name
pub async fn list_handler<S, R>(
    State(state): State<AppState<S>>,
    representation: Representation,
    query: ListQuery,
) -> RestResult<Response>
where
    S: ResourceStorage + Send + Sync,
    R: CatalogResource,
{
    let catalog = state.catalog();
    let params = catalog.parameters(R::KIND, query)?;

    debug!(
        resource = %R::KIND,
        page = params.page(),
        page_size = params.page_size(),
        order_by = %params.order_by(),
        ?representation,
        "Processing list request"
    );

    let (page, selection) = PreparedQuery::<R>::prepare(catalog, &params)?
        .execute(state.storage(), catalog, &params)
        .await?;

    let links = state.links_for(R::KIND);
    list_response::<R>(
        page,
        &params,
        ResponseContext {
            representation,
            selection: &selection,
            projector: catalog.fields(),
            links: &links,
        },
    )
}

/// Handler for reading one resource.
///
/// # HTTP Request
///
/// `GET /api/{resource}/{id}?fields=`
///
/// # Response
///
/// - `200 OK` - The resource, rendered per `Accept`
/// - `400 Bad Request` - Unknown `fields` name
/// - `404 Not Found` - No such resource
pub async fn read_handler<S, R>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    representation: Representation,
    query: ListQuery,
) -> RestResult<Response>
where
    S: ResourceStorage + Send + Sync,
    R: CatalogResource,
{
    let fields = query.fields.unwrap_or_default();
    let selection = state.catalog().fields().select(R::KIND, &fields)?;
    let id = parse_id(R::KIND, &id)?;

    debug!(resource = %R::KIND, %id, "Processing read request");

    let entity = state
        .storage()
        .find(&Specification::<R::Entity>::by_id(id))
        .await?
        .ok_or_else(|| RestError::not_found(R::KIND.as_str(), id))?;

    let links = state.links_for(R::KIND);
    item_response::<R>(
        &entity,
        ResponseContext {
            representation,
            selection: &selection,
            projector: state.catalog().fields(),
            links: &links,
        },
    )
}

/// Handler for creating a resource.
///
/// The server assigns the identifier.
///
/// # HTTP Request
///
/// `POST /api/{resource}` with a JSON body
///
/// # Response
///
/// - `201 Created` - The stored resource, rendered per `Accept`, with its URL
///   in `Location`
/// - `400 Bad Request` - Missing or invalid body, or a reference to a record
///   that does not exist
pub async fn create_handler<S, R>(
    State(state): State<AppState<S>>,
    representation: Representation,
    body: Bytes,
) -> RestResult<Response>
where
    S: ResourceStorage + Send + Sync,
    R: CatalogResource,
{
    let input: R::Input = parse_body(&body)?;
    let id = Uuid::new_v4();

    debug!(resource = %R::KIND, %id, "Processing create request");

    let entity = input.into_entity(state.storage(), id).await?;
    let stored = state.storage().insert(entity).await?;

    debug!(resource = %R::KIND, %id, "Resource created");

    let selection = FieldSelection::all();
    let links = state.links_for(R::KIND);
    created_response::<R>(
        &stored,
        ResponseContext {
            representation,
            selection: &selection,
            projector: state.catalog().fields(),
            links: &links,
        },
    )
}

/// Handler for replacing a resource.
///
/// # HTTP Request
///
/// `PUT /api/{resource}/{id}` with a JSON body
///
/// # Response
///
/// - `204 No Content` - Resource replaced
/// - `400 Bad Request` - Missing or invalid body, or a dangling reference
/// - `404 Not Found` - No such resource
pub async fn update_handler<S, R>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: Bytes,
) -> RestResult<Response>
where
    S: ResourceStorage + Send + Sync,
    R: CatalogResource,
{
    let input: R::Input = parse_body(&body)?;
    let id = parse_id(R::KIND, &id)?;

    debug!(resource = %R::KIND, %id, "Processing update request");

    if !state
        .storage()
        .exists(&Specification::<R::Entity>::by_id(id))
        .await?
    {
        return Err(RestError::not_found(R::KIND.as_str(), id));
    }

    let entity = input.into_entity(state.storage(), id).await?;
    state.storage().update(entity).await?;

    debug!(resource = %R::KIND, %id, "Resource updated");
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Handler for partially updating a resource.
///
/// # HTTP Request
///
/// `PATCH /api/{resource}/{id}` with a JSON Patch (RFC 6902) body. Paths
/// address the resource's input form, e.g. `/Name` or `/CountryId`.
///
/// # Response
///
/// - `204 No Content` - Patch applied
/// - `400 Bad Request` - Invalid patch, or the patched resource is invalid
/// - `404 Not Found` - No such resource
pub async fn patch_handler<S, R>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: Bytes,
) -> RestResult<Response>
where
    S: ResourceStorage + Send + Sync,
    R: CatalogResource,
{
    let patch: json_patch::Patch = parse_body(&body)?;
    let id = parse_id(R::KIND, &id)?;

    debug!(resource = %R::KIND, %id, operations = patch.0.len(), "Processing patch request");

    let existing = state
        .storage()
        .find(&Specification::<R::Entity>::by_id(id))
        .await?
        .ok_or_else(|| RestError::not_found(R::KIND.as_str(), id))?;

    let input: R::Input = apply_patch(&existing, &patch)?;
    let entity = input.into_entity(state.storage(), id).await?;
    state.storage().update(entity).await?;

    debug!(resource = %R::KIND, %id, "Resource patched");
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Handler for deleting one resource.
///
/// # HTTP Request
///
/// `DELETE /api/{resource}/{id}`
///
/// # Response
///
/// - `204 No Content` - Resource deleted
/// - `404 Not Found` - No such resource
pub async fn delete_handler<S, R>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: ResourceStorage + Send + Sync,
    R: CatalogResource,
{
    let id = parse_id(R::KIND, &id)?;
    debug!(resource = %R::KIND, %id, "Processing delete request");

    state.storage().delete::<R::Entity>(id).await?;

    debug!(resource = %R::KIND, %id, "Resource deleted");
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Handler for `POST` to an item URI.
///
/// Creating at a client-chosen identifier is never allowed: the answer is
/// `409 Conflict` when the resource exists and `404 Not Found` otherwise.
pub async fn block_creation_handler<S, R>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> RestResult<Response>
where
    S: ResourceStorage + Send + Sync,
    R: CatalogResource,
{
    let id = parse_id(R::KIND, &id)?;

    if state
        .storage()
        .exists(&Specification::<R::Entity>::by_id(id))
        .await?
    {
        return Err(RestError::Conflict {
            message: format!("Resource {}/{} already exists", R::KIND, id),
        });
    }

    Err(RestError::not_found(R::KIND.as_str(), id))
}
