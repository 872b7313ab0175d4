//! Handlers for collectables nested under a collection.
//!
//! List and create at `/api/collections/{collectionId}/collectables`; read,
//! replace, patch, and delete at `.../collectables/{id}`. An unknown
//! collection is a `404`, never an empty page.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use recollectable_persistence::core::ResourceStorage;
use recollectable_persistence::entities::{Collection, CollectionCollectable};
use recollectable_persistence::specification::Specification;
use recollectable_persistence::types::Page;
use tracing::debug;
use uuid::Uuid;

use crate::dto::{CollectableInput, EntityInput};
use crate::error::{RestError, RestResult};
use crate::extractors::{ListQuery, Representation};
use crate::handlers::pipeline::PreparedQuery;
use crate::handlers::resource::{apply_patch, parse_body, parse_id};
use crate::query::ResourceParameters;
use crate::resources::{CatalogResource, Collectables, ResourceKind};
use crate::responses::{
    FieldSelection, HypermediaLinkBuilder, ResponseContext, created_response, item_response,
    list_response,
};
use crate::state::AppState;

fn collectables_path(collection_id: Uuid) -> String {
    format!("/api/collections/{}/collectables", collection_id)
}

/// Parses the collection segment of a nested path. Anything that is not a
/// UUID names no collection.
fn parse_collection_id(raw: &str) -> RestResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| collection_not_found(raw))
}

fn in_collection(collection_id: Uuid) -> RestResult<Specification<CollectionCollectable>> {
    Ok(Specification::equals("CollectionId", collection_id)?)
}

async fn collection_exists<S: ResourceStorage>(state: &AppState<S>, collection_id: Uuid) -> RestResult<bool> {
    Ok(state
        .storage()
        .exists(&Specification::<Collection>::by_id(collection_id))
        .await?)
}

/// Lists one page of a collection's collectables.
///
/// Returns `None` when the collection does not exist. Sort and field
/// validation run first and fail even then.
pub async fn collectables_page<S: ResourceStorage>(
    state: &AppState<S>,
    collection_id: Uuid,
    params: &ResourceParameters,
) -> RestResult<Option<(Page<CollectionCollectable>, FieldSelection)>> {
    let query =
        PreparedQuery::<Collectables>::prepare(state.catalog(), params)?.scoped(in_collection(collection_id)?);

    if !collection_exists(state, collection_id).await? {
        debug!(%collection_id, "Collection not found");
        return Ok(None);
    }

    query
        .execute(state.storage(), state.catalog(), params)
        .await
        .map(Some)
}

/// Finds a collectable by id within a collection.
///
/// The outer `None` means the collection does not exist, the inner one
/// that the collectable is not in it.
async fn find_collectable<S: ResourceStorage>(
    state: &AppState<S>,
    collection_id: Uuid,
    id: Uuid,
) -> RestResult<Option<Option<CollectionCollectable>>> {
    if !collection_exists(state, collection_id).await? {
        return Ok(None);
    }

    let specification = in_collection(collection_id)?.and(Specification::by_id(id));
    Ok(Some(state.storage().find(&specification).await?))
}

fn collection_not_found(collection_id: impl ToString) -> RestError {
    RestError::not_found(ResourceKind::Collections.as_str(), collection_id)
}

fn collectable_not_found(id: impl ToString) -> RestError {
    RestError::not_found(Collectables::KIND.as_str(), id)
}

fn links<S: ResourceStorage>(state: &AppState<S>, collection_id: Uuid) -> HypermediaLinkBuilder {
    state.links_at(&collectables_path(collection_id), Collectables::KIND)
}

/// Handler for listing a collection's collectables.
///
/// # HTTP Request
///
/// `GET /api/collections/{collectionId}/collectables?page=&pageSize=&search=&country=&orderBy=&fields=`
///
/// # Response
///
/// - `200 OK` - The requested page
/// - `400 Bad Request` - Unknown `orderBy` key or `fields` name
/// - `404 Not Found` - No such collection
pub async fn list_collectables_handler<S>(
    State(state): State<AppState<S>>,
    Path(collection_id): Path<String>,
    representation: Representation,
    query: ListQuery,
) -> RestResult<Response>
where
    S: ResourceStorage + Send + Sync,
{
    let params = state.catalog().parameters(Collectables::KIND, query)?;
    let collection_id = parse_collection_id(&collection_id)?;

    debug!(
        %collection_id,
        page = params.page(),
        page_size = params.page_size(),
        "Processing collectables list request"
    );

    let (page, selection) = collectables_page(&state, collection_id, &params)
        .await?
        .ok_or_else(|| collection_not_found(collection_id))?;

    let links = links(&state, collection_id);
    list_response::<Collectables>(
        page,
        &params,
        ResponseContext {
            representation,
            selection: &selection,
            projector: state.catalog().fields(),
            links: &links,
        },
    )
}

/// Handler for reading one collectable of a collection.
///
/// # HTTP Request
///
/// `GET /api/collections/{collectionId}/collectables/{id}?fields=`
///
/// # Response
///
/// - `200 OK` - The collectable
/// - `400 Bad Request` - Unknown `fields` name
/// - `404 Not Found` - No such collection, or the collectable is not in it
pub async fn read_collectable_handler<S>(
    State(state): State<AppState<S>>,
    Path((collection_id, id)): Path<(String, String)>,
    representation: Representation,
    query: ListQuery,
) -> RestResult<Response>
where
    S: ResourceStorage + Send + Sync,
{
    let fields = query.fields.unwrap_or_default();
    let selection = state
        .catalog()
        .fields()
        .select(Collectables::KIND, &fields)?;

    let collection_id = parse_collection_id(&collection_id)?;
    let id = parse_id(Collectables::KIND, &id)?;

    debug!(%collection_id, %id, "Processing collectable read request");

    let collectable = find_collectable(&state, collection_id, id)
        .await?
        .ok_or_else(|| collection_not_found(collection_id))?
        .ok_or_else(|| collectable_not_found(id))?;

    let links = links(&state, collection_id);
    item_response::<Collectables>(
        &collectable,
        ResponseContext {
            representation,
            selection: &selection,
            projector: state.catalog().fields(),
            links: &links,
        },
    )
}

/// Handler for placing a coin or banknote in a collection.
///
/// # HTTP Request
///
/// `POST /api/collections/{collectionId}/collectables` with a body naming
/// `CollectableId` and `ConditionId`
///
/// # Response
///
/// - `201 Created` - The new collectable, with its URL in `Location`
/// - `400 Bad Request` - Missing or invalid body, or a dangling reference
/// - `404 Not Found` - No such collection
pub async fn create_collectable_handler<S>(
    State(state): State<AppState<S>>,
    Path(collection_id): Path<String>,
    representation: Representation,
    body: Bytes,
) -> RestResult<Response>
where
    S: ResourceStorage + Send + Sync,
{
    let mut input: CollectableInput = parse_body(&body)?;
    let collection_id = parse_collection_id(&collection_id)?;

    if !collection_exists(&state, collection_id).await? {
        return Err(collection_not_found(collection_id));
    }

    // Created collectables always land in the collection of the path.
    input.collection_id = Some(collection_id);
    let id = Uuid::new_v4();
    debug!(%collection_id, %id, "Processing collectable create request");

    let collectable = input.into_entity(state.storage(), id).await?;
    let stored = state.storage().insert(collectable).await?;

    debug!(%collection_id, %id, "Collectable created");

    let selection = FieldSelection::all();
    let links = links(&state, collection_id);
    created_response::<Collectables>(
        &stored,
        ResponseContext {
            representation,
            selection: &selection,
            projector: state.catalog().fields(),
            links: &links,
        },
    )
}

/// Handler for replacing a collectable.
///
/// `CollectionId` in the body moves the collectable to another collection;
/// without it the collectable stays where it is.
///
/// # HTTP Request
///
/// `PUT /api/collections/{collectionId}/collectables/{id}`
///
/// # Response
///
/// - `204 No Content` - Collectable replaced
/// - `400 Bad Request` - Missing or invalid body, or a dangling reference
/// - `404 Not Found` - No such collection, or the collectable is not in it
pub async fn update_collectable_handler<S>(
    State(state): State<AppState<S>>,
    Path((collection_id, id)): Path<(String, String)>,
    body: Bytes,
) -> RestResult<Response>
where
    S: ResourceStorage + Send + Sync,
{
    let mut input: CollectableInput = parse_body(&body)?;
    let collection_id = parse_collection_id(&collection_id)?;
    let id = parse_id(Collectables::KIND, &id)?;

    debug!(%collection_id, %id, "Processing collectable update request");

    find_collectable(&state, collection_id, id)
        .await?
        .ok_or_else(|| collection_not_found(collection_id))?
        .ok_or_else(|| collectable_not_found(id))?;

    input.collection_id.get_or_insert(collection_id);
    let collectable = input.into_entity(state.storage(), id).await?;
    state.storage().update(collectable).await?;

    debug!(%collection_id, %id, "Collectable updated");
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Handler for partially updating a collectable.
///
/// # HTTP Request
///
/// `PATCH /api/collections/{collectionId}/collectables/{id}` with a JSON
/// Patch (RFC 6902) over `CollectionId`, `CollectableId`, and `ConditionId`
///
/// # Response
///
/// - `204 No Content` - Patch applied
/// - `400 Bad Request` - Invalid patch, or the patched collectable is invalid
/// - `404 Not Found` - No such collection, or the collectable is not in it
pub async fn patch_collectable_handler<S>(
    State(state): State<AppState<S>>,
    Path((collection_id, id)): Path<(String, String)>,
    body: Bytes,
) -> RestResult<Response>
where
    S: ResourceStorage + Send + Sync,
{
    let patch: json_patch::Patch = parse_body(&body)?;
    let collection_id = parse_collection_id(&collection_id)?;
    let id = parse_id(Collectables::KIND, &id)?;

    debug!(%collection_id, %id, "Processing collectable patch request");

    let existing = find_collectable(&state, collection_id, id)
        .await?
        .ok_or_else(|| collection_not_found(collection_id))?
        .ok_or_else(|| collectable_not_found(id))?;

    let input: CollectableInput = apply_patch(&existing, &patch)?;
    let collectable = input.into_entity(state.storage(), id).await?;
    state.storage().update(collectable).await?;

    debug!(%collection_id, %id, "Collectable patched");
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Handler for removing a collectable from a collection.
///
/// # HTTP Request
///
/// `DELETE /api/collections/{collectionId}/collectables/{id}`
///
/// # Response
///
/// - `204 No Content` - Collectable removed
/// - `404 Not Found` - No such collection, or the collectable is not in it
pub async fn delete_collectable_handler<S>(
    State(state): State<AppState<S>>,
    Path((collection_id, id)): Path<(String, String)>,
) -> RestResult<Response>
where
    S: ResourceStorage + Send + Sync,
{
    let collection_id = parse_collection_id(&collection_id)?;
    let id = parse_id(Collectables::KIND, &id)?;

    debug!(%collection_id, %id, "Processing collectable delete request");

    let collectable = find_collectable(&state, collection_id, id)
        .await?
        .ok_or_else(|| collection_not_found(collection_id))?
        .ok_or_else(|| collectable_not_found(id))?;

    state
        .storage()
        .delete::<CollectionCollectable>(collectable.id)
        .await?;

    debug!(%collection_id, %id, "Collectable removed");
    Ok(StatusCode::NO_CONTENT.into_response())
}
