//! Route configuration for the collectibles API.

use axum::{
    Router,
    routing::get,
};
use recollectable_persistence::core::ResourceStorage;

use crate::handlers;
use crate::resources::{
    Banknotes, CatalogResource, Coins, Collections, CollectorValues, Conditions, Countries, Users,
};
use crate::state::AppState;

/// Creates all API routes.
///
/// # Routes
///
/// ## System-level
/// - `GET /health` - Health check
///
/// ## Per resource (`coins`, `banknotes`, `collections`, `users`, `countries`, `conditions`, `collectorvalues`)
/// - `GET /api/{resource}` - List
/// - `POST /api/{resource}` - Create
/// - `GET /api/{resource}/{id}` - Read
/// - `PUT /api/{resource}/{id}` - Replace
/// - `PATCH /api/{resource}/{id}` - JSON Patch
/// - `DELETE /api/{resource}/{id}` - Delete
/// - `POST /api/{resource}/{id}` - Rejected with `409` or `404`
///
/// ## Collectables of a collection
/// - `GET /api/collections/{collectionId}/collectables` - List
/// - `POST /api/collections/{collectionId}/collectables` - Create
/// - `GET /api/collections/{collectionId}/collectables/{id}` - Read
/// - `PUT /api/collections/{collectionId}/collectables/{id}` - Replace
/// - `PATCH /api/collections/{collectionId}/collectables/{id}` - JSON Patch
/// - `DELETE /api/collections/{collectionId}/collectables/{id}` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: ResourceStorage + Send + Sync + 'static,
{
    let router = Router::new().route("/health", get(handlers::health_handler::<S>));

    let router = resource_routes::<S, Coins>(router);
    let router = resource_routes::<S, Banknotes>(router);
    let router = resource_routes::<S, Collections>(router);
    let router = resource_routes::<S, Users>(router);
    let router = resource_routes::<S, Countries>(router);
    let router = resource_routes::<S, Conditions>(router);
    let router = resource_routes::<S, CollectorValues>(router);

    router
        .route(
            "/api/collections/{collection_id}/collectables",
            get(handlers::list_collectables_handler::<S>)
                .post(handlers::create_collectable_handler::<S>),
        )
        .route(
            "/api/collections/{collection_id}/collectables/{id}",
            get(handlers::read_collectable_handler::<S>)
                .put(handlers::update_collectable_handler::<S>)
                .patch(handlers::patch_collectable_handler::<S>)
                .delete(handlers::delete_collectable_handler::<S>),
        )
        .with_state(state)
}

/// Mounts the collection and item routes of `R`.
fn resource_routes<S, R>(router: Router<AppState<S>>) -> Router<AppState<S>>
where
    S: ResourceStorage + Send + Sync + 'static,
    R: CatalogResource,
{
    let collection = format!("/api/{}", R::KIND.as_str());
    let item = format!("{}/{{id}}", collection);

    router
        .route(
            &collection,
            get(handlers::list_handler::<S, R>).post(handlers::create_handler::<S, R>),
        )
        .route(
            &item,
            get(handlers::read_handler::<S, R>)
                .put(handlers::update_handler::<S, R>)
                .patch(handlers::patch_handler::<S, R>)
                .delete(handlers::delete_handler::<S, R>)
                .post(handlers::block_creation_handler::<S, R>),
        )
}
