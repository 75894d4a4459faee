//! Catalog Router
//!
//! Route paths keep the resource-name casing of the public API:
//! `/Regions`, `/Walks`, `/WalkDifficulties`.

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::{RegionRepository, WalkDifficultyRepository, WalkRepository};
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the catalog router with PostgreSQL repository
pub fn catalog_router(repo: PgCatalogRepository) -> Router {
    catalog_router_generic(repo)
}

/// Create a generic catalog router for any repository implementation
pub fn catalog_router_generic<R>(repo: R) -> Router
where
    R: RegionRepository + WalkRepository + WalkDifficultyRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/Regions", get(handlers::list_regions::<R>))
        .route("/Regions", post(handlers::create_region::<R>))
        .route("/Regions/{id}", get(handlers::get_region::<R>))
        .route("/Regions/{id}", put(handlers::update_region::<R>))
        .route("/Regions/{id}", delete(handlers::delete_region::<R>))
        .route("/Walks", get(handlers::list_walks::<R>))
        .route("/Walks", post(handlers::create_walk::<R>))
        .route("/Walks/{id}", get(handlers::get_walk::<R>))
        .route("/Walks/{id}", put(handlers::update_walk::<R>))
        .route("/Walks/{id}", delete(handlers::delete_walk::<R>))
        .route("/WalkDifficulties", get(handlers::list_difficulties::<R>))
        .route("/WalkDifficulties", post(handlers::create_difficulty::<R>))
        .route("/WalkDifficulties/{id}", get(handlers::get_difficulty::<R>))
        .route("/WalkDifficulties/{id}", put(handlers::update_difficulty::<R>))
        .route(
            "/WalkDifficulties/{id}",
            delete(handlers::delete_difficulty::<R>),
        )
        .with_state(state)
}
