//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    CreateRegionInput, CreateWalkDifficultyInput, CreateWalkInput, RegionUseCase,
    UpdateRegionInput, UpdateWalkDifficultyInput, UpdateWalkInput, WalkDifficultyUseCase,
    WalkUseCase,
};
use crate::domain::repository::{RegionRepository, WalkDifficultyRepository, WalkRepository};
use crate::error::CatalogResult;
use crate::presentation::dto::{
    AddRegionRequest, AddWalkDifficultyRequest, AddWalkRequest, RegionDto, UpdateRegionRequest,
    UpdateWalkDifficultyRequest, UpdateWalkRequest, WalkDifficultyDto, WalkDto,
};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: RegionRepository + WalkRepository + WalkDifficultyRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

fn created_at(location: String, body: impl IntoResponse) -> impl IntoResponse {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        body,
    )
}

// ============================================================================
// Regions
// ============================================================================

/// GET /Regions
pub async fn list_regions<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<Vec<RegionDto>>>
where
    R: RegionRepository + WalkRepository + WalkDifficultyRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegionUseCase::new(state.repo.clone());

    let regions = use_case.list().await?;

    Ok(Json(regions.into_iter().map(RegionDto::from).collect()))
}

/// GET /Regions/{id}
pub async fn get_region<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<Uuid>,
) -> CatalogResult<Json<RegionDto>>
where
    R: RegionRepository + WalkRepository + WalkDifficultyRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegionUseCase::new(state.repo.clone());

    let region = use_case.get(id).await?;

    Ok(Json(RegionDto::from(region)))
}

/// POST /Regions
pub async fn create_region<R>(
    State(state): State<CatalogAppState<R>>,
    Json(req): Json<AddRegionRequest>,
) -> CatalogResult<impl IntoResponse>
where
    R: RegionRepository + WalkRepository + WalkDifficultyRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegionUseCase::new(state.repo.clone());

    let input = CreateRegionInput {
        code: req.code,
        name: req.name,
        area: req.area,
        lat: req.lat,
        long: req.long,
        population: req.population,
    };

    let dto = RegionDto::from(use_case.create(input).await?);

    Ok(created_at(format!("/Regions/{}", dto.id), Json(dto)))
}

/// PUT /Regions/{id}
pub async fn update_region<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRegionRequest>,
) -> CatalogResult<Json<RegionDto>>
where
    R: RegionRepository + WalkRepository + WalkDifficultyRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegionUseCase::new(state.repo.clone());

    let input = UpdateRegionInput {
        code: req.code,
        name: req.name,
        area: req.area,
        lat: req.lat,
        long: req.long,
        population: req.population,
    };

    let region = use_case.update(id, input).await?;

    Ok(Json(RegionDto::from(region)))
}

/// DELETE /Regions/{id}
pub async fn delete_region<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<Uuid>,
) -> CatalogResult<Json<RegionDto>>
where
    R: RegionRepository + WalkRepository + WalkDifficultyRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegionUseCase::new(state.repo.clone());

    let region = use_case.delete(id).await?;

    Ok(Json(RegionDto::from(region)))
}

// ============================================================================
// Walks
// ============================================================================

/// GET /Walks
pub async fn list_walks<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<Vec<WalkDto>>>
where
    R: RegionRepository + WalkRepository + WalkDifficultyRepository + Clone + Send + Sync + 'static,
{
    let use_case = WalkUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone());

    let walks = use_case.list().await?;

    Ok(Json(walks.into_iter().map(WalkDto::from).collect()))
}

/// GET /Walks/{id}
pub async fn get_walk<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<Uuid>,
) -> CatalogResult<Json<WalkDto>>
where
    R: RegionRepository + WalkRepository + WalkDifficultyRepository + Clone + Send + Sync + 'static,
{
    let use_case = WalkUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone());

    let details = use_case.get(id).await?;

    Ok(Json(WalkDto::from(details)))
}

/// POST /Walks
pub async fn create_walk<R>(
    State(state): State<CatalogAppState<R>>,
    Json(req): Json<AddWalkRequest>,
) -> CatalogResult<impl IntoResponse>
where
    R: RegionRepository + WalkRepository + WalkDifficultyRepository + Clone + Send + Sync + 'static,
{
    let use_case = WalkUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone());

    let input = CreateWalkInput {
        name: req.name,
        length: req.length,
        region_id: req.region_id,
        difficulty_id: req.walk_difficulty_id,
    };

    let dto = WalkDto::from(use_case.create(input).await?);

    Ok(created_at(format!("/Walks/{}", dto.id), Json(dto)))
}

/// PUT /Walks/{id}
pub async fn update_walk<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateWalkRequest>,
) -> CatalogResult<Json<WalkDto>>
where
    R: RegionRepository + WalkRepository + WalkDifficultyRepository + Clone + Send + Sync + 'static,
{
    let use_case = WalkUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone());

    let input = UpdateWalkInput {
        name: req.name,
        length: req.length,
        region_id: req.region_id,
        difficulty_id: req.walk_difficulty_id,
    };

    let walk = use_case.update(id, input).await?;

    Ok(Json(WalkDto::from(walk)))
}

/// DELETE /Walks/{id}
pub async fn delete_walk<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<Uuid>,
) -> CatalogResult<Json<WalkDto>>
where
    R: RegionRepository + WalkRepository + WalkDifficultyRepository + Clone + Send + Sync + 'static,
{
    let use_case = WalkUseCase::new(state.repo.clone(), state.repo.clone(), state.repo.clone());

    let walk = use_case.delete(id).await?;

    Ok(Json(WalkDto::from(walk)))
}

// ============================================================================
// Walk Difficulties
// ============================================================================

/// GET /WalkDifficulties
pub async fn list_difficulties<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<Vec<WalkDifficultyDto>>>
where
    R: RegionRepository + WalkRepository + WalkDifficultyRepository + Clone + Send + Sync + 'static,
{
    let use_case = WalkDifficultyUseCase::new(state.repo.clone());

    let difficulties = use_case.list().await?;

    Ok(Json(
        difficulties
            .into_iter()
            .map(WalkDifficultyDto::from)
            .collect(),
    ))
}

/// GET /WalkDifficulties/{id}
pub async fn get_difficulty<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<Uuid>,
) -> CatalogResult<Json<WalkDifficultyDto>>
where
    R: RegionRepository + WalkRepository + WalkDifficultyRepository + Clone + Send + Sync + 'static,
{
    let use_case = WalkDifficultyUseCase::new(state.repo.clone());

    let difficulty = use_case.get(id).await?;

    Ok(Json(WalkDifficultyDto::from(difficulty)))
}

/// POST /WalkDifficulties
pub async fn create_difficulty<R>(
    State(state): State<CatalogAppState<R>>,
    Json(req): Json<AddWalkDifficultyRequest>,
) -> CatalogResult<impl IntoResponse>
where
    R: RegionRepository + WalkRepository + WalkDifficultyRepository + Clone + Send + Sync + 'static,
{
    let use_case = WalkDifficultyUseCase::new(state.repo.clone());

    let input = CreateWalkDifficultyInput { code: req.code };

    let dto = WalkDifficultyDto::from(use_case.create(input).await?);

    Ok(created_at(
        format!("/WalkDifficulties/{}", dto.id),
        Json(dto),
    ))
}

/// PUT /WalkDifficulties/{id}
pub async fn update_difficulty<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateWalkDifficultyRequest>,
) -> CatalogResult<Json<WalkDifficultyDto>>
where
    R: RegionRepository + WalkRepository + WalkDifficultyRepository + Clone + Send + Sync + 'static,
{
    let use_case = WalkDifficultyUseCase::new(state.repo.clone());

    let input = UpdateWalkDifficultyInput { code: req.code };

    let difficulty = use_case.update(id, input).await?;

    Ok(Json(WalkDifficultyDto::from(difficulty)))
}

/// DELETE /WalkDifficulties/{id}
pub async fn delete_difficulty<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<Uuid>,
) -> CatalogResult<Json<WalkDifficultyDto>>
where
    R: RegionRepository + WalkRepository + WalkDifficultyRepository + Clone + Send + Sync + 'static,
{
    let use_case = WalkDifficultyUseCase::new(state.repo.clone());

    let difficulty = use_case.delete(id).await?;

    Ok(Json(WalkDifficultyDto::from(difficulty)))
}
