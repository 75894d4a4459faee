//! API DTOs (Data Transfer Objects)
//!
//! JSON-facing shapes of the catalog entities, plus the `From`
//! conversions that translate between entities and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::{
    region::Region,
    walk::{Walk, WalkDetails},
    walk_difficulty::WalkDifficulty,
};

// ============================================================================
// Regions
// ============================================================================

/// Region response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Region> for RegionDto {
    fn from(region: Region) -> Self {
        Self {
            id: region.region_id.into_uuid(),
            code: region.code.into_inner(),
            name: region.name.into_inner(),
            area: region.area,
            lat: region.lat,
            long: region.long,
            population: region.population,
            created_at: region.created_at,
            updated_at: region.updated_at,
        }
    }
}

/// Add region request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRegionRequest {
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

/// Update region request (full replace)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegionRequest {
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

// ============================================================================
// Walks
// ============================================================================

/// Walk response
///
/// `region` and `walkDifficulty` are embedded on joined reads and
/// absent on create/update/delete responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkDto {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
    pub region: Option<RegionDto>,
    pub walk_difficulty: Option<WalkDifficultyDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Walk> for WalkDto {
    fn from(walk: Walk) -> Self {
        Self {
            id: walk.walk_id.into_uuid(),
            name: walk.name.into_inner(),
            length: walk.length.km(),
            region_id: walk.region_id.into_uuid(),
            walk_difficulty_id: walk.difficulty_id.into_uuid(),
            region: None,
            walk_difficulty: None,
            created_at: walk.created_at,
            updated_at: walk.updated_at,
        }
    }
}

impl From<WalkDetails> for WalkDto {
    fn from(details: WalkDetails) -> Self {
        let mut dto = Self::from(details.walk);
        dto.region = Some(details.region.into());
        dto.walk_difficulty = Some(details.difficulty.into());
        dto
    }
}

/// Add walk request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWalkRequest {
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

/// Update walk request (full replace)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWalkRequest {
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

// ============================================================================
// Walk Difficulties
// ============================================================================

/// Walk difficulty response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkDifficultyDto {
    pub id: Uuid,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<WalkDifficulty> for WalkDifficultyDto {
    fn from(difficulty: WalkDifficulty) -> Self {
        Self {
            id: difficulty.difficulty_id.into_uuid(),
            code: difficulty.code.into_inner(),
            created_at: difficulty.created_at,
            updated_at: difficulty.updated_at,
        }
    }
}

/// Add difficulty request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWalkDifficultyRequest {
    pub code: String,
}

/// Update difficulty request (full replace)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWalkDifficultyRequest {
    pub code: String,
}
