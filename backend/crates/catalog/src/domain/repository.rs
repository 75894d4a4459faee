//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{
    region::Region,
    walk::{Walk, WalkDetails},
    walk_difficulty::WalkDifficulty,
};
use crate::error::CatalogResult;
use kernel::id::{RegionId, WalkDifficultyId, WalkId};

/// Region repository trait
#[trait_variant::make(RegionRepository: Send)]
pub trait LocalRegionRepository {
    /// List all regions
    async fn list(&self) -> CatalogResult<Vec<Region>>;

    /// Find region by ID
    async fn find_by_id(&self, region_id: &RegionId) -> CatalogResult<Option<Region>>;

    /// Create a new region
    async fn create(&self, region: &Region) -> CatalogResult<()>;

    /// Update an existing region
    async fn update(&self, region: &Region) -> CatalogResult<()>;

    /// Delete a region, returning the removed entity
    async fn delete(&self, region_id: &RegionId) -> CatalogResult<Option<Region>>;

    /// Check if a region exists
    async fn exists(&self, region_id: &RegionId) -> CatalogResult<bool>;
}

/// Walk repository trait
///
/// Reads are joined with the walk's region and difficulty.
#[trait_variant::make(WalkRepository: Send)]
pub trait LocalWalkRepository {
    /// List all walks with their region and difficulty
    async fn list(&self) -> CatalogResult<Vec<WalkDetails>>;

    /// Find walk by ID with its region and difficulty
    async fn find_by_id(&self, walk_id: &WalkId) -> CatalogResult<Option<WalkDetails>>;

    /// Create a new walk
    async fn create(&self, walk: &Walk) -> CatalogResult<()>;

    /// Update an existing walk
    async fn update(&self, walk: &Walk) -> CatalogResult<()>;

    /// Delete a walk, returning the removed entity (no joins)
    async fn delete(&self, walk_id: &WalkId) -> CatalogResult<Option<Walk>>;
}

/// Walk difficulty repository trait
#[trait_variant::make(WalkDifficultyRepository: Send)]
pub trait LocalWalkDifficultyRepository {
    /// List all difficulties
    async fn list(&self) -> CatalogResult<Vec<WalkDifficulty>>;

    /// Find difficulty by ID
    async fn find_by_id(
        &self,
        difficulty_id: &WalkDifficultyId,
    ) -> CatalogResult<Option<WalkDifficulty>>;

    /// Create a new difficulty
    async fn create(&self, difficulty: &WalkDifficulty) -> CatalogResult<()>;

    /// Update an existing difficulty
    async fn update(&self, difficulty: &WalkDifficulty) -> CatalogResult<()>;

    /// Delete a difficulty, returning the removed entity
    async fn delete(
        &self,
        difficulty_id: &WalkDifficultyId,
    ) -> CatalogResult<Option<WalkDifficulty>>;

    /// Check if a difficulty exists
    async fn exists(&self, difficulty_id: &WalkDifficultyId) -> CatalogResult<bool>;
}
