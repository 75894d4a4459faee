//! Walk Use Cases
//!
//! CRUD over walks. Create and update check that the referenced region
//! and difficulty exist; an unknown reference is a validation error,
//! not a not-found, because the walk itself is the addressed resource.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entity::walk::{Walk, WalkDetails};
use crate::domain::repository::{RegionRepository, WalkDifficultyRepository, WalkRepository};
use crate::domain::value_object::{name::Name, walk_length::WalkLength};
use crate::error::{CatalogError, CatalogResult};
use kernel::id::{RegionId, WalkDifficultyId, WalkId};

/// Create walk input
pub struct CreateWalkInput {
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub difficulty_id: Uuid,
}

/// Update walk input (full replace)
pub struct UpdateWalkInput {
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub difficulty_id: Uuid,
}

/// Walk use case
pub struct WalkUseCase<W, R, D>
where
    W: WalkRepository,
    R: RegionRepository,
    D: WalkDifficultyRepository,
{
    walk_repo: Arc<W>,
    region_repo: Arc<R>,
    difficulty_repo: Arc<D>,
}

impl<W, R, D> WalkUseCase<W, R, D>
where
    W: WalkRepository,
    R: RegionRepository,
    D: WalkDifficultyRepository,
{
    pub fn new(walk_repo: Arc<W>, region_repo: Arc<R>, difficulty_repo: Arc<D>) -> Self {
        Self {
            walk_repo,
            region_repo,
            difficulty_repo,
        }
    }

    /// List all walks with their region and difficulty
    pub async fn list(&self) -> CatalogResult<Vec<WalkDetails>> {
        self.walk_repo.list().await
    }

    /// Get a walk by id with its region and difficulty
    pub async fn get(&self, id: Uuid) -> CatalogResult<WalkDetails> {
        self.walk_repo
            .find_by_id(&WalkId::from_uuid(id))
            .await?
            .ok_or(CatalogError::WalkNotFound)
    }

    /// Create a new walk
    pub async fn create(&self, input: CreateWalkInput) -> CatalogResult<Walk> {
        let (name, length) = self
            .validate_fields(&input.name, input.length, input.region_id, input.difficulty_id)
            .await?;

        let walk = Walk::new(
            name,
            length,
            RegionId::from_uuid(input.region_id),
            WalkDifficultyId::from_uuid(input.difficulty_id),
        );

        self.walk_repo.create(&walk).await?;

        tracing::info!(
            walk_id = %walk.walk_id,
            region_id = %walk.region_id,
            "Walk created"
        );

        Ok(walk)
    }

    /// Full replace of an existing walk
    pub async fn update(&self, id: Uuid, input: UpdateWalkInput) -> CatalogResult<Walk> {
        let (name, length) = self
            .validate_fields(&input.name, input.length, input.region_id, input.difficulty_id)
            .await?;

        let mut walk = self
            .walk_repo
            .find_by_id(&WalkId::from_uuid(id))
            .await?
            .ok_or(CatalogError::WalkNotFound)?
            .walk;

        walk.update_details(
            name,
            length,
            RegionId::from_uuid(input.region_id),
            WalkDifficultyId::from_uuid(input.difficulty_id),
        );

        self.walk_repo.update(&walk).await?;

        tracing::info!(walk_id = %walk.walk_id, "Walk updated");

        Ok(walk)
    }

    /// Delete a walk, returning the removed entity
    pub async fn delete(&self, id: Uuid) -> CatalogResult<Walk> {
        let walk = self
            .walk_repo
            .delete(&WalkId::from_uuid(id))
            .await?
            .ok_or(CatalogError::WalkNotFound)?;

        tracing::info!(walk_id = %walk.walk_id, "Walk deleted");

        Ok(walk)
    }

    /// Validate walk fields, collecting all errors
    ///
    /// The reference checks hit the database, so this is async unlike
    /// the region validation.
    async fn validate_fields(
        &self,
        name: &str,
        length: f64,
        region_id: Uuid,
        difficulty_id: Uuid,
    ) -> CatalogResult<(Name, WalkLength)> {
        let mut errors = Vec::new();

        let name = match Name::new(name) {
            Ok(name) => Some(name),
            Err(e) => {
                errors.push(format!("name: {e}"));
                None
            }
        };

        let length = match WalkLength::new(length) {
            Ok(length) => Some(length),
            Err(e) => {
                errors.push(format!("length: {e}"));
                None
            }
        };

        if !self
            .region_repo
            .exists(&RegionId::from_uuid(region_id))
            .await?
        {
            errors.push(format!("regionId: unknown region {region_id}"));
        }

        if !self
            .difficulty_repo
            .exists(&WalkDifficultyId::from_uuid(difficulty_id))
            .await?
        {
            errors.push(format!("walkDifficultyId: unknown difficulty {difficulty_id}"));
        }

        match (name, length) {
            (Some(name), Some(length)) if errors.is_empty() => Ok((name, length)),
            _ => Err(CatalogError::Validation { errors }),
        }
    }
}
