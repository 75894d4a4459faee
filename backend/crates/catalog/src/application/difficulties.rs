//! Walk Difficulty Use Cases

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entity::walk_difficulty::WalkDifficulty;
use crate::domain::repository::WalkDifficultyRepository;
use crate::domain::value_object::difficulty_code::DifficultyCode;
use crate::error::{CatalogError, CatalogResult};
use kernel::id::WalkDifficultyId;

/// Create difficulty input
pub struct CreateWalkDifficultyInput {
    pub code: String,
}

/// Update difficulty input (full replace)
pub struct UpdateWalkDifficultyInput {
    pub code: String,
}

/// Walk difficulty use case
pub struct WalkDifficultyUseCase<D>
where
    D: WalkDifficultyRepository,
{
    repo: Arc<D>,
}

impl<D> WalkDifficultyUseCase<D>
where
    D: WalkDifficultyRepository,
{
    pub fn new(repo: Arc<D>) -> Self {
        Self { repo }
    }

    /// List all difficulties
    pub async fn list(&self) -> CatalogResult<Vec<WalkDifficulty>> {
        self.repo.list().await
    }

    /// Get a difficulty by id
    pub async fn get(&self, id: Uuid) -> CatalogResult<WalkDifficulty> {
        self.repo
            .find_by_id(&WalkDifficultyId::from_uuid(id))
            .await?
            .ok_or(CatalogError::DifficultyNotFound)
    }

    /// Create a new difficulty
    pub async fn create(&self, input: CreateWalkDifficultyInput) -> CatalogResult<WalkDifficulty> {
        let code = DifficultyCode::new(&input.code)
            .map_err(|e| CatalogError::validation(format!("code: {e}")))?;

        let difficulty = WalkDifficulty::new(code);

        self.repo.create(&difficulty).await?;

        tracing::info!(
            difficulty_id = %difficulty.difficulty_id,
            code = %difficulty.code,
            "Walk difficulty created"
        );

        Ok(difficulty)
    }

    /// Full replace of an existing difficulty
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateWalkDifficultyInput,
    ) -> CatalogResult<WalkDifficulty> {
        let code = DifficultyCode::new(&input.code)
            .map_err(|e| CatalogError::validation(format!("code: {e}")))?;

        let mut difficulty = self
            .repo
            .find_by_id(&WalkDifficultyId::from_uuid(id))
            .await?
            .ok_or(CatalogError::DifficultyNotFound)?;

        difficulty.set_code(code);

        self.repo.update(&difficulty).await?;

        tracing::info!(difficulty_id = %difficulty.difficulty_id, "Walk difficulty updated");

        Ok(difficulty)
    }

    /// Delete a difficulty, returning the removed entity
    pub async fn delete(&self, id: Uuid) -> CatalogResult<WalkDifficulty> {
        let difficulty = self
            .repo
            .delete(&WalkDifficultyId::from_uuid(id))
            .await?
            .ok_or(CatalogError::DifficultyNotFound)?;

        tracing::info!(difficulty_id = %difficulty.difficulty_id, "Walk difficulty deleted");

        Ok(difficulty)
    }
}
