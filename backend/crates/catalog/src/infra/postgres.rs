//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    region::Region,
    walk::{Walk, WalkDetails},
    walk_difficulty::WalkDifficulty,
};
use crate::domain::repository::{RegionRepository, WalkDifficultyRepository, WalkRepository};
use crate::domain::value_object::{
    difficulty_code::DifficultyCode, name::Name, region_code::RegionCode, walk_length::WalkLength,
};
use crate::error::{CatalogError, CatalogResult};
use kernel::id::{RegionId, WalkDifficultyId, WalkId};

/// PostgreSQL-backed catalog repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// SQLSTATE for foreign key violations
const FK_VIOLATION: &str = "23503";

fn is_fk_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(FK_VIOLATION)
    )
}

// ============================================================================
// Region Repository Implementation
// ============================================================================

impl RegionRepository for PgCatalogRepository {
    async fn list(&self) -> CatalogResult<Vec<Region>> {
        let rows = sqlx::query_as::<_, RegionRow>(
            r#"
            SELECT
                region_id,
                code,
                name,
                area,
                lat,
                long,
                population,
                created_at,
                updated_at
            FROM regions
            ORDER BY code
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_region()).collect())
    }

    async fn find_by_id(&self, region_id: &RegionId) -> CatalogResult<Option<Region>> {
        let row = sqlx::query_as::<_, RegionRow>(
            r#"
            SELECT
                region_id,
                code,
                name,
                area,
                lat,
                long,
                population,
                created_at,
                updated_at
            FROM regions
            WHERE region_id = $1
            "#,
        )
        .bind(region_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_region()))
    }

    async fn create(&self, region: &Region) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO regions (
                region_id,
                code,
                name,
                area,
                lat,
                long,
                population,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(region.region_id.as_uuid())
        .bind(region.code.as_str())
        .bind(region.name.as_str())
        .bind(region.area)
        .bind(region.lat)
        .bind(region.long)
        .bind(region.population)
        .bind(region.created_at)
        .bind(region.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, region: &Region) -> CatalogResult<()> {
        sqlx::query(
            r#"
            UPDATE regions SET
                code = $2,
                name = $3,
                area = $4,
                lat = $5,
                long = $6,
                population = $7,
                updated_at = $8
            WHERE region_id = $1
            "#,
        )
        .bind(region.region_id.as_uuid())
        .bind(region.code.as_str())
        .bind(region.name.as_str())
        .bind(region.area)
        .bind(region.lat)
        .bind(region.long)
        .bind(region.population)
        .bind(region.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, region_id: &RegionId) -> CatalogResult<Option<Region>> {
        let Some(region) = RegionRepository::find_by_id(self, region_id).await? else {
            return Ok(None);
        };

        let result = sqlx::query("DELETE FROM regions WHERE region_id = $1")
            .bind(region_id.as_uuid())
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(Some(region)),
            Err(e) if is_fk_violation(&e) => Err(CatalogError::RegionInUse),
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, region_id: &RegionId) -> CatalogResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM regions WHERE region_id = $1)",
        )
        .bind(region_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Walk Repository Implementation
// ============================================================================

impl WalkRepository for PgCatalogRepository {
    async fn list(&self) -> CatalogResult<Vec<WalkDetails>> {
        let rows = sqlx::query_as::<_, WalkDetailsRow>(
            r#"
            SELECT
                w.walk_id,
                w.name,
                w.length,
                w.region_id,
                w.difficulty_id,
                w.created_at,
                w.updated_at,
                r.code       AS region_code,
                r.name       AS region_name,
                r.area       AS region_area,
                r.lat        AS region_lat,
                r.long       AS region_long,
                r.population AS region_population,
                r.created_at AS region_created_at,
                r.updated_at AS region_updated_at,
                d.code       AS difficulty_code,
                d.created_at AS difficulty_created_at,
                d.updated_at AS difficulty_updated_at
            FROM walks w
            JOIN regions r ON r.region_id = w.region_id
            JOIN walk_difficulties d ON d.difficulty_id = w.difficulty_id
            ORDER BY w.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_details()).collect())
    }

    async fn find_by_id(&self, walk_id: &WalkId) -> CatalogResult<Option<WalkDetails>> {
        let row = sqlx::query_as::<_, WalkDetailsRow>(
            r#"
            SELECT
                w.walk_id,
                w.name,
                w.length,
                w.region_id,
                w.difficulty_id,
                w.created_at,
                w.updated_at,
                r.code       AS region_code,
                r.name       AS region_name,
                r.area       AS region_area,
                r.lat        AS region_lat,
                r.long       AS region_long,
                r.population AS region_population,
                r.created_at AS region_created_at,
                r.updated_at AS region_updated_at,
                d.code       AS difficulty_code,
                d.created_at AS difficulty_created_at,
                d.updated_at AS difficulty_updated_at
            FROM walks w
            JOIN regions r ON r.region_id = w.region_id
            JOIN walk_difficulties d ON d.difficulty_id = w.difficulty_id
            WHERE w.walk_id = $1
            "#,
        )
        .bind(walk_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_details()))
    }

    async fn create(&self, walk: &Walk) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO walks (
                walk_id,
                name,
                length,
                region_id,
                difficulty_id,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(walk.walk_id.as_uuid())
        .bind(walk.name.as_str())
        .bind(walk.length.km())
        .bind(walk.region_id.as_uuid())
        .bind(walk.difficulty_id.as_uuid())
        .bind(walk.created_at)
        .bind(walk.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, walk: &Walk) -> CatalogResult<()> {
        sqlx::query(
            r#"
            UPDATE walks SET
                name = $2,
                length = $3,
                region_id = $4,
                difficulty_id = $5,
                updated_at = $6
            WHERE walk_id = $1
            "#,
        )
        .bind(walk.walk_id.as_uuid())
        .bind(walk.name.as_str())
        .bind(walk.length.km())
        .bind(walk.region_id.as_uuid())
        .bind(walk.difficulty_id.as_uuid())
        .bind(walk.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, walk_id: &WalkId) -> CatalogResult<Option<Walk>> {
        let row = sqlx::query_as::<_, WalkRow>(
            r#"
            SELECT
                walk_id,
                name,
                length,
                region_id,
                difficulty_id,
                created_at,
                updated_at
            FROM walks
            WHERE walk_id = $1
            "#,
        )
        .bind(walk_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM walks WHERE walk_id = $1")
            .bind(walk_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(Some(row.into_walk()))
    }
}

// ============================================================================
// Walk Difficulty Repository Implementation
// ============================================================================

impl WalkDifficultyRepository for PgCatalogRepository {
    async fn list(&self) -> CatalogResult<Vec<WalkDifficulty>> {
        let rows = sqlx::query_as::<_, WalkDifficultyRow>(
            r#"
            SELECT
                difficulty_id,
                code,
                created_at,
                updated_at
            FROM walk_difficulties
            ORDER BY code
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_difficulty()).collect())
    }

    async fn find_by_id(
        &self,
        difficulty_id: &WalkDifficultyId,
    ) -> CatalogResult<Option<WalkDifficulty>> {
        let row = sqlx::query_as::<_, WalkDifficultyRow>(
            r#"
            SELECT
                difficulty_id,
                code,
                created_at,
                updated_at
            FROM walk_difficulties
            WHERE difficulty_id = $1
            "#,
        )
        .bind(difficulty_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_difficulty()))
    }

    async fn create(&self, difficulty: &WalkDifficulty) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO walk_difficulties (
                difficulty_id,
                code,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(difficulty.difficulty_id.as_uuid())
        .bind(difficulty.code.as_str())
        .bind(difficulty.created_at)
        .bind(difficulty.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(&self, difficulty: &WalkDifficulty) -> CatalogResult<()> {
        sqlx::query(
            r#"
            UPDATE walk_difficulties SET
                code = $2,
                updated_at = $3
            WHERE difficulty_id = $1
            "#,
        )
        .bind(difficulty.difficulty_id.as_uuid())
        .bind(difficulty.code.as_str())
        .bind(difficulty.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(
        &self,
        difficulty_id: &WalkDifficultyId,
    ) -> CatalogResult<Option<WalkDifficulty>> {
        let Some(difficulty) =
            WalkDifficultyRepository::find_by_id(self, difficulty_id).await?
        else {
            return Ok(None);
        };

        let result = sqlx::query("DELETE FROM walk_difficulties WHERE difficulty_id = $1")
            .bind(difficulty_id.as_uuid())
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(Some(difficulty)),
            Err(e) if is_fk_violation(&e) => Err(CatalogError::DifficultyInUse),
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, difficulty_id: &WalkDifficultyId) -> CatalogResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM walk_difficulties WHERE difficulty_id = $1)",
        )
        .bind(difficulty_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct RegionRow {
    region_id: Uuid,
    code: String,
    name: String,
    area: f64,
    lat: f64,
    long: f64,
    population: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl RegionRow {
    fn into_region(self) -> Region {
        Region {
            region_id: RegionId::from_uuid(self.region_id),
            code: RegionCode::from_db(self.code),
            name: Name::from_db(self.name),
            area: self.area,
            lat: self.lat,
            long: self.long,
            population: self.population,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct WalkRow {
    walk_id: Uuid,
    name: String,
    length: f64,
    region_id: Uuid,
    difficulty_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl WalkRow {
    fn into_walk(self) -> Walk {
        Walk {
            walk_id: WalkId::from_uuid(self.walk_id),
            name: Name::from_db(self.name),
            length: WalkLength::from_db(self.length),
            region_id: RegionId::from_uuid(self.region_id),
            difficulty_id: WalkDifficultyId::from_uuid(self.difficulty_id),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct WalkDifficultyRow {
    difficulty_id: Uuid,
    code: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl WalkDifficultyRow {
    fn into_difficulty(self) -> WalkDifficulty {
        WalkDifficulty {
            difficulty_id: WalkDifficultyId::from_uuid(self.difficulty_id),
            code: DifficultyCode::from_db(self.code),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct WalkDetailsRow {
    walk_id: Uuid,
    name: String,
    length: f64,
    region_id: Uuid,
    difficulty_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    region_code: String,
    region_name: String,
    region_area: f64,
    region_lat: f64,
    region_long: f64,
    region_population: i64,
    region_created_at: DateTime<Utc>,
    region_updated_at: DateTime<Utc>,
    difficulty_code: String,
    difficulty_created_at: DateTime<Utc>,
    difficulty_updated_at: DateTime<Utc>,
}

impl WalkDetailsRow {
    fn into_details(self) -> WalkDetails {
        WalkDetails {
            walk: Walk {
                walk_id: WalkId::from_uuid(self.walk_id),
                name: Name::from_db(self.name),
                length: WalkLength::from_db(self.length),
                region_id: RegionId::from_uuid(self.region_id),
                difficulty_id: WalkDifficultyId::from_uuid(self.difficulty_id),
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            region: Region {
                region_id: RegionId::from_uuid(self.region_id),
                code: RegionCode::from_db(self.region_code),
                name: Name::from_db(self.region_name),
                area: self.region_area,
                lat: self.region_lat,
                long: self.region_long,
                population: self.region_population,
                created_at: self.region_created_at,
                updated_at: self.region_updated_at,
            },
            difficulty: WalkDifficulty {
                difficulty_id: WalkDifficultyId::from_uuid(self.difficulty_id),
                code: DifficultyCode::from_db(self.difficulty_code),
                created_at: self.difficulty_created_at,
                updated_at: self.difficulty_updated_at,
            },
        }
    }
}
