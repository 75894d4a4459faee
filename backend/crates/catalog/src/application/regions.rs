//! Region Use Cases
//!
//! CRUD over regions. Validation collects every field error before
//! rejecting a request, so the response lists them all at once.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entity::region::Region;
use crate::domain::repository::RegionRepository;
use crate::domain::value_object::{name::Name, region_code::RegionCode};
use crate::error::{CatalogError, CatalogResult};
use kernel::id::RegionId;

/// Create region input
pub struct CreateRegionInput {
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

/// Update region input (full replace)
pub struct UpdateRegionInput {
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

/// Region use case
pub struct RegionUseCase<R>
where
    R: RegionRepository,
{
    repo: Arc<R>,
}

impl<R> RegionUseCase<R>
where
    R: RegionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// List all regions
    pub async fn list(&self) -> CatalogResult<Vec<Region>> {
        self.repo.list().await
    }

    /// Get a region by id
    pub async fn get(&self, id: Uuid) -> CatalogResult<Region> {
        self.repo
            .find_by_id(&RegionId::from_uuid(id))
            .await?
            .ok_or(CatalogError::RegionNotFound)
    }

    /// Create a new region
    pub async fn create(&self, input: CreateRegionInput) -> CatalogResult<Region> {
        let (code, name) =
            validate_fields(&input.code, &input.name, input.area, input.population)?;

        let region = Region::new(
            code,
            name,
            input.area,
            input.lat,
            input.long,
            input.population,
        );

        self.repo.create(&region).await?;

        tracing::info!(
            region_id = %region.region_id,
            code = %region.code,
            "Region created"
        );

        Ok(region)
    }

    /// Full replace of an existing region
    pub async fn update(&self, id: Uuid, input: UpdateRegionInput) -> CatalogResult<Region> {
        let (code, name) =
            validate_fields(&input.code, &input.name, input.area, input.population)?;

        let mut region = self
            .repo
            .find_by_id(&RegionId::from_uuid(id))
            .await?
            .ok_or(CatalogError::RegionNotFound)?;

        region.update_details(
            code,
            name,
            input.area,
            input.lat,
            input.long,
            input.population,
        );

        self.repo.update(&region).await?;

        tracing::info!(region_id = %region.region_id, "Region updated");

        Ok(region)
    }

    /// Delete a region, returning the removed entity
    pub async fn delete(&self, id: Uuid) -> CatalogResult<Region> {
        let region = self
            .repo
            .delete(&RegionId::from_uuid(id))
            .await?
            .ok_or(CatalogError::RegionNotFound)?;

        tracing::info!(region_id = %region.region_id, "Region deleted");

        Ok(region)
    }
}

/// Validate region fields, collecting all errors
fn validate_fields(
    code: &str,
    name: &str,
    area: f64,
    population: i64,
) -> CatalogResult<(RegionCode, Name)> {
    let mut errors = Vec::new();

    let code = match RegionCode::new(code) {
        Ok(code) => Some(code),
        Err(e) => {
            errors.push(format!("code: {e}"));
            None
        }
    };

    let name = match Name::new(name) {
        Ok(name) => Some(name),
        Err(e) => {
            errors.push(format!("name: {e}"));
            None
        }
    };

    if area <= 0.0 {
        errors.push("area: must be a positive number".to_string());
    }

    if population < 0 {
        errors.push("population: must not be negative".to_string());
    }

    match (code, name) {
        (Some(code), Some(name)) if errors.is_empty() => Ok((code, name)),
        _ => Err(CatalogError::Validation { errors }),
    }
}
