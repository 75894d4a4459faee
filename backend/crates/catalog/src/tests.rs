//! Unit tests for the catalog crate
//!
//! Use-case flows run against an in-memory repository so they cover
//! the same paths the PostgreSQL implementation serves, minus the SQL.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::application::{
    CreateRegionInput, CreateWalkDifficultyInput, CreateWalkInput, RegionUseCase,
    UpdateRegionInput, UpdateWalkDifficultyInput, UpdateWalkInput, WalkDifficultyUseCase,
    WalkUseCase,
};
use crate::domain::entity::{
    region::Region,
    walk::{Walk, WalkDetails},
    walk_difficulty::WalkDifficulty,
};
use crate::domain::repository::{RegionRepository, WalkDifficultyRepository, WalkRepository};
use crate::error::{CatalogError, CatalogResult};
use kernel::id::{RegionId, WalkDifficultyId, WalkId};

// ============================================================================
// In-memory repository
// ============================================================================

/// HashMap-backed repository mirroring the FK behavior of the
/// PostgreSQL implementation.
#[derive(Clone, Default)]
struct MemCatalog {
    regions: Arc<Mutex<HashMap<Uuid, Region>>>,
    walks: Arc<Mutex<HashMap<Uuid, Walk>>>,
    difficulties: Arc<Mutex<HashMap<Uuid, WalkDifficulty>>>,
}

impl MemCatalog {
    fn details_for(&self, walk: Walk) -> CatalogResult<WalkDetails> {
        let region = self
            .regions
            .lock()
            .unwrap()
            .get(walk.region_id.as_uuid())
            .cloned()
            .ok_or_else(|| CatalogError::Internal("dangling region reference".into()))?;
        let difficulty = self
            .difficulties
            .lock()
            .unwrap()
            .get(walk.difficulty_id.as_uuid())
            .cloned()
            .ok_or_else(|| CatalogError::Internal("dangling difficulty reference".into()))?;

        Ok(WalkDetails {
            walk,
            region,
            difficulty,
        })
    }
}

impl RegionRepository for MemCatalog {
    async fn list(&self) -> CatalogResult<Vec<Region>> {
        let mut regions: Vec<Region> = self.regions.lock().unwrap().values().cloned().collect();
        regions.sort_by(|a, b| a.code.as_str().cmp(b.code.as_str()));
        Ok(regions)
    }

    async fn find_by_id(&self, region_id: &RegionId) -> CatalogResult<Option<Region>> {
        Ok(self
            .regions
            .lock()
            .unwrap()
            .get(region_id.as_uuid())
            .cloned())
    }

    async fn create(&self, region: &Region) -> CatalogResult<()> {
        self.regions
            .lock()
            .unwrap()
            .insert(region.region_id.into_uuid(), region.clone());
        Ok(())
    }

    async fn update(&self, region: &Region) -> CatalogResult<()> {
        self.regions
            .lock()
            .unwrap()
            .insert(region.region_id.into_uuid(), region.clone());
        Ok(())
    }

    async fn delete(&self, region_id: &RegionId) -> CatalogResult<Option<Region>> {
        let referenced = self
            .walks
            .lock()
            .unwrap()
            .values()
            .any(|w| w.region_id == *region_id);
        if referenced {
            return Err(CatalogError::RegionInUse);
        }
        Ok(self.regions.lock().unwrap().remove(region_id.as_uuid()))
    }

    async fn exists(&self, region_id: &RegionId) -> CatalogResult<bool> {
        Ok(self
            .regions
            .lock()
            .unwrap()
            .contains_key(region_id.as_uuid()))
    }
}

impl WalkRepository for MemCatalog {
    async fn list(&self) -> CatalogResult<Vec<WalkDetails>> {
        let walks: Vec<Walk> = self.walks.lock().unwrap().values().cloned().collect();
        let mut details: Vec<WalkDetails> = walks
            .into_iter()
            .map(|w| self.details_for(w))
            .collect::<CatalogResult<_>>()?;
        details.sort_by(|a, b| a.walk.name.as_str().cmp(b.walk.name.as_str()));
        Ok(details)
    }

    async fn find_by_id(&self, walk_id: &WalkId) -> CatalogResult<Option<WalkDetails>> {
        let walk = self.walks.lock().unwrap().get(walk_id.as_uuid()).cloned();
        walk.map(|w| self.details_for(w)).transpose()
    }

    async fn create(&self, walk: &Walk) -> CatalogResult<()> {
        self.walks
            .lock()
            .unwrap()
            .insert(walk.walk_id.into_uuid(), walk.clone());
        Ok(())
    }

    async fn update(&self, walk: &Walk) -> CatalogResult<()> {
        self.walks
            .lock()
            .unwrap()
            .insert(walk.walk_id.into_uuid(), walk.clone());
        Ok(())
    }

    async fn delete(&self, walk_id: &WalkId) -> CatalogResult<Option<Walk>> {
        Ok(self.walks.lock().unwrap().remove(walk_id.as_uuid()))
    }
}

impl WalkDifficultyRepository for MemCatalog {
    async fn list(&self) -> CatalogResult<Vec<WalkDifficulty>> {
        let mut difficulties: Vec<WalkDifficulty> = self
            .difficulties
            .lock()
            .unwrap()
            .values()
            .cloned()
            .collect();
        difficulties.sort_by(|a, b| a.code.as_str().cmp(b.code.as_str()));
        Ok(difficulties)
    }

    async fn find_by_id(
        &self,
        difficulty_id: &WalkDifficultyId,
    ) -> CatalogResult<Option<WalkDifficulty>> {
        Ok(self
            .difficulties
            .lock()
            .unwrap()
            .get(difficulty_id.as_uuid())
            .cloned())
    }

    async fn create(&self, difficulty: &WalkDifficulty) -> CatalogResult<()> {
        self.difficulties
            .lock()
            .unwrap()
            .insert(difficulty.difficulty_id.into_uuid(), difficulty.clone());
        Ok(())
    }

    async fn update(&self, difficulty: &WalkDifficulty) -> CatalogResult<()> {
        self.difficulties
            .lock()
            .unwrap()
            .insert(difficulty.difficulty_id.into_uuid(), difficulty.clone());
        Ok(())
    }

    async fn delete(
        &self,
        difficulty_id: &WalkDifficultyId,
    ) -> CatalogResult<Option<WalkDifficulty>> {
        let referenced = self
            .walks
            .lock()
            .unwrap()
            .values()
            .any(|w| w.difficulty_id == *difficulty_id);
        if referenced {
            return Err(CatalogError::DifficultyInUse);
        }
        Ok(self
            .difficulties
            .lock()
            .unwrap()
            .remove(difficulty_id.as_uuid()))
    }

    async fn exists(&self, difficulty_id: &WalkDifficultyId) -> CatalogResult<bool> {
        Ok(self
            .difficulties
            .lock()
            .unwrap()
            .contains_key(difficulty_id.as_uuid()))
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn region_input(code: &str, name: &str) -> CreateRegionInput {
    CreateRegionInput {
        code: code.to_string(),
        name: name.to_string(),
        area: 4941.0,
        lat: -36.85,
        long: 174.76,
        population: 1_700_000,
    }
}

fn region_use_case(repo: &Arc<MemCatalog>) -> RegionUseCase<MemCatalog> {
    RegionUseCase::new(repo.clone())
}

fn walk_use_case(repo: &Arc<MemCatalog>) -> WalkUseCase<MemCatalog, MemCatalog, MemCatalog> {
    WalkUseCase::new(repo.clone(), repo.clone(), repo.clone())
}

fn difficulty_use_case(repo: &Arc<MemCatalog>) -> WalkDifficultyUseCase<MemCatalog> {
    WalkDifficultyUseCase::new(repo.clone())
}

/// Seed one region and one difficulty, the minimum a walk needs
async fn seed_refs(repo: &Arc<MemCatalog>) -> (Region, WalkDifficulty) {
    let region = region_use_case(repo)
        .create(region_input("AKL", "Auckland"))
        .await
        .unwrap();
    let difficulty = difficulty_use_case(repo)
        .create(CreateWalkDifficultyInput {
            code: "Easy".to_string(),
        })
        .await
        .unwrap();
    (region, difficulty)
}

// ============================================================================
// Region use case
// ============================================================================

mod region_use_case_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get_round_trip() {
        let repo = Arc::new(MemCatalog::default());
        let use_case = region_use_case(&repo);

        let created = use_case
            .create(region_input("  akl  ", "Auckland"))
            .await
            .unwrap();
        assert_eq!(created.code.as_str(), "AKL");
        assert_eq!(created.name.as_str(), "Auckland");

        let fetched = use_case.get(created.region_id.into_uuid()).await.unwrap();
        assert_eq!(fetched.region_id, created.region_id);
        assert_eq!(fetched.code, created.code);
        assert_eq!(fetched.population, 1_700_000);
    }

    #[tokio::test]
    async fn test_list_sorted_by_code() {
        let repo = Arc::new(MemCatalog::default());
        let use_case = region_use_case(&repo);

        use_case
            .create(region_input("WLG", "Wellington"))
            .await
            .unwrap();
        use_case
            .create(region_input("AKL", "Auckland"))
            .await
            .unwrap();

        let regions = use_case.list().await.unwrap();
        let codes: Vec<&str> = regions.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["AKL", "WLG"]);
    }

    #[tokio::test]
    async fn test_create_collects_all_validation_errors() {
        let repo = Arc::new(MemCatalog::default());
        let use_case = region_use_case(&repo);

        let input = CreateRegionInput {
            code: "".to_string(),
            name: "   ".to_string(),
            area: -10.0,
            lat: 0.0,
            long: 0.0,
            population: -5,
        };

        let err = use_case.create(input).await.unwrap_err();
        match err {
            CatalogError::Validation { errors } => {
                assert_eq!(errors.len(), 4);
                assert!(errors.iter().any(|e| e.starts_with("code:")));
                assert!(errors.iter().any(|e| e.starts_with("name:")));
                assert!(errors.iter().any(|e| e.starts_with("area:")));
                assert!(errors.iter().any(|e| e.starts_with("population:")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let repo = Arc::new(MemCatalog::default());
        let use_case = region_use_case(&repo);

        let err = use_case.get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, CatalogError::RegionNotFound));
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let repo = Arc::new(MemCatalog::default());
        let use_case = region_use_case(&repo);

        let created = use_case
            .create(region_input("AKL", "Auckland"))
            .await
            .unwrap();

        let updated = use_case
            .update(
                created.region_id.into_uuid(),
                UpdateRegionInput {
                    code: "ntl".to_string(),
                    name: "Northland".to_string(),
                    area: 13789.0,
                    lat: -35.58,
                    long: 173.96,
                    population: 194_600,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.region_id, created.region_id);
        assert_eq!(updated.code.as_str(), "NTL");
        assert_eq!(updated.name.as_str(), "Northland");
        assert_eq!(updated.population, 194_600);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let repo = Arc::new(MemCatalog::default());
        let use_case = region_use_case(&repo);

        let err = use_case
            .update(
                Uuid::new_v4(),
                UpdateRegionInput {
                    code: "NTL".to_string(),
                    name: "Northland".to_string(),
                    area: 13789.0,
                    lat: -35.58,
                    long: 173.96,
                    population: 194_600,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::RegionNotFound));
    }

    #[tokio::test]
    async fn test_delete_returns_removed_entity() {
        let repo = Arc::new(MemCatalog::default());
        let use_case = region_use_case(&repo);

        let created = use_case
            .create(region_input("AKL", "Auckland"))
            .await
            .unwrap();

        let deleted = use_case.delete(created.region_id.into_uuid()).await.unwrap();
        assert_eq!(deleted.region_id, created.region_id);

        let err = use_case.get(created.region_id.into_uuid()).await.unwrap_err();
        assert!(matches!(err, CatalogError::RegionNotFound));
    }

    #[tokio::test]
    async fn test_delete_referenced_region_conflicts() {
        let repo = Arc::new(MemCatalog::default());
        let (region, difficulty) = seed_refs(&repo).await;

        walk_use_case(&repo)
            .create(CreateWalkInput {
                name: "Coast to Coast Walkway".to_string(),
                length: 16.0,
                region_id: region.region_id.into_uuid(),
                difficulty_id: difficulty.difficulty_id.into_uuid(),
            })
            .await
            .unwrap();

        let err = region_use_case(&repo)
            .delete(region.region_id.into_uuid())
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::RegionInUse));
    }
}

// ============================================================================
// Walk use case
// ============================================================================

mod walk_use_case_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_get_with_relations() {
        let repo = Arc::new(MemCatalog::default());
        let (region, difficulty) = seed_refs(&repo).await;
        let use_case = walk_use_case(&repo);

        let created = use_case
            .create(CreateWalkInput {
                name: "  Roys Peak Track ".to_string(),
                length: 16.0,
                region_id: region.region_id.into_uuid(),
                difficulty_id: difficulty.difficulty_id.into_uuid(),
            })
            .await
            .unwrap();
        assert_eq!(created.name.as_str(), "Roys Peak Track");

        let details = use_case.get(created.walk_id.into_uuid()).await.unwrap();
        assert_eq!(details.walk.walk_id, created.walk_id);
        assert_eq!(details.region.code.as_str(), "AKL");
        assert_eq!(details.difficulty.code.as_str(), "Easy");
    }

    #[tokio::test]
    async fn test_create_with_unknown_references_is_validation_error() {
        let repo = Arc::new(MemCatalog::default());
        let use_case = walk_use_case(&repo);

        let err = use_case
            .create(CreateWalkInput {
                name: "Roys Peak Track".to_string(),
                length: 16.0,
                region_id: Uuid::new_v4(),
                difficulty_id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();

        match err {
            CatalogError::Validation { errors } => {
                assert_eq!(errors.len(), 2);
                assert!(errors.iter().any(|e| e.starts_with("regionId:")));
                assert!(errors.iter().any(|e| e.starts_with("walkDifficultyId:")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_with_invalid_fields_is_validation_error() {
        let repo = Arc::new(MemCatalog::default());
        let (region, difficulty) = seed_refs(&repo).await;
        let use_case = walk_use_case(&repo);

        let err = use_case
            .create(CreateWalkInput {
                name: " ".to_string(),
                length: 0.0,
                region_id: region.region_id.into_uuid(),
                difficulty_id: difficulty.difficulty_id.into_uuid(),
            })
            .await
            .unwrap_err();

        match err {
            CatalogError::Validation { errors } => {
                assert_eq!(errors.len(), 2);
                assert!(errors.iter().any(|e| e.starts_with("name:")));
                assert!(errors.iter().any(|e| e.starts_with("length:")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_moves_walk_to_another_region() {
        let repo = Arc::new(MemCatalog::default());
        let (region, difficulty) = seed_refs(&repo).await;
        let other_region = region_use_case(&repo)
            .create(region_input("WLG", "Wellington"))
            .await
            .unwrap();
        let use_case = walk_use_case(&repo);

        let created = use_case
            .create(CreateWalkInput {
                name: "City Loop".to_string(),
                length: 5.0,
                region_id: region.region_id.into_uuid(),
                difficulty_id: difficulty.difficulty_id.into_uuid(),
            })
            .await
            .unwrap();

        let updated = use_case
            .update(
                created.walk_id.into_uuid(),
                UpdateWalkInput {
                    name: "City Loop".to_string(),
                    length: 5.5,
                    region_id: other_region.region_id.into_uuid(),
                    difficulty_id: difficulty.difficulty_id.into_uuid(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.length.km(), 5.5);

        let details = use_case.get(created.walk_id.into_uuid()).await.unwrap();
        assert_eq!(details.region.code.as_str(), "WLG");
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let repo = Arc::new(MemCatalog::default());
        let (region, difficulty) = seed_refs(&repo).await;

        let err = walk_use_case(&repo)
            .update(
                Uuid::new_v4(),
                UpdateWalkInput {
                    name: "City Loop".to_string(),
                    length: 5.0,
                    region_id: region.region_id.into_uuid(),
                    difficulty_id: difficulty.difficulty_id.into_uuid(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::WalkNotFound));
    }

    #[tokio::test]
    async fn test_delete_returns_removed_entity() {
        let repo = Arc::new(MemCatalog::default());
        let (region, difficulty) = seed_refs(&repo).await;
        let use_case = walk_use_case(&repo);

        let created = use_case
            .create(CreateWalkInput {
                name: "City Loop".to_string(),
                length: 5.0,
                region_id: region.region_id.into_uuid(),
                difficulty_id: difficulty.difficulty_id.into_uuid(),
            })
            .await
            .unwrap();

        let deleted = use_case.delete(created.walk_id.into_uuid()).await.unwrap();
        assert_eq!(deleted.walk_id, created.walk_id);

        let err = use_case.get(created.walk_id.into_uuid()).await.unwrap_err();
        assert!(matches!(err, CatalogError::WalkNotFound));
    }

    #[tokio::test]
    async fn test_list_sorted_by_name() {
        let repo = Arc::new(MemCatalog::default());
        let (region, difficulty) = seed_refs(&repo).await;
        let use_case = walk_use_case(&repo);

        for name in ["Zigzag Track", "Arch Hill Loop"] {
            use_case
                .create(CreateWalkInput {
                    name: name.to_string(),
                    length: 3.0,
                    region_id: region.region_id.into_uuid(),
                    difficulty_id: difficulty.difficulty_id.into_uuid(),
                })
                .await
                .unwrap();
        }

        let walks = use_case.list().await.unwrap();
        let names: Vec<&str> = walks.iter().map(|w| w.walk.name.as_str()).collect();
        assert_eq!(names, vec!["Arch Hill Loop", "Zigzag Track"]);
    }
}

// ============================================================================
// Walk difficulty use case
// ============================================================================

mod difficulty_use_case_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_trims_code() {
        let repo = Arc::new(MemCatalog::default());
        let use_case = difficulty_use_case(&repo);

        let created = use_case
            .create(CreateWalkDifficultyInput {
                code: "  Medium  ".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.code.as_str(), "Medium");

        let fetched = use_case
            .get(created.difficulty_id.into_uuid())
            .await
            .unwrap();
        assert_eq!(fetched.difficulty_id, created.difficulty_id);
    }

    #[tokio::test]
    async fn test_create_blank_code_fails() {
        let repo = Arc::new(MemCatalog::default());
        let use_case = difficulty_use_case(&repo);

        let err = use_case
            .create(CreateWalkDifficultyInput {
                code: "   ".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_replaces_code() {
        let repo = Arc::new(MemCatalog::default());
        let use_case = difficulty_use_case(&repo);

        let created = use_case
            .create(CreateWalkDifficultyInput {
                code: "Easy".to_string(),
            })
            .await
            .unwrap();

        let updated = use_case
            .update(
                created.difficulty_id.into_uuid(),
                UpdateWalkDifficultyInput {
                    code: "Hard".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.code.as_str(), "Hard");
        assert_eq!(updated.difficulty_id, created.difficulty_id);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let repo = Arc::new(MemCatalog::default());
        let use_case = difficulty_use_case(&repo);

        assert!(matches!(
            use_case.get(Uuid::new_v4()).await.unwrap_err(),
            CatalogError::DifficultyNotFound
        ));
        assert!(matches!(
            use_case.delete(Uuid::new_v4()).await.unwrap_err(),
            CatalogError::DifficultyNotFound
        ));
    }

    #[tokio::test]
    async fn test_delete_referenced_difficulty_conflicts() {
        let repo = Arc::new(MemCatalog::default());
        let (region, difficulty) = seed_refs(&repo).await;

        walk_use_case(&repo)
            .create(CreateWalkInput {
                name: "City Loop".to_string(),
                length: 5.0,
                region_id: region.region_id.into_uuid(),
                difficulty_id: difficulty.difficulty_id.into_uuid(),
            })
            .await
            .unwrap();

        let err = difficulty_use_case(&repo)
            .delete(difficulty.difficulty_id.into_uuid())
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::DifficultyInUse));
    }
}

// ============================================================================
// DTO mapping
// ============================================================================

mod dto_mapping_tests {
    use super::*;
    use crate::presentation::dto::{RegionDto, WalkDto};

    #[tokio::test]
    async fn test_region_round_trips_through_dto() {
        let repo = Arc::new(MemCatalog::default());
        let region = region_use_case(&repo)
            .create(region_input("AKL", "Auckland"))
            .await
            .unwrap();

        let dto = RegionDto::from(region.clone());
        assert_eq!(dto.id, region.region_id.into_uuid());
        assert_eq!(dto.code, "AKL");
        assert_eq!(dto.name, "Auckland");
        assert_eq!(dto.area, 4941.0);
        assert_eq!(dto.population, 1_700_000);
    }

    #[tokio::test]
    async fn test_walk_details_dto_embeds_relations() {
        let repo = Arc::new(MemCatalog::default());
        let (region, difficulty) = seed_refs(&repo).await;
        let use_case = walk_use_case(&repo);

        let created = use_case
            .create(CreateWalkInput {
                name: "City Loop".to_string(),
                length: 5.0,
                region_id: region.region_id.into_uuid(),
                difficulty_id: difficulty.difficulty_id.into_uuid(),
            })
            .await
            .unwrap();

        // Bare walk: no embedded relations
        let bare = WalkDto::from(created.clone());
        assert!(bare.region.is_none());
        assert!(bare.walk_difficulty.is_none());

        // Joined read: both embedded
        let details = use_case.get(created.walk_id.into_uuid()).await.unwrap();
        let dto = WalkDto::from(details);
        assert_eq!(dto.region.as_ref().map(|r| r.code.as_str()), Some("AKL"));
        assert_eq!(
            dto.walk_difficulty.as_ref().map(|d| d.code.as_str()),
            Some("Easy")
        );
        assert_eq!(dto.region_id, region.region_id.into_uuid());
    }

    #[tokio::test]
    async fn test_walk_dto_serializes_camel_case() {
        let repo = Arc::new(MemCatalog::default());
        let (region, difficulty) = seed_refs(&repo).await;

        let walk = walk_use_case(&repo)
            .create(CreateWalkInput {
                name: "City Loop".to_string(),
                length: 5.0,
                region_id: region.region_id.into_uuid(),
                difficulty_id: difficulty.difficulty_id.into_uuid(),
            })
            .await
            .unwrap();

        let value = serde_json::to_value(WalkDto::from(walk)).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("regionId"));
        assert!(obj.contains_key("walkDifficultyId"));
        assert!(obj.contains_key("createdAt"));
        assert!(!obj.contains_key("region_id"));
    }
}
