//! Walk Entity
//!
//! A catalogued walking track. Every walk belongs to exactly one
//! region and has exactly one difficulty.

use chrono::{DateTime, Utc};
use kernel::id::{RegionId, WalkDifficultyId, WalkId};

use crate::domain::entity::{region::Region, walk_difficulty::WalkDifficulty};
use crate::domain::value_object::{name::Name, walk_length::WalkLength};

/// Walk entity
#[derive(Debug, Clone)]
pub struct Walk {
    /// Internal UUID identifier
    pub walk_id: WalkId,
    /// Display name
    pub name: Name,
    /// Track length in kilometres
    pub length: WalkLength,
    /// Region this walk belongs to
    pub region_id: RegionId,
    /// Difficulty of this walk
    pub difficulty_id: WalkDifficultyId,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Walk {
    /// Create a new walk with a fresh server-assigned id
    pub fn new(
        name: Name,
        length: WalkLength,
        region_id: RegionId,
        difficulty_id: WalkDifficultyId,
    ) -> Self {
        let now = Utc::now();

        Self {
            walk_id: WalkId::new(),
            name,
            length,
            region_id,
            difficulty_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replace of the mutable fields (PUT semantics)
    pub fn update_details(
        &mut self,
        name: Name,
        length: WalkLength,
        region_id: RegionId,
        difficulty_id: WalkDifficultyId,
    ) {
        self.name = name;
        self.length = length;
        self.region_id = region_id;
        self.difficulty_id = difficulty_id;
        self.updated_at = Utc::now();
    }
}

/// Walk joined with its region and difficulty
///
/// Read operations return this; the FK constraints guarantee both
/// related rows exist.
#[derive(Debug, Clone)]
pub struct WalkDetails {
    pub walk: Walk,
    pub region: Region,
    pub difficulty: WalkDifficulty,
}
