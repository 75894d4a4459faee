//! Walk Difficulty Entity

use chrono::{DateTime, Utc};
use kernel::id::WalkDifficultyId;

use crate::domain::value_object::difficulty_code::DifficultyCode;

/// Walk difficulty entity
///
/// A label walks reference (e.g. `Easy`, `Medium`, `Hard`).
#[derive(Debug, Clone)]
pub struct WalkDifficulty {
    /// Internal UUID identifier
    pub difficulty_id: WalkDifficultyId,
    /// Difficulty label
    pub code: DifficultyCode,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl WalkDifficulty {
    /// Create a new difficulty with a fresh server-assigned id
    pub fn new(code: DifficultyCode) -> Self {
        let now = Utc::now();

        Self {
            difficulty_id: WalkDifficultyId::new(),
            code,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the code (PUT semantics)
    pub fn set_code(&mut self, code: DifficultyCode) {
        self.code = code;
        self.updated_at = Utc::now();
    }
}
