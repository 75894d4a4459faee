//! Application Layer
//!
//! Use cases over the repository traits.

pub mod difficulties;
pub mod regions;
pub mod walks;

// Re-exports
pub use difficulties::{
    CreateWalkDifficultyInput, UpdateWalkDifficultyInput, WalkDifficultyUseCase,
};
pub use regions::{CreateRegionInput, RegionUseCase, UpdateRegionInput};
pub use walks::{CreateWalkInput, UpdateWalkInput, WalkUseCase};
