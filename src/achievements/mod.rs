//! Achievement system module.
//!
//! A fixed catalog of milestones unlocked by the donut count. Unlock state
//! is derived from the count, never stored independently.

pub mod data;
pub mod types;

pub use data::{get_achievement_def, ALL_ACHIEVEMENTS};
pub use types::{AchievementDef, AchievementId};
