//! xpcurve - experience curve and learner progression
//!
//! Turns lifetime XP into a level, a title and a progress bar,
//! and tracks the XP a learner earns from reading and quizzes.

pub mod error;
pub mod progression;
pub mod data;
pub mod save;

// Re-export commonly used types
pub use error::{ConfigError, LevelError, ProfileError};
pub use progression::{Activity, CurveParams, Level, LevelCurve, LevelInfo, LevelTitle, RewardTable};
pub use data::LevelingConfig;
pub use save::LearnerProfile;
