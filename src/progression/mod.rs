//! Progression systems

pub mod level;
pub mod curve;
mod cache;
pub mod xp;
pub mod titles;
pub mod rewards;
pub mod badges;
pub mod challenges;

pub use level::Level;
pub use curve::{CurveParams, LevelCurve, LevelInfo, BASE_XP, EXPONENT};
pub use titles::LevelTitle;
pub use rewards::{Activity, RewardTable};
pub use badges::{Badge, Milestone, MILESTONES, PERFECTIONIST, milestones_crossed, find_badge};
pub use challenges::{ChallengeKind, DailyChallenge, default_daily_challenges, next_day_start};
