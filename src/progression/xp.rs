//! Experience and leveling
//!
//! Stateless helpers over the standard curve (100 XP base, exponent 1.5).
//! Use [`LevelCurve`] directly for custom parameters.

use super::curve::LevelCurve;
use super::level::Level;
use super::titles::LevelTitle;

/// XP needed to go from `level` to `level + 1`
pub fn step_cost(level: Level) -> u64 {
    LevelCurve::standard().step_cost(level)
}

/// Total XP needed from level 1 to reach `level`
pub fn threshold_for_level(level: Level) -> u64 {
    LevelCurve::standard().threshold_for_level(level)
}

/// Current level for a lifetime XP total
pub fn level_for_xp(total_xp: u64) -> Level {
    LevelCurve::standard().level_for_xp(total_xp)
}

pub fn progress_in_level(total_xp: u64) -> u64 {
    LevelCurve::standard().progress_in_level(total_xp)
}

/// Width of the current level band (used as the progress denominator)
pub fn xp_needed_for_next_level(total_xp: u64) -> u64 {
    LevelCurve::standard().xp_needed_for_next_level(total_xp)
}

pub fn progress_percentage(total_xp: u64) -> u8 {
    LevelCurve::standard().progress_percentage(total_xp)
}

pub fn format_level_info(total_xp: u64) -> String {
    LevelCurve::standard().format_level_info(total_xp)
}

pub fn did_level_up(old_xp: u64, new_xp: u64) -> bool {
    LevelCurve::standard().did_level_up(old_xp, new_xp)
}

/// Get a title/rank based on level
pub fn title_for_level(level: Level) -> &'static str {
    LevelTitle::for_level(level).name()
}
