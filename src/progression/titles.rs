//! Level titles shown next to the learner's level

use std::fmt;

use serde::{Deserialize, Serialize};

use super::level::Level;

/// Rank names, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LevelTitle {
    Beginner,
    Learner,
    Intermediate,
    Advanced,
    Expert,
    Master,
    Legend,
}

impl LevelTitle {
    /// Title band for a level. Upper bounds are exclusive.
    pub fn for_level(level: Level) -> Self {
        match level.get() {
            0..=4 => LevelTitle::Beginner,
            5..=9 => LevelTitle::Learner,
            10..=19 => LevelTitle::Intermediate,
            20..=29 => LevelTitle::Advanced,
            30..=49 => LevelTitle::Expert,
            50..=74 => LevelTitle::Master,
            _ => LevelTitle::Legend,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LevelTitle::Beginner => "Beginner",
            LevelTitle::Learner => "Learner",
            LevelTitle::Intermediate => "Intermediate",
            LevelTitle::Advanced => "Advanced",
            LevelTitle::Expert => "Expert",
            LevelTitle::Master => "Master",
            LevelTitle::Legend => "Legend",
        }
    }
}

impl fmt::Display for LevelTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(level: u32) -> &'static str {
        LevelTitle::for_level(Level::new(level).unwrap()).name()
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(title(1), "Beginner");
        assert_eq!(title(4), "Beginner");
        assert_eq!(title(5), "Learner");
        assert_eq!(title(9), "Learner");
        assert_eq!(title(10), "Intermediate");
        assert_eq!(title(20), "Advanced");
        assert_eq!(title(30), "Expert");
        assert_eq!(title(49), "Expert");
        assert_eq!(title(50), "Master");
        assert_eq!(title(74), "Master");
        assert_eq!(title(75), "Legend");
        assert_eq!(title(u32::MAX), "Legend");
    }

    #[test]
    fn test_titles_never_decrease() {
        let mut prev = LevelTitle::Beginner;
        for level in 1..200 {
            let t = LevelTitle::for_level(Level::new(level).unwrap());
            assert!(t >= prev);
            prev = t;
        }
    }
}
