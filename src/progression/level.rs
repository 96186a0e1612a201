//! Level newtype
//!
//! Levels start at 1. Zero is rejected at construction so every
//! level-indexed query can assume a valid input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LevelError;

/// A learner level, always `>= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Level(u32);

impl Level {
    /// The starting level
    pub const FIRST: Level = Level(1);

    /// Highest representable level
    pub const MAX: Level = Level(u32::MAX);

    /// Create a level, rejecting 0
    pub fn new(level: u32) -> Result<Self, LevelError> {
        if level == 0 {
            Err(LevelError::InvalidInput(level))
        } else {
            Ok(Level(level))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The following level, saturating at `Level::MAX`
    pub fn next(self) -> Level {
        Level(self.0.saturating_add(1))
    }

    /// Zero-based index into a threshold table
    pub(crate) fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    pub(crate) fn from_index(index: usize) -> Level {
        Level(index as u32 + 1)
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::FIRST
    }
}

impl TryFrom<u32> for Level {
    type Error = LevelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Level::new(value)
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> u32 {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
