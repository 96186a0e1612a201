//! Save/load system
//!
//! Handles learner profiles on disk.

pub mod profile;

pub use profile::{
    LearnerProfile, AwardRecord, AwardOutcome, HISTORY_LIMIT,
    load_profile, load_or_create, save_profile, profile_path,
};
