//! Learner profile and persistent progression
//!
//! Tracks lifetime XP, earned badges, daily challenges and recent awards.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ProfileError;
use crate::progression::{
    default_daily_challenges, milestones_crossed, next_day_start, Activity, Badge,
    DailyChallenge, Level, LevelCurve, LevelInfo, RewardTable, PERFECTIONIST,
};

/// Current profile version for compatibility
const PROFILE_VERSION: u32 = 1;

/// Number of awards kept in the history
pub const HISTORY_LIMIT: usize = 50;

/// Persistent learner profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerProfile {
    /// Version for compatibility checking
    pub version: u32,
    /// Lifetime XP, never decreases
    pub total_xp: u64,
    /// Earned badge ids
    pub badges: BTreeSet<String>,
    /// Active daily challenges
    #[serde(default)]
    pub challenges: Vec<DailyChallenge>,
    /// Most recent awards, oldest first
    pub history: VecDeque<AwardRecord>,
}

/// One entry in the award history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardRecord {
    pub amount: u64,
    pub reason: String,
}

/// What a single award changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardOutcome {
    /// Total XP added, challenge bonuses included
    pub xp_gained: u64,
    pub old_level: Level,
    pub new_level: Level,
    pub badges_earned: Vec<&'static Badge>,
    /// Ids of challenges this award completed
    pub challenges_completed: Vec<String>,
}

impl AwardOutcome {
    pub fn leveled_up(&self) -> bool {
        self.new_level > self.old_level
    }

    pub fn levels_gained(&self) -> u32 {
        self.new_level.get() - self.old_level.get()
    }

    /// Fold a follow-up award into this one
    fn merge(&mut self, later: AwardOutcome) {
        self.xp_gained = self.xp_gained.saturating_add(later.xp_gained);
        self.new_level = later.new_level;
        self.badges_earned.extend(later.badges_earned);
        self.challenges_completed.extend(later.challenges_completed);
    }
}

impl Default for LearnerProfile {
    fn default() -> Self {
        Self {
            version: PROFILE_VERSION,
            total_xp: 0,
            badges: BTreeSet::new(),
            challenges: Vec::new(),
            history: VecDeque::new(),
        }
    }
}

impl LearnerProfile {
    /// Create a new profile
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self, curve: &LevelCurve) -> Level {
        curve.level_for_xp(self.total_xp)
    }

    pub fn info(&self, curve: &LevelCurve) -> LevelInfo {
        curve.snapshot(self.total_xp)
    }

    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.badges.contains(badge_id)
    }

    /// Drop expired challenges; start a fresh daily set when none are left
    pub fn refresh_challenges(&mut self, now: i64) {
        let before = self.challenges.len();
        self.challenges.retain(|c| !c.is_expired(now));
        if self.challenges.len() < before {
            log::debug!("Removed {} expired challenges", before - self.challenges.len());
        }
        if self.challenges.is_empty() {
            self.challenges = default_daily_challenges(next_day_start(now));
            log::info!("Started {} daily challenges", self.challenges.len());
        }
    }

    /// Award XP for an activity, then advance live challenges.
    ///
    /// `now` is unix milliseconds; challenges expired at `now` do not count.
    pub fn record_activity(
        &mut self,
        curve: &LevelCurve,
        rewards: &RewardTable,
        activity: &Activity,
        now: i64,
    ) -> AwardOutcome {
        let amount = rewards.xp_for(activity);
        let mut outcome = self.award_xp(curve, amount, &activity.describe());

        if let Activity::QuizCompleted { score } = *activity {
            if score >= 100 && self.grant_badge(&PERFECTIONIST) {
                outcome.badges_earned.push(&PERFECTIONIST);
            }
        }

        let mut finished = Vec::new();
        for challenge in self.challenges.iter_mut() {
            if challenge.is_expired(now) {
                continue;
            }
            if challenge.advance(challenge.kind.progress_from(activity)) {
                finished.push((challenge.id.clone(), challenge.title.clone(), challenge.xp_reward));
            }
        }

        for (id, title, reward) in finished {
            log::info!("Challenge completed: {}", title);
            let bonus = self.award_xp(curve, reward, &format!("Completed challenge: {}", title));
            outcome.merge(bonus);
            outcome.challenges_completed.push(id);
        }

        outcome
    }

    /// Add XP, then grant any milestone badges the new level passed
    pub fn award_xp(&mut self, curve: &LevelCurve, amount: u64, reason: &str) -> AwardOutcome {
        let old_level = curve.level_for_xp(self.total_xp);
        self.total_xp = self.total_xp.saturating_add(amount);
        let new_level = curve.level_for_xp(self.total_xp);

        if new_level > old_level {
            log::info!("Level up: {} -> {} ({})", old_level, new_level, reason);
        }

        let mut badges_earned = Vec::new();
        for milestone in milestones_crossed(old_level, new_level) {
            if self.grant_badge(&milestone.badge) {
                badges_earned.push(&milestone.badge);
            }
        }

        self.history.push_back(AwardRecord {
            amount,
            reason: reason.to_string(),
        });
        while self.history.len() > HISTORY_LIMIT {
            self.history.pop_front();
        }

        AwardOutcome {
            xp_gained: amount,
            old_level,
            new_level,
            badges_earned,
            challenges_completed: Vec::new(),
        }
    }

    /// Record a badge. Returns false if it was already earned.
    fn grant_badge(&mut self, badge: &Badge) -> bool {
        if self.badges.insert(badge.id.to_string()) {
            log::info!("Badge earned: {}", badge.name);
            true
        } else {
            false
        }
    }
}

// ============================================================================
// Profile Storage
// ============================================================================

/// Get the default profile file path
pub fn profile_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "newsandlearn", "xpcurve") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("profile.json");
        path
    } else {
        PathBuf::from("./profile.json")
    }
}

/// Load a profile, checking its version
pub fn load_profile(path: &Path) -> Result<LearnerProfile, ProfileError> {
    let data = fs::read_to_string(path)?;
    let profile: LearnerProfile = serde_json::from_str(&data)?;

    if profile.version != PROFILE_VERSION {
        return Err(ProfileError::VersionMismatch {
            expected: PROFILE_VERSION,
            found: profile.version,
        });
    }

    log::info!("Profile loaded from {:?}", path);
    Ok(profile)
}

/// Load the profile at `path` (or create default)
pub fn load_or_create(path: &Path) -> LearnerProfile {
    if path.exists() {
        match load_profile(path) {
            Ok(profile) => return profile,
            Err(e) => log::warn!("Failed to load profile: {}, creating new", e),
        }
    }

    log::info!("Creating new profile");
    LearnerProfile::new()
}

/// Save the profile
pub fn save_profile(profile: &LearnerProfile, path: &Path) -> Result<(), ProfileError> {
    // Ensure directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json)?;

    log::info!("Profile saved to {:?}", path);
    Ok(())
}
