//! Daily challenges
//!
//! Progress counters that recorded activities advance. A challenge pays
//! its bonus XP once, when it completes, and stops counting after its
//! expiry time. Times are unix milliseconds supplied by the caller.

use serde::{Deserialize, Serialize};

use super::rewards::Activity;

/// Quiz score that counts toward a quiz challenge
pub const QUIZ_PASS_SCORE: u32 = 80;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// What a challenge counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeKind {
    ReadArticles,
    /// Quizzes scored at or above `QUIZ_PASS_SCORE`
    QuizScore,
    LearnWords,
    ReadingTime,
}

impl ChallengeKind {
    /// How far an activity moves a challenge of this kind
    pub fn progress_from(&self, activity: &Activity) -> u32 {
        match (self, activity) {
            (ChallengeKind::ReadArticles, Activity::ArticleRead) => 1,
            (ChallengeKind::QuizScore, Activity::QuizCompleted { score }) if *score >= QUIZ_PASS_SCORE => 1,
            (ChallengeKind::LearnWords, Activity::WordsLearned { count }) => *count,
            (ChallengeKind::ReadingTime, Activity::ReadingTime { minutes }) => *minutes,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyChallenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: ChallengeKind,
    pub target: u32,
    pub current: u32,
    pub xp_reward: u64,
    /// Unix milliseconds after which the challenge no longer counts
    pub expires_at: i64,
    pub completed: bool,
}

impl DailyChallenge {
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        kind: ChallengeKind,
        target: u32,
        xp_reward: u64,
        expires_at: i64,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            kind,
            target,
            current: 0,
            xp_reward,
            expires_at,
            completed: false,
        }
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at < now
    }

    /// Add progress. Returns true only on the call that completes it.
    pub fn advance(&mut self, amount: u32) -> bool {
        if self.completed || amount == 0 {
            return false;
        }
        self.current = self.current.saturating_add(amount);
        if self.current >= self.target {
            self.completed = true;
            return true;
        }
        false
    }

    /// Completion, 0..=100
    pub fn progress_percentage(&self) -> u8 {
        if self.target == 0 {
            return 100;
        }
        ((self.current as u64 * 100) / self.target as u64).min(100) as u8
    }
}

/// Start of the next UTC day after `now`
pub fn next_day_start(now: i64) -> i64 {
    (now.div_euclid(DAY_MS) + 1) * DAY_MS
}

/// The standard set of three daily challenges
pub fn default_daily_challenges(expires_at: i64) -> Vec<DailyChallenge> {
    vec![
        DailyChallenge::new(
            "daily_read_3",
            "Daily Reader",
            "Read 3 articles today",
            ChallengeKind::ReadArticles,
            3,
            100,
            expires_at,
        ),
        DailyChallenge::new(
            "daily_quiz_80",
            "Quiz Master",
            "Score 80% or higher on a quiz",
            ChallengeKind::QuizScore,
            1,
            150,
            expires_at,
        ),
        DailyChallenge::new(
            "daily_vocab_20",
            "Word Collector",
            "Learn 20 new words today",
            ChallengeKind::LearnWords,
            20,
            120,
            expires_at,
        ),
    ]
}
