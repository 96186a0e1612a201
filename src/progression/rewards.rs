//! XP rewards for learning activities

use serde::{Deserialize, Serialize};

/// Something the learner did that earns XP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    ArticleRead,
    /// Quiz finished with a percentage score
    QuizCompleted { score: u32 },
    WordsLearned { count: u32 },
    ReadingTime { minutes: u32 },
    /// A challenge carries its own reward
    ChallengeCompleted { reward: u64 },
}

impl Activity {
    /// Short reason recorded in the award history
    pub fn describe(&self) -> String {
        match self {
            Activity::ArticleRead => "Read an article".to_string(),
            Activity::QuizCompleted { score } => format!("Quiz score: {}%", (*score).min(100)),
            Activity::WordsLearned { count } => format!("Learned {} words", count),
            Activity::ReadingTime { minutes } => format!("Read for {} minutes", minutes),
            Activity::ChallengeCompleted { .. } => "Completed challenge".to_string(),
        }
    }
}

/// XP granted per activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardTable {
    /// Flat XP per article
    pub article_read: u64,
    /// XP per quiz percentage point
    pub xp_per_quiz_point: u64,
    pub xp_per_word: u64,
    pub xp_per_reading_minute: u64,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            article_read: 50,
            xp_per_quiz_point: 1,
            xp_per_word: 5,
            xp_per_reading_minute: 2,
        }
    }
}

impl RewardTable {
    pub fn xp_for(&self, activity: &Activity) -> u64 {
        match *activity {
            Activity::ArticleRead => self.article_read,
            Activity::QuizCompleted { score } => {
                self.xp_per_quiz_point.saturating_mul(score.min(100) as u64)
            }
            Activity::WordsLearned { count } => self.xp_per_word.saturating_mul(count as u64),
            Activity::ReadingTime { minutes } => {
                self.xp_per_reading_minute.saturating_mul(minutes as u64)
            }
            Activity::ChallengeCompleted { reward } => reward,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rewards() {
        let table = RewardTable::default();
        assert_eq!(table.xp_for(&Activity::ArticleRead), 50);
        assert_eq!(table.xp_for(&Activity::QuizCompleted { score: 80 }), 80);
        assert_eq!(table.xp_for(&Activity::WordsLearned { count: 4 }), 20);
        assert_eq!(table.xp_for(&Activity::ReadingTime { minutes: 15 }), 30);
        assert_eq!(table.xp_for(&Activity::ChallengeCompleted { reward: 150 }), 150);
    }

    #[test]
    fn test_quiz_score_capped() {
        let table = RewardTable::default();
        assert_eq!(table.xp_for(&Activity::QuizCompleted { score: 250 }), 100);
        assert_eq!(Activity::QuizCompleted { score: 250 }.describe(), "Quiz score: 100%");
    }

    #[test]
    fn test_saturates() {
        let table = RewardTable { xp_per_word: u64::MAX, ..Default::default() };
        assert_eq!(table.xp_for(&Activity::WordsLearned { count: 3 }), u64::MAX);
    }
}
