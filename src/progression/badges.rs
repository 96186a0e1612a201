//! Badges
//!
//! Level milestones plus badges granted for single activities.

use super::level::Level;

/// An earnable badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// A badge granted on reaching a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub level: u32,
    pub badge: Badge,
}

/// All level milestones, ascending
pub const MILESTONES: &[Milestone] = &[
    Milestone {
        level: 10,
        badge: Badge {
            id: "level_10",
            name: "Rising Star",
            description: "Reached Level 10",
        },
    },
    Milestone {
        level: 25,
        badge: Badge {
            id: "level_25",
            name: "Expert Reader",
            description: "Reached Level 25",
        },
    },
    Milestone {
        level: 50,
        badge: Badge {
            id: "level_50",
            name: "Master Scholar",
            description: "Reached Level 50",
        },
    },
];

/// Granted for a perfect quiz score
pub static PERFECTIONIST: Badge = Badge {
    id: "perfectionist",
    name: "Perfectionist",
    description: "Scored 100% on a quiz",
};

/// Milestones passed when moving from `old` to `new` (exclusive of `old`)
pub fn milestones_crossed(old: Level, new: Level) -> impl Iterator<Item = &'static Milestone> {
    MILESTONES
        .iter()
        .filter(move |m| m.level > old.get() && m.level <= new.get())
}

/// Look up any badge by id
pub fn find_badge(id: &str) -> Option<&'static Badge> {
    MILESTONES
        .iter()
        .map(|m| &m.badge)
        .chain(std::iter::once(&PERFECTIONIST))
        .find(|b| b.id == id)
}
