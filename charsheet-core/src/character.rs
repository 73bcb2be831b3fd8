//! The character record and its progression rules.

use crate::class_data::{calculate_stats, Stats};
use serde::{Deserialize, Serialize};

/// Level every new character starts at.
pub const STARTING_LEVEL: u64 = 1;

/// Gold every new character starts with, regardless of class.
pub const STARTING_GOLD: u64 = 100;

/// Gold awarded on each level-up.
pub const LEVEL_UP_GOLD: u64 = 25;

/// A single character record.
///
/// `strength`, `magic` and `health` are derived from `class` and `level`;
/// [`Character::new`] and [`Character::level_up`] keep them in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    /// Class name as the player typed it.
    pub class: String,
    pub level: u64,
    pub strength: u64,
    pub magic: u64,
    pub health: u64,
    pub gold: u64,
}

impl Character {
    /// Create a level 1 character with starting gold.
    pub fn new(name: impl Into<String>, class: impl Into<String>) -> Self {
        let name = name.into();
        let class = class.into();
        let stats = calculate_stats(&class, STARTING_LEVEL);

        tracing::debug!(%name, %class, ?stats, "created character");

        Self {
            name,
            class,
            level: STARTING_LEVEL,
            strength: stats.strength,
            magic: stats.magic,
            health: stats.health,
            gold: STARTING_GOLD,
        }
    }

    /// Current derived stats.
    pub fn stats(&self) -> Stats {
        Stats {
            strength: self.strength,
            magic: self.magic,
            health: self.health,
        }
    }

    /// Advance one level, recompute stats and award gold.
    pub fn level_up(&mut self) {
        self.level += 1;
        self.set_stats(calculate_stats(&self.class, self.level));
        self.gold = self.gold.saturating_add(LEVEL_UP_GOLD);

        tracing::debug!(
            name = %self.name,
            level = self.level,
            gold = self.gold,
            "leveled up"
        );
    }

    fn set_stats(&mut self, stats: Stats) {
        self.strength = stats.strength;
        self.magic = stats.magic;
        self.health = stats.health;
    }
}

/// Create a new level 1 character.
pub fn create_character(name: &str, class: &str) -> Character {
    Character::new(name, class)
}

/// Level a character up in place.
pub fn level_up(character: &mut Character) {
    character.level_up();
}
