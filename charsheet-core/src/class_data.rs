//! Class archetypes and the stat rule table.
//!
//! Every archetype grows each stat linearly: `base + level * per_level`.
//! Class names that match none of the four archetypes fall back to
//! [`ClassArchetype::Unknown`] rather than failing.

use serde::{Deserialize, Serialize};

/// Linear growth of a single stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatGrowth {
    /// Value before any level is applied.
    pub base: u64,
    /// Amount gained per level.
    pub per_level: u64,
}

impl StatGrowth {
    const fn new(base: u64, per_level: u64) -> Self {
        Self { base, per_level }
    }

    /// Value of this stat at the given level.
    ///
    /// Saturates at `u64::MAX` instead of overflowing.
    pub fn at(&self, level: u64) -> u64 {
        self.base.saturating_add(level.saturating_mul(self.per_level))
    }
}

/// Growth formulas for all three derived stats of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassFormula {
    pub strength: StatGrowth,
    pub magic: StatGrowth,
    pub health: StatGrowth,
}

/// Derived stats for a (class, level) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub strength: u64,
    pub magic: u64,
    pub health: u64,
}

const WARRIOR: ClassFormula = ClassFormula {
    strength: StatGrowth::new(12, 3),
    magic: StatGrowth::new(2, 1),
    health: StatGrowth::new(120, 10),
};

const MAGE: ClassFormula = ClassFormula {
    strength: StatGrowth::new(4, 1),
    magic: StatGrowth::new(14, 4),
    health: StatGrowth::new(90, 6),
};

const ROGUE: ClassFormula = ClassFormula {
    strength: StatGrowth::new(8, 2),
    magic: StatGrowth::new(8, 2),
    health: StatGrowth::new(80, 5),
};

const CLERIC: ClassFormula = ClassFormula {
    strength: StatGrowth::new(7, 2),
    magic: StatGrowth::new(12, 3),
    health: StatGrowth::new(110, 8),
};

const FALLBACK: ClassFormula = ClassFormula {
    strength: StatGrowth::new(5, 1),
    magic: StatGrowth::new(5, 1),
    health: StatGrowth::new(80, 5),
};

/// The recognized character archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassArchetype {
    Warrior,
    Mage,
    Rogue,
    Cleric,
    /// Any class name outside the four archetypes.
    Unknown,
}

impl ClassArchetype {
    /// Resolve a class name, ignoring case.
    ///
    /// Whitespace is significant: `" warrior"` is `Unknown`.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "warrior" => ClassArchetype::Warrior,
            "mage" => ClassArchetype::Mage,
            "rogue" => ClassArchetype::Rogue,
            "cleric" => ClassArchetype::Cleric,
            _ => ClassArchetype::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ClassArchetype::Warrior => "Warrior",
            ClassArchetype::Mage => "Mage",
            ClassArchetype::Rogue => "Rogue",
            ClassArchetype::Cleric => "Cleric",
            ClassArchetype::Unknown => "Unknown",
        }
    }

    /// Get a short description of the archetype.
    pub fn description(&self) -> &'static str {
        match self {
            ClassArchetype::Warrior => "High strength, low magic, high health",
            ClassArchetype::Mage => "Low strength, high magic, medium health",
            ClassArchetype::Rogue => "Medium strength, medium magic, low health",
            ClassArchetype::Cleric => "Medium strength, high magic, high health",
            ClassArchetype::Unknown => "Unremarkable in every respect",
        }
    }

    /// Get the growth formulas for this archetype.
    pub fn formula(&self) -> &'static ClassFormula {
        match self {
            ClassArchetype::Warrior => &WARRIOR,
            ClassArchetype::Mage => &MAGE,
            ClassArchetype::Rogue => &ROGUE,
            ClassArchetype::Cleric => &CLERIC,
            ClassArchetype::Unknown => &FALLBACK,
        }
    }

    /// Compute the derived stats at the given level.
    pub fn stats_at(&self, level: u64) -> Stats {
        let formula = self.formula();
        Stats {
            strength: formula.strength.at(level),
            magic: formula.magic.at(level),
            health: formula.health.at(level),
        }
    }

    /// Get the archetypes a player can pick. `Unknown` is not listed.
    pub fn playable() -> &'static [ClassArchetype] {
        &[
            ClassArchetype::Warrior,
            ClassArchetype::Mage,
            ClassArchetype::Rogue,
            ClassArchetype::Cleric,
        ]
    }
}

/// Compute (strength, magic, health) for a class name at a level.
///
/// Unrecognized class names use the fallback row.
pub fn calculate_stats(class: &str, level: u64) -> Stats {
    ClassArchetype::from_name(class).stats_at(level)
}
