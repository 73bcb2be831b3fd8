//! QA tests for the stat rule table and progression.
//!
//! Run with: `cargo test -p charsheet-core --test qa_class_stats`

use charsheet_core::{calculate_stats, create_character, level_up, ClassArchetype, Stats};

/// (class, strength base/step, magic base/step, health base/step)
const TABLE: &[(&str, u64, u64, u64, u64, u64, u64)] = &[
    ("warrior", 12, 3, 2, 1, 120, 10),
    ("mage", 4, 1, 14, 4, 90, 6),
    ("rogue", 8, 2, 8, 2, 80, 5),
    ("cleric", 7, 2, 12, 3, 110, 8),
    ("necromancer", 5, 1, 5, 1, 80, 5),
];

// =============================================================================
// Rule table
// =============================================================================

#[test]
fn test_table_over_levels() {
    for &(class, sb, ss, mb, ms, hb, hs) in TABLE {
        for level in 1..=20u64 {
            assert_eq!(
                calculate_stats(class, level),
                Stats {
                    strength: sb + level * ss,
                    magic: mb + level * ms,
                    health: hb + level * hs,
                },
                "{class} at level {level}"
            );
        }
    }
}

#[test]
fn test_upper_case_matches_lower_case() {
    for &(class, ..) in TABLE {
        assert_eq!(
            calculate_stats(&class.to_uppercase(), 5),
            calculate_stats(class, 5)
        );
    }
}

#[test]
fn test_bard_gets_fallback() {
    let stats = calculate_stats("bard", 1);
    assert_eq!((stats.strength, stats.magic, stats.health), (6, 6, 85));
}

// =============================================================================
// Progression
// =============================================================================

#[test]
fn test_level_up_equals_direct_creation() {
    let mut mage = create_character("Merlin", "Mage");
    level_up(&mut mage);
    level_up(&mut mage);
    assert_eq!(mage.level, 3);

    level_up(&mut mage);

    assert_eq!(mage.level, 4);
    assert_eq!(mage.stats(), calculate_stats("mage", 4));
    assert_eq!(mage.gold, 100 + 3 * 25);
}

#[test]
fn test_each_level_up_adds_one_level_and_25_gold() {
    for archetype in ClassArchetype::playable() {
        let mut character = create_character("Test", archetype.name());
        for expected_level in 2..=10u64 {
            let gold_before = character.gold;
            level_up(&mut character);
            assert_eq!(character.level, expected_level);
            assert_eq!(character.gold, gold_before + 25);
            assert_eq!(character.stats(), archetype.stats_at(expected_level));
        }
    }
}

#[test]
fn test_starting_gold_is_100() {
    for class in ["Warrior", "Mage", "Rogue", "Cleric", "Paladin", ""] {
        let character = create_character("Test", class);
        assert_eq!(character.gold, 100);
        assert_eq!(character.level, 1);
    }
}
