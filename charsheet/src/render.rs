//! Human-readable character sheet.

use charsheet_core::Character;

/// Render the character sheet shown after every change.
pub fn character_sheet(character: &Character) -> String {
    format!(
        "=== CHARACTER SHEET ===\n\
         Name: {}\n\
         Class: {}\n\
         Level: {}\n\
         Strength: {}\n\
         Magic: {}\n\
         Health: {}\n\
         Gold: {}\n",
        character.name,
        character.class,
        character.level,
        character.strength,
        character.magic,
        character.health,
        character.gold,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use charsheet_core::create_character;

    #[test]
    fn test_sheet_layout() {
        let sheet = character_sheet(&create_character("Aria", "Warrior"));
        let lines: Vec<_> = sheet.lines().collect();

        assert_eq!(
            lines,
            vec![
                "=== CHARACTER SHEET ===",
                "Name: Aria",
                "Class: Warrior",
                "Level: 1",
                "Strength: 15",
                "Magic: 3",
                "Health: 130",
                "Gold: 100",
            ]
        );
    }
}
