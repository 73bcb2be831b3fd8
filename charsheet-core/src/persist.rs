//! Character save files.
//!
//! A save file is seven `<Label>: <value>` lines, always written in the
//! order of [`Field::all`]:
//!
//! ```text
//! Character Name: Aria
//! Class: Warrior
//! Level: 1
//! Strength: 15
//! Magic: 3
//! Health: 130
//! Gold: 100
//! ```
//!
//! Reading is lenient: lines are trimmed, unknown lines are skipped, fields
//! may come in any order and a repeated label overwrites the earlier value.
//! A load only succeeds once all seven fields have been seen.

use crate::character::Character;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Separator between a label and its value.
const SEPARATOR: &str = ": ";

/// Errors from persistence operations.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{field} is not a valid integer: {value:?}")]
    InvalidNumber { field: Field, value: String },

    #[error("Missing field: {0}")]
    MissingField(Field),
}

/// The fields of a save file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Class,
    Level,
    Strength,
    Magic,
    Health,
    Gold,
}

impl Field {
    /// The label written before the separator.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Character Name",
            Field::Class => "Class",
            Field::Level => "Level",
            Field::Strength => "Strength",
            Field::Magic => "Magic",
            Field::Health => "Health",
            Field::Gold => "Gold",
        }
    }

    /// All fields, in write order.
    pub fn all() -> &'static [Field] {
        &[
            Field::Name,
            Field::Class,
            Field::Level,
            Field::Strength,
            Field::Magic,
            Field::Health,
            Field::Gold,
        ]
    }

    pub fn from_label(label: &str) -> Option<Field> {
        Field::all().iter().copied().find(|f| f.label() == label)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Render a character in save-file format.
pub fn format_character(character: &Character) -> String {
    let mut out = String::new();
    for field in Field::all() {
        let value = match field {
            Field::Name => character.name.clone(),
            Field::Class => character.class.clone(),
            Field::Level => character.level.to_string(),
            Field::Strength => character.strength.to_string(),
            Field::Magic => character.magic.to_string(),
            Field::Health => character.health.to_string(),
            Field::Gold => character.gold.to_string(),
        };
        out.push_str(field.label());
        out.push_str(SEPARATOR);
        out.push_str(&value);
        out.push('\n');
    }
    out
}

/// Split a trimmed line into its field and raw value.
///
/// `Label:` with nothing after it is an empty value, since trimming eats
/// the space a writer puts after the colon.
fn split_line(line: &str) -> Option<(Field, &str)> {
    if let Some((label, value)) = line.split_once(SEPARATOR) {
        return Field::from_label(label).map(|field| (field, value));
    }
    let label = line.strip_suffix(':')?;
    Field::from_label(label).map(|field| (field, ""))
}

/// Parse a numeric value, ignoring padding around the digits.
fn parse_number<T: std::str::FromStr>(field: Field, value: &str) -> Result<T, PersistError> {
    value.trim().parse().map_err(|_| PersistError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Fields collected while scanning a save file.
#[derive(Debug, Default)]
struct Scanned {
    name: Option<String>,
    class: Option<String>,
    level: Option<u64>,
    strength: Option<u64>,
    magic: Option<u64>,
    health: Option<u64>,
    gold: Option<u64>,
}

impl Scanned {
    fn set(&mut self, field: Field, value: &str) -> Result<(), PersistError> {
        match field {
            Field::Name => self.name = Some(value.to_string()),
            Field::Class => self.class = Some(value.to_string()),
            Field::Level => self.level = Some(parse_number(field, value)?),
            Field::Strength => self.strength = Some(parse_number(field, value)?),
            Field::Magic => self.magic = Some(parse_number(field, value)?),
            Field::Health => self.health = Some(parse_number(field, value)?),
            Field::Gold => self.gold = Some(parse_number(field, value)?),
        }
        Ok(())
    }

    fn finish(self) -> Result<Character, PersistError> {
        Ok(Character {
            name: self.name.ok_or(PersistError::MissingField(Field::Name))?,
            class: self.class.ok_or(PersistError::MissingField(Field::Class))?,
            level: self.level.ok_or(PersistError::MissingField(Field::Level))?,
            strength: self
                .strength
                .ok_or(PersistError::MissingField(Field::Strength))?,
            magic: self.magic.ok_or(PersistError::MissingField(Field::Magic))?,
            health: self.health.ok_or(PersistError::MissingField(Field::Health))?,
            gold: self.gold.ok_or(PersistError::MissingField(Field::Gold))?,
        })
    }
}

/// Parse save-file text into a character.
pub fn parse_character(content: &str) -> Result<Character, PersistError> {
    let mut scanned = Scanned::default();

    for line in content.lines() {
        if let Some((field, value)) = split_line(line.trim()) {
            scanned.set(field, value)?;
        }
    }

    scanned.finish()
}

impl Character {
    /// Write this character to a save file, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let path = path.as_ref();
        fs::write(path, format_character(self))?;
        tracing::debug!(path = %path.display(), name = %self.name, "saved character");
        Ok(())
    }

    /// Read a character from a save file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let character = parse_character(&content)?;
        tracing::debug!(path = %path.display(), name = %character.name, "loaded character");
        Ok(character)
    }
}

/// Save a character, reporting only whether it worked.
pub fn save_character(character: &Character, path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match character.save(path) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "save failed");
            false
        }
    }
}

/// Load a character, or `None` if the file is absent or incomplete.
pub fn load_character(path: impl AsRef<Path>) -> Option<Character> {
    let path = path.as_ref();
    match Character::load(path) {
        Ok(character) => Some(character),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "load failed");
            None
        }
    }
}
