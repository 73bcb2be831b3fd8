//! Character stat rules and save-file codec.
//!
//! This crate provides:
//! - A stat rule table for the Warrior, Mage, Rogue and Cleric archetypes
//! - Character creation and level-up
//! - A plain-text save format with lenient loading
//!
//! # Quick Start
//!
//! ```no_run
//! use charsheet_core::{create_character, level_up, load_character, save_character};
//!
//! let mut hero = create_character("Thorin", "Warrior");
//! if save_character(&hero, "thorin.txt") {
//!     if let Some(loaded) = load_character("thorin.txt") {
//!         assert_eq!(loaded, hero);
//!     }
//! }
//! level_up(&mut hero);
//! assert_eq!(hero.level, 2);
//! ```

pub mod character;
pub mod class_data;
pub mod persist;

// Primary public API
pub use character::{create_character, level_up, Character};
pub use class_data::{calculate_stats, ClassArchetype, Stats};
pub use persist::{load_character, save_character, Field, PersistError};
