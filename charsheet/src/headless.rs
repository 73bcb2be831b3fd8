//! Line-oriented console driver.
//!
//! Creates a character from flags or prompts, runs the save / reload /
//! level-up walkthrough, then reads commands until `#quit` or end of input:
//! - `#save [path]`, `#load [path]` - defaults to the configured save file
//! - `#levelup`, `#status`, `#json`, `#help`, `#quit`

use crate::config::CliConfig;
use crate::render::character_sheet;
use charsheet_core::{create_character, level_up, load_character, save_character, Character};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const HELP: &str = "Commands:
  #save [path] - Save the character
  #load [path] - Load a saved character
  #levelup     - Gain a level
  #status      - Show the character sheet
  #json        - Show the character as JSON
  #help        - Show this help
  #quit        - Exit";

/// Run the whole console session against the given input and output.
pub fn run<R: BufRead, W: Write>(config: &CliConfig, input: &mut R, out: &mut W) -> io::Result<()> {
    writeln!(out, "=== CHARACTER CREATOR ===")?;

    let Some(name) = value_or_prompt(config.name.as_deref(), "Enter character name: ", input, out)?
    else {
        return Ok(());
    };
    let Some(class) = value_or_prompt(
        config.class.as_deref(),
        "Enter character class (Warrior/Mage/Rogue/Cleric): ",
        input,
        out,
    )?
    else {
        return Ok(());
    };

    let mut character = create_character(&name, &class);
    write!(out, "{}", character_sheet(&character))?;

    walkthrough(&config.save_path, &mut character, out)?;

    writeln!(out)?;
    writeln!(out, "{HELP}")?;
    out.flush()?;

    command_loop(config, character, input, out)
}

/// Use the configured value, or ask for one. `None` means input ran out.
fn value_or_prompt<R: BufRead, W: Write>(
    value: Option<&str>,
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<String>> {
    if let Some(value) = value {
        return Ok(Some(value.to_string()));
    }

    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Save, reload and level up the reloaded record.
///
/// A failed reload leaves `character` untouched and skips the level-up.
fn walkthrough<W: Write>(path: &Path, character: &mut Character, out: &mut W) -> io::Result<()> {
    if save_character(character, path) {
        writeln!(out, "Character saved to {}", path.display())?;
    } else {
        writeln!(out, "[ERROR] Could not save to {}", path.display())?;
    }

    let Some(loaded) = load_character(path) else {
        writeln!(out, "[ERROR] Could not load {}; skipping level-up", path.display())?;
        return Ok(());
    };

    writeln!(out)?;
    writeln!(out, "Loaded from file:")?;
    write!(out, "{}", character_sheet(&loaded))?;
    *character = loaded;

    writeln!(out)?;
    writeln!(out, "Leveling up...")?;
    level_up(character);
    write!(out, "{}", character_sheet(character))?;
    Ok(())
}

fn command_loop<R: BufRead, W: Write>(
    config: &CliConfig,
    mut character: Character,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(command) = line.strip_prefix('#') else {
            writeln!(out, "[ERROR] Commands start with '#'. Type #help for help.")?;
            continue;
        };

        let (command, arg) = match command.trim().split_once(char::is_whitespace) {
            Some((command, arg)) => (command, Some(arg.trim())),
            None => (command.trim(), None),
        };
        let path = arg
            .filter(|a| !a.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| config.save_path.clone());

        match command {
            "quit" | "exit" => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            "save" => {
                if save_character(&character, &path) {
                    writeln!(out, "[SAVED] Character saved to {}", path.display())?;
                } else {
                    writeln!(out, "[ERROR] Save failed: could not write {}", path.display())?;
                }
            }
            "load" => match load_character(&path) {
                Some(loaded) => {
                    character = loaded;
                    writeln!(out, "[LOADED] Character loaded from {}", path.display())?;
                    write!(out, "{}", character_sheet(&character))?;
                }
                None => {
                    writeln!(
                        out,
                        "[ERROR] Load failed: {} is missing or incomplete",
                        path.display()
                    )?;
                }
            },
            "levelup" => {
                level_up(&mut character);
                writeln!(
                    out,
                    "[LEVEL UP] {} is now level {}",
                    character.name, character.level
                )?;
            }
            "status" => write!(out, "{}", character_sheet(&character))?,
            "json" => match serde_json::to_string_pretty(&character) {
                Ok(json) => writeln!(out, "{json}")?,
                Err(e) => writeln!(out, "[ERROR] {e}")?,
            },
            "help" => writeln!(out, "{HELP}")?,
            _ => writeln!(out, "[ERROR] Unknown command. Type #help for help.")?,
        }
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_script(config: &CliConfig, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run(config, &mut input, &mut out).expect("session should not fail");
        String::from_utf8(out).expect("output is utf-8")
    }

    fn config_in(dir: &TempDir) -> CliConfig {
        CliConfig {
            save_path: dir.path().join("my_character.txt"),
            ..CliConfig::default()
        }
    }

    #[test]
    fn test_prompts_then_walkthrough() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = config_in(&dir);

        let output = run_script(&config, "Aria\nmage\n#quit\n");

        assert!(output.contains("Enter character name: "));
        assert!(output.contains("Enter character class"));
        assert!(output.contains("Character saved to"));
        assert!(output.contains("Loaded from file:"));
        assert!(output.contains("Leveling up..."));
        assert!(output.contains("Level: 2"));
        assert!(output.contains("Gold: 125"));
        assert!(output.ends_with("Goodbye!\n"));

        let saved = load_character(&config.save_path).expect("walkthrough saved a file");
        assert_eq!(saved, create_character("Aria", "mage"));
    }

    #[test]
    fn test_flags_skip_prompts() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = CliConfig {
            name: Some("Thorin".to_string()),
            class: Some("Warrior".to_string()),
            ..config_in(&dir)
        };

        let output = run_script(&config, "");

        assert!(!output.contains("Enter character name"));
        assert!(output.contains("Name: Thorin"));
        assert!(output.contains("Strength: 18"));
    }

    #[test]
    fn test_end_of_input_at_prompt() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let output = run_script(&config_in(&dir), "");

        assert!(output.contains("Enter character name: "));
        assert!(!output.contains("CHARACTER SHEET"));
    }

    #[test]
    fn test_unwritable_save_skips_level_up() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = CliConfig {
            save_path: dir.path().join("missing").join("hero.txt"),
            ..CliConfig::default()
        };

        let output = run_script(&config, "Aria\nrogue\n#status\n");

        assert!(output.contains("[ERROR] Could not save"));
        assert!(output.contains("skipping level-up"));
        assert!(!output.contains("Leveling up..."));
        assert!(!output.contains("Level: 2"));
    }

    #[test]
    fn test_commands() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = config_in(&dir);
        let other = dir.path().join("other.txt");

        let script = format!(
            "Vex\nrogue\nhello\n#levelup\n#save {}\n#json\n#bogus\n#load\n#quit\n#status\n",
            other.display()
        );
        let output = run_script(&config, &script);

        assert!(output.contains("[ERROR] Commands start with '#'"));
        assert!(output.contains("[LEVEL UP] Vex is now level 3"));
        assert!(output.contains("[SAVED] Character saved to"));
        assert!(output.contains("\"gold\": 150"));
        assert!(output.contains("[ERROR] Unknown command"));
        assert!(output.contains("[LOADED] Character loaded from"));

        let saved = load_character(&other).expect("#save wrote the file");
        assert_eq!(saved.level, 3);
        assert_eq!(saved.gold, 150);

        // #load restored the level 1 walkthrough save, and #status after
        // #quit never ran.
        let after_load = output.rsplit("[LOADED]").next().unwrap();
        assert!(after_load.contains("Level: 1"));
        assert_eq!(output.matches("Goodbye!").count(), 1);
        assert!(!after_load.contains("Level: 3"));
    }

    #[test]
    fn test_load_missing_file_keeps_character() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = config_in(&dir);
        let missing = dir.path().join("nope.txt");

        let script = format!("Aria\ncleric\n#load {}\n#status\n", missing.display());
        let output = run_script(&config, &script);

        assert!(output.contains("[ERROR] Load failed"));
        assert!(output.trim_end().ends_with("Gold: 125"));
    }
}
