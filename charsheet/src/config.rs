//! Front-end configuration from the environment and command line.
use std::env;
use std::path::PathBuf;

/// Save file used when nothing else is configured.
pub const DEFAULT_SAVE_PATH: &str = "my_character.txt";

/// Console front-end configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Character name; prompted for when absent.
    pub name: Option<String>,
    /// Class name; prompted for when absent.
    pub class: Option<String>,
    /// Where `#save`/`#load` go without an explicit path.
    pub save_path: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            name: None,
            class: None,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// - `CHARSHEET_SAVE_PATH` - save file path (default: `my_character.txt`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = read_env::<PathBuf>("CHARSHEET_SAVE_PATH") {
            config.save_path = path;
        }

        config
    }

    /// Apply command line flags on top of this configuration.
    ///
    /// Unknown flags are ignored, as is a flag missing its value.
    pub fn with_args(mut self, args: &[String]) -> Self {
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--name" => {
                    if let Some(name) = args.get(i + 1) {
                        self.name = Some(name.clone());
                        i += 1;
                    }
                }
                "--class" => {
                    if let Some(class) = args.get(i + 1) {
                        self.class = Some(class.clone());
                        i += 1;
                    }
                }
                "--save" => {
                    if let Some(path) = args.get(i + 1) {
                        self.save_path = PathBuf::from(path);
                        i += 1;
                    }
                }
                _ => {}
            }
            i += 1;
        }

        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok().filter(|v| !v.is_empty())?.parse().ok()
}
