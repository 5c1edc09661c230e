//! Global famboard configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FamboardError, FamboardResult};
use crate::geometry::TimelineConfig;
use crate::layout::{LayoutOptions, TieBreak};

static DEFAULT_DATA_DIR: &str = "~/famboard";

/// Prefix of environment overrides, e.g. `FAMBOARD_DATA_DIR`.
pub const ENV_PREFIX: &str = "FAMBOARD";

/// Name of the household file inside the data directory.
pub const HOUSEHOLD_FILE: &str = "household.json";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// Global configuration at ~/.config/famboard/config.toml
///
/// `FAMBOARD_DATA_DIR` in the environment overrides `data_dir`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FamboardConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub tie_break: TieBreak,

    #[serde(default)]
    pub timeline: TimelineConfig,
}

impl Default for FamboardConfig {
    fn default() -> Self {
        FamboardConfig {
            data_dir: default_data_dir(),
            tie_break: TieBreak::default(),
            timeline: TimelineConfig::default(),
        }
    }
}

impl FamboardConfig {
    pub fn config_path() -> FamboardResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FamboardError::Config("Could not determine config directory".into()))?
            .join("famboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented default file first if none exists.
    pub fn load() -> FamboardResult<Self> {
        Self::load_at(&Self::config_path()?)
    }

    /// Load from `path`, writing a commented default file first if none exists.
    pub fn load_at(path: &Path) -> FamboardResult<Self> {
        if !path.exists() {
            Self::create_default_config(path)?;
        }

        Self::load_from(path)
    }

    /// Load from `path` with `FAMBOARD_*` overrides from the process environment.
    pub fn load_from(path: &Path) -> FamboardResult<Self> {
        Self::load_from_sources(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load from `path` with overrides taken from `env`.
    pub fn load_from_sources(path: &Path, env: Environment) -> FamboardResult<Self> {
        let config: FamboardConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .map_err(|e| FamboardError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| FamboardError::Config(e.to_string()))?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save to `path` as TOML.
    pub fn save(&self, path: &Path) -> FamboardResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| FamboardError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| FamboardError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> FamboardResult<()> {
        let timeline = TimelineConfig::default();
        let contents = format!(
            "\
# famboard configuration

# Where the household file lives:
# data_dir = \"{}\"

# Which of two events starting at the same time takes the left column:
# \"longest_first\" or \"input_order\"
# tie_break = \"longest_first\"

# [timeline]
# start_hour = {}
# visible_hours = {}
# pixels_per_hour = {:.1}
# column_gap_px = {:.1}
# min_display_minutes = {}
# min_block_height_px = {:.1}
",
            DEFAULT_DATA_DIR,
            timeline.start_hour,
            timeline.visible_hours,
            timeline.pixels_per_hour,
            timeline.column_gap_px,
            timeline.min_display_minutes,
            timeline.min_block_height_px,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                FamboardError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| FamboardError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn household_path(&self) -> PathBuf {
        self.data_path().join(HOUSEHOLD_FILE)
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            tie_break: self.tie_break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Load with a fixed set of environment variables instead of the process environment.
    fn load_with_env(path: &Path, vars: &[(&str, &str)]) -> FamboardResult<FamboardConfig> {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        FamboardConfig::load_from_sources(
            path,
            Environment::with_prefix(ENV_PREFIX).source(Some(source)),
        )
    }

    #[test]
    fn test_default_config_file_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("famboard/config.toml");

        FamboardConfig::create_default_config(&path).unwrap();
        let config = load_with_env(&path, &[]).unwrap();

        assert_eq!(config.tie_break, TieBreak::LongestFirst);
        assert_eq!(config.timeline, TimelineConfig::default());
    }

    #[test]
    fn test_load_at_writes_missing_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        FamboardConfig::load_at(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# famboard configuration"));
    }

    #[test]
    fn test_partial_timeline_section_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "data_dir = \"/srv/family\"\ntie_break = \"input_order\"\n\n[timeline]\nstart_hour = 6\n",
        )
        .unwrap();

        let config = load_with_env(&path, &[]).unwrap();

        assert_eq!(config.household_path(), PathBuf::from("/srv/family/household.json"));
        assert_eq!(config.layout_options().tie_break, TieBreak::InputOrder);
        assert_eq!(config.timeline.start_hour, 6);
        assert_eq!(config.timeline.visible_hours, 15);
    }

    #[test]
    fn test_data_dir_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/srv/family\"\n").unwrap();

        let config = load_with_env(&path, &[("FAMBOARD_DATA_DIR", "/tmp/other-board")]).unwrap();

        assert_eq!(
            config.household_path(),
            PathBuf::from("/tmp/other-board/household.json")
        );
    }

    #[test]
    fn test_unrelated_env_vars_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/srv/family\"\n").unwrap();

        let config = load_with_env(&path, &[("HOME_DATA_DIR", "/elsewhere")]).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/family"));
    }

    #[test]
    fn test_save_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = FamboardConfig {
            data_dir: PathBuf::from("/tmp/board"),
            tie_break: TieBreak::InputOrder,
            ..FamboardConfig::default()
        };

        config.save(&path).unwrap();
        let loaded = load_with_env(&path, &[]).unwrap();

        assert_eq!(loaded.data_dir, PathBuf::from("/tmp/board"));
        assert_eq!(loaded.tie_break, TieBreak::InputOrder);
    }

    #[test]
    fn test_invalid_tie_break_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tie_break = \"shortest_first\"\n").unwrap();

        assert!(matches!(
            load_with_env(&path, &[]),
            Err(FamboardError::Config(_))
        ));
    }
}
