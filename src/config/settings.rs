//! Configuration settings for the cellular automaton simulator

use crate::game_of_life::{Layout, RuleFamily};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub display: DisplayConfig,
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

/// Screen geometry the grid is derived from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub screen_width: usize,
    pub screen_height: usize,
    pub cell_size: usize,
    pub status_bar_height: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub rule_family: RuleFamily,
    pub initial_density: f64,
    /// Fixed RNG seed; a random one is drawn when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Generations a headless run advances for
    pub generations: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_frames: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Visual,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display: DisplayConfig {
                screen_width: 1920,
                screen_height: 1040,
                cell_size: 6,
                status_bar_height: 40,
            },
            simulation: SimulationConfig {
                rule_family: RuleFamily::Conway,
                initial_density: 0.2,
                seed: None,
                generations: 200,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                show_frames: false,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.display.cell_size == 0 {
            anyhow::bail!("Cell size must be positive");
        }

        if self.display.status_bar_height >= self.display.screen_height {
            anyhow::bail!(
                "Status bar height {} leaves no room on a screen {} high",
                self.display.status_bar_height,
                self.display.screen_height
            );
        }

        let density = self.simulation.initial_density;
        if !(0.0..=1.0).contains(&density) {
            anyhow::bail!("Initial density must lie in 0.0..=1.0, got {}", density);
        }

        self.layout().context("Display settings do not fit a single cell")?;

        Ok(())
    }

    /// Grid geometry described by the display section
    pub fn layout(&self) -> Result<Layout> {
        Ok(Layout::new(
            self.display.screen_width,
            self.display.screen_height,
            self.display.cell_size,
            self.display.status_bar_height,
        )?)
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(family) = cli_overrides.rule_family {
            self.simulation.rule_family = family;
        }
        if let Some(density) = cli_overrides.density {
            self.simulation.initial_density = density;
        }
        if let Some(seed) = cli_overrides.seed {
            self.simulation.seed = Some(seed);
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(width) = cli_overrides.screen_width {
            self.display.screen_width = width;
        }
        if let Some(height) = cli_overrides.screen_height {
            self.display.screen_height = height;
        }
        if let Some(cell_size) = cli_overrides.cell_size {
            self.display.cell_size = cell_size;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rule_family: Option<RuleFamily>,
    pub density: Option<f64>,
    pub seed: Option<u64>,
    pub generations: Option<u64>,
    pub screen_width: Option<usize>,
    pub screen_height: Option<usize>,
    pub cell_size: Option<usize>,
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        let layout = settings.layout().unwrap();
        assert_eq!((layout.columns, layout.rows), (320, 166));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config/life.yaml");

        let mut settings = Settings::default();
        settings.simulation.rule_family = RuleFamily::DayAndNight;
        settings.simulation.seed = Some(99);
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.simulation.rule_family, RuleFamily::DayAndNight);
        assert_eq!(loaded.simulation.seed, Some(99));
        assert_eq!(loaded.display.cell_size, 6);
    }

    #[test]
    fn test_seed_is_optional_in_yaml() {
        let yaml = "
display:
  screen_width: 300
  screen_height: 240
  cell_size: 10
  status_bar_height: 40
simulation:
  rule_family: high_life
  initial_density: 0.35
  generations: 50
output:
  format: json
  show_frames: false
";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.simulation.seed, None);
        assert_eq!(settings.simulation.rule_family, RuleFamily::HighLife);
        assert_eq!(settings.output.format, OutputFormat::Json);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::default();
        settings.display.cell_size = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.initial_density = 1.2;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.display.status_bar_height = 1040;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.display.cell_size = 2000;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            rule_family: Some(RuleFamily::Seeds),
            generations: Some(12),
            cell_size: Some(8),
            ..Default::default()
        });
        assert_eq!(settings.simulation.rule_family, RuleFamily::Seeds);
        assert_eq!(settings.simulation.generations, 12);
        assert_eq!(settings.display.cell_size, 8);
        assert_eq!(settings.simulation.initial_density, 0.2);
    }
}
