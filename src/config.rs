// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Display-tuning configuration for the derived-statistics layer
//!
//! Hosts can ship a `fittrack.toml` to adjust chart rendering parameters
//! without rebuilding; embedded defaults apply when no file exists.

use crate::constants::{self, defaults};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Chart rendering parameters
    pub chart: ChartConfig,
    /// Goal evaluation parameters
    pub goals: GoalConfig,
}

/// Parameters for the progress charts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Number of samples in the rendered window
    pub window: usize,
    /// Minimum visible bar height as a fraction of the chart area
    pub min_bar_height: f64,
}

/// Parameters for goal and trend evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalConfig {
    /// Weight movement under this percentage counts as stable
    pub weight_stable_threshold_percent: f64,
}

impl DisplayConfig {
    /// Load configuration from file or use defaults
    ///
    /// Resolution order: explicit path, then `FITTRACK_CONFIG` from the
    /// environment, then `fittrack.toml` in the working directory, then
    /// the embedded defaults.
    pub fn load(path: Option<String>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from_file(&config_path);
        }

        if let Some(env_path) = constants::config_path_from_env() {
            return Self::load_from_file(&env_path);
        }

        if Path::new(constants::CONFIG_FILE).exists() {
            return Self::load_from_file(constants::CONFIG_FILE);
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: DisplayConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path))?;

        Ok(config)
    }

    /// Check that the loaded values keep the charts well-defined
    ///
    /// The bar floor must stay within (0, 1] or normalized heights would
    /// leave the unit interval, and a zero-sample window renders nothing.
    pub fn validate(&self) -> Result<()> {
        let floor = self.chart.min_bar_height;
        if !(floor > 0.0 && floor <= 1.0) {
            anyhow::bail!("chart.min_bar_height must be within (0, 1], got {}", floor);
        }

        if self.chart.window == 0 {
            anyhow::bail!("chart.window must be at least 1");
        }

        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            chart: ChartConfig::default(),
            goals: GoalConfig::default(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            window: defaults::CHART_WINDOW,
            min_bar_height: defaults::MIN_BAR_HEIGHT,
        }
    }
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            weight_stable_threshold_percent: defaults::WEIGHT_STABLE_THRESHOLD_PERCENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = DisplayConfig::default();

        assert_eq!(config.chart.window, 6);
        assert_eq!(config.chart.min_bar_height, 0.1);
        assert_eq!(config.goals.weight_stable_threshold_percent, 1.0);
    }

    #[test]
    fn test_config_file_loading() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(
            temp_file,
            r#"
[chart]
window = 8
min_bar_height = 0.05

[goals]
weight_stable_threshold_percent = 0.5
        "#
        )?;

        let config = DisplayConfig::load_from_file(temp_file.path().to_str().unwrap())?;

        assert_eq!(config.chart.window, 8);
        assert_eq!(config.chart.min_bar_height, 0.05);
        assert_eq!(config.goals.weight_stable_threshold_percent, 0.5);

        Ok(())
    }

    #[test]
    fn test_out_of_range_bar_floor_is_rejected() -> Result<()> {
        for bad_floor in ["1.5", "0.0", "-0.1"] {
            let mut temp_file = NamedTempFile::new()?;
            writeln!(
                temp_file,
                r#"
[chart]
window = 6
min_bar_height = {}

[goals]
weight_stable_threshold_percent = 1.0
            "#,
                bad_floor
            )?;

            let result = DisplayConfig::load_from_file(temp_file.path().to_str().unwrap());
            assert!(result.is_err(), "floor {} should be rejected", bad_floor);
        }

        Ok(())
    }

    #[test]
    fn test_zero_window_is_rejected() {
        let config = DisplayConfig {
            chart: ChartConfig {
                window: 0,
                min_bar_height: 0.1,
            },
            goals: GoalConfig::default(),
        };

        assert!(config.validate().is_err());
        assert!(DisplayConfig::default().validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = DisplayConfig::load_from_file("/nonexistent/fittrack.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = DisplayConfig::default();
        let toml = toml::to_string(&config).expect("Failed to serialize config");
        let parsed: DisplayConfig = toml::from_str(&toml).expect("Failed to parse config");

        assert_eq!(parsed.chart.window, config.chart.window);
    }
}
