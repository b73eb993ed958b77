// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Constants Module
//!
//! Default values and environment-based overrides shared across the crate.

use std::env;

/// Display-tuning defaults, overridable via [`crate::config::DisplayConfig`]
pub mod defaults {
    /// Number of progress samples the charts render
    pub const CHART_WINDOW: usize = 6;

    /// Minimum visible bar height as a fraction of the chart area
    pub const MIN_BAR_HEIGHT: f64 = 0.1;

    /// Weight movement under this percentage counts as stable
    pub const WEIGHT_STABLE_THRESHOLD_PERCENT: f64 = 1.0;
}

/// Default configuration file name, searched in the working directory
pub const CONFIG_FILE: &str = "fittrack.toml";

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration file path from environment, if set
pub fn config_path_from_env() -> Option<String> {
    env::var("FITTRACK_CONFIG").ok()
}
