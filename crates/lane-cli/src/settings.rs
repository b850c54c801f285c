//! Layered configuration loading

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use lane_tracker::TrackerConfig;
use std::path::Path;

/// Environment variable prefix, e.g. `LANE_SLOPE_THRESHOLD`
pub const ENV_PREFIX: &str = "LANE";

/// Build the tracker configuration.
///
/// Sources in increasing priority: built-in defaults, the optional file
/// (format by extension), then `LANE_*` environment variables. Nested keys use
/// a double underscore: `LANE_RENDER__BOUNDARY_THICKNESS=3`.
pub fn load_config(path: Option<&Path>) -> Result<TrackerConfig> {
    let defaults = Config::try_from(&TrackerConfig::default())
        .context("Failed to serialize default configuration")?;

    let mut builder = Config::builder().add_source(defaults);
    if let Some(path) = path {
        builder = builder.add_source(File::from(path));
    }

    let settings = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    let config: TrackerConfig = settings
        .try_deserialize()
        .context("Failed to parse tracker configuration")?;
    config.validate()?;

    Ok(config)
}
