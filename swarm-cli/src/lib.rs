//! Headless host for the swarm: runs the simulation on a fixed timestep with
//! a scripted pointer and reports what it would have drawn.

use std::path::Path;

use anyhow::{Context, Result};
use swarm_core::SwarmConfig;

pub mod runner;
pub mod surface;

pub use runner::{FrameStats, PointerScript, RunOptions, Runner, Summary};
pub use surface::CountingSurface;

/// Load a swarm configuration from a JSON file. Missing fields keep their
/// defaults. With no path the defaults are returned.
pub fn load_config(path: Option<&Path>) -> Result<SwarmConfig> {
    let Some(path) = path else {
        return Ok(SwarmConfig::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: SwarmConfig = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;

    log::debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}
