//! Configuration management for grid and seeding parameters.
//!
//! Strongly-typed structures that map to the `config.toml` file. Defaults
//! live in the `Default` impls; a missing file is created from them.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [grid]
//! rows = 0
//! columns = 0
//! seed = 42
//!
//! [seeding]
//! stamp_chance = 0.001
//! ```

use serde::{Deserialize, Serialize};
use std::fs;

/// Grid-level configuration: initial dimensions and the RNG seed.
///
/// A `seed` makes resize seeding reproducible; without one the engine
/// draws from OS entropy.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GridConfig {
    pub rows: u32,
    pub columns: u32,
    pub seed: Option<u64>,
}

/// Parameters for stamping patterns onto newly exposed grid area.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SeedingConfig {
    /// Per-cell probability that a pattern stamp is attempted while a new
    /// band is swept. Deployed values have ranged over 0.0005..=0.001.
    pub stamp_chance: f64,
}

impl Default for SeedingConfig {
    fn default() -> Self {
        Self {
            stamp_chance: 0.001,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub seeding: SeedingConfig,
}

impl AppConfig {
    pub fn load() -> Self {
        if let Ok(content) = fs::read_to_string("config.toml") {
            if let Ok(config) = toml::from_str(&content) {
                return config;
            }
        }
        let default = Self::default();
        // Create default config file if missing
        if let Ok(rendered) = toml::to_string(&default) {
            let _ = fs::write("config.toml", rendered);
        }
        default
    }
}
