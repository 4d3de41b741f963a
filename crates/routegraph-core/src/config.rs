//! Route planning configuration
//!
//! Stored as TOML, e.g.:
//!
//! ```toml
//! version = 1
//!
//! [search]
//! weighting = "travel-time"
//!
//! [roads]
//! min_speed = 5.0
//! penalties = { A10 = 1.5 }
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{GraphError, Result};

pub use types::{
    RoadConfig, RouteConfig, SearchConfig, Weighting, CONFIG_FORMAT_VERSION, DEFAULT_MIN_SPEED,
};

impl RouteConfig {
    /// Get the weight multiplier for a road
    /// Returns the configured penalty, or 1.0 when none is set
    pub fn road_penalty(&self, road_name: &str) -> f64 {
        self.roads.penalties.get(road_name).copied().unwrap_or(1.0)
    }

    /// Set a weight multiplier for a road
    pub fn set_road_penalty(&mut self, road_name: &str, penalty: f64) {
        self.roads.penalties.insert(road_name.to_string(), penalty);
    }

    /// Check that every configured weight is finite and usable by Dijkstra
    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_FORMAT_VERSION {
            bail_invalid!("config version", self.version);
        }
        if !self.search.hop_weight.is_finite() || self.search.hop_weight < 0.0 {
            bail_invalid!("hop_weight", self.search.hop_weight);
        }
        if !self.roads.min_speed.is_finite() || self.roads.min_speed <= 0.0 {
            bail_invalid!("min_speed", self.roads.min_speed);
        }
        for (road, penalty) in &self.roads.penalties {
            if !penalty.is_finite() || *penalty < 0.0 {
                bail_invalid!("penalty", format!("{} = {}", road, penalty));
            }
        }
        Ok(())
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RouteConfig = toml::from_str(&content)?;

        config.validate().map_err(|e| GraphError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!(
            path = %path.display(),
            weighting = %config.search.weighting,
            "loaded route config"
        );
        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
