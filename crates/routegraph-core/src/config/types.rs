//! Configuration type definitions

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Speed floor (km/h) used when a road reports a lower or zero maximum speed
pub const DEFAULT_MIN_SPEED: f64 = 5.0;

/// Route planning configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Path search configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Road weighting configuration
    #[serde(default)]
    pub roads: RoadConfig,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            search: SearchConfig::default(),
            roads: RoadConfig::default(),
        }
    }
}

/// What a weighted search minimizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Weighting {
    /// Total road length in km
    #[default]
    Length,
    /// Total driving time in hours at each road's maximum speed
    TravelTime,
    /// Constant cost per road segment
    Hops,
}

impl std::str::FromStr for Weighting {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "length" => Ok(Weighting::Length),
            "travel-time" | "travel_time" => Ok(Weighting::TravelTime),
            "hops" => Ok(Weighting::Hops),
            other => Err(format!(
                "unknown weighting '{}' (expected: length, travel-time, hops)",
                other
            )),
        }
    }
}

impl std::fmt::Display for Weighting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weighting::Length => "length",
            Weighting::TravelTime => "travel-time",
            Weighting::Hops => "hops",
        };
        f.write_str(name)
    }
}

/// Configuration for weighted path search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quantity minimized by Dijkstra
    #[serde(default)]
    pub weighting: Weighting,

    /// Cost of a single segment under `Weighting::Hops`
    #[serde(default = "default_hop_weight")]
    pub hop_weight: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weighting: Weighting::default(),
            hop_weight: default_hop_weight(),
        }
    }
}

/// Configuration for road weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadConfig {
    /// Lowest speed (km/h) assumed when computing travel time
    #[serde(default = "default_min_speed")]
    pub min_speed: f64,

    /// Per-road weight multipliers keyed by road name (e.g. tolls, congestion)
    #[serde(default)]
    pub penalties: HashMap<String, f64>,
}

impl Default for RoadConfig {
    fn default() -> Self {
        Self {
            min_speed: default_min_speed(),
            penalties: HashMap::new(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_hop_weight() -> f64 {
    1.0
}

fn default_min_speed() -> f64 {
    DEFAULT_MIN_SPEED
}
