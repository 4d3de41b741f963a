use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::graph::Identifiable;

/// A named road junction positioned in the Dutch RD coordinate system (km).
///
/// Identity is the name: two junctions with the same name are equal and hash
/// alike whatever their coordinates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Junction {
    pub name: String,
    pub location_x: f64,
    pub location_y: f64,
    /// Importance of the junction; informational only
    pub population: u32,
}

impl Junction {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn at(name: impl Into<String>, location_x: f64, location_y: f64, population: u32) -> Self {
        Self {
            name: name.into(),
            location_x,
            location_y,
            population,
        }
    }

    /// Straight-line distance to `other` in km
    pub fn distance(&self, other: &Junction) -> f64 {
        let dx = other.location_x - self.location_x;
        let dy = other.location_y - self.location_y;
        dx.hypot(dy)
    }
}

impl Identifiable for Junction {
    fn id(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Junction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Junction {}

impl Hash for Junction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Junction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
