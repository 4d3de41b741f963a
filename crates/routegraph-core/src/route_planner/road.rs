use serde::{Deserialize, Serialize};

/// A one-way road segment between two junctions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub name: String,
    /// Physical length in km
    pub length: f64,
    /// Maximum driving speed in km/h
    pub max_speed: u32,
}

impl Road {
    pub fn new(name: impl Into<String>, length: f64, max_speed: u32) -> Self {
        Self {
            name: name.into(),
            length,
            max_speed,
        }
    }

    pub fn set_max_speed(&mut self, max_speed: u32) {
        self.max_speed = max_speed;
    }

    /// Driving time in hours at the maximum speed, never faster than `min_speed`
    pub fn travel_time(&self, min_speed: f64) -> f64 {
        self.length / f64::from(self.max_speed).max(min_speed)
    }
}

impl std::fmt::Display for Road {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.name, self.max_speed)
    }
}
