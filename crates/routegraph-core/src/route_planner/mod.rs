//! Road network planning on top of [`DirectedGraph`]
//!
//! Junctions are vertices, one-way road segments are edges. A two-way road
//! is stored as two independent segments so each direction can be changed
//! on its own (e.g. an accident slowing one carriageway).

pub mod junction;
pub mod road;

pub use junction::Junction;
pub use road::Road;

use crate::config::{RouteConfig, Weighting};
use crate::graph::{DirectedGraph, Path};

/// Road network: junctions connected by one-way road segments
pub type RoadMap = DirectedGraph<Junction, Road>;

/// Turns a road into a Dijkstra weight according to a [`RouteConfig`]
#[derive(Debug, Clone)]
pub struct RoadWeigher {
    config: RouteConfig,
}

impl RoadWeigher {
    pub fn new(config: RouteConfig) -> Self {
        Self { config }
    }

    /// Weigher for `weighting` with otherwise default settings
    pub fn with_weighting(weighting: Weighting) -> Self {
        let mut config = RouteConfig::default();
        config.search.weighting = weighting;
        Self { config }
    }

    pub fn weighting(&self) -> Weighting {
        self.config.search.weighting
    }

    pub fn weight(&self, road: &Road) -> f64 {
        let base = match self.config.search.weighting {
            Weighting::Length => road.length,
            Weighting::TravelTime => road.travel_time(self.config.roads.min_speed),
            Weighting::Hops => self.config.search.hop_weight,
        };
        base * self.config.road_penalty(&road.name)
    }
}

impl Default for RoadWeigher {
    fn default() -> Self {
        Self::new(RouteConfig::default())
    }
}

impl RoadMap {
    /// Connect two registered junctions by a two-way road.
    ///
    /// The length of each segment is the straight-line distance scaled by
    /// `detour_factor`. Returns false if either junction is unknown or a
    /// segment already exists (see [`DirectedGraph::add_connection_by_id`]).
    pub fn add_road(
        &mut self,
        from_id: &str,
        to_id: &str,
        name: &str,
        max_speed: u32,
        detour_factor: f64,
    ) -> bool {
        let (Some(from), Some(to)) = (self.get_vertex_by_id(from_id), self.get_vertex_by_id(to_id))
        else {
            tracing::debug!(
                from = from_id,
                to = to_id,
                road = name,
                "road rejected: unknown junction"
            );
            return false;
        };
        let length = detour_factor * from.distance(to);
        self.add_connection_by_id(from_id, to_id, Road::new(name, length, max_speed))
    }

    /// Best route between two junctions under `weigher`
    pub fn plan_route(
        &self,
        from_id: &str,
        to_id: &str,
        weigher: &RoadWeigher,
    ) -> Option<Path<'_, Junction>> {
        tracing::debug!(
            from = from_id,
            to = to_id,
            weighting = %weigher.weighting(),
            "planning route"
        );
        self.dijkstra_shortest_path(from_id, to_id, |road| weigher.weight(road))
    }
}
