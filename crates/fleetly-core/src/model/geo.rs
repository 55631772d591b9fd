// ── Geospatial primitives ──

use serde::{Deserialize, Serialize};

use fleetly_api::Position;

/// A bare coordinate pair, the currency of the map collaborators: marker
/// lists and route/camera coordinate sequences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<&Position> for Coordinate {
    fn from(position: &Position) -> Self {
        Self {
            latitude: position.latitude,
            longitude: position.longitude,
        }
    }
}
