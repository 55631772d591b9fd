// ── Route aggregation for camera fitting ──

use fleetly_api::ReportItem;

use crate::model::Coordinate;

/// Flatten every item's route into one coordinate sequence, item order
/// then point order. Duplicate points are kept; viewport fitting does not
/// care about them.
///
/// An empty result is valid (no devices selected, or zero-length routes)
/// and means the camera consumer should leave the viewport unchanged.
pub fn combined_route(items: &[ReportItem]) -> Vec<Coordinate> {
    items
        .iter()
        .flat_map(|item| item.route.iter().map(Coordinate::from))
        .collect()
}
