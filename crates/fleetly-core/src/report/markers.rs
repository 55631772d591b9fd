// ── Event-to-position marker join ──

use fleetly_api::{Event, Position};

use crate::model::Coordinate;

/// Resolve each event's position reference against `positions` and emit a
/// marker coordinate per resolved event, in event order.
///
/// An event whose reference cannot be resolved (position pruned, not
/// returned, or never recorded) produces no marker. That is a join miss,
/// not an error.
pub fn event_markers(events: &[Event], positions: &[Position]) -> Vec<Coordinate> {
    events
        .iter()
        .filter_map(|event| {
            let position_id = event.position_id?;
            positions.iter().find(|p| p.id == position_id)
        })
        .map(Coordinate::from)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn position(id: i64, latitude: f64, longitude: f64) -> Position {
        serde_json::from_value(json!({
            "id": id, "latitude": latitude, "longitude": longitude,
            "fixTime": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    fn event(id: i64, position_id: Option<i64>) -> Event {
        serde_json::from_value(json!({
            "id": id, "type": "alarm", "eventTime": "2024-01-01T00:00:00Z",
            "positionId": position_id
        }))
        .unwrap()
    }

    #[test]
    fn unresolvable_reference_is_dropped_silently() {
        let positions = vec![position(1, 10.0, 20.0)];
        let events = vec![event(1, Some(1)), event(2, Some(99))];
        let markers = event_markers(&events, &positions);
        assert_eq!(markers, vec![Coordinate::new(10.0, 20.0)]);
    }

    #[test]
    fn event_without_reference_is_dropped() {
        let positions = vec![position(1, 10.0, 20.0)];
        let events = vec![event(1, None), event(2, Some(1))];
        let markers = event_markers(&events, &positions);
        assert_eq!(markers, vec![Coordinate::new(10.0, 20.0)]);
    }

    #[test]
    fn markers_follow_event_order() {
        let positions = vec![position(1, 1.0, 1.0), position(2, 2.0, 2.0)];
        let events = vec![event(10, Some(2)), event(11, Some(1))];
        let markers = event_markers(&events, &positions);
        assert_eq!(
            markers,
            vec![Coordinate::new(2.0, 2.0), Coordinate::new(1.0, 1.0)]
        );
    }

    #[test]
    fn empty_inputs_produce_no_markers() {
        assert!(event_markers(&[], &[]).is_empty());
        assert!(event_markers(&[event(1, Some(1))], &[]).is_empty());
    }
}
