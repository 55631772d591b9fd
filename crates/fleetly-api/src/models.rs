// Reports API response types
//
// Models for the telemetry server's JSON API. The server is liberal about
// field presence, so optional fields use `#[serde(default)]`; anything not
// modelled explicitly lands in the per-record `attributes` bag, which is
// also where user-defined extension attributes live.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Device ───────────────────────────────────────────────────────────

/// Tracked device from `/api/devices`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub unique_id: Option<String>,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub disabled: bool,
    /// Catch-all for server extras and user-defined attributes.
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

// ── Position ─────────────────────────────────────────────────────────

/// A single GPS fix. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: i64,
    #[serde(default)]
    pub device_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub fix_time: DateTime<Utc>,
    #[serde(default)]
    pub altitude: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub course: Option<f64>,
    /// Catch-all for server extras and user-defined attributes.
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

// ── Event ────────────────────────────────────────────────────────────

/// Discrete device event.
///
/// `position_id` is a weak reference into the positions returned in the
/// same response. The referenced position may have been pruned or simply
/// not returned; resolution is allowed to fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    #[serde(rename = "type")]
    pub event_type: String,
    pub event_time: DateTime<Utc>,
    #[serde(default)]
    pub device_id: i64,
    #[serde(default)]
    pub position_id: Option<i64>,
    /// Catch-all for server extras and user-defined attributes.
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

// ── Combined report ──────────────────────────────────────────────────

/// Per-device bundle from `/api/reports/combined`.
///
/// `route` is the ordered path driven over the queried range; `positions`
/// is the event-resolvable position set, which may overlap or differ
/// from `route`. The two event/position collections are independent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportItem {
    pub device_id: i64,
    #[serde(default)]
    pub route: Vec<Position>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub positions: Vec<Position>,
    /// Catch-all for server extras and user-defined attributes.
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

// ── Statistics ───────────────────────────────────────────────────────

/// Server usage counters from `/api/statistics`, one record per capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsRecord {
    #[serde(default)]
    pub id: i64,
    pub capture_time: DateTime<Utc>,
    #[serde(default)]
    pub active_users: i64,
    #[serde(default)]
    pub active_devices: i64,
    #[serde(default)]
    pub requests: i64,
    #[serde(default)]
    pub messages_received: i64,
    #[serde(default)]
    pub messages_stored: i64,
    #[serde(default)]
    pub mail_sent: i64,
    #[serde(default)]
    pub sms_sent: i64,
    #[serde(default)]
    pub geocoder_requests: i64,
    #[serde(default)]
    pub geolocation_requests: i64,
    /// Catch-all for server extras.
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn report_item_parses_with_unmodelled_fields_in_attributes() {
        let body = json!({
            "deviceId": 12,
            "route": [
                {"id": 1, "deviceId": 12, "latitude": 59.3, "longitude": 18.1,
                 "fixTime": "2024-01-01T10:00:00Z", "odometer": 1234}
            ],
            "events": [
                {"id": 7, "type": "deviceOverspeed", "eventTime": "2024-01-01T10:05:00Z",
                 "deviceId": 12, "positionId": 1, "speedLimit": 90.0}
            ],
            "positions": [],
            "totalDistance": 1520.5
        });

        let item: ReportItem = serde_json::from_value(body).unwrap();
        assert_eq!(item.device_id, 12);
        assert_eq!(item.route.len(), 1);
        assert_eq!(item.route[0].attributes.get("odometer"), Some(&json!(1234)));
        assert_eq!(item.events[0].position_id, Some(1));
        assert_eq!(item.events[0].event_type, "deviceOverspeed");
        assert_eq!(item.attributes.get("totalDistance"), Some(&json!(1520.5)));
    }

    #[test]
    fn event_without_position_reference_parses() {
        let event: Event = serde_json::from_value(json!({
            "id": 3, "type": "deviceOffline", "eventTime": "2024-01-01T09:00:00Z"
        }))
        .unwrap();
        assert_eq!(event.position_id, None);
    }

    #[test]
    fn statistics_record_parses_flat_counters() {
        let record: StatisticsRecord = serde_json::from_value(json!({
            "captureTime": "2024-02-01T00:00:00Z",
            "activeUsers": 4,
            "activeDevices": 17,
            "messagesStored": 90210
        }))
        .unwrap();
        assert_eq!(record.active_devices, 17);
        assert_eq!(record.messages_stored, 90210);
        assert_eq!(record.requests, 0);
    }
}
