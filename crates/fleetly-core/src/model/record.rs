// ── Semi-structured record abstraction ──
//
// Report records carry a fixed schema plus an open attributes bag.
// Sortable-field resolution checks the fixed schema first and the bag
// second, which is the lookup order the column keys were designed for.

use fleetly_api::{ReportItem, StatisticsRecord};

use super::value::FieldValue;

/// A record with a fixed schema and an open extension-attribute mapping.
pub trait SemiStructured {
    /// Resolve a fixed-schema field by its column key, or `None` when the
    /// key is not part of the fixed schema.
    fn fixed_field(&self, key: &str) -> Option<FieldValue>;

    /// The open extension attributes.
    fn attributes(&self) -> &serde_json::Map<String, serde_json::Value>;

    /// Fixed field first, attributes bag second.
    fn field(&self, key: &str) -> Option<FieldValue> {
        self.fixed_field(key)
            .or_else(|| self.attributes().get(key).and_then(FieldValue::from_json))
    }
}

impl SemiStructured for ReportItem {
    fn fixed_field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "deviceId" => Some(self.device_id.into()),
            _ => None,
        }
    }

    fn attributes(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.attributes
    }
}

impl SemiStructured for StatisticsRecord {
    fn fixed_field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "captureTime" => Some(self.capture_time.into()),
            "activeUsers" => Some(self.active_users.into()),
            "activeDevices" => Some(self.active_devices.into()),
            "requests" => Some(self.requests.into()),
            "messagesReceived" => Some(self.messages_received.into()),
            "messagesStored" => Some(self.messages_stored.into()),
            "mailSent" => Some(self.mail_sent.into()),
            "smsSent" => Some(self.sms_sent.into()),
            "geocoderRequests" => Some(self.geocoder_requests.into()),
            "geolocationRequests" => Some(self.geolocation_requests.into()),
            _ => None,
        }
    }

    fn attributes(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.attributes
    }
}
