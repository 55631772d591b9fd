// Report query construction
//
// Builds the canonical query strings for the reports endpoints. Scalar
// parameters (`from`, `to`) are encoded once; device and group selections
// become repeated `deviceId`/`groupId` pairs in selection order. Encoding
// order is fixed (from, to, deviceId*, groupId*) so identical input always
// yields an identical string.

use chrono::{DateTime, SecondsFormat, Utc};
use url::form_urlencoded;

/// Time range shared by every report query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// Encode as `from=<ISO8601>&to=<ISO8601>`.
    pub fn to_query_string(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        self.append_to(&mut query);
        query.finish()
    }

    fn append_to(&self, query: &mut form_urlencoded::Serializer<'_, String>) {
        query.append_pair("from", &self.from.to_rfc3339_opts(SecondsFormat::Secs, true));
        query.append_pair("to", &self.to.to_rfc3339_opts(SecondsFormat::Secs, true));
    }
}

/// Device/group/time-range selection for the combined report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFilter {
    pub device_ids: Vec<i64>,
    pub group_ids: Vec<i64>,
    pub range: TimeRange,
}

impl ReportFilter {
    pub fn new(range: TimeRange) -> Self {
        Self {
            device_ids: Vec::new(),
            group_ids: Vec::new(),
            range,
        }
    }

    pub fn with_devices(mut self, device_ids: impl IntoIterator<Item = i64>) -> Self {
        self.device_ids = device_ids.into_iter().collect();
        self
    }

    pub fn with_groups(mut self, group_ids: impl IntoIterator<Item = i64>) -> Self {
        self.group_ids = group_ids.into_iter().collect();
        self
    }

    /// Encode as `from=..&to=..&deviceId=..&deviceId=..&groupId=..`.
    ///
    /// Empty selections emit no pairs at all for their key.
    pub fn to_query_string(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        self.range.append_to(&mut query);
        for device_id in &self.device_ids {
            query.append_pair("deviceId", &device_id.to_string());
        }
        for group_id in &self.group_ids {
            query.append_pair("groupId", &group_id.to_string());
        }
        query.finish()
    }
}
