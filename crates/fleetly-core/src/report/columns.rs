// ── Column configuration ──
//
// Fixed ordered schemas of (record key, label key) pairs, plus
// sanitization of externally persisted column selections. The chooser UI
// and label resolution are collaborators; this module only answers which
// columns exist, in what order, and under which label keys.

use indexmap::IndexMap;

/// A single table column: record key plus localization label key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub label_key: &'static str,
}

/// Ordered column schema for one report type.
#[derive(Debug, Clone)]
pub struct ColumnSet {
    columns: IndexMap<&'static str, &'static str>,
}

impl ColumnSet {
    pub fn new(specs: &[ColumnSpec]) -> Self {
        Self {
            columns: specs.iter().map(|spec| (spec.key, spec.label_key)).collect(),
        }
    }

    /// Label key for a column, or `None` for unknown keys.
    pub fn label_key(&self, key: &str) -> Option<&'static str> {
        self.columns.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.columns.contains_key(key)
    }

    /// Every column key in schema order, for the external chooser UI.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Sanitize a persisted selection: unknown keys and duplicates are
    /// dropped, first-occurrence order is preserved. A stale or corrupted
    /// selection must never crash the table renderer.
    pub fn sanitize(&self, selection: &[String]) -> Vec<String> {
        let mut seen = Vec::with_capacity(selection.len());
        for key in selection {
            if self.contains(key) && !seen.contains(key) {
                seen.push(key.clone());
            }
        }
        seen
    }
}

/// Statistics report schema, in display order.
pub const STATISTICS_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { key: "captureTime", label_key: "statisticsCaptureTime" },
    ColumnSpec { key: "activeUsers", label_key: "statisticsActiveUsers" },
    ColumnSpec { key: "activeDevices", label_key: "statisticsActiveDevices" },
    ColumnSpec { key: "requests", label_key: "statisticsRequests" },
    ColumnSpec { key: "messagesReceived", label_key: "statisticsMessagesReceived" },
    ColumnSpec { key: "messagesStored", label_key: "statisticsMessagesStored" },
    ColumnSpec { key: "mailSent", label_key: "notificatorMail" },
    ColumnSpec { key: "smsSent", label_key: "notificatorSms" },
    ColumnSpec { key: "geocoderRequests", label_key: "statisticsGeocoder" },
    ColumnSpec { key: "geolocationRequests", label_key: "statisticsGeolocation" },
];

/// Columns shown for statistics before the user customizes anything.
pub const DEFAULT_STATISTICS_SELECTION: &[&str] =
    &["captureTime", "activeUsers", "activeDevices", "messagesStored"];

/// The statistics column schema as a `ColumnSet`.
pub fn statistics_columns() -> ColumnSet {
    ColumnSet::new(STATISTICS_COLUMNS)
}
