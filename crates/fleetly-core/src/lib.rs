// fleetly-core: Report correlation engine between fleetly-api and consumers.

pub mod error;
pub mod labels;
pub mod model;
pub mod prefs;
pub mod registry;
pub mod report;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::CoreError;
pub use labels::prefixed_label_key;
pub use model::{Coordinate, FieldValue, SemiStructured};
pub use prefs::{MemoryPreferences, PreferenceStore};
pub use registry::{DeviceLookup, DeviceRegistry};
pub use report::{
    ColumnSet, ColumnSpec, CombinedReportSource, FetchPhase, ReportFetchController, ReportSource,
    ReportState, SortDirection, SortState, SortableColumnProjector, StatisticsSource,
    combined_route, event_markers,
};
pub use view::{CombinedReportView, CombinedRow, RouteSegment, StatisticsView};

// Re-export the wire models and query types consumers work with.
pub use fleetly_api::{
    Device, Event, Position, ReportFilter, ReportItem, StatisticsRecord, TimeRange,
};
