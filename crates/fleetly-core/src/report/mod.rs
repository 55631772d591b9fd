// Report correlation engine: fetch lifecycle, sorting, and the joins
// that turn raw report records into table and map feeds.

pub mod columns;
pub mod controller;
pub mod markers;
pub mod route;
pub mod sort;
pub mod source;

pub use columns::{ColumnSet, ColumnSpec};
pub use controller::{FetchPhase, ReportFetchController, ReportSource, ReportState};
pub use markers::event_markers;
pub use route::combined_route;
pub use sort::{SortDirection, SortState, SortableColumnProjector};
pub use source::{CombinedReportSource, StatisticsSource};
