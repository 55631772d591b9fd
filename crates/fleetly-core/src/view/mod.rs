// Composed per-report views: everything the external page renderers
// consume, minus the rendering itself.

pub mod combined;
pub mod statistics;

pub use combined::{CombinedReportView, CombinedRow, RouteSegment};
pub use statistics::StatisticsView;
