// fleetly-api: Async Rust client for the fleetly telemetry server's reports API

pub mod client;
pub mod error;
pub mod models;
pub mod query;
pub mod transport;

pub use client::ReportsClient;
pub use error::Error;
pub use models::{Device, Event, Position, ReportItem, StatisticsRecord};
pub use query::{ReportFilter, TimeRange};
pub use transport::{TlsMode, TransportConfig};
