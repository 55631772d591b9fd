// ── Combined report view ──
//
// Engine-side composition for the combined route/events report: fetch
// lifecycle, sortable table rows, and the marker/route/camera feeds the
// map collaborators consume. Rendering is external; everything here only
// computes what to feed it.
//
// The table reads the sorted projection; the map feeds read natural
// (fetch) order. Routes and markers don't reorder when a column header
// is clicked.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use fleetly_api::{ReportFilter, ReportItem, ReportsClient};

use crate::error::CoreError;
use crate::labels::prefixed_label_key;
use crate::model::Coordinate;
use crate::registry::DeviceLookup;
use crate::report::controller::{ReportFetchController, ReportSource, ReportState};
use crate::report::markers::event_markers;
use crate::report::route::combined_route;
use crate::report::sort::{SortDirection, SortState, SortableColumnProjector};
use crate::report::source::CombinedReportSource;

/// One table row: a single event, labelled with its device.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedRow {
    pub device_id: i64,
    pub device_name: String,
    pub event_id: i64,
    pub event_time: DateTime<Utc>,
    /// Localization key for the event type (`eventDeviceOverspeed`);
    /// resolution is the localization collaborator's job.
    pub event_label_key: String,
}

/// One named per-device route for the route layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    pub device_id: i64,
    pub name: String,
    pub coordinates: Vec<Coordinate>,
}

/// Composes the combined report's fetch, sort, and map-feed logic.
pub struct CombinedReportView<S, L>
where
    S: ReportSource<Query = ReportFilter, Record = ReportItem>,
{
    controller: ReportFetchController<S>,
    projector: SortableColumnProjector,
    devices: L,
}

impl<L> CombinedReportView<CombinedReportSource, L>
where
    L: DeviceLookup,
{
    /// View backed by the HTTP reports client.
    pub fn from_client(client: Arc<ReportsClient>, devices: L) -> Self {
        Self::new(CombinedReportSource::new(client), devices)
    }
}

impl<S, L> CombinedReportView<S, L>
where
    S: ReportSource<Query = ReportFilter, Record = ReportItem>,
    L: DeviceLookup,
{
    pub fn new(source: S, devices: L) -> Self {
        Self {
            controller: ReportFetchController::new(source),
            projector: SortableColumnProjector::new(),
            devices,
        }
    }

    // ── Fetch lifecycle ──────────────────────────────────────────────

    /// Fetch the report for a selection. See
    /// [`ReportFetchController::submit`] for the overlap semantics.
    pub async fn submit(&self, filter: &ReportFilter) -> Result<(), CoreError> {
        self.controller.submit(filter).await
    }

    pub fn subscribe(&self) -> watch::Receiver<ReportState<ReportItem>> {
        self.controller.subscribe()
    }

    pub fn state(&self) -> ReportState<ReportItem> {
        self.controller.state()
    }

    pub fn is_loading(&self) -> bool {
        self.controller.is_loading()
    }

    // ── Sorting ──────────────────────────────────────────────────────

    pub fn toggle_sort(&mut self, key: &str) {
        self.projector.toggle(key);
    }

    pub fn sort_state(&self) -> &SortState {
        self.projector.state()
    }

    pub fn column_direction(&self, key: &str) -> Option<SortDirection> {
        self.projector.column_direction(key)
    }

    // ── Table feed ───────────────────────────────────────────────────

    /// Items in table order (sorted projection of the fetched list).
    pub fn items(&self) -> Vec<ReportItem> {
        self.projector.project(&self.controller.items()).into_owned()
    }

    /// Flattened table rows, one per event, in table-item order.
    pub fn rows(&self) -> Vec<CombinedRow> {
        self.items()
            .iter()
            .flat_map(|item| {
                let device_name = self.devices.display_name(item.device_id);
                item.events
                    .iter()
                    .map(|event| CombinedRow {
                        device_id: item.device_id,
                        device_name: device_name.clone(),
                        event_id: event.id,
                        event_time: event.event_time,
                        event_label_key: prefixed_label_key("event", &event.event_type),
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    // ── Map feeds ────────────────────────────────────────────────────

    /// Markers for every resolvable event across all items, item order.
    pub fn markers(&self) -> Vec<Coordinate> {
        self.controller
            .items()
            .iter()
            .flat_map(|item| event_markers(&item.events, &item.positions))
            .collect()
    }

    /// One named route per device for the route layer.
    pub fn route_segments(&self) -> Vec<RouteSegment> {
        self.controller
            .items()
            .iter()
            .map(|item| RouteSegment {
                device_id: item.device_id,
                name: self.devices.display_name(item.device_id),
                coordinates: item.route.iter().map(Coordinate::from).collect(),
            })
            .collect()
    }

    /// Every route coordinate across all devices, for camera fitting.
    /// Empty when nothing was fetched; the camera then stays put.
    pub fn camera_coordinates(&self) -> Vec<Coordinate> {
        combined_route(&self.controller.items())
    }
}
