// ── Statistics view ──
//
// Engine-side composition for the server statistics report: fetch
// lifecycle, a configurable column set persisted through the preference
// collaborator, and sortable rows projected onto the selected columns.

use std::sync::Arc;

use tokio::sync::watch;

use fleetly_api::{ReportsClient, StatisticsRecord, TimeRange};

use crate::error::CoreError;
use crate::model::{FieldValue, SemiStructured};
use crate::prefs::PreferenceStore;
use crate::report::columns::{ColumnSet, DEFAULT_STATISTICS_SELECTION, statistics_columns};
use crate::report::controller::{ReportFetchController, ReportSource, ReportState};
use crate::report::sort::{SortDirection, SortState, SortableColumnProjector};
use crate::report::source::StatisticsSource;

/// Preference key the column selection is persisted under.
const COLUMNS_PREF_KEY: &str = "statisticsColumns";

/// Composes the statistics report's fetch, column, and sort logic.
pub struct StatisticsView<S>
where
    S: ReportSource<Query = TimeRange, Record = StatisticsRecord>,
{
    controller: ReportFetchController<S>,
    projector: SortableColumnProjector,
    columns: ColumnSet,
    prefs: Arc<dyn PreferenceStore>,
}

impl StatisticsView<StatisticsSource> {
    /// View backed by the HTTP reports client.
    pub fn from_client(client: Arc<ReportsClient>, prefs: Arc<dyn PreferenceStore>) -> Self {
        Self::new(StatisticsSource::new(client), prefs)
    }
}

impl<S> StatisticsView<S>
where
    S: ReportSource<Query = TimeRange, Record = StatisticsRecord>,
{
    pub fn new(source: S, prefs: Arc<dyn PreferenceStore>) -> Self {
        Self {
            controller: ReportFetchController::new(source),
            projector: SortableColumnProjector::new(),
            columns: statistics_columns(),
            prefs,
        }
    }

    // ── Fetch lifecycle ──────────────────────────────────────────────

    /// Fetch statistics for a time range. See
    /// [`ReportFetchController::submit`] for the overlap semantics.
    pub async fn submit(&self, range: &TimeRange) -> Result<(), CoreError> {
        self.controller.submit(range).await
    }

    pub fn subscribe(&self) -> watch::Receiver<ReportState<StatisticsRecord>> {
        self.controller.subscribe()
    }

    pub fn state(&self) -> ReportState<StatisticsRecord> {
        self.controller.state()
    }

    pub fn is_loading(&self) -> bool {
        self.controller.is_loading()
    }

    // ── Columns ──────────────────────────────────────────────────────

    /// The full column schema (for the external chooser UI).
    pub fn schema(&self) -> &ColumnSet {
        &self.columns
    }

    /// Label key for a column, or `None` for unknown keys.
    pub fn label_key(&self, key: &str) -> Option<&'static str> {
        self.columns.label_key(key)
    }

    /// Active column selection: the persisted keys sanitized against the
    /// schema, or the default selection when nothing was persisted.
    pub fn selected_columns(&self) -> Vec<String> {
        let stored = self
            .prefs
            .get(COLUMNS_PREF_KEY)
            .and_then(|value| serde_json::from_value::<Vec<String>>(value).ok());
        let selection = stored.unwrap_or_else(|| {
            DEFAULT_STATISTICS_SELECTION
                .iter()
                .map(|key| (*key).to_owned())
                .collect()
        });
        self.columns.sanitize(&selection)
    }

    /// Persist a new column selection (sanitized first) and return the
    /// effective selection.
    pub fn set_selected_columns(&self, keys: &[String]) -> Vec<String> {
        let sanitized = self.columns.sanitize(keys);
        self.prefs
            .set(COLUMNS_PREF_KEY, serde_json::Value::from(sanitized.clone()));
        sanitized
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

    /// Records in table order (sorted projection of the fetched list).
    pub fn records(&self) -> Vec<StatisticsRecord> {
        self.projector.project(&self.controller.items()).into_owned()
    }

    /// Table cells: one row per record, one cell per selected column,
    /// resolved through the semi-structured field lookup.
    pub fn rows(&self) -> Vec<Vec<Option<FieldValue>>> {
        let selection = self.selected_columns();
        self.records()
            .iter()
            .map(|record| selection.iter().map(|key| record.field(key)).collect())
            .collect()
    }
}
