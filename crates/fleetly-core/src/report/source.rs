// ── HTTP-backed report sources ──
//
// Thin adapters binding the fetch controller to the reports API client,
// one per report surface.

use std::sync::Arc;

use fleetly_api::{ReportFilter, ReportItem, ReportsClient, StatisticsRecord, TimeRange};

use crate::error::CoreError;

use super::controller::ReportSource;

/// Combined route/events report, queried by device/group/time selection.
pub struct CombinedReportSource {
    client: Arc<ReportsClient>,
}

impl CombinedReportSource {
    pub fn new(client: Arc<ReportsClient>) -> Self {
        Self { client }
    }
}

impl ReportSource for CombinedReportSource {
    type Query = ReportFilter;
    type Record = ReportItem;

    async fn fetch(&self, query: &ReportFilter) -> Result<Vec<ReportItem>, CoreError> {
        self.client
            .combined_report(query)
            .await
            .map_err(CoreError::from)
    }
}

/// Server statistics, queried by time range only.
pub struct StatisticsSource {
    client: Arc<ReportsClient>,
}

impl StatisticsSource {
    pub fn new(client: Arc<ReportsClient>) -> Self {
        Self { client }
    }
}

impl ReportSource for StatisticsSource {
    type Query = TimeRange;
    type Record = StatisticsRecord;

    async fn fetch(&self, query: &TimeRange) -> Result<Vec<StatisticsRecord>, CoreError> {
        self.client.statistics(query).await.map_err(CoreError::from)
    }
}
