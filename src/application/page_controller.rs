// Page controller - Drives the initial load and custom timeframe flows
use crate::application::metrics_source::{FetchOutcome, MetricsSource, FETCH_FAILURE_TEXT};
use crate::domain::auth::AuthToken;
use crate::domain::metrics::MetricSeriesCollection;
use crate::domain::page::{Page, PagePhase};
use crate::domain::table::{render_metric_table, ResultsContainer};
use crate::domain::timeframe::TimeframeQuery;
use std::sync::Arc;

#[derive(Clone)]
pub struct PageController {
    source: Arc<dyn MetricsSource>,
}

impl PageController {
    pub fn new(source: Arc<dyn MetricsSource>) -> Self {
        Self { source }
    }

    /// Initial load: fetch the default window and render one table per series.
    pub async fn display_metric_tables(
        &self,
        page: &mut Page,
        token: Option<&AuthToken>,
    ) -> PagePhase {
        page.show_loading();
        let outcome = self.source.fetch_default_window(token).await;
        page.clear_loading();

        match outcome {
            FetchOutcome::Success(data) => {
                render_all(&data, page.results_mut());
                page.mark_success();
            }
            FetchOutcome::Rejected { status, error_body } => {
                tracing::warn!("Default window fetch rejected with status {}", status);
                let mut lines = vec![format!("Error: {} Status", status)];
                if let Some(body) = error_body {
                    lines.extend(body.aws_error);
                    lines.extend(body.message);
                }
                page.show_error(lines);
            }
            FetchOutcome::Failed { error, message } => {
                tracing::error!("Default window fetch failed: {}", error);
                page.show_error(vec![
                    format!("Error: {}", message.unwrap_or(FETCH_FAILURE_TEXT)),
                    error.to_string(),
                ]);
            }
        }

        page.phase()
    }

    /// Custom submit: read the timeframe inputs, fetch, and swap in a fresh results container.
    pub async fn submit_custom_timeframe(
        &self,
        page: &mut Page,
        token: Option<&AuthToken>,
    ) -> PagePhase {
        let query = TimeframeQuery::new(page.timeframe_length(), page.timeframe_unit());
        tracing::info!(
            "Submitting custom timeframe: {} {}",
            query.length,
            query.unit
        );

        page.show_loading();
        let outcome = self.source.fetch_custom_timeframe(token, &query).await;
        page.clear_loading();

        match outcome {
            FetchOutcome::Success(data) => {
                render_all(&data, page.replace_results());
                page.mark_success();
            }
            FetchOutcome::Rejected { status, .. } => {
                tracing::warn!("Custom timeframe fetch rejected with status {}", status);
                page.show_error(vec![format!("Error: {}", status)]);
            }
            FetchOutcome::Failed { error, .. } => {
                tracing::error!("Custom timeframe fetch failed: {}", error);
                page.show_error(vec![format!("Error: {}", error)]);
            }
        }

        page.phase()
    }
}

fn render_all(data: &MetricSeriesCollection, container: &mut ResultsContainer) {
    tracing::debug!("Rendering {} metric series", data.metric_data_results.len());
    for series in &data.metric_data_results {
        render_metric_table(series, container);
    }
}
