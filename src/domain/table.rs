// Table descriptions built from metric series
use super::label::clean_metric_name;
use super::metrics::{cell_text, MetricSeries};

pub const METRIC_NAME_HEADER: &str = "Metric Name";

/// One rendered metric: a header row of timestamps and a single body row of values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricTable {
    pub label: String,
    pub timestamps: Vec<String>,
    pub values: Vec<String>,
}

impl MetricTable {
    pub fn from_series(series: &MetricSeries) -> Self {
        Self {
            label: clean_metric_name(&series.id),
            timestamps: series.timestamps.iter().map(cell_text).collect(),
            values: series.values.iter().map(cell_text).collect(),
        }
    }

    pub fn header_cells(&self) -> Vec<&str> {
        std::iter::once(METRIC_NAME_HEADER)
            .chain(self.timestamps.iter().map(String::as_str))
            .collect()
    }

    pub fn body_cells(&self) -> Vec<&str> {
        std::iter::once(self.label.as_str())
            .chain(self.values.iter().map(String::as_str))
            .collect()
    }
}

/// The `#results` section that tables are appended to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsContainer {
    tables: Vec<MetricTable>,
}

impl ResultsContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tables(&self) -> &[MetricTable] {
        &self.tables
    }

    pub fn append(&mut self, table: MetricTable) {
        self.tables.push(table);
    }
}

/// Build the table for `series` and append it to `container`.
/// Never clears what the container already holds.
pub fn render_metric_table(series: &MetricSeries, container: &mut ResultsContainer) {
    if !series.is_aligned() {
        tracing::warn!(
            "Series {} has {} timestamps but {} values",
            series.id,
            series.timestamps.len(),
            series.values.len()
        );
    }
    container.append(MetricTable::from_series(series));
}
