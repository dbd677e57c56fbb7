// Metric data domain models
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricSeriesCollection {
    pub metric_data_results: Vec<MetricSeries>,
}

/// One metric over a time window. `timestamps` and `values` are parallel arrays.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricSeries {
    pub id: String,
    pub timestamps: Vec<Value>,
    pub values: Vec<Value>,
}

impl MetricSeries {
    #[cfg(test)]
    pub fn new(id: impl Into<String>, timestamps: Vec<Value>, values: Vec<Value>) -> Self {
        Self {
            id: id.into(),
            timestamps,
            values,
        }
    }

    pub fn is_aligned(&self) -> bool {
        self.timestamps.len() == self.values.len()
    }
}

/// Text shown for a single timestamp or value cell.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                return n.to_string();
            }
            match n.as_f64() {
                // 10.0 reads as "10", the way the browser displayed it
                Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{:.0}", f),
                Some(f) => f.to_string(),
                None => n.to_string(),
            }
        }
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
