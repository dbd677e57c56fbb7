// Metrics source trait and the normalized fetch outcome
use crate::domain::auth::AuthToken;
use crate::domain::metrics::MetricSeriesCollection;
use crate::domain::timeframe::TimeframeQuery;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

pub const FETCH_FAILURE_TEXT: &str = "There was a problem fetching the data from AWS";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to metrics endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to decode metrics response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no access token available for an authenticated request")]
    MissingToken,
}

/// Structured error fields the metrics API puts in non-2xx bodies.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
}

impl AwsErrorBody {
    pub fn from_value(body: &Value) -> Self {
        Self {
            aws_error: body.get("awsError").and_then(Value::as_str).map(str::to_string),
            message: body.get("message").and_then(Value::as_str).map(str::to_string),
            status: body.get("status").cloned(),
        }
    }
}

#[derive(Debug)]
pub enum FetchOutcome {
    Success(MetricSeriesCollection),
    /// The endpoint answered with a non-2xx status.
    Rejected {
        status: u16,
        error_body: Option<AwsErrorBody>,
    },
    /// Transport failure, bad JSON, or a request that could not be made.
    Failed {
        error: FetchError,
        message: Option<&'static str>,
    },
}

impl FetchOutcome {
    pub fn to_envelope(&self) -> FetchEnvelope<'_> {
        match self {
            FetchOutcome::Success(data) => FetchEnvelope {
                result: true,
                data: Some(data),
                error_message: None,
                error_message_response_headers: None,
                error_message_text: None,
            },
            FetchOutcome::Rejected { status, error_body } => FetchEnvelope {
                result: false,
                data: None,
                error_message: Some(serde_json::json!({ "status": status })),
                error_message_response_headers: error_body.as_ref(),
                error_message_text: None,
            },
            FetchOutcome::Failed { error, message } => FetchEnvelope {
                result: false,
                data: None,
                error_message: Some(Value::String(error.to_string())),
                error_message_response_headers: None,
                error_message_text: *message,
            },
        }
    }
}

/// JSON shape of a fetch outcome: `{result, data}` or `{result, errorMessage, ...}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchEnvelope<'a> {
    pub result: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a MetricSeriesCollection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message_response_headers: Option<&'a AwsErrorBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message_text: Option<&'static str>,
}

#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Fetch the endpoint's default lookback window
    async fn fetch_default_window(&self, token: Option<&AuthToken>) -> FetchOutcome;

    /// Fetch a user-chosen timeframe; always an authenticated request
    async fn fetch_custom_timeframe(
        &self,
        token: Option<&AuthToken>,
        query: &TimeframeQuery,
    ) -> FetchOutcome;
}
