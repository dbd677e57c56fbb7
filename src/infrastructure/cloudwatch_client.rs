// CloudWatch metrics API client
use crate::application::metrics_source::{
    AwsErrorBody, FetchError, FetchOutcome, MetricsSource, FETCH_FAILURE_TEXT,
};
use crate::domain::auth::AuthToken;
use crate::domain::metrics::MetricSeriesCollection;
use crate::domain::timeframe::TimeframeQuery;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

#[derive(Debug, Clone)]
pub struct CloudWatchClient {
    base_url: String,
    client: reqwest::Client,
}

impl CloudWatchClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn build_timeframe_url(&self, query: &TimeframeQuery) -> String {
        format!(
            "{}/?timeframeLength={}&timeframeUnit={}",
            self.base_url,
            urlencoding::encode(&query.length),
            urlencoding::encode(&query.unit)
        )
    }

    fn request(&self, url: &str, token: Option<&AuthToken>) -> reqwest::RequestBuilder {
        let request = self.client.get(url);
        match token {
            Some(token) => request
                .header(AUTHORIZATION, token.bearer_header())
                .header(CONTENT_TYPE, "application/json"),
            None => request,
        }
    }

    async fn try_fetch_default(&self, token: Option<&AuthToken>) -> Result<FetchOutcome, FetchError> {
        tracing::debug!(
            "Fetching default window from {} (authenticated: {})",
            self.base_url,
            token.is_some()
        );
        let response = self.request(&self.base_url, token).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            let data: MetricSeriesCollection = serde_json::from_slice(&body)?;
            return Ok(FetchOutcome::Success(data));
        }

        // Error bodies carry awsError/message; unparseable ones count as a failed fetch
        let error_body: serde_json::Value = serde_json::from_slice(&body)?;
        Ok(FetchOutcome::Rejected {
            status: status.as_u16(),
            error_body: Some(AwsErrorBody::from_value(&error_body)),
        })
    }

    async fn try_fetch_custom(
        &self,
        token: Option<&AuthToken>,
        query: &TimeframeQuery,
    ) -> Result<FetchOutcome, FetchError> {
        let token = token.ok_or(FetchError::MissingToken)?;
        let url = self.build_timeframe_url(query);
        tracing::debug!("Fetching custom timeframe from {}", url);

        let response = self.request(&url, Some(token)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Ok(FetchOutcome::Rejected {
                status: status.as_u16(),
                error_body: None,
            });
        }

        let body = response.bytes().await?;
        let data: MetricSeriesCollection = serde_json::from_slice(&body)?;
        Ok(FetchOutcome::Success(data))
    }
}

#[async_trait]
impl MetricsSource for CloudWatchClient {
    async fn fetch_default_window(&self, token: Option<&AuthToken>) -> FetchOutcome {
        match self.try_fetch_default(token).await {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::warn!("Default window fetch failed: {}", error);
                FetchOutcome::Failed {
                    error,
                    message: Some(FETCH_FAILURE_TEXT),
                }
            }
        }
    }

    async fn fetch_custom_timeframe(
        &self,
        token: Option<&AuthToken>,
        query: &TimeframeQuery,
    ) -> FetchOutcome {
        match self.try_fetch_custom(token, query).await {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::warn!("Custom timeframe fetch failed: {}", error);
                FetchOutcome::Failed {
                    error,
                    message: None,
                }
            }
        }
    }
}
