// HTTP request handlers
use crate::domain::auth::AuthToken;
use crate::domain::timeframe::{SubmitState, TimeframeQuery};
use crate::presentation::app_state::AppState;
use crate::presentation::html::render_page;
use axum::{
    extract::{Query, RawQuery, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeframeParams {
    pub timeframe_length: Option<String>,
    pub timeframe_unit: Option<String>,
}

impl TimeframeParams {
    /// The submitted timeframe, if both inputs were sent.
    fn submitted(&self) -> Option<(&str, &str)> {
        match (&self.timeframe_length, &self.timeframe_unit) {
            (Some(length), Some(unit)) => Some((length.as_str(), unit.as_str())),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubmitStateResponse {
    pub enabled: bool,
    pub class: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// An `Authorization: Bearer` header wins; otherwise `access_token=` in the query.
pub fn resolve_token(headers: &HeaderMap, raw_query: Option<&str>) -> Option<AuthToken> {
    let from_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(AuthToken::new);

    from_header.or_else(|| {
        let token = raw_query.and_then(AuthToken::from_fragment)?;
        // Form submits percent-encode the hidden token field
        match urlencoding::decode(token.as_str()) {
            Ok(decoded) => Some(AuthToken::new(decoded.into_owned())),
            Err(_) => Some(token),
        }
    })
}

/// Dashboard page: initial load, or a custom timeframe submit
pub async fn dashboard(
    headers: HeaderMap,
    RawQuery(raw_query): RawQuery,
    Query(params): Query<TimeframeParams>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let token = resolve_token(&headers, raw_query.as_deref());
    let mut page = state.new_page();
    page.set_access_token(token.clone());

    if let Some((length, unit)) = params.submitted() {
        page.set_timeframe_length(length);
        page.set_timeframe_unit(unit);
    }

    let phase = if params.submitted().is_some() && page.submit_state().is_enabled() {
        state
            .controller
            .submit_custom_timeframe(&mut page, token.as_ref())
            .await
    } else {
        state
            .controller
            .display_metric_tables(&mut page, token.as_ref())
            .await
    };
    tracing::debug!("Dashboard rendered in phase {:?}", phase);

    Html(render_page(&page))
}

/// Raw fetch envelope as JSON
pub async fn metrics_api(
    headers: HeaderMap,
    RawQuery(raw_query): RawQuery,
    Query(params): Query<TimeframeParams>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let token = resolve_token(&headers, raw_query.as_deref());

    let outcome = match params.submitted() {
        Some((length, unit)) if SubmitState::from_length_input(length).is_enabled() => {
            let query = TimeframeQuery::new(length, unit);
            state
                .source
                .fetch_custom_timeframe(token.as_ref(), &query)
                .await
        }
        _ => state.source.fetch_default_window(token.as_ref()).await,
    };

    // Serialized here, while the envelope can still borrow from the outcome
    Json(outcome.to_envelope()).into_response()
}

/// Input gate evaluation for the current length input
pub async fn submit_state(Query(params): Query<TimeframeParams>) -> Json<SubmitStateResponse> {
    let state = SubmitState::from_length_input(params.timeframe_length.as_deref().unwrap_or(""));
    Json(SubmitStateResponse {
        enabled: state.is_enabled(),
        class: state.css_class(),
    })
}
