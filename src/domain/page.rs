// Dashboard page document model
use super::auth::AuthToken;
use super::table::ResultsContainer;
use super::timeframe::SubmitState;

pub const LOADING_TEXT: &str = "loading . . .";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePhase {
    Idle,
    Loading,
    Success,
    Error,
}

/// A node in the `.loading` status area.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusNode {
    Loading,
    Error(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    phase: PagePhase,
    status: Vec<StatusNode>,
    results: ResultsContainer,
    timeframe_length: String,
    timeframe_unit: String,
    submit: SubmitState,
    access_token: Option<AuthToken>,
}

impl Page {
    pub fn new(title: String, timeframe_length: String, timeframe_unit: String) -> Self {
        let submit = SubmitState::from_length_input(&timeframe_length);
        Self {
            title,
            phase: PagePhase::Idle,
            status: Vec::new(),
            results: ResultsContainer::new(),
            timeframe_length,
            timeframe_unit,
            submit,
            access_token: None,
        }
    }

    pub fn phase(&self) -> PagePhase {
        self.phase
    }

    pub fn status(&self) -> &[StatusNode] {
        &self.status
    }

    pub fn results(&self) -> &ResultsContainer {
        &self.results
    }

    pub fn timeframe_length(&self) -> &str {
        &self.timeframe_length
    }

    pub fn timeframe_unit(&self) -> &str {
        &self.timeframe_unit
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit
    }

    pub fn set_timeframe_length(&mut self, raw: impl Into<String>) {
        self.timeframe_length = raw.into();
        self.update_submit_enablement();
    }

    /// Token the page carries forward into its own timeframe form.
    pub fn access_token(&self) -> Option<&AuthToken> {
        self.access_token.as_ref()
    }

    pub fn set_access_token(&mut self, token: Option<AuthToken>) {
        self.access_token = token;
    }

    pub fn set_timeframe_unit(&mut self, raw: impl Into<String>) {
        self.timeframe_unit = raw.into();
    }

    pub fn update_submit_enablement(&mut self) {
        self.submit = SubmitState::from_length_input(&self.timeframe_length);
    }

    pub fn show_loading(&mut self) {
        self.phase = PagePhase::Loading;
        self.status.push(StatusNode::Loading);
    }

    pub fn clear_loading(&mut self) {
        self.status.retain(|node| *node != StatusNode::Loading);
    }

    pub fn show_error(&mut self, lines: Vec<String>) {
        self.phase = PagePhase::Error;
        self.status.push(StatusNode::Error(lines));
    }

    pub fn mark_success(&mut self) {
        self.phase = PagePhase::Success;
    }

    pub fn results_mut(&mut self) -> &mut ResultsContainer {
        &mut self.results
    }

    /// Drop the current results container and attach a fresh empty one.
    pub fn replace_results(&mut self) -> &mut ResultsContainer {
        self.results = ResultsContainer::new();
        &mut self.results
    }
}
