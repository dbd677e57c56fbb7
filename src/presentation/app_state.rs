// Application state for HTTP handlers
use crate::application::metrics_source::MetricsSource;
use crate::application::page_controller::PageController;
use crate::domain::page::Page;
use crate::infrastructure::config::PageSettings;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub controller: PageController,
    pub source: Arc<dyn MetricsSource>,
    pub page_settings: PageSettings,
}

impl AppState {
    pub fn new(source: Arc<dyn MetricsSource>, page_settings: PageSettings) -> Self {
        Self {
            controller: PageController::new(source.clone()),
            source,
            page_settings,
        }
    }

    /// A fresh page document with the configured defaults.
    pub fn new_page(&self) -> Page {
        Page::new(
            self.page_settings.title.clone(),
            self.page_settings.timeframe_length.clone(),
            self.page_settings.timeframe_unit.clone(),
        )
    }
}
