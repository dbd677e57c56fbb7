// Application layer - Use cases and the metrics source seam
pub mod metrics_source;
pub mod page_controller;
