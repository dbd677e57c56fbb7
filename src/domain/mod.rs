// Domain layer - Metric models and the page document
pub mod auth;
pub mod label;
pub mod metrics;
pub mod page;
pub mod table;
pub mod timeframe;
