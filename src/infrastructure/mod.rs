// Infrastructure layer - External dependencies and adapters
pub mod cloudwatch_client;
pub mod config;
