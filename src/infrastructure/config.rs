use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str =
    "https://ihr98s7x0f.execute-api.us-east-1.amazonaws.com/testing/yamlcloudwatchtest";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub metrics: MetricsSettings,
    pub page: PageSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_address: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MetricsSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageSettings {
    pub title: String,
    /// Prefilled value of the length input
    pub timeframe_length: String,
    pub timeframe_unit: String,
}

fn builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.bind_address", DEFAULT_BIND_ADDRESS)?
        .set_default("metrics.base_url", DEFAULT_BASE_URL)?
        .set_default("page.title", "CloudWatch Metrics")?
        .set_default("page.timeframe_length", "1")?
        .set_default("page.timeframe_unit", "hours")?)
}

/// Load `config/dashboard.*`, then `DASHBOARD__*` environment overrides.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = builder()?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: DashboardConfig = builder().unwrap().build().unwrap().try_deserialize().unwrap();

        assert_eq!(config.server.bind_address, "0.0.0.0:8080");
        assert_eq!(config.metrics.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.page.timeframe_length, "1");
        assert_eq!(config.page.timeframe_unit, "hours");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
            [metrics]
            base_url = "http://localhost:9000/metrics"

            [page]
            title = "Staging"
        "#;
        let config: DashboardConfig = builder()
            .unwrap()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.metrics.base_url, "http://localhost:9000/metrics");
        assert_eq!(config.page.title, "Staging");
        assert_eq!(config.page.timeframe_unit, "hours");
    }
}
