use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{
    BacktestSettings, DataSourceKind, DataSourceSettings, ServerSettings, Settings, ViewSettings,
};

/// Loads the application configuration from a TOML file plus `APP_*` environment variables.
///
/// A missing file is not an error: every section falls back to its defaults.
/// Environment variables use `__` between section and key, e.g. `APP_SERVER__PORT=8080`.
pub fn load_config(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(environment());

    finish(builder)
}

/// Loads the configuration from an in-memory TOML document, still honouring the environment.
pub fn load_config_from_str(toml: &str) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .add_source(environment());

    finish(builder)
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn finish(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Settings, ConfigError> {
    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.build()?.try_deserialize::<Settings>()?;
    settings.validate()?;

    tracing::debug!(
        data_source = ?settings.data_source.kind,
        viewport = ?settings.view.viewport,
        port = settings.server.port,
        "Configuration loaded."
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::ViewportClass;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_document_uses_defaults() {
        let settings = load_config_from_str("").unwrap();
        assert_eq!(settings.view.stocks_per_page.get(), 20);
        assert_eq!(settings.view.backtests_per_page.get(), 6);
        assert_eq!(settings.data_source.kind, DataSourceKind::Mock);
        assert_eq!(settings.data_source.simulated_load_ms, 1000);
        assert_eq!(settings.backtest.advertised_total_trades, 54);
        assert_eq!(settings.backtest.advertised_win_rate_pct, dec!(81));
        assert_eq!(settings.server.socket_addr().port(), 3000);
    }

    #[test]
    fn sections_override_defaults() {
        let settings = load_config_from_str(
            r#"
            [view]
            stocks_per_page = 10
            viewport = "mobile"

            [data_source]
            kind = "postgres"
            simulated_load_ms = 0

            [server]
            host = "127.0.0.1"
            port = 8081
            "#,
        )
        .unwrap();

        assert_eq!(settings.view.stocks_per_page.get(), 10);
        assert_eq!(settings.view.backtests_per_page.get(), 6);
        assert_eq!(settings.view.viewport, ViewportClass::Mobile);
        assert_eq!(settings.data_source.kind, DataSourceKind::Postgres);
        assert_eq!(settings.server.socket_addr().to_string(), "127.0.0.1:8081");
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let result = load_config_from_str("[view]\nbacktests_per_page = 0\n");
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn win_rate_above_one_hundred_is_rejected() {
        let result = load_config_from_str("[backtest]\nadvertised_win_rate_pct = 181\n");
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = load_config("does-not-exist.toml").unwrap();
        assert_eq!(settings.view.holdings_per_page.get(), 12);
    }
}
