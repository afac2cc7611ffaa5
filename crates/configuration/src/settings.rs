use crate::error::ConfigError;
use core_types::ViewportClass;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroUsize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub view: ViewSettings,
    pub data_source: DataSourceSettings,
    pub server: ServerSettings,
    pub backtest: BacktestSettings,
}

impl Settings {
    /// Checks the cross-field rules that deserialization alone cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let win_rate = self.backtest.advertised_win_rate_pct;
        if win_rate < Decimal::ZERO || win_rate > Decimal::ONE_HUNDRED {
            return Err(ConfigError::ValidationError(format!(
                "backtest.advertised_win_rate_pct must be between 0 and 100, got {win_rate}"
            )));
        }
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must not be 0".to_string(),
            ));
        }
        Ok(())
    }
}

const STOCKS_PER_PAGE: NonZeroUsize = NonZeroUsize::new(20).unwrap();
const BACKTESTS_PER_PAGE: NonZeroUsize = NonZeroUsize::new(6).unwrap();
const HOLDINGS_PER_PAGE: NonZeroUsize = NonZeroUsize::new(12).unwrap();

/// Page sizes and the viewport the tables are laid out for.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub stocks_per_page: NonZeroUsize,
    pub backtests_per_page: NonZeroUsize,
    pub holdings_per_page: NonZeroUsize,
    pub viewport: ViewportClass,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            stocks_per_page: STOCKS_PER_PAGE,
            backtests_per_page: BACKTESTS_PER_PAGE,
            holdings_per_page: HOLDINGS_PER_PAGE,
            viewport: ViewportClass::Desktop,
        }
    }
}

/// Where the record sets come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceKind {
    /// The bundled demo dataset.
    #[default]
    Mock,
    /// PostgreSQL at `DATABASE_URL`.
    Postgres,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataSourceSettings {
    pub kind: DataSourceKind,
    /// Artificial latency of the mock source, in milliseconds.
    pub simulated_load_ms: u64,
}

impl Default for DataSourceSettings {
    fn default() -> Self {
        Self {
            kind: DataSourceKind::Mock,
            simulated_load_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
        }
    }
}

/// Published track-record figures shown next to the derived statistics.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BacktestSettings {
    pub advertised_total_trades: u32,
    pub advertised_win_rate_pct: Decimal,
}

impl Default for BacktestSettings {
    fn default() -> Self {
        Self {
            advertised_total_trades: 54,
            advertised_win_rate_pct: dec!(81),
        }
    }
}
