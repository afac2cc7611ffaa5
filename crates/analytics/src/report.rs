use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio versus benchmark statistics over a run of quarters.
///
/// The `Option` fields are `None` when there are no quarters to average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceStats {
    pub avg_portfolio_return: Option<Decimal>,
    pub avg_benchmark_return: Option<Decimal>,
    /// Average portfolio return minus average benchmark return.
    pub avg_outperformance: Option<Decimal>,
    pub total_quarters: usize,
    /// Share of quarters that beat the benchmark, in percent.
    pub win_rate_pct: Option<Decimal>,
}

impl PerformanceStats {
    /// The all-empty report used when there are no quarters.
    pub fn new() -> Self {
        Self {
            avg_portfolio_return: None,
            avg_benchmark_return: None,
            avg_outperformance: None,
            total_quarters: 0,
            win_rate_pct: None,
        }
    }
}

impl Default for PerformanceStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Header statistics of the backtest history page.
///
/// Averages cover the full, unfiltered record set. The `advertised_*` numbers
/// are the published track-record figures and are reported next to, not in
/// place of, the values derived from the records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestSummary {
    pub total_records: usize,
    pub average_return_pct: Option<Decimal>,
    /// Mean holding period in whole days, rounded half up.
    pub average_holding_days: Option<Decimal>,
    pub winning_trades: usize,
    pub derived_win_rate_pct: Option<Decimal>,
    pub advertised_total_trades: u32,
    pub advertised_win_rate_pct: Decimal,
}

/// Price movement of one stock over a window of daily history.
///
/// Every `Option` is `None` for an empty window; `change_pct` is also `None`
/// when the opening close is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistorySummary {
    pub trading_days: usize,
    pub first_close: Option<Decimal>,
    pub last_close: Option<Decimal>,
    /// Percentage change from the first to the last close.
    pub change_pct: Option<Decimal>,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
}
