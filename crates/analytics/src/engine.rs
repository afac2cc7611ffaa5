use crate::aggregate::{average, count_positive, price_change_pct, win_rate};
use crate::report::{BacktestSummary, PerformanceStats, PriceHistorySummary};
use core_types::{BacktestRecord, MarketDataPoint, QuarterPerformance};
use rust_decimal::{Decimal, RoundingStrategy};

/// A stateless calculator for the dashboard's aggregate statistics.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Averages and win rate of the portfolio against its benchmark.
    ///
    /// # Arguments
    ///
    /// * `quarters` - One row per quarter, in any order.
    pub fn performance_stats(&self, quarters: &[QuarterPerformance]) -> PerformanceStats {
        if quarters.is_empty() {
            return PerformanceStats::new();
        }

        let avg_portfolio_return = average(quarters, |q| q.portfolio_return);
        let avg_benchmark_return = average(quarters, |q| q.benchmark_return);
        let avg_outperformance = avg_portfolio_return
            .zip(avg_benchmark_return)
            .map(|(portfolio, benchmark)| portfolio - benchmark);

        PerformanceStats {
            avg_portfolio_return,
            avg_benchmark_return,
            avg_outperformance,
            total_quarters: quarters.len(),
            win_rate_pct: win_rate(quarters, QuarterPerformance::outperformance),
        }
    }

    /// Header statistics for the backtest history.
    ///
    /// # Arguments
    ///
    /// * `records` - The full record set; filters applied to the table do not apply here.
    /// * `advertised_total_trades`, `advertised_win_rate_pct` - The published figures,
    ///   passed through unchanged.
    pub fn backtest_summary(
        &self,
        records: &[BacktestRecord],
        advertised_total_trades: u32,
        advertised_win_rate_pct: Decimal,
    ) -> BacktestSummary {
        let average_holding_days = average(records, |r| Decimal::from(r.holding_period))
            .map(|days| days.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero));

        let summary = BacktestSummary {
            total_records: records.len(),
            average_return_pct: average(records, |r| r.returns),
            average_holding_days,
            winning_trades: count_positive(records, |r| r.returns),
            derived_win_rate_pct: win_rate(records, |r| r.returns),
            advertised_total_trades,
            advertised_win_rate_pct,
        };

        if summary.derived_win_rate_pct.is_some_and(|derived| derived != advertised_win_rate_pct) {
            tracing::debug!(
                derived = ?summary.derived_win_rate_pct,
                advertised = %advertised_win_rate_pct,
                "Derived win rate differs from the advertised figure."
            );
        }

        summary
    }

    /// First and last close, the change between them and the range of a
    /// stock's daily history.
    ///
    /// # Arguments
    ///
    /// * `history` - Daily points of a single stock, in any order.
    pub fn price_history_summary(&self, history: &[MarketDataPoint]) -> PriceHistorySummary {
        let first = history.iter().min_by_key(|p| p.date);
        let last = history.iter().max_by_key(|p| p.date);
        let first_close = first.map(|p| p.close);
        let last_close = last.map(|p| p.close);

        PriceHistorySummary {
            trading_days: history.len(),
            first_close,
            last_close,
            change_pct: first_close
                .zip(last_close)
                .and_then(|(first, last)| price_change_pct(last, first)),
            high: history.iter().map(|p| p.high).max(),
            low: history.iter().map(|p| p.low).min(),
        }
    }
}
