use crate::error::DbError;
use crate::mock::{
    MockSource, mock_backtests, mock_market_data, mock_quarterly_portfolios, mock_stocks,
};
use crate::repository::{DbRepository, SEARCH_LIMIT};
use async_trait::async_trait;
use chrono::{Days, NaiveDate, Utc};
use core_types::{BacktestRecord, MarketDataPoint, QuarterlyPortfolio, Stock};
use table_view::{TableRecord, TabularView};

/// Anything that can produce a complete record set of `R`.
///
/// The dashboard never sees partial results: a fetch either yields every
/// record or fails with `DbError::DataUnavailable`.
#[async_trait]
pub trait RecordSource<R>: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<R>, DbError>;
}

#[async_trait]
impl RecordSource<Stock> for MockSource {
    async fn fetch_records(&self) -> Result<Vec<Stock>, DbError> {
        self.simulate_load().await;
        Ok(mock_stocks())
    }
}

#[async_trait]
impl RecordSource<BacktestRecord> for MockSource {
    async fn fetch_records(&self) -> Result<Vec<BacktestRecord>, DbError> {
        self.simulate_load().await;
        mock_backtests()
    }
}

#[async_trait]
impl RecordSource<QuarterlyPortfolio> for MockSource {
    async fn fetch_records(&self) -> Result<Vec<QuarterlyPortfolio>, DbError> {
        self.simulate_load().await;
        Ok(mock_quarterly_portfolios())
    }
}

fn unavailable(what: &str, error: DbError) -> DbError {
    tracing::error!(error = %error, "Failed to fetch {what}.");
    if matches!(error, DbError::DataUnavailable(_)) {
        return error;
    }
    DbError::DataUnavailable(format!("{what}: {error}"))
}

#[async_trait]
impl RecordSource<Stock> for DbRepository {
    async fn fetch_records(&self) -> Result<Vec<Stock>, DbError> {
        self.get_current_ai_scores(None)
            .await
            .map_err(|e| unavailable("stocks", e))
    }
}

#[async_trait]
impl RecordSource<BacktestRecord> for DbRepository {
    async fn fetch_records(&self) -> Result<Vec<BacktestRecord>, DbError> {
        self.get_backtest_results(None)
            .await
            .map_err(|e| unavailable("backtest results", e))
    }
}

#[async_trait]
impl RecordSource<QuarterlyPortfolio> for DbRepository {
    async fn fetch_records(&self) -> Result<Vec<QuarterlyPortfolio>, DbError> {
        self.get_quarterly_portfolios()
            .await
            .map_err(|e| unavailable("quarterly portfolios", e))
    }
}

/// The configured backend behind the dashboard.
#[derive(Debug, Clone)]
pub enum DataSource {
    Mock(MockSource),
    Postgres(DbRepository),
}

impl DataSource {
    /// Stocks whose symbol or company contains `query`, at most ten.
    pub async fn search_stocks(&self, query: &str) -> Result<Vec<Stock>, DbError> {
        match self {
            DataSource::Mock(mock) => {
                mock.simulate_load().await;
                Ok(mock.search(query, SEARCH_LIMIT as usize))
            }
            DataSource::Postgres(repo) => repo
                .search_stocks(query)
                .await
                .map_err(|e| unavailable("stock search", e)),
        }
    }

    /// Daily prices of `symbol`, newest first, within the optional date bounds.
    ///
    /// The demo source has no stored history; without bounds it serves the
    /// year up to today.
    pub async fn market_data(
        &self,
        symbol: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<MarketDataPoint>, DbError> {
        match self {
            DataSource::Mock(mock) => {
                mock.simulate_load().await;
                let end = end.unwrap_or_else(|| Utc::now().date_naive());
                let start = start.unwrap_or_else(|| days_before(end, 365));
                Ok(mock_market_data(symbol, start, end))
            }
            DataSource::Postgres(repo) => repo
                .get_market_data(symbol, start, end)
                .await
                .map_err(|e| unavailable("market data", e)),
        }
    }

    /// The last `days` calendar days of prices for `symbol`, newest first.
    pub async fn stock_performance(
        &self,
        symbol: &str,
        days: u32,
    ) -> Result<Vec<MarketDataPoint>, DbError> {
        self.stock_performance_as_of(symbol, days, Utc::now().date_naive()).await
    }

    /// Like `stock_performance`, counting back from `today`.
    pub async fn stock_performance_as_of(
        &self,
        symbol: &str,
        days: u32,
        today: NaiveDate,
    ) -> Result<Vec<MarketDataPoint>, DbError> {
        let start = days_before(today, u64::from(days));
        tracing::debug!(symbol, %start, %today, "Loading price history.");
        self.market_data(symbol, Some(start), Some(today)).await
    }
}

fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}

#[async_trait]
impl<R> RecordSource<R> for DataSource
where
    R: Send + 'static,
    MockSource: RecordSource<R>,
    DbRepository: RecordSource<R>,
{
    async fn fetch_records(&self) -> Result<Vec<R>, DbError> {
        match self {
            DataSource::Mock(mock) => <MockSource as RecordSource<R>>::fetch_records(mock).await,
            DataSource::Postgres(repo) => {
                <DbRepository as RecordSource<R>>::fetch_records(repo).await
            }
        }
    }
}

/// Reloads `view` from `source`.
///
/// On success the view is reset to its default sort, full-domain filters and
/// page 1, and the new record count is returned. On failure the view keeps
/// the records it already had.
pub async fn refresh_view<R, S>(view: &mut TabularView<R>, source: &S) -> Result<usize, DbError>
where
    R: TableRecord + Send,
    S: RecordSource<R> + ?Sized,
{
    match source.fetch_records().await {
        Ok(records) => {
            let count = records.len();
            view.replace_records(records);
            tracing::info!(count, "View refreshed.");
            Ok(count)
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                kept = view.records().len(),
                "Refresh failed; keeping the last loaded records."
            );
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rust_decimal_macros::dec;
    use std::num::NonZeroUsize;
    use std::time::Duration;
    use table_view::{FilterBound, StockScore};

    struct Offline;

    #[async_trait]
    impl RecordSource<Stock> for Offline {
        async fn fetch_records(&self) -> Result<Vec<Stock>, DbError> {
            Err(DbError::DataUnavailable("offline".to_string()))
        }
    }

    fn per_page(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[tokio::test]
    async fn refresh_replaces_records_and_resets_state() {
        let mut view: TabularView<Stock> = TabularView::empty(per_page(20));
        view.set_filter_bound(StockScore::AiScore, FilterBound::Min, dec!(9)).unwrap();

        let count = refresh_view(&mut view, &MockSource::instant()).await.unwrap();

        assert_eq!(count, 25);
        assert_eq!(view.records().len(), 25);
        assert_eq!(view.render().filtered_count, 25);
        assert_eq!(view.total_pages(), 2);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_last_good_records() {
        let mut view: TabularView<Stock> = TabularView::empty(per_page(20));
        refresh_view(&mut view, &MockSource::instant()).await.unwrap();

        let result = refresh_view(&mut view, &Offline).await;

        assert!(matches!(result, Err(DbError::DataUnavailable(_))));
        assert_eq!(view.records().len(), 25);
    }

    #[tokio::test]
    async fn data_source_dispatches_to_the_mock() {
        let source = DataSource::Mock(MockSource::instant());
        let trades = RecordSource::<BacktestRecord>::fetch_records(&source).await.unwrap();
        let quarters = RecordSource::<QuarterlyPortfolio>::fetch_records(&source).await.unwrap();
        assert_eq!(trades.len(), 18);
        assert_eq!(quarters.len(), 6);
        assert_eq!(source.search_stocks("infosys").await.unwrap()[0].symbol, "INFY");
    }

    #[tokio::test]
    async fn stock_performance_counts_back_from_today() {
        let source = DataSource::Mock(MockSource::instant());
        let today = NaiveDate::from_ymd_opt(2024, 6, 28).unwrap();

        let history = source.stock_performance_as_of("TCS", 7, today).await.unwrap();

        // Jun 21 to Jun 28 without the weekend.
        let dates: Vec<u32> = history.iter().map(|p| p.date.day()).collect();
        assert_eq!(dates, vec![28, 27, 26, 25, 24, 21]);
        assert_eq!(history[0].close, dec!(3895.20));
        assert!(source.stock_performance_as_of("NOPE", 7, today).await.unwrap().is_empty());
    }

    #[test]
    fn default_mock_simulates_a_one_second_load() {
        assert_eq!(MockSource::default().delay(), Duration::from_millis(1000));
        assert!(MockSource::instant().delay().is_zero());
    }
}
