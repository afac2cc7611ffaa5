use crate::DbError;
use chrono::NaiveDate;
use core_types::{
    BacktestRecord, MarketDataPoint, PortfolioStock, QuarterPerformance, QuarterlyPortfolio, Stock,
    format_market_cap, group_indian,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::postgres::PgPool;
use uuid::Uuid;

/// Maximum number of rows returned by a stock search.
pub const SEARCH_LIMIT: i64 = 10;

/// The `DbRepository` provides a read-only, application-specific interface
/// to the dashboard tables. It encapsulates all SQL queries and row mapping.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

/// A row of the `current_ai_scores` view.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DbAiScore {
    pub stock_symbol: String,
    pub company_name: String,
    pub price: Decimal,
    pub ai_score: Decimal,
    pub fundamental_score: Decimal,
    pub technical_score: Decimal,
    pub sentiment_score: Decimal,
    pub valuation_score: Decimal,
    pub industry_score: Decimal,
    pub return_1w: Decimal,
    pub return_1m: Decimal,
    pub return_3m: Decimal,
    pub return_6m: Decimal,
    pub trade_ranking: String,
    pub market_cap_cr: Option<Decimal>,
    pub volume: Option<i64>,
    pub logo_url: Option<String>,
}

impl From<DbAiScore> for Stock {
    fn from(row: DbAiScore) -> Self {
        Stock {
            symbol: row.stock_symbol,
            company: row.company_name,
            price: row.price,
            ai_score: row.ai_score,
            week1: row.return_1w,
            month1: row.return_1m,
            month3: row.return_3m,
            month6: row.return_6m,
            fundamental: row.fundamental_score,
            technical: row.technical_score,
            sentiment: row.sentiment_score,
            valuation: row.valuation_score,
            industry: row.industry_score,
            trade_ranking: row.trade_ranking,
            market_cap: row.market_cap_cr.map(format_market_cap),
            volume: row
                .volume
                .filter(|v| *v >= 0)
                .map(|v| group_indian(&v.to_string())),
            logo: row.logo_url,
        }
    }
}

/// A row of the `backtest_results` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DbBacktestResult {
    pub id: Uuid,
    pub strategy_name: String,
    pub stock_symbol: String,
    pub company_name: String,
    pub buy_date: NaiveDate,
    pub sell_date: NaiveDate,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
    pub total_return: Decimal,
    pub holding_period: i32,
    pub ai_score_at_buy: Option<Decimal>,
    pub logo_url: Option<String>,
}

impl From<DbBacktestResult> for BacktestRecord {
    fn from(row: DbBacktestResult) -> Self {
        BacktestRecord {
            id: row.id.to_string(),
            symbol: row.stock_symbol,
            company: row.company_name,
            buy_date: row.buy_date,
            buy_price: row.buy_price,
            sell_date: row.sell_date,
            sell_price: row.sell_price,
            returns: row.total_return,
            holding_period: u32::try_from(row.holding_period).unwrap_or(0),
            ai_score_at_buy: row.ai_score_at_buy.unwrap_or(Decimal::ZERO),
            logo: row.logo_url,
        }
    }
}

/// A row of the `portfolio_performance` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DbPortfolioPerformance {
    /// `Q1` to `Q4`.
    pub quarter: String,
    pub year: i32,
    pub period: String,
    pub portfolio_return: Decimal,
    pub benchmark_return: Decimal,
}

impl DbPortfolioPerformance {
    /// The `Qn-YYYY` label used everywhere above the database.
    pub fn label(&self) -> String {
        format!("{}-{}", self.quarter, self.year)
    }
}

impl From<DbPortfolioPerformance> for QuarterPerformance {
    fn from(row: DbPortfolioPerformance) -> Self {
        QuarterPerformance {
            quarter: row.label(),
            portfolio_return: row.portfolio_return,
            benchmark_return: row.benchmark_return,
        }
    }
}

/// A row of the `portfolio_constituents` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DbConstituent {
    pub quarter: String,
    pub year: i32,
    pub stock_symbol: String,
    pub company_name: String,
    pub weight: Decimal,
    pub quarterly_return: Option<Decimal>,
    pub logo_url: Option<String>,
}

impl From<DbConstituent> for PortfolioStock {
    fn from(row: DbConstituent) -> Self {
        PortfolioStock {
            symbol: row.stock_symbol,
            company: row.company_name,
            weight: row.weight,
            quarterly_return: row.quarterly_return.unwrap_or(Decimal::ZERO),
            logo: row.logo_url,
        }
    }
}

/// A row of the `market_data` table.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct DbMarketData {
    pub stock_symbol: String,
    pub date: NaiveDate,
    pub open_price: Decimal,
    pub high_price: Decimal,
    pub low_price: Decimal,
    pub close_price: Decimal,
    pub volume: i64,
    pub adjusted_close: Option<Decimal>,
}

impl From<DbMarketData> for MarketDataPoint {
    fn from(row: DbMarketData) -> Self {
        MarketDataPoint {
            symbol: row.stock_symbol,
            date: row.date,
            open: row.open_price,
            high: row.high_price,
            low: row.low_price,
            close: row.close_price,
            volume: row.volume,
            adjusted_close: row.adjusted_close,
        }
    }
}

/// Escapes `%`, `_` and `\` so user input matches literally inside `ILIKE`.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Latest AI score per stock, best first. `None` returns every stock.
    pub async fn get_current_ai_scores(&self, limit: Option<i64>) -> Result<Vec<Stock>, DbError> {
        let rows = sqlx::query_as::<_, DbAiScore>(
            r#"
            SELECT stock_symbol, company_name, price, ai_score, fundamental_score,
                   technical_score, sentiment_score, valuation_score, industry_score,
                   return_1w, return_1m, return_3m, return_6m, trade_ranking,
                   market_cap_cr, volume, logo_url
            FROM current_ai_scores
            ORDER BY ai_score DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Stock::from).collect())
    }

    /// Case-insensitive substring search over symbol and company name.
    pub async fn search_stocks(&self, query: &str) -> Result<Vec<Stock>, DbError> {
        let pattern = format!("%{}%", escape_like(query.trim()));
        let rows = sqlx::query_as::<_, DbAiScore>(
            r#"
            SELECT stock_symbol, company_name, price, ai_score, fundamental_score,
                   technical_score, sentiment_score, valuation_score, industry_score,
                   return_1w, return_1m, return_3m, return_6m, trade_ranking,
                   market_cap_cr, volume, logo_url
            FROM current_ai_scores
            WHERE stock_symbol ILIKE $1 OR company_name ILIKE $1
            ORDER BY ai_score DESC
            LIMIT $2
            "#,
        )
        .bind(pattern)
        .bind(SEARCH_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Stock::from).collect())
    }

    /// Closed recommendations, newest buy first, optionally for a single strategy.
    pub async fn get_backtest_results(
        &self,
        strategy_name: Option<&str>,
    ) -> Result<Vec<BacktestRecord>, DbError> {
        let rows = sqlx::query_as::<_, DbBacktestResult>(
            r#"
            SELECT id, strategy_name, stock_symbol, company_name, buy_date, sell_date,
                   buy_price, sell_price, total_return, holding_period, ai_score_at_buy, logo_url
            FROM backtest_results
            WHERE $1::TEXT IS NULL OR strategy_name = $1
            ORDER BY buy_date DESC
            "#,
        )
        .bind(strategy_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BacktestRecord::from).collect())
    }

    /// Quarterly portfolio and benchmark returns, most recent first.
    pub async fn get_portfolio_performance(&self) -> Result<Vec<DbPortfolioPerformance>, DbError> {
        let rows = sqlx::query_as::<_, DbPortfolioPerformance>(
            r#"
            SELECT quarter, year, period, portfolio_return, benchmark_return
            FROM portfolio_performance
            ORDER BY year DESC, quarter DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Holdings of one quarter, heaviest first.
    ///
    /// # Arguments
    ///
    /// * `quarter` - `Q1` to `Q4`.
    /// * `year` - Calendar year of the quarter.
    pub async fn get_portfolio_constituents(
        &self,
        quarter: &str,
        year: i32,
    ) -> Result<Vec<PortfolioStock>, DbError> {
        let rows = sqlx::query_as::<_, DbConstituent>(
            r#"
            SELECT quarter, year, stock_symbol, company_name, weight, quarterly_return, logo_url
            FROM portfolio_constituents
            WHERE quarter = $1 AND year = $2
            ORDER BY weight DESC
            "#,
        )
        .bind(quarter)
        .bind(year)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PortfolioStock::from).collect())
    }

    /// Every stored quarter joined with its holdings, most recent first.
    pub async fn get_quarterly_portfolios(&self) -> Result<Vec<QuarterlyPortfolio>, DbError> {
        let performance = self.get_portfolio_performance().await?;
        let mut portfolios = Vec::with_capacity(performance.len());
        for row in performance {
            let stocks = self.get_portfolio_constituents(&row.quarter, row.year).await?;
            portfolios.push(QuarterlyPortfolio {
                quarter: row.label(),
                period: row.period,
                portfolio_return: row.portfolio_return,
                benchmark_return: row.benchmark_return,
                stocks,
            });
        }
        Ok(portfolios)
    }

    /// Daily prices of `symbol`, newest first, within the optional date bounds.
    ///
    /// # Arguments
    ///
    /// * `start` - Earliest date to include; `None` means no lower bound.
    /// * `end` - Latest date to include; `None` means no upper bound.
    pub async fn get_market_data(
        &self,
        symbol: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<MarketDataPoint>, DbError> {
        let rows = sqlx::query_as::<_, DbMarketData>(
            r#"
            SELECT stock_symbol, date, open_price, high_price, low_price, close_price,
                   volume, adjusted_close
            FROM market_data
            WHERE stock_symbol = $1
              AND ($2::DATE IS NULL OR date >= $2)
              AND ($3::DATE IS NULL OR date <= $3)
            ORDER BY date DESC
            "#,
        )
        .bind(symbol)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MarketDataPoint::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("TCS"), "TCS");
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }

    #[test]
    fn ai_score_row_becomes_a_display_ready_stock() {
        let row = DbAiScore {
            stock_symbol: "RELIANCE".to_string(),
            company_name: "Reliance Industries Ltd.".to_string(),
            price: dec!(2847.65),
            ai_score: dec!(9.2),
            fundamental_score: dec!(8.8),
            technical_score: dec!(9.0),
            sentiment_score: dec!(8.5),
            valuation_score: dec!(7.9),
            industry_score: dec!(8.7),
            return_1w: dec!(2.1),
            return_1m: dec!(5.4),
            return_3m: dec!(12.8),
            return_6m: dec!(18.3),
            trade_ranking: "Strong Buy".to_string(),
            market_cap_cr: Some(dec!(1926000)),
            volume: Some(8_450_000),
            logo_url: None,
        };

        let stock = Stock::from(row);
        assert_eq!(stock.symbol, "RELIANCE");
        assert_eq!(stock.week1, dec!(2.1));
        assert_eq!(stock.market_cap.as_deref(), Some("₹19.3L Cr"));
        assert_eq!(stock.volume.as_deref(), Some("84,50,000"));
    }

    #[test]
    fn backtest_row_maps_missing_score_to_zero() {
        let id = Uuid::new_v4();
        let row = DbBacktestResult {
            id,
            strategy_name: "ai-momentum".to_string(),
            stock_symbol: "TCS".to_string(),
            company_name: "Tata Consultancy Services Ltd.".to_string(),
            buy_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            sell_date: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
            buy_price: dec!(3700),
            sell_price: dec!(4070),
            total_return: dec!(10),
            holding_period: 60,
            ai_score_at_buy: None,
            logo_url: None,
        };

        let record = BacktestRecord::from(row);
        assert_eq!(record.id, id.to_string());
        assert_eq!(record.holding_period, 60);
        assert_eq!(record.ai_score_at_buy, Decimal::ZERO);
    }

    #[test]
    fn performance_row_is_labelled_quarter_dash_year() {
        let row = DbPortfolioPerformance {
            quarter: "Q3".to_string(),
            year: 2023,
            period: "Jul - Sep 2023".to_string(),
            portfolio_return: dec!(15.7),
            benchmark_return: dec!(9.2),
        };
        let performance = QuarterPerformance::from(row);
        assert_eq!(performance.quarter, "Q3-2023");
        assert_eq!(performance.outperformance(), dec!(6.5));
    }

    #[test]
    fn market_data_row_keeps_its_prices() {
        let row = DbMarketData {
            stock_symbol: "INFY".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(),
            open_price: dec!(1532.10),
            high_price: dec!(1556.00),
            low_price: dec!(1528.45),
            close_price: dec!(1548.90),
            volume: 6_740_000,
            adjusted_close: None,
        };

        let point = MarketDataPoint::from(row);
        assert_eq!(point.symbol, "INFY");
        assert_eq!(point.close, dec!(1548.90));
        assert_eq!(point.low, dec!(1528.45));
        assert_eq!(point.adjusted_close, None);
    }
}
