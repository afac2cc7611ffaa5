use crate::error::CoreError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stock as ranked on the top-stocks table.
///
/// All scores are on a 0-10 scale; the period returns are percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub symbol: String,
    pub company: String,
    pub price: Decimal,
    pub ai_score: Decimal,
    pub week1: Decimal,
    pub month1: Decimal,
    pub month3: Decimal,
    pub month6: Decimal,
    pub fundamental: Decimal,
    pub technical: Decimal,
    pub sentiment: Decimal,
    pub valuation: Decimal,
    pub industry: Decimal,
    pub trade_ranking: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// One closed recommendation: bought on `buy_date`, sold on `sell_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestRecord {
    pub id: String,
    pub symbol: String,
    pub company: String,
    pub buy_date: NaiveDate,
    pub buy_price: Decimal,
    pub sell_date: NaiveDate,
    pub sell_price: Decimal,
    /// Percentage return of the trade.
    pub returns: Decimal,
    /// Days between buy and sell.
    pub holding_period: u32,
    pub ai_score_at_buy: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl BacktestRecord {
    pub fn is_win(&self) -> bool {
        self.returns > Decimal::ZERO
    }
}

/// A holding of the momentum portfolio within one quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStock {
    pub symbol: String,
    pub company: String,
    /// Portfolio weight in percent.
    pub weight: Decimal,
    pub quarterly_return: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Portfolio versus benchmark return for a single quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterPerformance {
    /// Quarter label such as `Q2-2024`.
    pub quarter: String,
    pub portfolio_return: Decimal,
    pub benchmark_return: Decimal,
}

impl QuarterPerformance {
    pub fn outperformance(&self) -> Decimal {
        self.portfolio_return - self.benchmark_return
    }
}

/// The full composition of the momentum portfolio for one quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterlyPortfolio {
    pub quarter: String,
    /// Human readable period, e.g. `Apr - Jun 2024`.
    pub period: String,
    pub portfolio_return: Decimal,
    pub benchmark_return: Decimal,
    pub stocks: Vec<PortfolioStock>,
}

impl QuarterlyPortfolio {
    pub fn performance(&self) -> QuarterPerformance {
        QuarterPerformance {
            quarter: self.quarter.clone(),
            portfolio_return: self.portfolio_return,
            benchmark_return: self.benchmark_return,
        }
    }

    /// Parses the `Qn-YYYY` label into its quarter number and year.
    pub fn quarter_key(&self) -> Result<(u8, i32), CoreError> {
        parse_quarter(&self.quarter)
    }
}

/// One trading day of price history for a stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDataPoint {
    pub symbol: String,
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted_close: Option<Decimal>,
}

/// Parses a `Qn-YYYY` label, e.g. `Q3-2023` into `(3, 2023)`.
pub fn parse_quarter(label: &str) -> Result<(u8, i32), CoreError> {
    let invalid = || CoreError::InvalidInput("quarter".to_string(), label.to_string());

    let (quarter, year) = label.split_once('-').ok_or_else(invalid)?;
    let number: u8 = quarter
        .strip_prefix('Q')
        .and_then(|n| n.parse().ok())
        .filter(|n| (1..=4).contains(n))
        .ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;

    Ok((number, year))
}

/// Looks up a quarter's portfolio by its label.
pub fn find_quarter<'a>(
    portfolios: &'a [QuarterlyPortfolio],
    label: &str,
) -> Result<&'a QuarterlyPortfolio, CoreError> {
    portfolios
        .iter()
        .find(|p| p.quarter == label)
        .ok_or_else(|| CoreError::UnknownQuarter(label.to_string()))
}

/// Returns quarter labels ordered most recent first.
pub fn quarters_most_recent_first(portfolios: &[QuarterlyPortfolio]) -> Vec<String> {
    let mut keyed: Vec<((i32, u8), &str)> = portfolios
        .iter()
        .filter_map(|p| p.quarter_key().ok().map(|(q, y)| ((y, q), p.quarter.as_str())))
        .collect();
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.into_iter().map(|(_, label)| label.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn portfolio(quarter: &str) -> QuarterlyPortfolio {
        QuarterlyPortfolio {
            quarter: quarter.to_string(),
            period: String::new(),
            portfolio_return: dec!(10),
            benchmark_return: dec!(4),
            stocks: vec![],
        }
    }

    #[test]
    fn parses_quarter_labels() {
        assert_eq!(parse_quarter("Q3-2023").unwrap(), (3, 2023));
        assert!(parse_quarter("Q5-2023").is_err());
        assert!(parse_quarter("2023-Q1").is_err());
        assert!(parse_quarter("Q1").is_err());
    }

    #[test]
    fn quarters_are_listed_most_recent_first() {
        let portfolios = vec![
            portfolio("Q4-2023"),
            portfolio("Q1-2024"),
            portfolio("Q2-2023"),
        ];
        assert_eq!(
            quarters_most_recent_first(&portfolios),
            vec!["Q1-2024", "Q4-2023", "Q2-2023"]
        );
    }

    #[test]
    fn unknown_quarter_is_an_error() {
        let portfolios = vec![portfolio("Q1-2024")];
        assert!(find_quarter(&portfolios, "Q1-2024").is_ok());
        assert_eq!(
            find_quarter(&portfolios, "Q9-1999"),
            Err(CoreError::UnknownQuarter("Q9-1999".to_string()))
        );
    }

    #[test]
    fn outperformance_is_portfolio_minus_benchmark() {
        assert_eq!(portfolio("Q1-2024").performance().outperformance(), dec!(6));
    }

    #[test]
    fn stock_serializes_with_camel_case_fields() {
        let stock = Stock {
            symbol: "TCS".into(),
            company: "Tata Consultancy Services Ltd.".into(),
            price: dec!(3890),
            ai_score: dec!(9.1),
            week1: dec!(1.2),
            month1: dec!(3.4),
            month3: dec!(8.1),
            month6: dec!(15.0),
            fundamental: dec!(9),
            technical: dec!(8.5),
            sentiment: dec!(8),
            valuation: dec!(7),
            industry: dec!(9),
            trade_ranking: "Strong Buy".into(),
            market_cap: None,
            volume: None,
            logo: None,
        };
        let json = serde_json::to_value(&stock).unwrap();
        assert!(json.get("aiScore").is_some());
        assert!(json.get("tradeRanking").is_some());
        assert!(json.get("marketCap").is_none());
    }
}
