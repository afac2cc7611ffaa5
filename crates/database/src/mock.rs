use crate::error::DbError;
use chrono::{Datelike, NaiveDate, Weekday};
use core_types::{
    BacktestRecord, MarketDataPoint, PortfolioStock, QuarterlyPortfolio, Stock, format_market_cap,
    group_indian,
};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::time::Duration;

/// The bundled demo dataset, served after an artificial delay so the
/// loading states of a client can be exercised without a database.
#[derive(Debug, Clone)]
pub struct MockSource {
    delay: Duration,
}

impl MockSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// A source that answers immediately.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub(crate) async fn simulate_load(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    /// Case-insensitive substring match on symbol or company, best score first.
    pub fn search(&self, query: &str, limit: usize) -> Vec<Stock> {
        let needle = query.trim().to_lowercase();
        let mut hits: Vec<Stock> = mock_stocks()
            .into_iter()
            .filter(|s| {
                s.symbol.to_lowercase().contains(&needle)
                    || s.company.to_lowercase().contains(&needle)
            })
            .collect();
        hits.sort_by(|a, b| b.ai_score.cmp(&a.ai_score));
        hits.truncate(limit);
        hits
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

fn logo_for(symbol: &str) -> Option<String> {
    let domain = match symbol {
        "RELIANCE" => "ril.com",
        "TCS" => "tcs.com",
        "HDFCBANK" => "hdfcbank.com",
        "INFY" => "infosys.com",
        "ICICIBANK" => "icicibank.com",
        "HINDUNILVR" => "hul.co.in",
        "ITC" => "itcportal.com",
        "SBIN" => "sbi.co.in",
        "BHARTIARTL" => "airtel.in",
        "ASIANPAINT" => "asianpaints.com",
        "MARUTI" => "marutisuzuki.com",
        "KOTAKBANK" => "kotak.com",
        "TITAN" => "titan.co.in",
        "NESTLEIND" => "nestle.in",
        "HCLTECH" => "hcltech.com",
        "WIPRO" => "wipro.com",
        "AXISBANK" => "axisbank.com",
        _ => return None,
    };
    Some(format!("https://logo.clearbit.com/{domain}"))
}

/// One line of the demo stock table. Prices are in paise, returns and scores in tenths.
struct StockRow {
    symbol: &'static str,
    company: &'static str,
    price_paise: i64,
    returns: [i64; 4],
    scores: [i64; 6],
    ranking: &'static str,
    market_cap_cr: i64,
    volume: i64,
}

#[rustfmt::skip]
const STOCK_ROWS: [StockRow; 25] = [
    StockRow { symbol: "RELIANCE", company: "Reliance Industries Ltd.", price_paise: 284765, returns: [21, 54, 128, 183], scores: [92, 88, 90, 85, 79, 87], ranking: "Strong Buy", market_cap_cr: 1926000, volume: 8450000 },
    StockRow { symbol: "TCS", company: "Tata Consultancy Services Ltd.", price_paise: 389520, returns: [15, 42, 97, 156], scores: [91, 93, 86, 88, 74, 90], ranking: "Strong Buy", market_cap_cr: 1412000, volume: 2310000 },
    StockRow { symbol: "BHARTIARTL", company: "Bharti Airtel Ltd.", price_paise: 145230, returns: [32, 71, 154, 246], scores: [90, 84, 93, 89, 72, 86], ranking: "Strong Buy", market_cap_cr: 862000, volume: 5120000 },
    StockRow { symbol: "TITAN", company: "Titan Company Ltd.", price_paise: 341275, returns: [-4, 38, 112, 201], scores: [89, 87, 88, 90, 65, 85], ranking: "Strong Buy", market_cap_cr: 302000, volume: 1180000 },
    StockRow { symbol: "HDFCBANK", company: "HDFC Bank Ltd.", price_paise: 165840, returns: [8, 26, 74, 119], scores: [88, 91, 82, 84, 83, 88], ranking: "Strong Buy", market_cap_cr: 1261000, volume: 14600000 },
    StockRow { symbol: "INFY", company: "Infosys Ltd.", price_paise: 154890, returns: [12, 35, 88, 132], scores: [87, 89, 84, 83, 78, 90], ranking: "Buy", market_cap_cr: 642000, volume: 6740000 },
    StockRow { symbol: "NESTLEIND", company: "Nestle India Ltd.", price_paise: 252460, returns: [-7, 19, 64, 142], scores: [86, 90, 80, 86, 61, 84], ranking: "Buy", market_cap_cr: 243000, volume: 910000 },
    StockRow { symbol: "ICICIBANK", company: "ICICI Bank Ltd.", price_paise: 112475, returns: [18, 44, 91, 137], scores: [86, 88, 85, 82, 80, 88], ranking: "Buy", market_cap_cr: 790000, volume: 12800000 },
    StockRow { symbol: "HCLTECH", company: "HCL Technologies Ltd.", price_paise: 147320, returns: [6, 29, 81, 124], scores: [85, 86, 83, 80, 79, 90], ranking: "Buy", market_cap_cr: 399000, volume: 3020000 },
    StockRow { symbol: "LT", company: "Larsen & Toubro Ltd.", price_paise: 356840, returns: [24, 47, 102, 171], scores: [84, 85, 87, 81, 72, 83], ranking: "Buy", market_cap_cr: 490000, volume: 1870000 },
    StockRow { symbol: "AXISBANK", company: "Axis Bank Ltd.", price_paise: 108960, returns: [-12, 17, 58, 96], scores: [83, 84, 79, 80, 84, 88], ranking: "Buy", market_cap_cr: 336000, volume: 9450000 },
    StockRow { symbol: "BAJFINANCE", company: "Bajaj Finance Ltd.", price_paise: 712540, returns: [9, -21, 34, 88], scores: [82, 86, 74, 78, 70, 84], ranking: "Buy", market_cap_cr: 441000, volume: 1520000 },
    StockRow { symbol: "SUNPHARMA", company: "Sun Pharmaceutical Industries Ltd.", price_paise: 152980, returns: [14, 39, 83, 142], scores: [81, 82, 84, 79, 73, 80], ranking: "Buy", market_cap_cr: 367000, volume: 2640000 },
    StockRow { symbol: "WIPRO", company: "Wipro Ltd.", price_paise: 48715, returns: [3, 12, 46, 79], scores: [79, 80, 76, 74, 77, 90], ranking: "Buy", market_cap_cr: 254000, volume: 7910000 },
    StockRow { symbol: "HINDUNILVR", company: "Hindustan Unilever Ltd.", price_paise: 243560, returns: [-3, 8, 27, 61], scores: [78, 85, 70, 77, 66, 84], ranking: "Hold", market_cap_cr: 572000, volume: 1390000 },
    StockRow { symbol: "MARUTI", company: "Maruti Suzuki India Ltd.", price_paise: 1245630, returns: [11, 23, 51, 94], scores: [77, 81, 76, 75, 68, 79], ranking: "Hold", market_cap_cr: 391000, volume: 620000 },
    StockRow { symbol: "KOTAKBANK", company: "Kotak Mahindra Bank Ltd.", price_paise: 176320, returns: [-9, -14, 22, 43], scores: [75, 83, 66, 70, 74, 88], ranking: "Hold", market_cap_cr: 350000, volume: 4270000 },
    StockRow { symbol: "SBIN", company: "State Bank of India", price_paise: 78290, returns: [16, 31, 68, 103], scores: [74, 76, 78, 71, 86, 88], ranking: "Hold", market_cap_cr: 698000, volume: 18300000 },
    StockRow { symbol: "ITC", company: "ITC Ltd.", price_paise: 43845, returns: [2, 6, 19, 37], scores: [72, 80, 64, 73, 75, 84], ranking: "Hold", market_cap_cr: 547000, volume: 15600000 },
    StockRow { symbol: "ASIANPAINT", company: "Asian Paints Ltd.", price_paise: 287410, returns: [-15, -28, -41, 12], scores: [69, 78, 58, 64, 55, 76], ranking: "Hold", market_cap_cr: 275000, volume: 980000 },
    StockRow { symbol: "ULTRACEMCO", company: "UltraTech Cement Ltd.", price_paise: 1012850, returns: [7, 18, 44, 71], scores: [68, 74, 67, 65, 60, 72], ranking: "Hold", market_cap_cr: 292000, volume: 410000 },
    StockRow { symbol: "POWERGRID", company: "Power Grid Corporation of India Ltd.", price_paise: 31265, returns: [5, 14, 36, 58], scores: [66, 72, 63, 62, 81, 70], ranking: "Hold", market_cap_cr: 291000, volume: 11200000 },
    StockRow { symbol: "TATASTEEL", company: "Tata Steel Ltd.", price_paise: 15640, returns: [-21, -46, -83, -12], scores: [58, 61, 52, 57, 69, 54], ranking: "Sell", market_cap_cr: 195000, volume: 32400000 },
    StockRow { symbol: "ONGC", company: "Oil & Natural Gas Corporation Ltd.", price_paise: 26870, returns: [-8, -33, -57, -24], scores: [54, 63, 48, 50, 78, 46], ranking: "Sell", market_cap_cr: 338000, volume: 17800000 },
    StockRow { symbol: "COALINDIA", company: "Coal India Ltd.", price_paise: 45120, returns: [-26, -52, -94, -38], scores: [51, 59, 44, 47, 80, 42], ranking: "Sell", market_cap_cr: 278000, volume: 9870000 },
];

/// Twenty-five large caps with their AI scores.
pub fn mock_stocks() -> Vec<Stock> {
    STOCK_ROWS
        .iter()
        .map(|row| {
            let tenths = |v: i64| Decimal::new(v, 1);
            Stock {
                symbol: row.symbol.to_string(),
                company: row.company.to_string(),
                price: Decimal::new(row.price_paise, 2),
                ai_score: tenths(row.scores[0]),
                week1: tenths(row.returns[0]),
                month1: tenths(row.returns[1]),
                month3: tenths(row.returns[2]),
                month6: tenths(row.returns[3]),
                fundamental: tenths(row.scores[1]),
                technical: tenths(row.scores[2]),
                sentiment: tenths(row.scores[3]),
                valuation: tenths(row.scores[4]),
                industry: tenths(row.scores[5]),
                trade_ranking: row.ranking.to_string(),
                market_cap: Some(format_market_cap(Decimal::from(row.market_cap_cr))),
                volume: Some(group_indian(&row.volume.to_string())),
                logo: logo_for(row.symbol),
            }
        })
        .collect()
}

fn to_paise(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Synthetic daily prices of a demo stock from `start` to `end`, newest first.
///
/// Weekends are skipped. The close on `end` is the listed price and earlier
/// closes fall back along the stock's one-month return. Unknown symbols have
/// no history.
pub fn mock_market_data(symbol: &str, start: NaiveDate, end: NaiveDate) -> Vec<MarketDataPoint> {
    let Some(row) = STOCK_ROWS.iter().find(|r| r.symbol.eq_ignore_ascii_case(symbol.trim())) else {
        return Vec::new();
    };
    let price = Decimal::new(row.price_paise, 2);
    // Share of the one-month return accrued per calendar day.
    let daily_drift = Decimal::new(row.returns[1], 3) / dec!(30);
    let close_at = |age: i64| {
        let growth = Decimal::ONE + daily_drift * Decimal::from(age);
        (growth > Decimal::ZERO).then(|| to_paise(price / growth))
    };

    let mut points = Vec::new();
    let mut day = end;
    while day >= start {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            let age = (end - day).num_days();
            let (Some(close), Some(open)) = (close_at(age), close_at(age + 1)) else {
                break;
            };
            points.push(MarketDataPoint {
                symbol: row.symbol.to_string(),
                date: day,
                open,
                high: to_paise(open.max(close) * dec!(1.006)),
                low: to_paise(open.min(close) * dec!(0.994)),
                close,
                volume: row.volume,
                adjusted_close: Some(close),
            });
        }
        let Some(previous) = day.pred_opt() else {
            break;
        };
        day = previous;
    }
    points
}

/// One closed demo trade; prices in paise, score in tenths.
struct TradeRow {
    symbol: &'static str,
    company: &'static str,
    buy: (i32, u32, u32),
    buy_paise: i64,
    sell: (i32, u32, u32),
    sell_paise: i64,
    score: i64,
}

#[rustfmt::skip]
const TRADE_ROWS: [TradeRow; 18] = [
    TradeRow { symbol: "BHARTIARTL", company: "Bharti Airtel Ltd.", buy: (2024, 1, 8), buy_paise: 105420, sell: (2024, 4, 8), sell_paise: 128950, score: 91 },
    TradeRow { symbol: "TCS", company: "Tata Consultancy Services Ltd.", buy: (2024, 1, 15), buy_paise: 372550, sell: (2024, 3, 14), sell_paise: 410230, score: 90 },
    TradeRow { symbol: "TITAN", company: "Titan Company Ltd.", buy: (2024, 1, 22), buy_paise: 358000, sell: (2024, 2, 12), sell_paise: 372140, score: 88 },
    TradeRow { symbol: "RELIANCE", company: "Reliance Industries Ltd.", buy: (2024, 2, 1), buy_paise: 285610, sell: (2024, 4, 30), sell_paise: 296830, score: 92 },
    TradeRow { symbol: "KOTAKBANK", company: "Kotak Mahindra Bank Ltd.", buy: (2024, 2, 5), buy_paise: 182540, sell: (2024, 3, 4), sell_paise: 171360, score: 76 },
    TradeRow { symbol: "HCLTECH", company: "HCL Technologies Ltd.", buy: (2024, 2, 12), buy_paise: 161220, sell: (2024, 5, 13), sell_paise: 134890, score: 84 },
    TradeRow { symbol: "NESTLEIND", company: "Nestle India Ltd.", buy: (2024, 2, 19), buy_paise: 247830, sell: (2024, 5, 20), sell_paise: 251640, score: 86 },
    TradeRow { symbol: "ICICIBANK", company: "ICICI Bank Ltd.", buy: (2024, 3, 1), buy_paise: 108540, sell: (2024, 5, 31), sell_paise: 113520, score: 85 },
    TradeRow { symbol: "SUNPHARMA", company: "Sun Pharmaceutical Industries Ltd.", buy: (2024, 3, 11), buy_paise: 160120, sell: (2024, 4, 1), sell_paise: 163880, score: 82 },
    TradeRow { symbol: "LT", company: "Larsen & Toubro Ltd.", buy: (2024, 3, 18), buy_paise: 352400, sell: (2024, 6, 17), sell_paise: 362950, score: 84 },
    TradeRow { symbol: "INFY", company: "Infosys Ltd.", buy: (2024, 4, 1), buy_paise: 149860, sell: (2024, 5, 27), sell_paise: 141230, score: 87 },
    TradeRow { symbol: "HDFCBANK", company: "HDFC Bank Ltd.", buy: (2024, 4, 8), buy_paise: 153170, sell: (2024, 7, 8), sell_paise: 162480, score: 88 },
    TradeRow { symbol: "BAJFINANCE", company: "Bajaj Finance Ltd.", buy: (2024, 4, 15), buy_paise: 698450, sell: (2024, 5, 6), sell_paise: 712540, score: 82 },
    TradeRow { symbol: "AXISBANK", company: "Axis Bank Ltd.", buy: (2024, 4, 22), buy_paise: 106830, sell: (2024, 7, 22), sell_paise: 127640, score: 83 },
    TradeRow { symbol: "MARUTI", company: "Maruti Suzuki India Ltd.", buy: (2024, 5, 2), buy_paise: 1215600, sell: (2024, 7, 1), sell_paise: 1245630, score: 78 },
    TradeRow { symbol: "WIPRO", company: "Wipro Ltd.", buy: (2024, 5, 13), buy_paise: 46320, sell: (2024, 6, 10), sell_paise: 48715, score: 79 },
    TradeRow { symbol: "SBIN", company: "State Bank of India", buy: (2024, 5, 20), buy_paise: 82450, sell: (2024, 6, 4), sell_paise: 78290, score: 74 },
    TradeRow { symbol: "ULTRACEMCO", company: "UltraTech Cement Ltd.", buy: (2024, 6, 3), buy_paise: 985270, sell: (2024, 7, 29), sell_paise: 1012850, score: 71 },
];

fn date((year, month, day): (i32, u32, u32)) -> Result<NaiveDate, DbError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DbError::DataUnavailable(format!("invalid demo date {year}-{month}-{day}")))
}

/// Closed demo trades. Returns and holding periods are derived from the prices and dates.
pub fn mock_backtests() -> Result<Vec<BacktestRecord>, DbError> {
    TRADE_ROWS
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let buy_date = date(row.buy)?;
            let sell_date = date(row.sell)?;
            let buy_price = Decimal::new(row.buy_paise, 2);
            let sell_price = Decimal::new(row.sell_paise, 2);
            let returns = ((sell_price - buy_price) / buy_price * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            let holding_period = u32::try_from((sell_date - buy_date).num_days()).unwrap_or(0);

            Ok(BacktestRecord {
                id: format!("bt-{:03}", index + 1),
                symbol: row.symbol.to_string(),
                company: row.company.to_string(),
                buy_date,
                buy_price,
                sell_date,
                sell_price,
                returns,
                holding_period,
                ai_score_at_buy: Decimal::new(row.score, 1),
                logo: logo_for(row.symbol),
            })
        })
        .collect()
}

fn holding(symbol: &str, company: &str, weight: Decimal, quarterly_return: Decimal) -> PortfolioStock {
    PortfolioStock {
        symbol: symbol.to_string(),
        company: company.to_string(),
        weight,
        quarterly_return,
        logo: logo_for(symbol),
    }
}

fn quarter(
    label: &str,
    period: &str,
    portfolio_return: Decimal,
    benchmark_return: Decimal,
    stocks: Vec<PortfolioStock>,
) -> QuarterlyPortfolio {
    QuarterlyPortfolio {
        quarter: label.to_string(),
        period: period.to_string(),
        portfolio_return,
        benchmark_return,
        stocks,
    }
}

/// Six quarters of the equal-weight momentum portfolio against the NIFTY benchmark.
pub fn mock_quarterly_portfolios() -> Vec<QuarterlyPortfolio> {
    vec![
        quarter(
            "Q1-2023",
            "Jan - Mar 2023",
            dec!(8.2),
            dec!(5.1),
            vec![
                holding("RELIANCE", "Reliance Industries Ltd.", dec!(8.33), dec!(12.5)),
                holding("TCS", "Tata Consultancy Services Ltd.", dec!(8.33), dec!(15.2)),
                holding("HDFCBANK", "HDFC Bank Ltd.", dec!(8.33), dec!(8.7)),
                holding("INFY", "Infosys Ltd.", dec!(8.33), dec!(11.3)),
                holding("ICICIBANK", "ICICI Bank Ltd.", dec!(8.33), dec!(9.8)),
                holding("HINDUNILVR", "Hindustan Unilever Ltd.", dec!(8.33), dec!(6.4)),
                holding("ITC", "ITC Ltd.", dec!(8.33), dec!(4.2)),
                holding("SBIN", "State Bank of India", dec!(8.33), dec!(7.9)),
                holding("BHARTIARTL", "Bharti Airtel Ltd.", dec!(8.33), dec!(13.6)),
                holding("ASIANPAINT", "Asian Paints Ltd.", dec!(8.33), dec!(5.8)),
                holding("MARUTI", "Maruti Suzuki India Ltd.", dec!(8.33), dec!(10.4)),
                holding("KOTAKBANK", "Kotak Mahindra Bank Ltd.", dec!(8.37), dec!(7.1)),
            ],
        ),
        quarter(
            "Q2-2023",
            "Apr - Jun 2023",
            dec!(12.4),
            dec!(7.8),
            vec![
                holding("TCS", "Tata Consultancy Services Ltd.", dec!(8.33), dec!(18.7)),
                holding("RELIANCE", "Reliance Industries Ltd.", dec!(8.33), dec!(14.2)),
                holding("HDFCBANK", "HDFC Bank Ltd.", dec!(8.33), dec!(11.5)),
                holding("INFY", "Infosys Ltd.", dec!(8.33), dec!(16.8)),
                holding("ICICIBANK", "ICICI Bank Ltd.", dec!(8.33), dec!(12.9)),
                holding("BHARTIARTL", "Bharti Airtel Ltd.", dec!(8.33), dec!(19.3)),
                holding("HINDUNILVR", "Hindustan Unilever Ltd.", dec!(8.33), dec!(8.1)),
                holding("TITAN", "Titan Company Ltd.", dec!(8.33), dec!(15.4)),
                holding("ITC", "ITC Ltd.", dec!(8.33), dec!(6.7)),
                holding("SBIN", "State Bank of India", dec!(8.33), dec!(9.2)),
                holding("ASIANPAINT", "Asian Paints Ltd.", dec!(8.33), dec!(7.3)),
                holding("MARUTI", "Maruti Suzuki India Ltd.", dec!(8.37), dec!(4.8)),
            ],
        ),
        quarter(
            "Q3-2023",
            "Jul - Sep 2023",
            dec!(15.7),
            dec!(9.2),
            vec![
                holding("TCS", "Tata Consultancy Services Ltd.", dec!(8.33), dec!(21.3)),
                holding("RELIANCE", "Reliance Industries Ltd.", dec!(8.33), dec!(16.8)),
                holding("HDFCBANK", "HDFC Bank Ltd.", dec!(8.33), dec!(13.2)),
                holding("BHARTIARTL", "Bharti Airtel Ltd.", dec!(8.33), dec!(22.4)),
                holding("INFY", "Infosys Ltd.", dec!(8.33), dec!(18.9)),
                holding("ICICIBANK", "ICICI Bank Ltd.", dec!(8.33), dec!(14.7)),
                holding("TITAN", "Titan Company Ltd.", dec!(8.33), dec!(19.6)),
                holding("HINDUNILVR", "Hindustan Unilever Ltd.", dec!(8.33), dec!(10.3)),
                holding("NESTLEIND", "Nestle India Ltd.", dec!(8.33), dec!(17.2)),
                holding("ITC", "ITC Ltd.", dec!(8.33), dec!(8.5)),
                holding("SBIN", "State Bank of India", dec!(8.33), dec!(11.8)),
                holding("ASIANPAINT", "Asian Paints Ltd.", dec!(8.37), dec!(9.1)),
            ],
        ),
        quarter(
            "Q4-2023",
            "Oct - Dec 2023",
            dec!(18.9),
            dec!(11.5),
            vec![
                holding("TCS", "Tata Consultancy Services Ltd.", dec!(8.33), dec!(24.7)),
                holding("RELIANCE", "Reliance Industries Ltd.", dec!(8.33), dec!(19.3)),
                holding("BHARTIARTL", "Bharti Airtel Ltd.", dec!(8.33), dec!(26.1)),
                holding("HDFCBANK", "HDFC Bank Ltd.", dec!(8.33), dec!(15.8)),
                holding("TITAN", "Titan Company Ltd.", dec!(8.33), dec!(23.4)),
                holding("INFY", "Infosys Ltd.", dec!(8.33), dec!(21.6)),
                holding("NESTLEIND", "Nestle India Ltd.", dec!(8.33), dec!(20.9)),
                holding("ICICIBANK", "ICICI Bank Ltd.", dec!(8.33), dec!(17.2)),
                holding("HINDUNILVR", "Hindustan Unilever Ltd.", dec!(8.33), dec!(12.7)),
                holding("HCLTECH", "HCL Technologies Ltd.", dec!(8.33), dec!(14.5)),
                holding("ITC", "ITC Ltd.", dec!(8.33), dec!(10.8)),
                holding("SBIN", "State Bank of India", dec!(8.37), dec!(13.9)),
            ],
        ),
        quarter(
            "Q1-2024",
            "Jan - Mar 2024",
            dec!(22.3),
            dec!(13.7),
            vec![
                holding("TCS", "Tata Consultancy Services Ltd.", dec!(8.33), dec!(28.4)),
                holding("BHARTIARTL", "Bharti Airtel Ltd.", dec!(8.33), dec!(30.2)),
                holding("RELIANCE", "Reliance Industries Ltd.", dec!(8.33), dec!(21.8)),
                holding("TITAN", "Titan Company Ltd.", dec!(8.33), dec!(27.1)),
                holding("HDFCBANK", "HDFC Bank Ltd.", dec!(8.33), dec!(18.5)),
                holding("NESTLEIND", "Nestle India Ltd.", dec!(8.33), dec!(24.6)),
                holding("INFY", "Infosys Ltd.", dec!(8.33), dec!(23.9)),
                holding("HCLTECH", "HCL Technologies Ltd.", dec!(8.33), dec!(19.7)),
                holding("ICICIBANK", "ICICI Bank Ltd.", dec!(8.33), dec!(20.3)),
                holding("HINDUNILVR", "Hindustan Unilever Ltd.", dec!(8.33), dec!(15.8)),
                holding("WIPRO", "Wipro Ltd.", dec!(8.33), dec!(16.4)),
                holding("AXISBANK", "Axis Bank Ltd.", dec!(8.37), dec!(17.9)),
            ],
        ),
        quarter(
            "Q2-2024",
            "Apr - Jun 2024",
            dec!(25.8),
            dec!(15.9),
            vec![
                holding("TCS", "Tata Consultancy Services Ltd.", dec!(8.33), dec!(32.1)),
                holding("BHARTIARTL", "Bharti Airtel Ltd.", dec!(8.33), dec!(34.8)),
                holding("TITAN", "Titan Company Ltd.", dec!(8.33), dec!(31.2)),
                holding("RELIANCE", "Reliance Industries Ltd.", dec!(8.33), dec!(24.7)),
                holding("NESTLEIND", "Nestle India Ltd.", dec!(8.33), dec!(28.9)),
                holding("HDFCBANK", "HDFC Bank Ltd.", dec!(8.33), dec!(21.4)),
                holding("HCLTECH", "HCL Technologies Ltd.", dec!(8.33), dec!(26.3)),
                holding("INFY", "Infosys Ltd.", dec!(8.33), dec!(27.8)),
                holding("ICICIBANK", "ICICI Bank Ltd.", dec!(8.33), dec!(23.6)),
                holding("WIPRO", "Wipro Ltd.", dec!(8.33), dec!(19.2)),
                holding("HINDUNILVR", "Hindustan Unilever Ltd.", dec!(8.33), dec!(18.7)),
                holding("AXISBANK", "Axis Bank Ltd.", dec!(8.37), dec!(20.8)),
            ],
        ),
    ]
}
