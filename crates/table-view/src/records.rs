//! `TableRecord` implementations for the dashboard's record types.

use crate::record::{SortKey, TableRecord};
use crate::spec::{FilterRange, SortSpec};
use core_types::{BacktestRecord, PortfolioStock, Stock};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

const SCORE_DOMAIN: FilterRange = FilterRange::new(Decimal::ZERO, Decimal::TEN);

/// Returns have no natural ceiling, so their default filter admits any value.
const RETURN_DOMAIN: FilterRange = FilterRange::new(Decimal::MIN, Decimal::MAX);

fn weight_domain() -> FilterRange {
    FilterRange::new(Decimal::ZERO, dec!(100))
}

// --- Stocks ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "camelCase")]
pub enum StockColumn {
    Symbol,
    Company,
    Price,
    AiScore,
    Week1,
    Month1,
    Month3,
    Month6,
    Fundamental,
    Technical,
    Sentiment,
    Valuation,
    Industry,
}

/// The score columns a stock can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "camelCase")]
pub enum StockScore {
    Fundamental,
    Technical,
    Sentiment,
    Valuation,
    Industry,
    AiScore,
}

impl TableRecord for Stock {
    type Id = String;
    type SortField = StockColumn;
    type FilterField = StockScore;

    fn id(&self) -> String {
        self.symbol.clone()
    }

    fn sort_key(&self, field: StockColumn) -> SortKey<'_> {
        match field {
            StockColumn::Symbol => SortKey::Text(&self.symbol),
            StockColumn::Company => SortKey::Text(&self.company),
            StockColumn::Price => SortKey::Number(self.price),
            StockColumn::AiScore => SortKey::Number(self.ai_score),
            StockColumn::Week1 => SortKey::Number(self.week1),
            StockColumn::Month1 => SortKey::Number(self.month1),
            StockColumn::Month3 => SortKey::Number(self.month3),
            StockColumn::Month6 => SortKey::Number(self.month6),
            StockColumn::Fundamental => SortKey::Number(self.fundamental),
            StockColumn::Technical => SortKey::Number(self.technical),
            StockColumn::Sentiment => SortKey::Number(self.sentiment),
            StockColumn::Valuation => SortKey::Number(self.valuation),
            StockColumn::Industry => SortKey::Number(self.industry),
        }
    }

    fn filter_value(&self, field: StockScore) -> Decimal {
        match field {
            StockScore::Fundamental => self.fundamental,
            StockScore::Technical => self.technical,
            StockScore::Sentiment => self.sentiment,
            StockScore::Valuation => self.valuation,
            StockScore::Industry => self.industry,
            StockScore::AiScore => self.ai_score,
        }
    }

    fn filterable_fields() -> &'static [StockScore] {
        &[
            StockScore::Fundamental,
            StockScore::Technical,
            StockScore::Sentiment,
            StockScore::Valuation,
            StockScore::Industry,
            StockScore::AiScore,
        ]
    }

    fn filter_domain(_field: StockScore) -> FilterRange {
        SCORE_DOMAIN
    }

    fn default_sort() -> SortSpec<StockColumn> {
        SortSpec::descending(StockColumn::AiScore)
    }
}

// --- Backtest history ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "camelCase")]
pub enum BacktestColumn {
    Returns,
    BuyDate,
    SellDate,
    BuyPrice,
    SellPrice,
    HoldingPeriod,
    AiScoreAtBuy,
    Symbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "camelCase")]
pub enum BacktestMetric {
    AiScoreAtBuy,
    Returns,
}

impl TableRecord for BacktestRecord {
    type Id = String;
    type SortField = BacktestColumn;
    type FilterField = BacktestMetric;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn sort_key(&self, field: BacktestColumn) -> SortKey<'_> {
        match field {
            BacktestColumn::Returns => SortKey::Number(self.returns),
            BacktestColumn::BuyDate => SortKey::Date(self.buy_date),
            BacktestColumn::SellDate => SortKey::Date(self.sell_date),
            BacktestColumn::BuyPrice => SortKey::Number(self.buy_price),
            BacktestColumn::SellPrice => SortKey::Number(self.sell_price),
            BacktestColumn::HoldingPeriod => SortKey::Number(Decimal::from(self.holding_period)),
            BacktestColumn::AiScoreAtBuy => SortKey::Number(self.ai_score_at_buy),
            BacktestColumn::Symbol => SortKey::Text(&self.symbol),
        }
    }

    fn filter_value(&self, field: BacktestMetric) -> Decimal {
        match field {
            BacktestMetric::AiScoreAtBuy => self.ai_score_at_buy,
            BacktestMetric::Returns => self.returns,
        }
    }

    fn filterable_fields() -> &'static [BacktestMetric] {
        &[BacktestMetric::AiScoreAtBuy, BacktestMetric::Returns]
    }

    fn filter_domain(field: BacktestMetric) -> FilterRange {
        match field {
            BacktestMetric::AiScoreAtBuy => SCORE_DOMAIN,
            BacktestMetric::Returns => RETURN_DOMAIN,
        }
    }

    fn default_sort() -> SortSpec<BacktestColumn> {
        SortSpec::descending(BacktestColumn::Returns)
    }
}

// --- Momentum portfolio holdings ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "camelCase")]
pub enum HoldingColumn {
    Symbol,
    Company,
    Weight,
    QuarterlyReturn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "camelCase")]
pub enum HoldingMetric {
    Weight,
    QuarterlyReturn,
}

impl TableRecord for PortfolioStock {
    type Id = String;
    type SortField = HoldingColumn;
    type FilterField = HoldingMetric;

    fn id(&self) -> String {
        self.symbol.clone()
    }

    fn sort_key(&self, field: HoldingColumn) -> SortKey<'_> {
        match field {
            HoldingColumn::Symbol => SortKey::Text(&self.symbol),
            HoldingColumn::Company => SortKey::Text(&self.company),
            HoldingColumn::Weight => SortKey::Number(self.weight),
            HoldingColumn::QuarterlyReturn => SortKey::Number(self.quarterly_return),
        }
    }

    fn filter_value(&self, field: HoldingMetric) -> Decimal {
        match field {
            HoldingMetric::Weight => self.weight,
            HoldingMetric::QuarterlyReturn => self.quarterly_return,
        }
    }

    fn filterable_fields() -> &'static [HoldingMetric] {
        &[HoldingMetric::Weight, HoldingMetric::QuarterlyReturn]
    }

    fn filter_domain(field: HoldingMetric) -> FilterRange {
        match field {
            HoldingMetric::Weight => weight_domain(),
            HoldingMetric::QuarterlyReturn => RETURN_DOMAIN,
        }
    }

    fn default_sort() -> SortSpec<HoldingColumn> {
        SortSpec::descending(HoldingColumn::Weight)
    }
}
