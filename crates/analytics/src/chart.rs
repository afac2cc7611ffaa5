use crate::error::AnalyticsError;
use core_types::{QuarterPerformance, ViewportClass};
use rust_decimal::Decimal;
use serde::Serialize;

/// Pixel sizing of the quarterly portfolio-vs-benchmark bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartLayout {
    pub height: u32,
    pub bar_width: u32,
    pub spacing: u32,
}

/// Scaled bar heights for one quarter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterBars {
    pub quarter: String,
    pub portfolio_height: Decimal,
    pub benchmark_height: Decimal,
}

impl ChartLayout {
    pub fn for_viewport(viewport: ViewportClass) -> Self {
        match viewport {
            ViewportClass::Mobile => Self { height: 200, bar_width: 25, spacing: 15 },
            ViewportClass::Tablet => Self { height: 250, bar_width: 35, spacing: 20 },
            ViewportClass::Desktop => Self { height: 300, bar_width: 40, spacing: 20 },
        }
    }

    /// Total width for `groups` pairs of bars.
    pub fn width(&self, groups: usize) -> u32 {
        let groups = u32::try_from(groups).unwrap_or(u32::MAX);
        groups
            .saturating_mul(self.bar_width * 2 + self.spacing)
            .saturating_add(self.spacing)
    }

    /// Height of a bar for `value` when `max` fills the chart.
    pub fn bar_height(&self, value: Decimal, max: Decimal) -> Result<Decimal, AnalyticsError> {
        if max <= Decimal::ZERO {
            return Err(AnalyticsError::DivisionByZero("chart scale".to_string()));
        }
        Ok(value / max * Decimal::from(self.height))
    }

    /// Bars for every quarter, scaled against the largest return on either side.
    pub fn performance_bars(
        &self,
        quarters: &[QuarterPerformance],
    ) -> Result<Vec<QuarterBars>, AnalyticsError> {
        let max = quarters
            .iter()
            .map(|q| q.portfolio_return.max(q.benchmark_return))
            .max()
            .ok_or_else(|| AnalyticsError::NotEnoughData("no quarters to chart".to_string()))?;

        quarters
            .iter()
            .map(|q| {
                Ok(QuarterBars {
                    quarter: q.quarter.clone(),
                    portfolio_height: self.bar_height(q.portfolio_return, max)?,
                    benchmark_height: self.bar_height(q.benchmark_return, max)?,
                })
            })
            .collect()
    }
}
