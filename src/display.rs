//! Terminal rendering of the dashboard pages.

use analytics::{BacktestSummary, ChartLayout, PerformanceStats, PriceHistorySummary, QuarterBars};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use core_types::{
    BacktestRecord, MarketDataPoint, PortfolioStock, ScoreBand, Stock, format_date,
    format_holding_period, format_inr, group_indian,
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use table_view::{RenderedPage, TableRecord};

/// Columns used by the widest bar of the performance chart.
const CHART_COLUMNS: u32 = 40;

const NO_DATA: &str = "no data";

/// A signed percentage with two decimals, e.g. `+12.40%`.
pub fn format_pct(value: Decimal) -> String {
    let value = value.round_dp(2);
    if value > Decimal::ZERO {
        format!("+{value:.2}%")
    } else {
        format!("{value:.2}%")
    }
}

fn pct_or_no_data(value: Option<Decimal>) -> String {
    value.map(format_pct).unwrap_or_else(|| NO_DATA.to_string())
}

fn pct_cell(value: Decimal) -> Cell {
    let color = if value >= Decimal::ZERO { Color::Green } else { Color::Red };
    Cell::new(format_pct(value)).fg(color)
}

fn score_cell(score: Decimal) -> Cell {
    let color = match ScoreBand::from_score(score) {
        ScoreBand::High => Color::Green,
        ScoreBand::Medium => Color::Yellow,
        ScoreBand::Low => Color::Red,
    };
    Cell::new(format!("{:.1}", score.round_dp(1))).fg(color)
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn stocks_table(page: &RenderedPage<'_, Stock>) -> Table {
    let mut table = new_table(vec![
        "#", "Symbol", "Company", "Price", "AI Score", "1W", "1M", "3M", "6M", "Fund.", "Tech.",
        "Sent.", "Val.", "Ind.",
    ]);
    for (rank, stock) in page.ranked() {
        table.add_row(vec![
            Cell::new(rank),
            Cell::new(&stock.symbol),
            Cell::new(&stock.company),
            Cell::new(format_inr(stock.price)),
            score_cell(stock.ai_score),
            pct_cell(stock.week1),
            pct_cell(stock.month1),
            pct_cell(stock.month3),
            pct_cell(stock.month6),
            score_cell(stock.fundamental),
            score_cell(stock.technical),
            score_cell(stock.sentiment),
            score_cell(stock.valuation),
            score_cell(stock.industry),
        ]);
    }
    table
}

pub fn backtests_table(page: &RenderedPage<'_, BacktestRecord>) -> Table {
    let mut table = new_table(vec![
        "#", "Symbol", "Buy Date", "Buy Price", "Sell Date", "Sell Price", "Returns", "Held",
        "AI Score",
    ]);
    for (rank, trade) in page.ranked() {
        table.add_row(vec![
            Cell::new(rank),
            Cell::new(&trade.symbol),
            Cell::new(format_date(trade.buy_date)),
            Cell::new(format_inr(trade.buy_price)),
            Cell::new(format_date(trade.sell_date)),
            Cell::new(format_inr(trade.sell_price)),
            pct_cell(trade.returns),
            Cell::new(format_holding_period(trade.holding_period)),
            score_cell(trade.ai_score_at_buy),
        ]);
    }
    table
}

pub fn holdings_table(page: &RenderedPage<'_, PortfolioStock>) -> Table {
    let mut table = new_table(vec!["#", "Symbol", "Company", "Weight", "Return"]);
    for (rank, holding) in page.ranked() {
        table.add_row(vec![
            Cell::new(rank),
            Cell::new(&holding.symbol),
            Cell::new(&holding.company),
            Cell::new(format!("{:.1}%", holding.weight.round_dp(1))),
            pct_cell(holding.quarterly_return),
        ]);
    }
    table
}

/// Daily prices, newest first.
pub fn history_table(points: &[MarketDataPoint]) -> Table {
    let mut table = new_table(vec!["Date", "Open", "High", "Low", "Close", "Volume"]);
    for point in points {
        let close_color = if point.close >= point.open { Color::Green } else { Color::Red };
        table.add_row(vec![
            Cell::new(format_date(point.date)),
            Cell::new(format_inr(point.open)),
            Cell::new(format_inr(point.high)),
            Cell::new(format_inr(point.low)),
            Cell::new(format_inr(point.close)).fg(close_color),
            Cell::new(group_indian(&point.volume.to_string())),
        ]);
    }
    table
}

pub fn history_summary(symbol: &str, days: u32, summary: &PriceHistorySummary) -> String {
    let price = |value: Option<Decimal>| value.map(format_inr).unwrap_or_else(|| NO_DATA.to_string());
    format!(
        "{symbol} over the last {days} days ({} trading days)\n\
         Change: {} ({} to {})\n\
         Range: {} to {}",
        summary.trading_days,
        pct_or_no_data(summary.change_pct),
        price(summary.first_close),
        price(summary.last_close),
        price(summary.low),
        price(summary.high),
    )
}

/// `Showing 1 to 20 of 25 stocks (page 1 of 2: [1] 2)`.
pub fn showing_line<R: TableRecord>(page: &RenderedPage<'_, R>, noun: &str) -> String {
    if page.filtered_count == 0 {
        return format!("No {noun} match the current filters.");
    }
    let buttons: Vec<String> = page
        .page_numbers
        .iter()
        .map(|&n| if n == page.current_page { format!("[{n}]") } else { n.to_string() })
        .collect();
    format!(
        "Showing {} to {} of {} {noun} (page {} of {}: {})",
        page.showing_from,
        page.showing_to,
        page.filtered_count,
        page.current_page,
        page.total_pages,
        buttons.join(" "),
    )
}

pub fn backtest_summary(summary: &BacktestSummary) -> String {
    let holding = summary
        .average_holding_days
        .and_then(|days| days.to_u32())
        .map(format_holding_period)
        .unwrap_or_else(|| NO_DATA.to_string());
    let derived_win_rate = summary
        .derived_win_rate_pct
        .map(|pct| format!("{:.0}%", pct.round_dp(0)))
        .unwrap_or_else(|| NO_DATA.to_string());

    format!(
        "Total trades: {} (listed: {})\n\
         Win rate: {}% ({} of {} listed trades won: {})\n\
         Average return: {}\n\
         Average holding period: {}",
        summary.advertised_total_trades,
        summary.total_records,
        summary.advertised_win_rate_pct.normalize(),
        summary.winning_trades,
        summary.total_records,
        derived_win_rate,
        pct_or_no_data(summary.average_return_pct),
        holding,
    )
}

pub fn performance_summary(stats: &PerformanceStats) -> String {
    format!(
        "Quarters: {}\n\
         Average portfolio return: {}\n\
         Average NIFTY return: {}\n\
         Average outperformance: {}\n\
         Quarters beating NIFTY: {}",
        stats.total_quarters,
        pct_or_no_data(stats.avg_portfolio_return),
        pct_or_no_data(stats.avg_benchmark_return),
        pct_or_no_data(stats.avg_outperformance),
        stats
            .win_rate_pct
            .map(|pct| format!("{:.0}%", pct.round_dp(0)))
            .unwrap_or_else(|| NO_DATA.to_string()),
    )
}

/// Bar length in terminal columns; negative heights draw nothing.
fn columns_for(height: Decimal, layout: &ChartLayout) -> usize {
    if layout.height == 0 {
        return 0;
    }
    (height / Decimal::from(layout.height) * Decimal::from(CHART_COLUMNS))
        .round()
        .max(Decimal::ZERO)
        .to_usize()
        .unwrap_or(0)
}

/// Horizontal rendering of the quarterly bars, oldest quarter first.
pub fn performance_chart(bars: &[QuarterBars], layout: &ChartLayout) -> String {
    if bars.is_empty() {
        return format!("Performance chart: {NO_DATA}");
    }
    let mut lines = Vec::with_capacity(bars.len() * 2);
    for bar in bars {
        lines.push(format!(
            "{:<8} Portfolio |{}",
            bar.quarter,
            "█".repeat(columns_for(bar.portfolio_height, layout))
        ));
        lines.push(format!(
            "{:<8} NIFTY     |{}",
            "",
            "░".repeat(columns_for(bar.benchmark_height, layout))
        ));
    }
    lines.join("\n")
}
