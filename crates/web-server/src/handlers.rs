use crate::{AppState, error::AppError, query::TableQuery};
use analytics::{
    AnalyticsEngine, BacktestSummary, ChartLayout, PerformanceStats, PriceHistorySummary, QuarterBars,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use core_types::{
    BacktestRecord, MarketDataPoint, PortfolioStock, QuarterlyPortfolio, Stock, ViewportClass,
    find_quarter, quarters_most_recent_first,
};
use database::RecordSource;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use table_view::{RenderedPage, TabularView};

/// # GET /api/stocks
/// One page of the top-stocks table.
pub async fn get_stocks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
) -> Result<Response, AppError> {
    let stocks = RecordSource::<Stock>::fetch_records(&state.source).await?;
    let mut view = TabularView::new(stocks, state.settings.view.stocks_per_page);
    query.apply(&mut view)?;
    Ok(Json(view.render()).into_response())
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// # GET /api/stocks/search?q=
pub async fn search_stocks(
    State(state): State<Arc<AppState>>,
    Query(search): Query<SearchQuery>,
) -> Result<Json<Vec<Stock>>, AppError> {
    if search.q.trim().is_empty() {
        return Err(AppError::BadRequest("Query parameter 'q' must not be empty".to_string()));
    }
    let hits = state.source.search_stocks(&search.q).await?;
    Ok(Json(hits))
}

/// History window used when `days` is not given.
pub const DEFAULT_HISTORY_DAYS: u32 = 30;
pub const MAX_HISTORY_DAYS: u32 = 365;

fn default_history_days() -> u32 {
    DEFAULT_HISTORY_DAYS
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(default = "default_history_days")]
    days: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockHistory {
    pub symbol: String,
    pub days: u32,
    pub summary: PriceHistorySummary,
    /// Newest first.
    pub points: Vec<MarketDataPoint>,
}

/// # GET /api/stocks/:symbol/history?days=
/// Daily prices over the last `days` calendar days and the change across them.
pub async fn get_stock_history(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(history): Query<HistoryQuery>,
) -> Result<Json<StockHistory>, AppError> {
    if !(1..=MAX_HISTORY_DAYS).contains(&history.days) {
        return Err(AppError::BadRequest(format!(
            "Query parameter 'days' must be between 1 and {MAX_HISTORY_DAYS}"
        )));
    }
    let symbol = symbol.trim().to_uppercase();
    let points = state.source.stock_performance(&symbol, history.days).await?;
    Ok(Json(StockHistory {
        summary: AnalyticsEngine::new().price_history_summary(&points),
        symbol,
        days: history.days,
        points,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BacktestPage<'a> {
    summary: BacktestSummary,
    table: RenderedPage<'a, BacktestRecord>,
}

/// # GET /api/backtests
/// Header statistics over the full history plus one page of the filtered table.
pub async fn get_backtests(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
) -> Result<Response, AppError> {
    let records = RecordSource::<BacktestRecord>::fetch_records(&state.source).await?;
    let advertised = &state.settings.backtest;
    let summary = AnalyticsEngine::new().backtest_summary(
        &records,
        advertised.advertised_total_trades,
        advertised.advertised_win_rate_pct,
    );

    let mut view = TabularView::new(records, state.settings.view.backtests_per_page);
    query.apply(&mut view)?;
    let body = BacktestPage { summary, table: view.render() };
    Ok(Json(body).into_response())
}

#[derive(Debug, Default, Deserialize)]
pub struct ChartQuery {
    viewport: Option<ViewportClass>,
    /// Viewport width in CSS pixels; used when `viewport` is absent.
    width: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceChart {
    pub layout: ChartLayout,
    pub width: u32,
    /// Empty when there is nothing to scale against.
    pub bars: Vec<QuarterBars>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentumOverview {
    /// Quarter labels, most recent first.
    pub quarters: Vec<String>,
    pub stats: PerformanceStats,
    pub chart: PerformanceChart,
}

/// # GET /api/momentum
pub async fn get_momentum(
    State(state): State<Arc<AppState>>,
    Query(chart): Query<ChartQuery>,
) -> Result<Json<MomentumOverview>, AppError> {
    let portfolios = RecordSource::<QuarterlyPortfolio>::fetch_records(&state.source).await?;

    let mut performance: Vec<_> = portfolios.iter().map(QuarterlyPortfolio::performance).collect();
    performance.sort_by_key(|p| core_types::parse_quarter(&p.quarter).map(|(q, y)| (y, q)).ok());

    let viewport = chart
        .viewport
        .or(chart.width.map(ViewportClass::from_width))
        .unwrap_or(state.settings.view.viewport);
    let layout = ChartLayout::for_viewport(viewport);
    let bars = layout.performance_bars(&performance).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "No chart bars to draw.");
        Vec::new()
    });

    Ok(Json(MomentumOverview {
        quarters: quarters_most_recent_first(&portfolios),
        stats: AnalyticsEngine::new().performance_stats(&performance),
        chart: PerformanceChart {
            layout,
            width: layout.width(bars.len()),
            bars,
        },
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuarterPage<'a> {
    quarter: &'a str,
    period: &'a str,
    portfolio_return: Decimal,
    benchmark_return: Decimal,
    outperformance: Decimal,
    holdings: RenderedPage<'a, PortfolioStock>,
}

/// # GET /api/momentum/:quarter
/// One quarter's holdings as a sortable, filterable table.
pub async fn get_quarter(
    Path(quarter): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<TableQuery>,
) -> Result<Response, AppError> {
    let portfolios = RecordSource::<QuarterlyPortfolio>::fetch_records(&state.source).await?;
    let selected = find_quarter(&portfolios, &quarter)?;

    let mut view = TabularView::new(selected.stocks.clone(), state.settings.view.holdings_per_page);
    query.apply(&mut view)?;
    let performance = selected.performance();
    let body = QuarterPage {
        quarter: &selected.quarter,
        period: &selected.period,
        portfolio_return: selected.portfolio_return,
        benchmark_return: selected.benchmark_return,
        outperformance: performance.outperformance(),
        holdings: view.render(),
    };
    Ok(Json(body).into_response())
}
