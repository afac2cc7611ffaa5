use crate::display;
use crate::{BacktestsArgs, HistoryArgs, MomentumArgs, SearchArgs, StocksArgs, TableArgs};
use analytics::{AnalyticsEngine, ChartLayout};
use anyhow::{Context, anyhow};
use clap::ValueEnum;
use configuration::Settings;
use core_types::{
    BacktestRecord, QuarterlyPortfolio, SortDirection, Stock, ViewportClass, find_quarter,
    quarters_most_recent_first,
};
use database::{DataSource, RecordSource, refresh_view};
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;
use std::future::Future;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Duration;
use table_view::{FilterBound, SortSpec, TableRecord, TabularView};

/// Runs `task` behind a spinner that disappears once it completes.
async fn with_spinner<T>(message: &str, task: impl Future<Output = T>) -> anyhow::Result<T> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    let output = task.await;
    spinner.finish_and_clear();
    Ok(output)
}

/// Connects the configured source and loads a fresh view of `R` from it.
async fn load_view<R>(
    settings: &Settings,
    per_page: NonZeroUsize,
    what: &str,
) -> anyhow::Result<TabularView<R>>
where
    R: TableRecord + Send + 'static,
    DataSource: RecordSource<R>,
{
    let source = web_server::build_data_source(&settings.data_source).await?;
    let mut view = TabularView::empty(per_page);
    with_spinner(&format!("Loading {what}..."), refresh_view(&mut view, &source))
        .await?
        .with_context(|| format!("Could not load {what}"))?;
    Ok(view)
}

/// Parses `field=min:max`; either bound may be empty.
fn parse_filter<F: ValueEnum>(raw: &str) -> anyhow::Result<(F, Option<Decimal>, Option<Decimal>)> {
    let (name, range) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("Filter '{raw}' must look like FIELD=MIN:MAX"))?;
    let field = F::from_str(name.trim(), true).map_err(|e| anyhow!("Unknown filter field '{name}': {e}"))?;
    let (min, max) = range.split_once(':').unwrap_or((range, ""));

    let bound = |text: &str| -> anyhow::Result<Option<Decimal>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        Decimal::from_str(text)
            .map(Some)
            .with_context(|| format!("Invalid bound '{text}' in filter '{raw}'"))
    };
    Ok((field, bound(min)?, bound(max)?))
}

/// Replays the command-line options onto `view` as view events.
fn apply_table_args<R>(
    view: &mut TabularView<R>,
    sort: Option<R::SortField>,
    args: &TableArgs,
) -> anyhow::Result<()>
where
    R: TableRecord,
    R::FilterField: ValueEnum,
{
    for raw in &args.filters {
        let (field, min, max) = parse_filter::<R::FilterField>(raw)?;
        if let Some(min) = min {
            view.set_filter_bound(field, FilterBound::Min, min)?;
        }
        if let Some(max) = max {
            view.set_filter_bound(field, FilterBound::Max, max)?;
        }
    }

    if sort.is_some() || args.asc {
        let field = sort.unwrap_or(view.sort().field);
        let direction = if args.asc { SortDirection::Ascending } else { SortDirection::Descending };
        view.set_sort(SortSpec::new(field, direction));
    }

    if let Some(page) = args.page {
        view.go_to_page(page);
    }
    Ok(())
}

pub async fn handle_stocks(args: StocksArgs, settings: &Settings, json: bool) -> anyhow::Result<()> {
    let mut view = load_view::<Stock>(settings, settings.view.stocks_per_page, "stocks").await?;
    apply_table_args(&mut view, args.sort, &args.table)?;

    let page = view.render();
    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }
    println!("{}", display::stocks_table(&page));
    println!("{}", display::showing_line(&page, "stocks"));
    Ok(())
}

pub async fn handle_backtests(args: BacktestsArgs, settings: &Settings, json: bool) -> anyhow::Result<()> {
    let mut view =
        load_view::<BacktestRecord>(settings, settings.view.backtests_per_page, "backtest history").await?;
    let summary = AnalyticsEngine::new().backtest_summary(
        view.records(),
        settings.backtest.advertised_total_trades,
        settings.backtest.advertised_win_rate_pct,
    );
    apply_table_args(&mut view, args.sort, &args.table)?;

    let page = view.render();
    if json {
        let body = serde_json::json!({ "summary": summary, "table": page });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }
    println!("{}", display::backtest_summary(&summary));
    println!("{}", display::backtests_table(&page));
    println!("{}", display::showing_line(&page, "trades"));
    Ok(())
}

pub async fn handle_momentum(args: MomentumArgs, settings: &Settings, json: bool) -> anyhow::Result<()> {
    let source = web_server::build_data_source(&settings.data_source).await?;
    let portfolios: Vec<QuarterlyPortfolio> = with_spinner(
        "Loading momentum portfolio...",
        RecordSource::<QuarterlyPortfolio>::fetch_records(&source),
    )
    .await?
    .context("Could not load the momentum portfolio")?;

    let quarters = quarters_most_recent_first(&portfolios);
    let label = match args.quarter.as_deref() {
        Some(label) => label.to_string(),
        None => quarters
            .first()
            .cloned()
            .ok_or_else(|| anyhow!("No quarters available"))?,
    };
    let selected = find_quarter(&portfolios, &label)?;

    let mut performance: Vec<_> = portfolios.iter().map(QuarterlyPortfolio::performance).collect();
    performance.sort_by_key(|p| core_types::parse_quarter(&p.quarter).map(|(q, y)| (y, q)).ok());
    let stats = AnalyticsEngine::new().performance_stats(&performance);

    let viewport = args.width.map(ViewportClass::from_width).unwrap_or(settings.view.viewport);
    let layout = ChartLayout::for_viewport(viewport);
    let bars = layout.performance_bars(&performance).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "No chart bars to draw.");
        Vec::new()
    });

    let mut view = TabularView::new(selected.stocks.clone(), settings.view.holdings_per_page);
    apply_table_args(&mut view, args.sort, &args.table)?;
    let page = view.render();

    if json {
        let body = serde_json::json!({
            "quarters": quarters,
            "stats": stats,
            "chart": { "layout": layout, "width": layout.width(bars.len()), "bars": bars },
            "quarter": selected.quarter,
            "period": selected.period,
            "holdings": page,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }
    println!("{}", display::performance_summary(&stats));
    println!("{}", display::performance_chart(&bars, &layout));
    println!(
        "{} ({}): portfolio {} vs NIFTY {}",
        selected.quarter,
        selected.period,
        display::format_pct(selected.portfolio_return),
        display::format_pct(selected.benchmark_return),
    );
    println!("{}", display::holdings_table(&page));
    println!("Available quarters: {}", quarters.join(", "));
    Ok(())
}

pub async fn handle_search(args: SearchArgs, settings: &Settings, json: bool) -> anyhow::Result<()> {
    if args.query.trim().is_empty() {
        return Err(anyhow!("Search query must not be empty"));
    }
    let source = web_server::build_data_source(&settings.data_source).await?;
    let hits = with_spinner("Searching...", source.search_stocks(&args.query))
        .await?
        .context("Search failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }
    if hits.is_empty() {
        println!("No stocks match '{}'.", args.query);
        return Ok(());
    }
    let view = TabularView::new(hits, settings.view.stocks_per_page);
    println!("{}", display::stocks_table(&view.render()));
    Ok(())
}

pub async fn handle_history(args: HistoryArgs, settings: &Settings, json: bool) -> anyhow::Result<()> {
    let max_days = web_server::handlers::MAX_HISTORY_DAYS;
    if !(1..=max_days).contains(&args.days) {
        return Err(anyhow!("--days must be between 1 and {max_days}"));
    }
    let symbol = args.symbol.trim().to_uppercase();
    let source = web_server::build_data_source(&settings.data_source).await?;
    let points = with_spinner(
        &format!("Loading {symbol} prices..."),
        source.stock_performance(&symbol, args.days),
    )
    .await?
    .with_context(|| format!("Could not load the price history of {symbol}"))?;
    let summary = AnalyticsEngine::new().price_history_summary(&points);

    if json {
        let body = serde_json::json!({ "symbol": symbol, "days": args.days, "summary": summary, "points": points });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }
    if points.is_empty() {
        println!("No price history for '{symbol}' in the last {} days.", args.days);
        return Ok(());
    }
    println!("{}", display::history_summary(&symbol, args.days, &summary));
    println!("{}", display::history_table(&points));
    Ok(())
}
