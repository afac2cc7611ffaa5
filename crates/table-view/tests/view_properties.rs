use chrono::NaiveDate;
use core_types::{BacktestRecord, PortfolioStock, SortDirection, Stock};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::num::NonZeroUsize;
use table_view::{
    FilterBound, FilterRange, FilterSpec, HoldingColumn, Pagination, SortSpec, StockColumn,
    StockScore, TableRecord, TabularView, ViewEvent, apply_filter, apply_pagination, apply_sort,
    total_pages,
};

fn per_page(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn stock(symbol: &str, ai_score: Decimal, fundamental: Decimal) -> Stock {
    Stock {
        symbol: symbol.to_string(),
        company: format!("{symbol} Ltd."),
        price: dec!(1000),
        ai_score,
        week1: dec!(0.5),
        month1: dec!(1.5),
        month3: dec!(4.0),
        month6: dec!(9.0),
        fundamental,
        technical: dec!(7),
        sentiment: dec!(7),
        valuation: dec!(7),
        industry: dec!(7),
        trade_ranking: "Buy".to_string(),
        market_cap: None,
        volume: None,
        logo: None,
    }
}

fn holding(id: &str, weight: Decimal) -> PortfolioStock {
    PortfolioStock {
        symbol: id.to_string(),
        company: format!("{id} Ltd."),
        weight,
        quarterly_return: dec!(10),
        logo: None,
    }
}

fn trade(id: &str, returns: Decimal) -> BacktestRecord {
    BacktestRecord {
        id: id.to_string(),
        symbol: id.to_uppercase(),
        company: format!("{id} Ltd."),
        buy_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        buy_price: dec!(100),
        sell_date: NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(),
        sell_price: dec!(100) + returns,
        returns,
        holding_period: 178,
        ai_score_at_buy: dec!(8.5),
        logo: None,
    }
}

/// Deterministic scores in 0.0..=9.9 with plenty of duplicates.
fn scattered_stocks(n: usize) -> Vec<Stock> {
    let mut seed: u64 = 0x9E37_79B9;
    (0..n)
        .map(|i| {
            seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
            let ai = Decimal::new(((seed >> 33) % 100) as i64, 1);
            let fundamental = Decimal::new(((seed >> 17) % 20) as i64 * 5, 1);
            stock(&format!("SYM{i:03}"), ai, fundamental)
        })
        .collect()
}

fn symbols(records: &[&Stock]) -> Vec<String> {
    records.iter().map(|s| s.symbol.clone()).collect()
}

#[test]
fn filter_keeps_exactly_the_records_in_every_range() {
    let stocks = scattered_stocks(60);
    let filters = FilterSpec::full_domain::<Stock>()
        .with_range(StockScore::AiScore, FilterRange::new(dec!(3), dec!(7.5)))
        .with_range(StockScore::Fundamental, FilterRange::new(dec!(2), dec!(8)));

    let kept = apply_filter(&stocks, &filters);

    for s in &stocks {
        let expected = (dec!(3)..=dec!(7.5)).contains(&s.ai_score)
            && (dec!(2)..=dec!(8)).contains(&s.fundamental);
        assert_eq!(kept.iter().any(|k| k.symbol == s.symbol), expected, "{}", s.symbol);
    }

    // Relative order is the input order.
    let positions: Vec<usize> = kept
        .iter()
        .map(|k| stocks.iter().position(|s| s.symbol == k.symbol).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn fields_missing_from_the_spec_are_unconstrained() {
    let stocks = scattered_stocks(20);
    let kept = apply_filter(&stocks, &FilterSpec::new());
    assert_eq!(kept.len(), stocks.len());
}

#[test]
fn sort_is_stable_in_both_directions() {
    let stocks = scattered_stocks(80);
    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        let sorted = apply_sort(&stocks, SortSpec::new(StockColumn::AiScore, direction));
        for pair in sorted.windows(2) {
            if pair[0].ai_score == pair[1].ai_score {
                let a = stocks.iter().position(|s| s.symbol == pair[0].symbol).unwrap();
                let b = stocks.iter().position(|s| s.symbol == pair[1].symbol).unwrap();
                assert!(a < b, "tie between {} and {} reordered", pair[0].symbol, pair[1].symbol);
            }
        }
    }
}

#[test]
fn descending_is_ascending_reversed_for_distinct_keys() {
    let stocks: Vec<Stock> = (0..15)
        .map(|i| stock(&format!("D{i}"), Decimal::new((i * 7 % 15) as i64, 0), dec!(5)))
        .collect();

    let ascending = apply_sort(&stocks, SortSpec::ascending(StockColumn::AiScore));
    let mut reversed = symbols(&ascending);
    reversed.reverse();
    let descending = apply_sort(&stocks, SortSpec::descending(StockColumn::AiScore));

    assert_eq!(reversed, symbols(&descending));
}

#[test]
fn pages_concatenate_to_the_full_result() {
    let stocks = scattered_stocks(47);
    let filters = FilterSpec::full_domain::<Stock>()
        .with_range(StockScore::AiScore, FilterRange::new(dec!(1), dec!(9)));
    let rows = apply_sort(apply_filter(&stocks, &filters), SortSpec::descending(StockColumn::AiScore));

    let size = per_page(6);
    let pages = total_pages(rows.len(), size);
    let mut stitched = Vec::new();
    for current_page in 1..=pages {
        let page = apply_pagination(&rows, &Pagination { current_page, items_per_page: size });
        assert_eq!(page.total_pages, pages);
        stitched.extend(page.records);
    }

    assert_eq!(symbols(&stitched), symbols(&rows));
}

#[test]
fn reapplying_the_pipeline_changes_nothing() {
    let stocks = scattered_stocks(30);
    let snapshot = stocks.clone();
    let filters = FilterSpec::full_domain::<Stock>()
        .with_range(StockScore::Fundamental, FilterRange::new(dec!(3), dec!(9)));
    let sort = SortSpec::ascending(StockColumn::Symbol);

    let once = apply_sort(apply_filter(&stocks, &filters), sort);
    let twice = apply_sort(apply_filter(once.iter().copied(), &filters), sort);

    assert_eq!(symbols(&once), symbols(&twice));
    assert_eq!(stocks, snapshot);
}

#[test]
fn first_page_holds_the_twenty_highest_scores() {
    let stocks: Vec<Stock> = (0..25)
        .map(|i| stock(&format!("A{i:02}"), Decimal::new((i * 37 % 100) as i64, 1), dec!(5)))
        .collect();
    let mut view = TabularView::new(stocks.clone(), per_page(20));

    let first = view.render();
    assert_eq!(first.records.len(), 20);
    assert_eq!(first.total_pages, 2);
    assert!(first.records.windows(2).all(|w| w[0].ai_score >= w[1].ai_score));

    let mut scores: Vec<Decimal> = stocks.iter().map(|s| s.ai_score).collect();
    scores.sort_by(|a, b| b.cmp(a));
    let lowest_on_first = first.records.last().unwrap().ai_score;
    assert_eq!(lowest_on_first, scores[19]);

    view.next_page();
    let second = view.render();
    assert_eq!(second.records.len(), 5);
    assert!(second.records.iter().all(|s| s.ai_score <= lowest_on_first));
}

#[test]
fn fundamental_filter_keeps_three_of_ten_in_order() {
    let fundamentals = [dec!(5.9), dec!(6.0), dec!(2), dec!(8.8), dec!(4), dec!(3.3), dec!(10), dec!(5), dec!(1), dec!(0)];
    let stocks: Vec<Stock> = fundamentals
        .iter()
        .enumerate()
        .map(|(i, f)| stock(&format!("B{i}"), dec!(5), *f))
        .collect();
    let mut view = TabularView::new(stocks, per_page(20));

    view.handle(ViewEvent::SetFilterBound {
        field: StockScore::Fundamental,
        bound: FilterBound::Min,
        value: dec!(6),
    })
    .unwrap();

    let filtered = apply_filter(view.records(), view.filters());
    assert_eq!(symbols(&filtered), vec!["B1", "B3", "B6"]);
    assert_eq!(view.render().filtered_count, 3);
}

#[test]
fn changing_the_sort_field_returns_to_page_one() {
    let mut view = TabularView::new(scattered_stocks(70), per_page(20));
    view.handle(ViewEvent::GoToPage(3)).unwrap();
    assert_eq!(view.current_page(), 3);

    view.handle(ViewEvent::SortBy(StockColumn::Price)).unwrap();
    assert_eq!(view.current_page(), 1);
    assert_eq!(view.sort(), SortSpec::descending(StockColumn::Price));
}

#[test]
fn empty_result_still_has_one_page() {
    let mut view = TabularView::new(scattered_stocks(10), per_page(20));
    view.set_filter_bound(StockScore::AiScore, FilterBound::Min, dec!(10)).unwrap();
    view.set_filter_bound(StockScore::Fundamental, FilterBound::Max, dec!(0)).unwrap();

    let page = view.render();
    assert!(page.records.is_empty());
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.page_numbers, vec![1]);
    assert_eq!((page.showing_from, page.showing_to), (0, 0));
}

#[test]
fn ties_keep_input_order() {
    let records = vec![holding("1", dec!(5)), holding("2", dec!(5)), holding("3", dec!(3))];
    let mut view = TabularView::new(records, per_page(10));

    view.set_sort(SortSpec::descending(HoldingColumn::Weight));
    assert_eq!(view.render().ids(), vec!["1", "2", "3"]);

    view.sort_by(HoldingColumn::Weight);
    assert_eq!(view.sort().direction, SortDirection::Ascending);
    assert_eq!(view.render().ids(), vec!["3", "1", "2"]);
}

#[test]
fn ids_are_unique_on_every_page() {
    let view = TabularView::new(scattered_stocks(45), per_page(20));
    let ids = view.render().ids();
    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(ids.len(), deduped.len());
    assert_eq!(ids[0], view.derive()[0].id());
}

#[test]
fn fresh_stock_view_admits_every_record() {
    let mut stocks = scattered_stocks(30);
    stocks.push(stock("FLOOR", dec!(0), dec!(0)));
    stocks.push(stock("CEILING", dec!(10), dec!(10)));
    let mut view = TabularView::new(stocks.clone(), per_page(20));

    let page = view.render();
    assert_eq!(page.filtered_count, page.total_count);
    assert_eq!(page.total_count, 32);

    view.replace_records(stocks);
    assert_eq!(view.render().filtered_count, 32);
}

#[test]
fn fresh_backtest_view_admits_extreme_returns() {
    let trades = vec![
        trade("moonshot", dec!(1400)),
        trade("wipeout", dec!(-100)),
        trade("flat", dec!(0)),
    ];
    let mut view = TabularView::new(trades.clone(), per_page(6));

    let page = view.render();
    assert_eq!(page.filtered_count, page.total_count);
    assert_eq!(page.records[0].id, "moonshot");

    view.replace_records(vec![trade("tenbagger", dec!(98765.43))]);
    let page = view.render();
    assert_eq!((page.filtered_count, page.total_count), (1, 1));
}

#[test]
fn fresh_holding_view_admits_every_weight_and_return() {
    let mut outlier = holding("OUTLIER", dec!(100));
    outlier.quarterly_return = dec!(1400);
    let mut faller = holding("FALLER", dec!(0));
    faller.quarterly_return = dec!(-95);
    let holdings = vec![outlier, faller, holding("STEADY", dec!(8.33))];

    let mut view = TabularView::new(holdings.clone(), per_page(12));
    let page = view.render();
    assert_eq!(page.filtered_count, 3);
    assert_eq!(page.filtered_count, page.total_count);

    view.handle(ViewEvent::ReplaceRecords(holdings)).unwrap();
    assert_eq!(view.render().filtered_count, 3);
}
