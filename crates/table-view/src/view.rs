use crate::error::ViewError;
use crate::pipeline::{PageWindow, Pagination, apply_filter, apply_pagination, apply_sort, total_pages};
use crate::record::TableRecord;
use crate::spec::{FilterBound, FilterSpec, SortSpec};
use core_types::SortDirection;
use rust_decimal::Decimal;
use serde::Serialize;
use std::num::NonZeroUsize;

/// User interactions the presentation layer feeds back into the view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent<R: TableRecord> {
    /// A click on a sortable column header.
    SortBy(R::SortField),
    SetFilterBound {
        field: R::FilterField,
        bound: FilterBound,
        value: Decimal,
    },
    GoToPage(usize),
    PreviousPage,
    NextPage,
    ReplaceRecords(Vec<R>),
}

/// A record set plus the sort, filter and page state that selects what is visible.
///
/// Every change replaces one of the spec values wholesale; the visible page is
/// derived on demand by `render`.
#[derive(Debug, Clone)]
pub struct TabularView<R: TableRecord> {
    records: Vec<R>,
    sort: SortSpec<R::SortField>,
    filters: FilterSpec<R::FilterField>,
    pagination: Pagination,
}

impl<R: TableRecord> TabularView<R> {
    pub fn new(records: Vec<R>, items_per_page: NonZeroUsize) -> Self {
        Self {
            records,
            sort: R::default_sort(),
            filters: FilterSpec::full_domain::<R>(),
            pagination: Pagination::first(items_per_page),
        }
    }

    /// A view with no records yet, e.g. while the first load is in flight.
    pub fn empty(items_per_page: NonZeroUsize) -> Self {
        Self::new(Vec::new(), items_per_page)
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn sort(&self) -> SortSpec<R::SortField> {
        self.sort
    }

    pub fn filters(&self) -> &FilterSpec<R::FilterField> {
        &self.filters
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page
    }

    /// Dispatches one event. Only filter edits can fail.
    pub fn handle(&mut self, event: ViewEvent<R>) -> Result<(), ViewError> {
        match event {
            ViewEvent::SortBy(field) => self.sort_by(field),
            ViewEvent::SetFilterBound { field, bound, value } => {
                self.set_filter_bound(field, bound, value)?
            }
            ViewEvent::GoToPage(page) => self.go_to_page(page),
            ViewEvent::PreviousPage => self.previous_page(),
            ViewEvent::NextPage => self.next_page(),
            ViewEvent::ReplaceRecords(records) => self.replace_records(records),
        }
        Ok(())
    }

    /// Header click: toggles the active field, otherwise switches to `field` descending.
    pub fn sort_by(&mut self, field: R::SortField) {
        self.sort = self.sort.clicked(field);
        self.reset_page();
    }

    /// Keeps the field and sets the direction, as the backtest page's toggle button does.
    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.sort = SortSpec::new(self.sort.field, direction);
        self.reset_page();
    }

    pub fn set_sort(&mut self, sort: SortSpec<R::SortField>) {
        self.sort = sort;
        self.reset_page();
    }

    /// Moves one end of a field's range.
    ///
    /// Inverted ranges and bounds outside the field's domain are rejected and
    /// leave the view untouched.
    pub fn set_filter_bound(
        &mut self,
        field: R::FilterField,
        bound: FilterBound,
        value: Decimal,
    ) -> Result<(), ViewError> {
        let domain = R::filter_domain(field);
        let current = self.filters.get(field).unwrap_or(domain);
        let requested = current.with_bound(bound, value);

        if !requested.is_ordered() || !requested.is_within(&domain) {
            tracing::debug!(?field, %requested, %domain, "Rejected filter edit.");
            return Err(ViewError::InvalidFilterRange {
                field: format!("{field:?}"),
                requested,
                domain,
            });
        }

        self.filters = self.filters.with_range(field, requested);
        self.reset_page();
        Ok(())
    }

    /// Restores every field to its full domain.
    pub fn reset_filters(&mut self) {
        self.filters = FilterSpec::full_domain::<R>();
        self.reset_page();
    }

    /// Jumps to `page`, clamped to `1..=total_pages`.
    pub fn go_to_page(&mut self, page: usize) {
        let page = page.clamp(1, self.total_pages());
        self.pagination = Pagination { current_page: page, ..self.pagination };
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.pagination.current_page.saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.pagination.current_page.saturating_add(1));
    }

    /// Swaps in a new record set and returns sort, filters and page to their defaults.
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.sort = R::default_sort();
        self.filters = FilterSpec::full_domain::<R>();
        self.reset_page();
    }

    /// The filtered and sorted rows across all pages.
    pub fn derive(&self) -> Vec<&R> {
        let filtered = apply_filter(&self.records, &self.filters);
        apply_sort(filtered, self.sort)
    }

    pub fn filtered_count(&self) -> usize {
        self.records.iter().filter(|r| self.filters.admits(*r)).count()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), self.pagination.items_per_page)
    }

    /// Runs the full derivation and packages what the presentation layer draws.
    pub fn render(&self) -> RenderedPage<'_, R> {
        let rows = self.derive();
        let page = apply_pagination(&rows, &self.pagination);
        let current_page = self.pagination.current_page;
        let offset = self.pagination.offset();

        let (showing_from, showing_to) = if page.records.is_empty() {
            (0, 0)
        } else {
            (offset + 1, offset + page.records.len())
        };

        RenderedPage {
            first_rank: offset + 1,
            records: page.records,
            current_page,
            total_pages: page.total_pages,
            page_numbers: PageWindow::around(current_page, page.total_pages).pages().collect(),
            has_previous: current_page > 1,
            has_next: current_page < page.total_pages,
            showing_from,
            showing_to,
            filtered_count: rows.len(),
            total_count: self.records.len(),
            sort: self.sort,
            filters: self.filters.clone(),
        }
    }

    fn reset_page(&mut self) {
        self.pagination = Pagination::first(self.pagination.items_per_page);
    }
}

/// Everything one render of the table needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(serialize = "R: Serialize, R::SortField: Serialize, R::FilterField: Serialize"))]
pub struct RenderedPage<'a, R: TableRecord> {
    pub records: Vec<&'a R>,
    /// Rank of the first row on this page, counting from one.
    pub first_rank: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_numbers: Vec<usize>,
    pub has_previous: bool,
    pub has_next: bool,
    pub showing_from: usize,
    pub showing_to: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub sort: SortSpec<R::SortField>,
    pub filters: FilterSpec<R::FilterField>,
}

impl<R: TableRecord> RenderedPage<'_, R> {
    /// Pairs each visible row with its overall rank.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &R)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| (self.first_rank + i, *r))
    }

    pub fn ids(&self) -> Vec<R::Id> {
        self.records.iter().map(|r| r.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{HoldingColumn, HoldingMetric};
    use crate::spec::FilterRange;
    use core_types::PortfolioStock;
    use rust_decimal_macros::dec;

    fn holding(symbol: &str, weight: Decimal, ret: Decimal) -> PortfolioStock {
        PortfolioStock {
            symbol: symbol.to_string(),
            company: format!("{symbol} Ltd."),
            weight,
            quarterly_return: ret,
            logo: None,
        }
    }

    fn view_of(n: usize, per_page: usize) -> TabularView<PortfolioStock> {
        let records = (0..n)
            .map(|i| holding(&format!("S{i:02}"), Decimal::from(i as u64), dec!(5)))
            .collect();
        TabularView::new(records, NonZeroUsize::new(per_page).unwrap())
    }

    #[test]
    fn starts_on_default_sort_and_full_filters() {
        let view = view_of(3, 2);
        assert_eq!(view.sort(), SortSpec::descending(HoldingColumn::Weight));
        assert_eq!(
            view.filters().get(HoldingMetric::Weight),
            Some(FilterRange::new(dec!(0), dec!(100)))
        );
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn next_and_previous_stay_in_range() {
        let mut view = view_of(5, 2);
        view.previous_page();
        assert_eq!(view.current_page(), 1);
        view.next_page();
        view.next_page();
        view.next_page();
        assert_eq!(view.current_page(), 3);
    }

    #[test]
    fn go_to_page_clamps_instead_of_failing() {
        let mut view = view_of(5, 2);
        view.go_to_page(42);
        assert_eq!(view.current_page(), 3);
        view.go_to_page(0);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn filter_edit_resets_page() {
        let mut view = view_of(10, 2);
        view.go_to_page(4);
        view.set_filter_bound(HoldingMetric::Weight, FilterBound::Min, dec!(2)).unwrap();
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.filtered_count(), 8);
    }

    #[test]
    fn inverted_filter_is_rejected_without_side_effects() {
        let mut view = view_of(10, 2);
        view.set_filter_bound(HoldingMetric::Weight, FilterBound::Max, dec!(5)).unwrap();
        view.go_to_page(2);

        let err = view
            .set_filter_bound(HoldingMetric::Weight, FilterBound::Min, dec!(6))
            .unwrap_err();
        assert!(matches!(err, ViewError::InvalidFilterRange { .. }));
        assert_eq!(view.current_page(), 2);
        assert_eq!(
            view.filters().get(HoldingMetric::Weight),
            Some(FilterRange::new(dec!(0), dec!(5)))
        );
    }

    #[test]
    fn out_of_domain_bound_is_rejected() {
        let mut view = view_of(3, 2);
        assert!(view.set_filter_bound(HoldingMetric::Weight, FilterBound::Max, dec!(101)).is_err());
        assert!(view.set_filter_bound(HoldingMetric::Weight, FilterBound::Min, dec!(-0.1)).is_err());
    }

    #[test]
    fn replacing_records_resets_every_spec() {
        let mut view = view_of(10, 2);
        view.sort_by(HoldingColumn::Symbol);
        view.set_filter_bound(HoldingMetric::Weight, FilterBound::Min, dec!(3)).unwrap();
        view.go_to_page(2);

        view.handle(ViewEvent::ReplaceRecords(vec![holding("NEW", dec!(8.33), dec!(1))])).unwrap();
        assert_eq!(view.sort(), SortSpec::descending(HoldingColumn::Weight));
        assert_eq!(view.filters(), &FilterSpec::full_domain::<PortfolioStock>());
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.records().len(), 1);
    }

    #[test]
    fn direction_toggle_keeps_the_field() {
        let mut view = view_of(4, 2);
        view.sort_by(HoldingColumn::Company);
        view.go_to_page(2);
        view.set_sort_direction(SortDirection::Ascending);
        assert_eq!(view.sort(), SortSpec::ascending(HoldingColumn::Company));
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn render_reports_showing_range_and_ranks() {
        let mut view = view_of(5, 2);
        view.go_to_page(3);
        let page = view.render();
        assert_eq!(page.records.len(), 1);
        assert_eq!((page.showing_from, page.showing_to), (5, 5));
        assert_eq!(page.ranked().map(|(rank, _)| rank).collect::<Vec<_>>(), vec![5]);
        assert!(page.has_previous);
        assert!(!page.has_next);
        assert_eq!(page.total_count, 5);
    }

    #[test]
    fn rendered_page_serializes_for_the_wire() {
        let view = view_of(3, 2);
        let json = serde_json::to_value(view.render()).unwrap();
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["sort"]["field"], "weight");
        assert_eq!(json["sort"]["direction"], "desc");
        assert_eq!(json["records"].as_array().unwrap().len(), 2);
        assert!(json["filters"]["quarterlyReturn"].is_object());
    }
}
