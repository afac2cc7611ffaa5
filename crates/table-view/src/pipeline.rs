//! The pure `filter -> sort -> paginate` stages.

use crate::record::TableRecord;
use crate::spec::{FilterSpec, SortSpec};
use core_types::SortDirection;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

/// Keeps the records admitted by `filters`, in their original order.
pub fn apply_filter<'a, R, I>(records: I, filters: &FilterSpec<R::FilterField>) -> Vec<&'a R>
where
    R: TableRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records.into_iter().filter(|r| filters.admits(*r)).collect()
}

/// Stable sort by the active field.
///
/// Descending is the reversed ascending comparator, so equal keys keep their
/// input order in both directions.
pub fn apply_sort<'a, R, I>(records: I, sort: SortSpec<R::SortField>) -> Vec<&'a R>
where
    R: TableRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut sorted: Vec<&'a R> = records.into_iter().collect();
    sorted.sort_by(|a, b| compare_records(*a, *b, sort));
    sorted
}

pub fn compare_records<R: TableRecord>(a: &R, b: &R, sort: SortSpec<R::SortField>) -> Ordering {
    let ascending = a.sort_key(sort.field).compare(&b.sort_key(sort.field));
    match sort.direction {
        SortDirection::Ascending => ascending,
        SortDirection::Descending => ascending.reverse(),
    }
}

/// 1-indexed page position over a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub items_per_page: NonZeroUsize,
}

impl Pagination {
    pub fn first(items_per_page: NonZeroUsize) -> Self {
        Self { current_page: 1, items_per_page }
    }

    /// Index of the first row of the current page within the full result.
    pub fn offset(&self) -> usize {
        self.current_page
            .saturating_sub(1)
            .saturating_mul(self.items_per_page.get())
    }
}

/// Page count for `count` rows; never below one.
pub fn total_pages(count: usize, items_per_page: NonZeroUsize) -> usize {
    count.div_ceil(items_per_page.get()).max(1)
}

/// One page of an already filtered and sorted collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, R> {
    pub records: Vec<&'a R>,
    pub total_pages: usize,
}

/// Slices out the current page, clamped to the collection bounds.
///
/// A page past the end yields an empty slice rather than an error.
pub fn apply_pagination<'a, R>(records: &[&'a R], pagination: &Pagination) -> Page<'a, R> {
    let len = records.len();
    let start = pagination.offset().min(len);
    let end = start.saturating_add(pagination.items_per_page.get()).min(len);

    Page {
        records: records[start..end].to_vec(),
        total_pages: total_pages(len, pagination.items_per_page),
    }
}

/// The page-number buttons shown around the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub first: usize,
    pub last: usize,
}

impl PageWindow {
    pub const WIDTH: usize = 5;

    /// All pages when there are at most five, otherwise five pages centred on
    /// `current` and shifted to stay within `1..=total`.
    pub fn around(current: usize, total: usize) -> Self {
        let total = total.max(1);
        if total <= Self::WIDTH {
            return Self { first: 1, last: total };
        }
        let first = current.saturating_sub(2).clamp(1, total - (Self::WIDTH - 1));
        Self { first, last: first + Self::WIDTH - 1 }
    }

    pub fn pages(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_page(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn total_pages_has_a_floor_of_one() {
        assert_eq!(total_pages(0, per_page(20)), 1);
        assert_eq!(total_pages(20, per_page(20)), 1);
        assert_eq!(total_pages(21, per_page(20)), 2);
        assert_eq!(total_pages(25, per_page(6)), 5);
    }

    #[test]
    fn pagination_clamps_to_collection_bounds() {
        let rows: Vec<u32> = (1..=7).collect();
        let refs: Vec<&u32> = rows.iter().collect();

        let last = apply_pagination(&refs, &Pagination { current_page: 2, items_per_page: per_page(5) });
        assert_eq!(last.records, vec![&6, &7]);
        assert_eq!(last.total_pages, 2);

        let beyond = apply_pagination(&refs, &Pagination { current_page: 9, items_per_page: per_page(5) });
        assert!(beyond.records.is_empty());
        assert_eq!(beyond.total_pages, 2);
    }

    #[test]
    fn window_shows_every_page_when_few() {
        assert_eq!(PageWindow::around(1, 1).pages().collect::<Vec<_>>(), vec![1]);
        assert_eq!(PageWindow::around(3, 4).pages().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(PageWindow::around(1, 0).pages().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn window_slides_and_clamps() {
        assert_eq!(PageWindow::around(1, 10), PageWindow { first: 1, last: 5 });
        assert_eq!(PageWindow::around(3, 10), PageWindow { first: 1, last: 5 });
        assert_eq!(PageWindow::around(6, 10), PageWindow { first: 4, last: 8 });
        assert_eq!(PageWindow::around(9, 10), PageWindow { first: 6, last: 10 });
        assert_eq!(PageWindow::around(10, 10), PageWindow { first: 6, last: 10 });
    }
}
