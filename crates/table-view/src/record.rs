use crate::spec::{FilterRange, SortSpec};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

/// A row type the view can sort, filter and key.
///
/// Implementors declare their sortable and filterable fields as small `Copy`
/// enums and hand out the value behind each one.
pub trait TableRecord {
    /// Stable key of a row; unique within one record set.
    type Id: Eq + Hash + Clone + Debug;
    type SortField: Copy + Eq + Debug;
    type FilterField: Copy + Ord + Debug + 'static;

    fn id(&self) -> Self::Id;

    fn sort_key(&self, field: Self::SortField) -> SortKey<'_>;

    fn filter_value(&self, field: Self::FilterField) -> Decimal;

    /// Every field that takes part in range filtering.
    fn filterable_fields() -> &'static [Self::FilterField];

    /// The natural range of a filterable field; also its default filter.
    fn filter_domain(field: Self::FilterField) -> FilterRange;

    fn default_sort() -> SortSpec<Self::SortField>;
}

/// The comparable value behind a sortable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey<'a> {
    Number(Decimal),
    Date(NaiveDate),
    Text(&'a str),
}

impl SortKey<'_> {
    /// Ascending comparison.
    ///
    /// Text compares case-insensitively first, then by code point so the
    /// order stays total.
    pub fn compare(&self, other: &SortKey<'_>) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => compare_text(a, b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Date(_) => 1,
            SortKey::Text(_) => 2,
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}
