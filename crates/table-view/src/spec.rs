use crate::record::TableRecord;
use core_types::SortDirection;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The single active sort key and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + PartialEq> SortSpec<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn descending(field: F) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    pub fn ascending(field: F) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    /// The spec after the user clicks the header of `field`.
    ///
    /// The active field toggles its direction; any other field starts descending.
    pub fn clicked(self, field: F) -> Self {
        if field == self.field {
            Self::new(field, self.direction.toggled())
        } else {
            Self::descending(field)
        }
    }
}

/// Which end of a range a filter edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterBound {
    Min,
    Max,
}

/// An inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl FilterRange {
    pub const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: Decimal) -> bool {
        self.min <= value && value <= self.max
    }

    /// A copy with one bound replaced.
    pub fn with_bound(self, bound: FilterBound, value: Decimal) -> Self {
        match bound {
            FilterBound::Min => Self::new(value, self.max),
            FilterBound::Max => Self::new(self.min, value),
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }

    /// True when both bounds lie inside `domain`.
    pub fn is_within(&self, domain: &FilterRange) -> bool {
        domain.contains(self.min) && domain.contains(self.max)
    }
}

impl fmt::Display for FilterRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Per-field inclusive ranges. A record passes when every listed field is in range.
///
/// Fields with no entry are unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSpec<F: Ord> {
    ranges: BTreeMap<F, FilterRange>,
}

impl<F: Ord + Copy + 'static> FilterSpec<F> {
    /// A spec with no constrained fields.
    pub fn new() -> Self {
        Self { ranges: BTreeMap::new() }
    }

    /// Every filterable field of `R` set to its full domain.
    pub fn full_domain<R>() -> Self
    where
        R: TableRecord<FilterField = F>,
    {
        let ranges = R::filterable_fields()
            .iter()
            .map(|&field| (field, R::filter_domain(field)))
            .collect();
        Self { ranges }
    }

    pub fn get(&self, field: F) -> Option<FilterRange> {
        self.ranges.get(&field).copied()
    }

    /// A new spec with `field` constrained to `range`.
    pub fn with_range(&self, field: F, range: FilterRange) -> Self {
        let mut ranges = self.ranges.clone();
        ranges.insert(field, range);
        Self { ranges }
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, FilterRange)> + '_ {
        self.ranges.iter().map(|(field, range)| (*field, *range))
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// True when every constrained field of `record` lies within its range.
    pub fn admits<R>(&self, record: &R) -> bool
    where
        R: TableRecord<FilterField = F>,
    {
        self.ranges
            .iter()
            .all(|(field, range)| range.contains(record.filter_value(*field)))
    }
}

impl<F: Ord + Copy + 'static> Default for FilterSpec<F> {
    fn default() -> Self {
        Self::new()
    }
}
