//! Translation of stateless query strings into view events.

use crate::error::AppError;
use core_types::SortDirection;
use rust_decimal::Decimal;
use serde::de::{DeserializeOwned, IntoDeserializer, value::StrDeserializer};
use serde::Deserialize;
use std::str::FromStr;
use table_view::{FilterBound, SortSpec, TableRecord, TabularView};

/// `?sort=aiScore&direction=asc&page=2&filters=fundamental:6:10,aiScore::9`
///
/// Filter entries are `field:min:max`; an empty bound leaves that end at the
/// field's domain.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TableQuery {
    pub sort: Option<String>,
    pub direction: Option<SortDirection>,
    pub page: Option<usize>,
    pub filters: Option<String>,
}

/// A column or filter name in its camelCase wire form, e.g. `aiScoreAtBuy`.
pub fn parse_field<F: DeserializeOwned>(name: &str) -> Result<F, AppError> {
    let deserializer: StrDeserializer<'_, serde::de::value::Error> = name.into_deserializer();
    F::deserialize(deserializer).map_err(|_| AppError::BadRequest(format!("Unknown field '{name}'")))
}

fn parse_bound(field: &str, raw: &str) -> Result<Option<Decimal>, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    Decimal::from_str(raw)
        .map(Some)
        .map_err(|_| AppError::BadRequest(format!("Invalid bound '{raw}' for '{field}'")))
}

impl TableQuery {
    /// Replays the query onto `view`: filters, then sort, then page.
    ///
    /// Filter and sort changes return the view to page 1, so the requested
    /// page is applied last (and clamped to the available pages).
    pub fn apply<R>(&self, view: &mut TabularView<R>) -> Result<(), AppError>
    where
        R: TableRecord,
        R::SortField: DeserializeOwned,
        R::FilterField: DeserializeOwned,
    {
        if let Some(filters) = self.filters.as_deref() {
            for entry in filters.split(',').map(str::trim).filter(|e| !e.is_empty()) {
                let mut parts = entry.split(':');
                let name = parts.next().unwrap_or_default();
                let field: R::FilterField = parse_field(name)?;
                let min = parse_bound(name, parts.next().unwrap_or_default())?;
                let max = parse_bound(name, parts.next().unwrap_or_default())?;
                if parts.next().is_some() {
                    return Err(AppError::BadRequest(format!("Malformed filter '{entry}'")));
                }

                if let Some(min) = min {
                    view.set_filter_bound(field, FilterBound::Min, min)?;
                }
                if let Some(max) = max {
                    view.set_filter_bound(field, FilterBound::Max, max)?;
                }
            }
        }

        if self.sort.is_some() || self.direction.is_some() {
            let field = match self.sort.as_deref() {
                Some(name) => parse_field(name)?,
                None => view.sort().field,
            };
            let direction = self.direction.unwrap_or(SortDirection::Descending);
            view.set_sort(SortSpec::new(field, direction));
        }

        if let Some(page) = self.page {
            view.go_to_page(page);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Stock;
    use rust_decimal_macros::dec;
    use std::num::NonZeroUsize;
    use table_view::{FilterRange, StockColumn, StockScore};

    fn query(sort: Option<&str>, direction: Option<SortDirection>, page: Option<usize>, filters: Option<&str>) -> TableQuery {
        TableQuery {
            sort: sort.map(str::to_string),
            direction,
            page,
            filters: filters.map(str::to_string),
        }
    }

    fn view() -> TabularView<Stock> {
        TabularView::new(database::mock_stocks(), NonZeroUsize::new(5).unwrap())
    }

    #[test]
    fn field_names_use_the_wire_form() {
        assert_eq!(parse_field::<StockColumn>("aiScore").unwrap(), StockColumn::AiScore);
        assert!(parse_field::<StockColumn>("ai_score").is_err());
    }

    #[test]
    fn filters_sort_and_page_are_replayed_in_order() {
        let mut view = view();
        query(Some("price"), Some(SortDirection::Ascending), Some(2), Some("aiScore:8:,fundamental::9.5"))
            .apply(&mut view)
            .unwrap();

        assert_eq!(view.filters().get(StockScore::AiScore), Some(FilterRange::new(dec!(8), dec!(10))));
        assert_eq!(view.filters().get(StockScore::Fundamental), Some(FilterRange::new(dec!(0), dec!(9.5))));
        assert_eq!(view.sort(), SortSpec::ascending(StockColumn::Price));
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn direction_alone_keeps_the_sort_field() {
        let mut view = view();
        query(None, Some(SortDirection::Ascending), None, None).apply(&mut view).unwrap();
        assert_eq!(view.sort(), SortSpec::ascending(StockColumn::AiScore));
    }

    #[test]
    fn inverted_range_is_a_view_error() {
        let mut view = view();
        let result = query(None, None, None, Some("technical:9:3")).apply(&mut view);
        assert!(matches!(result, Err(AppError::View(_))));
    }

    #[test]
    fn malformed_entries_are_bad_requests() {
        for filters in ["nope:1:2", "aiScore:x:2", "aiScore:1:2:3"] {
            let result = query(None, None, None, Some(filters)).apply(&mut view());
            assert!(matches!(result, Err(AppError::BadRequest(_))), "{filters}");
        }
    }

    #[test]
    fn page_beyond_the_end_is_clamped() {
        let mut view = view();
        query(None, None, Some(99), None).apply(&mut view).unwrap();
        assert_eq!(view.current_page(), view.total_pages());
    }
}
