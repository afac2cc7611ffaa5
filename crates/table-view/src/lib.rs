//! # Table View
//!
//! The sortable, filterable, paginated table model behind the top-stocks list,
//! the backtest history and the momentum holdings.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** Pure, synchronous code with no knowledge of where the
//!   records come from or how they are drawn. It depends only on `core-types`.
//! - **Derive, don't store:** The visible page is recomputed from
//!   `records -> filter -> sort -> paginate` on every render. The only state is
//!   the record set, the `SortSpec`, the `FilterSpec` and the `Pagination`.
//! - **Typed fields:** Records expose their sortable and filterable fields
//!   through the `TableRecord` trait instead of string lookups.
//!
//! ## Public API
//!
//! - `TabularView`: the stateful view that reacts to `ViewEvent`s.
//! - `apply_filter`, `apply_sort`, `apply_pagination`: the pure pipeline stages.
//! - `PageWindow`: the sliding set of page-number buttons.
//! - `ViewError`: rejected filter input.

pub mod error;
pub mod pipeline;
pub mod record;
pub mod records;
pub mod spec;
pub mod view;

pub use error::ViewError;
pub use pipeline::{Page, PageWindow, Pagination, apply_filter, apply_pagination, apply_sort, total_pages};
pub use record::{SortKey, TableRecord};
pub use records::{BacktestColumn, BacktestMetric, HoldingColumn, HoldingMetric, StockColumn, StockScore};
pub use spec::{FilterBound, FilterRange, FilterSpec, SortSpec};
pub use view::{RenderedPage, TabularView, ViewEvent};
