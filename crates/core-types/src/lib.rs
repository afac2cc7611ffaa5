//! # Passive Wealth Core Types
//!
//! Layer 0 of the workspace: the plain data structures every other crate
//! speaks in. Nothing here performs I/O.

pub mod enums;
pub mod error;
pub mod format;
pub mod records;

// Re-export the core types to provide a clean public API.
pub use enums::{ScoreBand, SortDirection, ViewportClass};
pub use error::CoreError;
pub use format::{format_date, format_holding_period, format_inr, format_market_cap, group_indian};
pub use records::{
    BacktestRecord, MarketDataPoint, PortfolioStock, QuarterPerformance, QuarterlyPortfolio, Stock,
    find_quarter, parse_quarter, quarters_most_recent_first,
};
