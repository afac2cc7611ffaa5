//! # Passive Wealth Analytics
//!
//! The header numbers of the dashboard: average returns, win rates,
//! outperformance against the benchmark, the price change over a stock's
//! history, and the bar layout of the quarterly performance chart.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** Pure reductions over record slices. It depends only on
//!   `core-types` and never sees how records were loaded.
//! - **No silent NaN:** Every average or rate over an empty input is `None`,
//!   which the presentation layer shows as "no data".
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: stateless calculator producing the summary structs.
//! - `PerformanceStats`, `BacktestSummary`, `PriceHistorySummary`: the report structs.
//! - `ChartLayout`, `QuarterBars`: viewport-dependent chart sizing.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod aggregate;
pub mod chart;
pub mod engine;
pub mod error;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use aggregate::{average, price_change_pct, win_rate};
pub use chart::{ChartLayout, QuarterBars};
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use report::{BacktestSummary, PerformanceStats, PriceHistorySummary};
