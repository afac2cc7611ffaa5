//! # Passive Wealth Database Crate
//!
//! This crate is the dashboard's data-source collaborator. Everything above it
//! asks for a complete record set and never sees SQL.
//!
//! ## Architectural Principles
//!
//! - **Layer 3 Adapter:** All database-specific logic lives here. The rest of
//!   the application talks to the `RecordSource` trait.
//! - **Read-only:** The dashboard only queries. Seeding happens outside the app.
//! - **Swappable backends:** `MockSource` serves a bundled demo dataset after a
//!   simulated delay; `DbRepository` reads PostgreSQL through a `PgPool`.
//!
//! ## Public API
//!
//! - `connect`, `run_migrations`: pool setup and schema migrations.
//! - `DbRepository`: the typed queries over the dashboard tables.
//! - `MockSource`: the demo dataset.
//! - `RecordSource`, `DataSource`, `refresh_view`: loading records into a view.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod mock;
pub mod repository;
pub mod source;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use mock::{
    MockSource, mock_backtests, mock_market_data, mock_quarterly_portfolios, mock_stocks,
};
pub use repository::{
    DbAiScore, DbBacktestResult, DbConstituent, DbMarketData, DbPortfolioPerformance, DbRepository,
    SEARCH_LIMIT, escape_like,
};
pub use source::{DataSource, RecordSource, refresh_view};
