use axum::{Router, routing::get};
use configuration::{DataSourceKind, DataSourceSettings, Settings};
use database::{DataSource, DbError, DbRepository, MockSource};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;
pub mod query;

/// The shared application state that all handlers can access.
///
/// No view state lives here: every request builds its own view from the
/// freshly fetched records.
#[derive(Debug, Clone)]
pub struct AppState {
    pub source: DataSource,
    pub settings: Settings,
}

/// Builds the configured data source, connecting and migrating PostgreSQL if selected.
pub async fn build_data_source(settings: &DataSourceSettings) -> Result<DataSource, DbError> {
    match settings.kind {
        DataSourceKind::Mock => {
            let delay = Duration::from_millis(settings.simulated_load_ms);
            tracing::info!(delay_ms = settings.simulated_load_ms, "Using the demo data source.");
            Ok(DataSource::Mock(MockSource::new(delay)))
        }
        DataSourceKind::Postgres => {
            let pool = database::connect().await?;
            database::run_migrations(&pool).await?;
            Ok(DataSource::Postgres(DbRepository::new(pool)))
        }
    }
}

/// The application routes with CORS and request tracing.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/stocks", get(handlers::get_stocks))
        .route("/api/stocks/search", get(handlers::search_stocks))
        .route("/api/stocks/:symbol/history", get(handlers::get_stock_history))
        .route("/api/backtests", get(handlers::get_backtests))
        .route("/api/momentum", get(handlers::get_momentum))
        .route("/api/momentum/:quarter", get(handlers::get_quarter))
        .with_state(state)
        .layer(cors)
        // Logs every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Configures and runs the web server until it is shut down.
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    let source = build_data_source(&settings.data_source).await?;
    let addr = settings.server.socket_addr();
    let app = router(Arc::new(AppState { source, settings }));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server started and listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
