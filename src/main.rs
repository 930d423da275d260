use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use wishlist_core::{CoreConfig, database_location_from_env_value};

/// Main entry point for the wishlist web application
///
/// Resolves configuration once, opens (and migrates) the database, then serves the HTML pages
/// and JSON API until interrupted.
///
/// # Environment Variables
/// - `WISHLIST_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `WISHLIST_DB_PATH`: SQLite database file (default: "wishlist.db"; ":memory:" for a
///   throwaway database)
/// - `RUST_LOG`: Log filter, layered over the default `wishlist=info`
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the database cannot be opened or migrated,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::from_default_env()
                .add_directive("wishlist_run=info".parse()?)
                .add_directive("wishlist_core=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("WISHLIST_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let database = database_location_from_env_value(std::env::var("WISHLIST_DB_PATH").ok())?;
    let cfg = CoreConfig::new(database);

    let service = wishlist_core::open_service(&cfg)?;
    match cfg.database_path() {
        Some(path) => tracing::info!("++ Using database {}", path.display()),
        None => tracing::warn!("++ Using in-memory database; places will not be kept"),
    }

    let app = router(AppState::new(service));

    tracing::info!("++ Starting wishlist on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Wishlist stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
}
