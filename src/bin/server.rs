use std::{error::Error, fs::OpenOptions, net::SocketAddr, sync::Arc};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use accounts_api::{AppState, Collection, build_router, graceful_shutdown, logging_middleware};

/// The REST API server for managing customer accounts.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long, env = "ACCOUNTS_DB_PATH")]
    db_path: String,

    /// The collection to store account documents in.
    #[arg(long, env = "ACCOUNTS_COLLECTION", default_value = Collection::DEFAULT_NAME)]
    collection: String,

    /// The port to serve the API from.
    #[arg(short, long, env = "ACCOUNTS_PORT", default_value_t = 3000)]
    port: u16,

    /// File path to write debug logs to.
    #[arg(long, env = "ACCOUNTS_LOG_PATH", default_value = "debug.log")]
    log_path: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    setup_logging(&args.log_path)?;

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let collection = Collection::new(&args.collection)?;
    let conn = Connection::open(&args.db_path)?;
    let state = AppState::new(conn, collection)?;

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(
        build_router(state).layer(middleware::from_fn(logging_middleware)),
    );

    tracing::info!(
        "HTTP server listening on {} using collection \"{}\" in {}",
        addr,
        args.collection,
        args.db_path
    );
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}

fn setup_logging(log_path: &str) -> Result<(), std::io::Error> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new().create(true).append(true).open(log_path)?;

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::INFO)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();

    Ok(())
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
