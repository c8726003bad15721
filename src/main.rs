use sales_board::{AppState, Change, Config, JsonFileStore, SalesBoard, router};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let store = JsonFileStore::open(&config.data_path);
    info!("using data file {}", store.path().display());

    let mut board = SalesBoard::load(Box::new(store));
    board.subscribe(log_change);
    let state = AppState::new(board, config.locations);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn log_change(change: &Change) {
    match change {
        Change::EntryAdded(entry) => info!(
            id = %entry.id,
            location = %entry.location,
            sales = entry.sales,
            "entry added"
        ),
        Change::EntriesCleared => info!("entries cleared"),
        Change::SessionChanged(session) => info!(
            page = %session.current_page,
            location = %session.location,
            "session changed"
        ),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
