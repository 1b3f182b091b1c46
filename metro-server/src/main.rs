use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use metro_server::cache::CacheConfig;
use metro_server::fare::FareSchedule;
use metro_server::network::load_timetable;
use metro_server::planner::SearchConfig;
use metro_server::web::{AppState, create_router};

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let Ok(timetable) = std::env::var("METRO_TIMETABLE") else {
        error!("METRO_TIMETABLE is not set; point it at a line timetable file");
        return ExitCode::FAILURE;
    };
    let addr =
        std::env::var("METRO_LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

    let (network, report) = match load_timetable(&timetable) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!(path = %timetable, error = %e, "Failed to load timetable");
            return ExitCode::FAILURE;
        }
    };
    info!(
        path = %timetable,
        stations = network.station_count(),
        lines = report.lines,
        connections = report.connections,
        skipped = report.skipped,
        "Loaded timetable"
    );

    let state = AppState::new(
        network,
        SearchConfig::default(),
        FareSchedule::default(),
        &CacheConfig::default(),
    );
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!("Metro query server listening on http://{addr}");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
