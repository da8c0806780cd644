//! Round-robin tournament REST server.
//!
//! Serves the `round_robin` library over HTTP: a global player registry,
//! tournaments with capped rosters, immutable game results with point
//! awards, and derived leaderboards.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Error;
use log::info;
use pico_args::Arguments;
use round_robin::{
    db::{self, Database},
    game::GameManager,
    leaderboard::LeaderboardManager,
    player::PlayerManager,
    tournament::TournamentManager,
};
use rr_server::{api, config::ServerConfig, logging, metrics};

const HELP: &str = "\
Run a round-robin tournament REST server

USAGE:
  rr_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:3000]
  --db-url     URL         Database connection string  [default: env DATABASE_URL or postgres://postgres@localhost/round_robin_db]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:3000)
  DATABASE_URL             PostgreSQL connection string
  METRICS_BIND             Prometheus scrape address (exporter disabled when unset)
  DB_MAX_CONNECTIONS       Connection pool upper bound
  (See .env file for all configuration options)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let bind_override: Option<SocketAddr> = pargs.opt_value_from_str("--bind")?;
    let database_url_override: Option<String> = pargs.opt_value_from_str("--db-url")?;

    logging::init();

    let config = ServerConfig::from_env(bind_override, database_url_override)?;
    config.validate()?;

    info!("Starting round-robin tournament server at {}", config.bind);

    // Initialize database
    info!("Connecting to database: {}", config.database.database_url);
    let database = Database::new(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))?;

    db::init_schema(database.pool()).await?;
    info!("Database connected successfully");

    // Optional Prometheus exporter
    if let Some(addr) = config.metrics_bind {
        metrics::init_metrics(addr).map_err(|e| anyhow::anyhow!(e))?;
        info!("Metrics exporter listening on {addr}");
    }

    // Create managers
    let pool = Arc::new(database.pool().clone());
    let state = api::AppState {
        player_manager: Arc::new(PlayerManager::new(pool.clone())),
        tournament_manager: Arc::new(TournamentManager::new(pool.clone())),
        game_manager: Arc::new(GameManager::new(pool.clone())),
        leaderboard_manager: Arc::new(LeaderboardManager::new(pool.clone())),
    };

    // Create router
    let app = api::create_router(state);

    // Start HTTP server
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind, e))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
}
