use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use trail_server::catalog::{Catalog, bernese_oberland};
use trail_server::config::ServerConfig;
use trail_server::planner::{KeywordClassifier, TrailPlanner};
use trail_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("trail_server=info,tower_http=info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => {
            info!("no catalog configured, using bundled Bernese Oberland sample");
            bernese_oberland()?
        }
    };
    info!(
        stops = catalog.stop_count(),
        trailheads = catalog.trailhead_count(),
        trails = catalog.trail_count(),
        "catalog ready"
    );

    let mut planner = TrailPlanner::new(Arc::new(catalog), config.planner.clone());
    if let Some(keywords) = &config.scenic_keywords {
        info!(?keywords, "scenic classifier enabled");
        planner = planner.with_classifier(Arc::new(KeywordClassifier::new(keywords)));
    }

    let app = create_router(AppState::new(planner));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "trail planner listening");
    info!("  GET  /health                         - Health check");
    info!("  POST /routes                         - Plan a route");
    info!("  GET  /routes/:id                     - Route details");
    info!("  GET  /routes/:id/summary             - Route totals");
    info!("  POST /routes/:id/alternatives        - Alternative by criterion");
    info!("  POST /routes/:id/constraints         - Re-plan with new constraints");
    info!("  GET  /trailheads/nearest?lat=&lon=   - Nearest trailhead");
    info!("  GET  /trailheads/:id/routes          - Routes to a trailhead");

    axum::serve(listener, app).await?;
    Ok(())
}
