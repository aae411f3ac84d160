use anyhow::{Context, Result};
use std::time::{Duration, Instant};

use tower_http::services::ServeDir;
use tracing::{error, info};

use axum::{
    extract::State,
    middleware,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use axum_extra::extract::Query;
use serde::Serialize;

use super::metrics::{metrics_handler, record_view_render};
use super::view_routes::WidgetQuery;
use super::{log_requests, make_view_routes, state::*, ServerConfig};
use crate::dataset::Dataset;
use crate::page::{render_dashboard, PageSettings};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    pub rows: usize,
    pub columns: Vec<String>,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn status(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        rows: state.dataset.len(),
        columns: state.dataset.columns().to_vec(),
    };
    Json(stats)
}

async fn dashboard(
    State(state): State<ServerState>,
    Query(query): Query<WidgetQuery>,
) -> impl IntoResponse {
    let settings = PageSettings {
        plotly_js_url: state.config.plotly_js_url.clone(),
        top_studios: state.config.top_studios,
        build_hash: state.hash.clone(),
    };

    let start = Instant::now();
    let html = render_dashboard(
        &state.dataset,
        &settings,
        &query.rating_filter(),
        &query.multi_filter(),
    );
    record_view_render("page", start.elapsed());

    Html(html)
}

pub fn make_app(config: ServerConfig, dataset: Dataset) -> Result<Router> {
    let state = ServerState::new(config.clone(), dataset);

    let home_router: Router = Router::new()
        .route("/", get(dashboard))
        .route("/v1/status", get(status))
        .with_state(state.clone());

    let mut app: Router = home_router.nest("/v1", make_view_routes(state.clone()));

    if let Some(assets_dir) = &config.assets_dir {
        if !assets_dir.is_dir() {
            anyhow::bail!("Assets directory does not exist: {:?}", assets_dir);
        }
        app = app.nest_service("/assets", ServeDir::new(assets_dir));
    }

    app = app.layer(middleware::from_fn_with_state(state.clone(), log_requests));

    Ok(app)
}

fn make_metrics_app() -> Router {
    Router::new().route("/metrics", get(metrics_handler))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!("Failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received, stopping server...");
}

pub async fn run_server(config: ServerConfig, dataset: Dataset) -> Result<()> {
    let address = format!("{}:{}", config.bind_address, config.port);
    let metrics_address = format!("{}:{}", config.bind_address, config.metrics_port);

    let app = make_app(config, dataset)?;

    let metrics_listener = tokio::net::TcpListener::bind(&metrics_address)
        .await
        .with_context(|| format!("Failed to bind metrics server to {}", metrics_address))?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(metrics_listener, make_metrics_app()).await {
            error!("Metrics server stopped: {}", err);
        }
    });

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind server to {}", address))?;

    info!("Ready to serve at http://{}", address);
    info!("Metrics available at http://{}/metrics", metrics_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
