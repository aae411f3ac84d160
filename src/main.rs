use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use anime_dashboard_server::config::{AppConfig, CliConfig, FileConfig, DEFAULT_DATASET_PATH};
use anime_dashboard_server::dataset::load_dataset;
use anime_dashboard_server::server::config::DEFAULT_PLOTLY_JS_URL;
use anime_dashboard_server::server::{metrics, run_server, RequestsLoggingLevel};
use anime_dashboard_server::views::DEFAULT_TOP_STUDIOS;

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the CSV file with one row per title.
    #[clap(value_parser = parse_path, default_value = DEFAULT_DATASET_PATH)]
    pub dataset: PathBuf,

    /// Optional TOML config file. Its values override the command line.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The address to bind both servers to.
    #[clap(long, default_value = "127.0.0.1")]
    pub bind_address: String,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long, default_value_t = 9091)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Cache-Control max-age of the view endpoints in seconds, 0 disables it.
    #[clap(long, default_value_t = 3600)]
    pub content_cache_age_sec: usize,

    /// How many studios the ranking charts show.
    #[clap(long, default_value_t = DEFAULT_TOP_STUDIOS)]
    pub top_studios: usize,

    /// Where the page loads Plotly.js from.
    #[clap(long, default_value = DEFAULT_PLOTLY_JS_URL)]
    pub plotly_js_url: String,

    /// Directory statically served under /assets.
    #[clap(long, value_parser = parse_path)]
    pub assets_dir: Option<PathBuf>,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            dataset: self.dataset.clone(),
            bind_address: self.bind_address.clone(),
            port: self.port,
            metrics_port: self.metrics_port,
            logging_level: self.logging_level.clone(),
            content_cache_age_sec: self.content_cache_age_sec,
            top_studios: self.top_studios,
            plotly_js_url: self.plotly_js_url.clone(),
            assets_dir: self.assets_dir.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let app_config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    info!("Loading dataset from {:?}...", app_config.dataset);
    let dataset = load_dataset(&app_config.dataset)
        .with_context(|| format!("Failed to load dataset {:?}", app_config.dataset))?;

    info!("Initializing metrics...");
    metrics::init_metrics();
    metrics::init_dataset_metrics(dataset.len(), dataset.columns().len());

    run_server(app_config.server_config(), dataset).await
}
