mod file_config;

pub use file_config::{DashboardConfig, FileConfig};

use crate::server::{RequestsLoggingLevel, ServerConfig};
use crate::views::DEFAULT_TOP_STUDIOS;
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

pub const DEFAULT_DATASET_PATH: &str = "dataset/anime_dataset.csv";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub dataset: PathBuf,
    pub bind_address: String,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub top_studios: usize,
    pub plotly_js_url: String,
    pub assets_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        let server = ServerConfig::default();
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET_PATH),
            bind_address: server.bind_address,
            port: server.port,
            metrics_port: server.metrics_port,
            logging_level: server.requests_logging_level,
            content_cache_age_sec: server.content_cache_age_sec,
            top_studios: DEFAULT_TOP_STUDIOS,
            plotly_js_url: server.plotly_js_url,
            assets_dir: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub dataset: PathBuf,
    pub bind_address: String,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub content_cache_age_sec: usize,
    pub assets_dir: Option<PathBuf>,

    pub dashboard: DashboardSettings,
}

#[derive(Debug, Clone)]
pub struct DashboardSettings {
    pub top_studios: usize,
    pub plotly_js_url: String,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let dataset = file
            .dataset
            .map(PathBuf::from)
            .unwrap_or_else(|| cli.dataset.clone());

        if !dataset.exists() {
            bail!("Dataset file does not exist: {:?}", dataset);
        }
        if !dataset.is_file() {
            bail!("Dataset path is not a file: {:?}", dataset);
        }

        let bind_address = file
            .bind_address
            .unwrap_or_else(|| cli.bind_address.clone());
        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);
        if port == metrics_port && port != 0 {
            bail!("port and metrics_port must differ, both are {}", port);
        }

        let logging_level = match file.logging_level {
            Some(level) => match parse_logging_level(&level) {
                Some(level) => level,
                None => bail!("Invalid logging_level in config file: {:?}", level),
            },
            None => cli.logging_level.clone(),
        };

        let content_cache_age_sec = file
            .content_cache_age_sec
            .unwrap_or(cli.content_cache_age_sec);

        let assets_dir = file
            .assets_dir
            .map(PathBuf::from)
            .or_else(|| cli.assets_dir.clone());
        if let Some(dir) = &assets_dir {
            if !dir.is_dir() {
                bail!("Assets directory does not exist: {:?}", dir);
            }
        }

        let dashboard_file = file.dashboard.unwrap_or_default();
        let dashboard = DashboardSettings {
            top_studios: dashboard_file.top_studios.unwrap_or(cli.top_studios),
            plotly_js_url: dashboard_file
                .plotly_js_url
                .unwrap_or_else(|| cli.plotly_js_url.clone()),
        };
        if dashboard.top_studios == 0 {
            bail!("top_studios must be at least 1");
        }

        Ok(Self {
            dataset,
            bind_address,
            port,
            metrics_port,
            logging_level,
            content_cache_age_sec,
            assets_dir,
            dashboard,
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            bind_address: self.bind_address.clone(),
            port: self.port,
            metrics_port: self.metrics_port,
            content_cache_age_sec: self.content_cache_age_sec,
            top_studios: self.dashboard.top_studios,
            plotly_js_url: self.dashboard.plotly_js_url.clone(),
            assets_dir: self.assets_dir.clone(),
        }
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
