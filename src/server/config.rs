use super::RequestsLoggingLevel;
use crate::views::DEFAULT_TOP_STUDIOS;
use std::path::PathBuf;

pub const DEFAULT_PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub bind_address: String,
    pub port: u16,
    pub metrics_port: u16,
    /// Cache-Control max-age of the view endpoints, 0 disables the header.
    pub content_cache_age_sec: usize,
    pub top_studios: usize,
    pub plotly_js_url: String,
    /// Served under /assets when set, e.g. a local copy of Plotly.js.
    pub assets_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            bind_address: "127.0.0.1".to_owned(),
            port: 3001,
            metrics_port: 9091,
            content_cache_age_sec: 3600,
            top_studios: DEFAULT_TOP_STUDIOS,
            plotly_js_url: DEFAULT_PLOTLY_JS_URL.to_owned(),
            assets_dir: None,
        }
    }
}
