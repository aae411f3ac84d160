use axum::extract::FromRef;

use crate::dataset::Dataset;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

/// The dataset is loaded once at startup and only read afterwards.
pub type GuardedDataset = Arc<Dataset>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub dataset: GuardedDataset,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, dataset: Dataset) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            dataset: Arc::new(dataset),
            hash: env!("GIT_HASH").to_owned(),
        }
    }
}

impl FromRef<ServerState> for GuardedDataset {
    fn from_ref(input: &ServerState) -> Self {
        input.dataset.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
