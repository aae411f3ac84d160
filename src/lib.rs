//! Animation Production Dashboard
//!
//! Loads a CSV of animated titles once and serves a dashboard page with
//! studio, genre and rating views, plus one JSON endpoint per view.

pub mod config;
pub mod dataset;
pub mod figures;
pub mod page;
pub mod server;
pub mod views;

// Re-export commonly used types for convenience
pub use dataset::{load_dataset, Dataset, DatasetError};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
