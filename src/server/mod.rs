pub mod config;
mod http_layers;
pub mod metrics;
pub mod server;
pub mod state;
mod view_routes;

pub use config::ServerConfig;
pub use http_layers::*;
pub use server::{make_app, run_server};
pub(self) use view_routes::make_view_routes;
pub use view_routes::{run_view, ViewError, WidgetQuery};
