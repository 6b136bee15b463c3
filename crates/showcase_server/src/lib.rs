//! HTTP adapter for the Showcase core: axum router, error mapping and
//! environment configuration.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod state;

pub use api::router;
pub use config::Config;
pub use error::{ApiError, ErrorBody};
pub use state::AppState;
