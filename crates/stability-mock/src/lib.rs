pub mod api;
pub mod config;
pub mod error;
pub mod models;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{ApiError, Result};
