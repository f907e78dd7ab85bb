pub mod api;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

pub use api::{create_router, cors_layer};
pub use error::{ApiError, Result};
pub use state::AppState;
