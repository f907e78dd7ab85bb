pub mod app;
pub mod logging;

pub use app::{build_state, connect_database, init_db, seed, serve};
pub use logging::init_logging;
