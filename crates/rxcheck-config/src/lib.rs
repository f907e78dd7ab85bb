pub mod app;
pub mod loader;

pub use app::{
    AppConfig, CorsConfig, DatabaseConfig, HistoryConfig, LogFormat, LoggingConfig, ServerConfig,
};
pub use loader::ConfigLoader;
