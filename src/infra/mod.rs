//! Инфраструктурный слой вокруг движка:
//! - конфиг движка;
//! - инициализация логирования для бинарников.

pub mod config;
pub mod logging;

pub use config::{ConfigError, EngineConfig};
pub use logging::init_tracing;
