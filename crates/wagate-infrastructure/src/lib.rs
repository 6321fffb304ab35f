pub mod config_service;
pub mod in_memory_session_repository;
pub mod logging;
pub mod paths;

pub use crate::config_service::{ConfigService, EnvLookup};
pub use crate::in_memory_session_repository::InMemorySessionRepository;
pub use crate::logging::init_logging;
pub use crate::paths::WagatePaths;
