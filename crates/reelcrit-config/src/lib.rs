pub mod config;
pub mod paths;
pub mod session_store;

pub use config::{ApiConfig, Config, DEFAULT_BASE_URL};
pub use paths::PathManager;
pub use session_store::SessionStore;
