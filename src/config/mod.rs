pub mod dto;
pub mod loader;

pub use dto::{AppConfig, SearchMode};
pub use loader::{load_config, load_config_from};
