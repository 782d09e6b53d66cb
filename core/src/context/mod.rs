mod app_config;

pub use app_config::{AppConfig, load_config, resolve_scout_path, store_config};
