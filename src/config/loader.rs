use std::env;
use std::path::PathBuf;

use crate::config::dto::{AppConfig, SearchMode};
use crate::core::error::AppError;

const DEFAULT_PORT: &str = "3000";
const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE_NAME: &str = "webstore";
const DEFAULT_IMAGES_DIR: &str = "images";

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();
    load_config_from(|key| env::var(key).ok())
}

/// Builds the config from an arbitrary variable lookup instead of the process environment.
pub fn load_config_from<F>(lookup: F) -> Result<AppConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let port = lookup("PORT")
        .unwrap_or_else(|| DEFAULT_PORT.to_string())
        .parse::<u16>()
        .map_err(|err| AppError::configuration(format!("invalid port: {err}")))?;

    let mongodb_uri = lookup("MONGODB_URI")
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string());

    let database_name = lookup("MONGODB_DATABASE")
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string());

    let images_dir = PathBuf::from(
        lookup("IMAGES_DIR").unwrap_or_else(|| DEFAULT_IMAGES_DIR.to_string()),
    );

    let search_mode = match lookup("SEARCH_MODE") {
        Some(value) => value.parse::<SearchMode>()?,
        None => SearchMode::default(),
    };

    Ok(AppConfig {
        port,
        mongodb_uri,
        database_name,
        images_dir,
        search_mode,
    })
}
