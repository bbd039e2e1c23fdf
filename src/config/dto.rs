use std::path::PathBuf;
use std::str::FromStr;

use crate::core::error::AppError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub mongodb_uri: String,
    pub database_name: String,
    pub images_dir: PathBuf,
    pub search_mode: SearchMode,
}

/// How a `search_query` value is turned into the regex sent to the database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Metacharacters are escaped; the query matches as a plain substring.
    #[default]
    Literal,
    /// The query is passed through verbatim as a regular expression.
    Pattern,
}

impl FromStr for SearchMode {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(Self::Literal),
            "pattern" => Ok(Self::Pattern),
            other => Err(AppError::configuration(format!(
                "invalid SEARCH_MODE `{other}`, expected `literal` or `pattern`"
            ))),
        }
    }
}
