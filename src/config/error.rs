use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("env file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read env file '{path}': {source}")]
    UnreadableFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("env file must be named \".env\" or \".env.toml\": {0}")]
    InvalidFilename(PathBuf),

    #[error("'{path}' must contain a table of scalar or array values: {reason}")]
    InvalidStructuredContent { path: PathBuf, reason: String },

    #[error("failed to deserialize variable '{name}': {source}")]
    Deserialize {
        name: String,
        source: toml::de::Error,
    },
}
