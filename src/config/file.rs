//! File-based configuration source.

use std::path::{Path, PathBuf};

use super::parse::{parse_dotenv, parse_structured};
use super::source::{ConfigSource, RawAssoc};
use super::ConfigError;

/// Name of the line-based env file.
pub const DOTENV_FILE: &str = ".env";
/// Name of the structured (TOML) env file.
pub const STRUCTURED_FILE: &str = ".env.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `KEY=VALUE` lines.
    Dotenv,
    /// A TOML table.
    Structured,
}

impl FileKind {
    /// Recognizes a file by its exact base name.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.file_name()?.to_str()? {
            DOTENV_FILE => Some(FileKind::Dotenv),
            STRUCTURED_FILE => Some(FileKind::Structured),
            _ => None,
        }
    }
}

/// A configuration source that loads from an env file or a directory holding one.
///
/// Directories are searched for `.env` first, then `.env.toml`.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ConfigSource for FileSource {
    fn entries(&self) -> Result<RawAssoc, ConfigError> {
        let (path, kind) = resolve_path(&self.path)?;
        let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::UnreadableFile {
            path: path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), ?kind, "parsing env file");
        match kind {
            FileKind::Dotenv => Ok(parse_dotenv(&contents)),
            FileKind::Structured => parse_structured(&path, &contents),
        }
    }
}

/// Resolves `path` to an existing env file and its kind.
pub fn resolve_path(path: &Path) -> Result<(PathBuf, FileKind), ConfigError> {
    let file = if path.is_dir() {
        [DOTENV_FILE, STRUCTURED_FILE]
            .iter()
            .map(|name| path.join(name))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| ConfigError::NotFound(path.to_path_buf()))?
    } else if path.is_file() {
        path.to_path_buf()
    } else {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    };

    let kind = FileKind::from_path(&file).ok_or_else(|| ConfigError::InvalidFilename(file.clone()))?;
    Ok((file, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Value;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_source_loads_dotenv() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DOTENV_FILE);
        fs::write(&path, "KEY=value\n").unwrap();

        let entries = FileSource::new(&path).entries().unwrap();

        assert_eq!(entries.get("KEY"), Some(&Value::from("value")));
    }

    #[test]
    fn test_directory_prefers_dotenv() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DOTENV_FILE), "FROM=dotenv\n").unwrap();
        fs::write(dir.path().join(STRUCTURED_FILE), "FROM = \"toml\"\n").unwrap();

        let (path, kind) = resolve_path(dir.path()).unwrap();

        assert_eq!(kind, FileKind::Dotenv);
        assert_eq!(path, dir.path().join(DOTENV_FILE));
    }

    #[test]
    fn test_directory_falls_back_to_structured() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(STRUCTURED_FILE), "FROM = \"toml\"\n").unwrap();

        let entries = FileSource::new(dir.path()).entries().unwrap();

        assert_eq!(entries.get("FROM"), Some(&Value::from("toml")));
    }

    #[test]
    fn test_empty_directory_not_found() {
        let dir = TempDir::new().unwrap();
        let result = FileSource::new(dir.path()).entries();

        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_missing_file_not_found() {
        let result = FileSource::new("/nonexistent/path/.env").entries();

        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_wrong_filename_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.env");
        fs::write(&path, "KEY=value\n").unwrap();

        let result = FileSource::new(&path).entries();

        assert!(matches!(result, Err(ConfigError::InvalidFilename(_))));
    }

    #[test]
    fn test_non_utf8_file_unreadable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DOTENV_FILE);
        fs::write(&path, [0x4b, 0x3d, 0xff, 0xfe]).unwrap();

        let result = FileSource::new(&path).entries();

        assert!(matches!(result, Err(ConfigError::UnreadableFile { .. })));
    }
}
