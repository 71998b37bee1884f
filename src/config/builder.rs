use std::path::Path;

use super::dotenv::{Dotenv, LoadReport};
use super::env::VarTable;
use super::file::FileSource;
use super::source::ConfigSource;
use super::ConfigError;

#[derive(Debug)]
struct RegisteredSource {
    source: Box<dyn ConfigSource>,
    strict: bool,
}

/// Builder for loading several env sources into a [`Dotenv`].
///
/// Sources are applied in registration order. Because existing keys are never
/// overwritten, earlier sources win over later ones.
///
/// ## Example
///
/// ```no_run
/// use dragon_env::{Dotenv, Loader};
///
/// let mut dotenv = Dotenv::new();
/// let report = Loader::new()
///     .with_path("config", true)
///     .with_path(".", false)
///     .load_into(&mut dotenv)?;
/// println!("loaded {} variables", report.loaded);
/// # Ok::<(), dragon_env::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "loaders do nothing until .load_into() is called"]
pub struct Loader {
    sources: Vec<RegisteredSource>,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an env file, or a directory containing one.
    ///
    /// If `strict` is `true`, loading stops with an error when the path can't
    /// be loaded. Otherwise the failure is logged and skipped.
    pub fn with_path(self, path: impl AsRef<Path>, strict: bool) -> Self {
        self.with_source(FileSource::new(path), strict)
    }

    /// Adds a custom source.
    pub fn with_source(mut self, source: impl ConfigSource + 'static, strict: bool) -> Self {
        self.sources.push(RegisteredSource {
            source: Box::new(source),
            strict,
        });
        self
    }

    /// Applies every source to `dotenv`, returning the combined report.
    ///
    /// Sources applied before a strict failure stay merged.
    pub fn load_into<V: VarTable>(self, dotenv: &mut Dotenv<V>) -> Result<LoadReport, ConfigError> {
        let mut report = LoadReport::default();
        for RegisteredSource { source, strict } in &self.sources {
            report += dotenv.load_source(source.as_ref(), *strict)?;
        }
        Ok(report)
    }
}
