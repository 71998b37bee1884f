use std::collections::HashSet;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::coerce::{keyword, numeric};
use super::env::{EnvironmentStore, ProcessVars, VarTable};
use super::file::FileSource;
use super::resolve::interpolate;
use super::source::{ConfigSource, RawAssoc};
use super::value::Value;
use super::ConfigError;

/// Outcome of merging one source into the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped_existing: usize,
}

impl std::ops::AddAssign for LoadReport {
    fn add_assign(&mut self, other: Self) {
        self.loaded += other.loaded;
        self.skipped_existing += other.skipped_existing;
    }
}

/// Loads env files into an [`EnvironmentStore`] and reads typed values back.
///
/// Keys already present in the store are never overwritten, so the host
/// environment and earlier loads take precedence.
///
/// ## Example
///
/// ```no_run
/// use dragon_env::{Dotenv, Value};
///
/// let mut dotenv = Dotenv::new();
/// dotenv.load(".", true)?;
///
/// let port = dotenv.get("PORT", 8080);
/// let debug = dotenv.get("DEBUG", false).as_bool().unwrap_or(false);
/// # Ok::<(), dragon_env::ConfigError>(())
/// ```
#[derive(Debug, Default)]
pub struct Dotenv<V = ProcessVars> {
    store: EnvironmentStore<V>,
    resolving: HashSet<String>,
    cycles: usize,
}

impl Dotenv<ProcessVars> {
    /// Creates a loader backed by the real process environment.
    pub fn new() -> Self {
        Self::with_store(EnvironmentStore::new())
    }
}

impl<V: VarTable> Dotenv<V> {
    pub fn with_store(store: EnvironmentStore<V>) -> Self {
        Self {
            store,
            resolving: HashSet::new(),
            cycles: 0,
        }
    }

    pub fn store(&self) -> &EnvironmentStore<V> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EnvironmentStore<V> {
        &mut self.store
    }

    /// Loads a `.env` or `.env.toml` file, or a directory containing one.
    ///
    /// With `strict` set, failures are returned. Otherwise they are logged and
    /// the environment is left unchanged.
    pub fn load(&mut self, path: impl AsRef<Path>, strict: bool) -> Result<LoadReport, ConfigError> {
        self.load_source(&FileSource::new(path), strict)
    }

    /// Loads entries from any [`ConfigSource`]. See [`load`](Self::load).
    pub fn load_source(
        &mut self,
        source: &dyn ConfigSource,
        strict: bool,
    ) -> Result<LoadReport, ConfigError> {
        match source.entries() {
            Ok(assoc) => Ok(self.merge(assoc)),
            Err(e) if strict => Err(e),
            Err(e) => {
                tracing::warn!(?source, error = %e, "ignoring env source");
                Ok(LoadReport::default())
            }
        }
    }

    /// Merges raw entries, skipping keys the environment already holds.
    pub fn merge(&mut self, assoc: RawAssoc) -> LoadReport {
        let mut report = LoadReport::default();
        for (key, value) in assoc {
            if self.store.set_if_absent(&key, value) {
                report.loaded += 1;
            } else {
                report.skipped_existing += 1;
            }
        }
        tracing::debug!(
            loaded = report.loaded,
            skipped = report.skipped_existing,
            "merged env entries"
        );
        report
    }

    /// Returns the coerced value of `name`, or `default` when it is unset.
    ///
    /// Resolved values are cached for the lifetime of this instance.
    pub fn get(&mut self, name: &str, default: impl Into<Value>) -> Value {
        if let Some(value) = self.store.cached(name) {
            return value.clone();
        }
        if self.resolving.contains(name) {
            tracing::warn!(name, "circular variable reference");
            self.cycles += 1;
            return default.into();
        }
        let Some(raw) = self.store.get_raw(name) else {
            return default.into();
        };

        let cycles_before = self.cycles;
        self.resolving.insert(name.to_string());
        let value = self.convert(raw);
        self.resolving.remove(name);

        if self.cycles == cycles_before {
            self.store.cache(name, value.clone());
        }
        value
    }

    /// Alias of [`get`](Self::get).
    pub fn env(&mut self, name: &str, default: impl Into<Value>) -> Value {
        self.get(name, default)
    }

    /// Deserializes the coerced value of `name`; `None` when unset or null.
    pub fn get_as<T: DeserializeOwned>(&mut self, name: &str) -> Result<Option<T>, ConfigError> {
        let Some(value) = self.get(name, Value::Null).to_toml() else {
            return Ok(None);
        };
        value
            .try_into()
            .map(Some)
            .map_err(|source| ConfigError::Deserialize {
                name: name.to_string(),
                source,
            })
    }

    fn convert(&mut self, raw: Value) -> Value {
        let Value::String(s) = raw else {
            return raw;
        };
        if let Some(value) = keyword(&s) {
            return value;
        }
        let interpolated = interpolate(&s, |inner| self.get(inner, Value::Null));
        numeric(interpolated)
    }
}
