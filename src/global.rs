//! Process-wide façade over a shared [`Dotenv`].
//!
//! Convenient at application startup, where threading a handle through every
//! call site is awkward. The shared instance is guarded by a mutex; prefer an
//! owned [`Dotenv`] where a composition root exists.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use crate::config::{ConfigError, Dotenv, LoadReport, Value};

static INSTANCE: Lazy<Mutex<Dotenv>> = Lazy::new(|| Mutex::new(Dotenv::new()));

fn instance() -> MutexGuard<'static, Dotenv> {
    INSTANCE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Loads an env file or directory into the process environment.
///
/// See [`Dotenv::load`].
pub fn load(path: impl AsRef<Path>, strict: bool) -> Result<LoadReport, ConfigError> {
    instance().load(path, strict)
}

/// Returns the coerced value of `name`, or `default` when unset.
///
/// See [`Dotenv::get`].
pub fn get(name: &str, default: impl Into<Value>) -> Value {
    instance().get(name, default)
}

/// Alias of [`get`].
pub fn env(name: &str, default: impl Into<Value>) -> Value {
    get(name, default)
}
