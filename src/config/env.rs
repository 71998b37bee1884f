//! Layered environment storage.

use std::collections::HashMap;

use super::value::Value;

/// The OS-level name/value variable table.
pub trait VarTable: std::fmt::Debug {
    fn var(&self, key: &str) -> Option<String>;

    /// Whether `key` is set, whatever its encoding.
    fn contains_var(&self, key: &str) -> bool {
        self.var(key).is_some()
    }

    fn set_var(&mut self, key: &str, value: &str);
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessVars;

impl VarTable for ProcessVars {
    /// Values that aren't valid UTF-8 are decoded lossily.
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    fn contains_var(&self, key: &str) -> bool {
        std::env::var_os(key).is_some()
    }

    fn set_var(&mut self, key: &str, value: &str) {
        // set_var panics on these; such keys cannot exist in the OS table.
        if key.is_empty() || key.contains(['=', '\0']) || value.contains('\0') {
            tracing::debug!(key, "skipping key not representable in process environment");
            return;
        }
        std::env::set_var(key, value);
    }
}

/// An isolated variable table, useful for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryVars {
    vars: HashMap<String, String>,
}

impl MemoryVars {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryVars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl VarTable for MemoryVars {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set_var(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}

/// Process-wide configuration state.
///
/// Lookups consult, in order, the `env` layer, the `server` layer and the
/// variable table. Coerced results are kept in a separate cache. A `Null`
/// held by a layer counts as unset.
#[derive(Debug, Default)]
pub struct EnvironmentStore<V = ProcessVars> {
    env: HashMap<String, Value>,
    server: HashMap<String, Value>,
    vars: V,
    cache: HashMap<String, Value>,
}

impl EnvironmentStore<ProcessVars> {
    pub fn new() -> Self {
        Self::with_vars(ProcessVars)
    }
}

impl<V: VarTable> EnvironmentStore<V> {
    pub fn with_vars(vars: V) -> Self {
        Self {
            env: HashMap::new(),
            server: HashMap::new(),
            vars,
            cache: HashMap::new(),
        }
    }

    /// Returns the uncoerced value of `key` from the first layer that has it.
    pub fn get_raw(&self, key: &str) -> Option<Value> {
        layer_get(&self.env, key)
            .or_else(|| layer_get(&self.server, key))
            .cloned()
            .or_else(|| self.vars.var(key).map(Value::String))
    }

    /// Whether any layer holds `key`.
    pub fn contains(&self, key: &str) -> bool {
        layer_get(&self.env, key).is_some()
            || layer_get(&self.server, key).is_some()
            || self.vars.contains_var(key)
    }

    /// Stores `value` under `key` unless some layer already holds it.
    ///
    /// String values are also written to the variable table. Returns whether
    /// the value was stored.
    pub fn set_if_absent(&mut self, key: &str, value: Value) -> bool {
        if self.contains(key) {
            return false;
        }
        if let Value::String(s) = &value {
            self.vars.set_var(key, s);
        }
        self.env.insert(key.to_string(), value.clone());
        self.server.insert(key.to_string(), value);
        true
    }

    /// Seeds the `env` layer directly, as the host would.
    pub fn set_env(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.env.insert(key.into(), value.into());
    }

    /// Seeds the `server` layer directly, as the host would.
    pub fn set_server(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.server.insert(key.into(), value.into());
    }

    pub fn cached(&self, key: &str) -> Option<&Value> {
        self.cache.get(key)
    }

    pub fn cache(&mut self, key: impl Into<String>, value: Value) {
        self.cache.insert(key.into(), value);
    }

    pub fn vars(&self) -> &V {
        &self.vars
    }

    pub fn vars_mut(&mut self) -> &mut V {
        &mut self.vars
    }
}

fn layer_get<'a>(layer: &'a HashMap<String, Value>, key: &str) -> Option<&'a Value> {
    layer.get(key).filter(|v| !v.is_null())
}
