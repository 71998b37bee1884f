use super::parse::parse_dotenv;
use super::value::Value;
use super::ConfigError;

/// Ordered key to raw value mapping produced by a single source.
///
/// Re-inserting a key replaces its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAssoc {
    entries: Vec<(String, Value)>,
}

impl RawAssoc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for RawAssoc {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Anything that can produce raw entries to merge into the environment.
pub trait ConfigSource: Send + Sync + std::fmt::Debug {
    fn entries(&self) -> Result<RawAssoc, ConfigError>;
}

/// Parses `.env` formatted text held in memory.
#[derive(Debug, Clone)]
pub struct StrSource {
    contents: String,
}

impl StrSource {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }
}

impl ConfigSource for StrSource {
    fn entries(&self) -> Result<RawAssoc, ConfigError> {
        Ok(parse_dotenv(&self.contents))
    }
}
