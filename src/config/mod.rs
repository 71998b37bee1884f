//! Env file loading, value coercion and interpolation.

mod builder;
mod coerce;
mod dotenv;
mod env;
mod error;
mod file;
mod parse;
mod resolve;
mod source;
mod value;

pub use builder::Loader;
pub use dotenv::{Dotenv, LoadReport};
pub use env::{EnvironmentStore, MemoryVars, ProcessVars, VarTable};
pub use error::ConfigError;
pub use file::{FileKind, FileSource, DOTENV_FILE, STRUCTURED_FILE};
pub use parse::{parse_dotenv, parse_line};
pub use source::{ConfigSource, RawAssoc, StrSource};
pub use value::Value;
