//! Loads `.env` and `.env.toml` files into the process environment and reads
//! them back as typed values.

pub mod config;
pub mod global;

pub use config::{
    ConfigError, ConfigSource, Dotenv, EnvironmentStore, LoadReport, Loader, MemoryVars,
    ProcessVars, RawAssoc, Value, VarTable,
};
pub use global::{env, get, load};
