use dragon_env::{Dotenv, Loader, Value};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(dead_code)]
enum LogLevel {
    Debug,
    Info,
    Warn,
}

fn main() -> Result<(), dragon_env::ConfigError> {
    let mut dotenv = Dotenv::new();

    // Variables already set in the shell take precedence over both files
    let report = Loader::new()
        .with_path("demos", true)
        .with_path(".", false)
        .load_into(&mut dotenv)?;
    println!("loaded {} variables, {} already set", report.loaded, report.skipped_existing);

    let name = dotenv.get("APP_NAME", "unnamed");
    let debug = dotenv.get("APP_DEBUG", false).as_bool().unwrap_or(false);
    let level: Option<LogLevel> = dotenv.get_as("LOG_LEVEL")?;
    let url = dotenv.get("DATABASE_URL", Value::Null);

    println!("App: {name} (debug={debug}, log level={level:?})");
    println!("Database URL: {url}");

    Ok(())
}
