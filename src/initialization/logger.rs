//! Logger initialization.
//!
//! Everything is logged to stderr. Stdout belongs to the chain printed by
//! `unfurl`, so piping it into `jq` keeps working with logging turned on.

use std::io::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use colored::*;
use log::{Level, LevelFilter};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Dependencies whose logs are capped at info, whatever the requested level.
const NOISY_MODULES: [&str; 3] = ["reqwest", "hyper", "hyper_util"];

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first and `level` then overrides it for this crate. The
/// HTTP stack never logs below info, since per-hop debug output already names
/// every request.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Per-hop debug output
/// unfurl --log-level debug https://example.com
///
/// # One JSON object per line, for log shippers
/// unfurld --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    for module in NOISY_MODULES {
        builder.filter_module(module, LevelFilter::Info.min(level));
    }
    builder.filter_module("unfurl", level);
    builder.target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = json_line(
                    Utc::now(),
                    record.level(),
                    record.target(),
                    &record.args().to_string(),
                );
                writeln!(buf, "{}", line)
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{} {} {} {}",
                    Utc::now().format("%H:%M:%S%.3f").to_string().dimmed(),
                    colored_level(record.level()),
                    record.target().cyan(),
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

fn colored_level(level: Level) -> ColoredString {
    let label = format!("{:<5}", level);
    match level {
        Level::Error => label.red().bold(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.purple(),
    }
}

/// One structured log line: `{"time": ..., "level": ..., "target": ..., "msg": ...}`.
fn json_line(time: DateTime<Utc>, level: Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "time": time.to_rfc3339_opts(SecondsFormat::Millis, true),
        "level": level.as_str(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}
