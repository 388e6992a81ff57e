use std::fmt::Display;
use std::str::FromStr;

use timetable_core::analytics::DEFAULT_HOURS_PER_LESSON;

/// Largest accepted request body. A full branch timetable with a few thousand
/// placements fits comfortably.
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines for local development.
    Text,
    /// One JSON object per event, for log shippers.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// The service keeps no timetable data of its own, so configuration is
/// limited to the listener, request limits, logging, and the lesson length
/// used by workload analytics.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins for the timetable editor frontend.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    /// Upper bound on JSON request bodies in bytes.
    pub max_body_bytes: usize,
    pub log_format: LogFormat,
    /// Length of one lesson in academic hours.
    pub hours_per_lesson: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origins: vec!["http://localhost:5173".to_string()],
            request_timeout_secs: 30,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_format: LogFormat::Text,
            hours_per_lesson: DEFAULT_HOURS_PER_LESSON,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to
    /// [`ServerConfig::default`] for anything unset.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MAX_BODY_BYTES`       | `2097152`                  |
    /// | `LOG_FORMAT`           | `text` (`text` or `json`)  |
    /// | `HOURS_PER_LESSON`     | `1.5`                      |
    ///
    /// Panics on unparsable values so a misconfigured deployment fails at
    /// startup.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let cors_origins = match std::env::var("CORS_ORIGINS") {
            Ok(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Err(_) => defaults.cors_origins,
        };

        let hours_per_lesson: f64 = env_or("HOURS_PER_LESSON", defaults.hours_per_lesson);
        assert!(
            hours_per_lesson.is_finite() && hours_per_lesson > 0.0,
            "HOURS_PER_LESSON must be a positive number, got {hours_per_lesson}"
        );

        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: env_or("PORT", defaults.port),
            cors_origins,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs),
            max_body_bytes: env_or("MAX_BODY_BYTES", defaults.max_body_bytes),
            log_format: env_or("LOG_FORMAT", defaults.log_format),
            hours_per_lesson,
        }
    }
}

/// Parse `key` from the environment, or return `default` when it is unset.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} has an invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(" text ".parse::<LogFormat>(), Ok(LogFormat::Text));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_body_bytes, 2_097_152);
        assert_eq!(config.hours_per_lesson, 1.5);
    }
}
