//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use runtime::RuntimeConfig;

/// Everything the binary needs before the runtime starts.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    /// Directory with `enemies.ron`, `field.ron` and `config.toml`.
    /// `None` uses the content embedded in the binary.
    pub data_dir: Option<PathBuf>,
    /// Names the log subdirectory; defaults to a timestamp.
    pub session_id: Option<String>,
    /// Overrides the platform cache directory for logs.
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// - `FIELD_DATA_DIR`
    /// - `FIELD_SESSION_ID`
    /// - `FIELD_LOG_DIR`
    /// - plus the runtime's own `FIELD_*` variables
    pub fn from_env() -> Self {
        Self {
            runtime: RuntimeConfig::from_env(),
            data_dir: read_env("FIELD_DATA_DIR"),
            session_id: read_env("FIELD_SESSION_ID"),
            log_dir: read_env("FIELD_LOG_DIR"),
        }
    }
}

fn read_env<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok()?.parse().ok()
}
