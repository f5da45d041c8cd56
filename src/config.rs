//! Configuration types.

use crate::error::ConfigError;
use crate::navigation::Location;

/// Default log filter when neither `RUST_LOG` nor `CONNECTO_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Application configuration, built from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address opened when the session starts.
    pub entry: Location,
    /// Fixed seed for the icebreaker picker. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            entry: Location::default(),
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Build config from `CONNECTO_ENTRY`, `CONNECTO_SEED` and `CONNECTO_LOG`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let entry = match lookup("CONNECTO_ENTRY") {
            Some(address) => {
                address
                    .parse::<Location>()
                    .map_err(|e| ConfigError::InvalidValue {
                        key: "CONNECTO_ENTRY".to_string(),
                        message: e.to_string(),
                    })?
            }
            None => Location::default(),
        };

        let seed = match lookup("CONNECTO_SEED") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                ConfigError::InvalidValue {
                    key: "CONNECTO_SEED".to_string(),
                    message: e.to_string(),
                }
            })?),
            None => None,
        };

        let log_filter = lookup("CONNECTO_LOG")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            entry,
            seed,
            log_filter,
        })
    }
}
