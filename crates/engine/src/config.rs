//! Engine configuration from the environment.
//!
//! `.env` is loaded by `main` before this runs, so values there apply too.

use std::path::PathBuf;

/// Default log filter when neither `CHIWAR_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "chiwar_engine=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Seed for repeatable dice; `None` uses system randomness
    pub seed: Option<u64>,
    /// JSON file replacing the built-in vehicle archetypes
    pub archetypes_path: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("CHIWAR_SEED must be an unsigned integer, got {0:?}")]
    InvalidSeed(String),
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            seed: None,
            archetypes_path: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_filter = get("CHIWAR_LOG")
            .or_else(|| get("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let seed = match get("CHIWAR_SEED") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(raw.clone()))?,
            ),
            None => None,
        };

        let archetypes_path = get("CHIWAR_ARCHETYPES_PATH").map(PathBuf::from);

        Ok(Self {
            log_filter,
            seed,
            archetypes_path,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
