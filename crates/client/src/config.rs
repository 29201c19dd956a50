//! Client configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use buster_core::BusterConfig;

/// Runtime settings of the `busters` binary.
///
/// Nothing here changes what the bot decides except `seed`; the rest only
/// controls the diagnostic side channel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Explore-target seed. `None` keeps the engine default.
    pub seed: Option<u64>,
    /// `EnvFilter` directives; takes precedence over `RUST_LOG`.
    pub log_filter: Option<String>,
    /// Write logs to `busters.log` in this directory instead of stderr.
    pub log_dir: Option<PathBuf>,
    /// Log every agent's behavior stack after each turn.
    pub trace_stacks: bool,
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BUSTERS_SEED` - RNG seed for explore targets (u64)
    /// - `BUSTERS_LOG` - log filter directives, e.g. `buster_core=debug`
    /// - `BUSTERS_LOG_DIR` - log file directory (default: stderr)
    /// - `BUSTERS_TRACE_STACKS` - `true` to dump behavior stacks each turn
    pub fn from_env() -> Self {
        Self {
            seed: read_env("BUSTERS_SEED"),
            log_filter: read_env::<String>("BUSTERS_LOG").filter(|f| !f.trim().is_empty()),
            log_dir: read_env("BUSTERS_LOG_DIR"),
            trace_stacks: read_env("BUSTERS_TRACE_STACKS").unwrap_or(false),
        }
    }

    /// Engine configuration derived from these settings.
    pub fn buster_config(&self) -> BusterConfig {
        self.seed
            .map_or_else(BusterConfig::default, BusterConfig::with_rng_seed)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_overrides_engine_default() {
        let config = ClientConfig {
            seed: Some(42),
            ..ClientConfig::default()
        };

        assert_eq!(config.buster_config().rng_seed, 42);
        assert_eq!(
            ClientConfig::default().buster_config().rng_seed,
            BusterConfig::DEFAULT_RNG_SEED
        );
    }
}
