use shared::table::{ReleaseEmptiness, SeatingPolicy, UngroupPolicy};
use std::str::FromStr;

/// Seating service configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | - | daily rolling log files, if the directory exists |
/// | UNGROUP_POLICY | unrestricted | `unrestricted` or `block_active_orders` |
/// | RELEASE_EMPTINESS | occupied | `occupied` or `preserve` |
/// | EVENT_CHANNEL_CAPACITY | 1024 | event broadcast channel capacity |
///
/// # Example
///
/// ```ignore
/// UNGROUP_POLICY=block_active_orders LOG_LEVEL=debug cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_dir: Option<String>,
    /// Whether active orders block dissolving a group
    pub ungroup_policy: UngroupPolicy,
    /// Empty flag of tables released from a group
    pub release_emptiness: ReleaseEmptiness,
    pub event_channel_capacity: usize,
}

impl Config {
    pub const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 1024;

    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    ///
    /// Mostly useful in tests
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|d| !d.trim().is_empty()),
            ungroup_policy: parse_policy("UNGROUP_POLICY", lookup("UNGROUP_POLICY")),
            release_emptiness: parse_policy("RELEASE_EMPTINESS", lookup("RELEASE_EMPTINESS")),
            event_channel_capacity: lookup("EVENT_CHANNEL_CAPACITY")
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(Self::DEFAULT_EVENT_CHANNEL_CAPACITY),
        }
    }

    /// Seating policy handed to table and group operations
    pub fn policy(&self) -> SeatingPolicy {
        SeatingPolicy {
            ungroup: self.ungroup_policy,
            release: self.release_emptiness,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Unknown values keep the default so a typo cannot stop the service
fn parse_policy<T>(var: &str, value: Option<String>) -> T
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    let Some(value) = value else {
        return T::default();
    };
    match value.parse() {
        Ok(policy) => policy,
        Err(e) => {
            tracing::warn!(var, error = %e, "Invalid policy value, using default");
            T::default()
        }
    }
}
