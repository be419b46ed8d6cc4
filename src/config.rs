//! Runtime options for the provisioning components.
//!
//! Options are read from the environment (or, with the `config` feature,
//! from JSON). They tune behaviour such as which family is the default and
//! whether creations are logged. They never register constructors or
//! templates: wiring stays in code.

use std::env;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

/// Default environment variable prefix.
pub const DEFAULT_ENV_PREFIX: &str = "PROVISION";

/// Options consumed by [`FamilyCatalog::from_config`](crate::FamilyCatalog::from_config),
/// [`KeyedFactory::configure`](crate::KeyedFactory::configure) and
/// [`PrototypeRegistry::configure`](crate::PrototypeRegistry::configure).
///
/// # Examples
///
/// ```
/// use ferrous_provision::{FamilyCatalog, FamilyTag, ProvisionConfig};
///
/// let config = ProvisionConfig {
///     default_family: "mac".to_string(),
///     ..ProvisionConfig::default()
/// };
///
/// let factory = FamilyCatalog::with_defaults().from_config(&config).unwrap();
/// assert_eq!(factory.family(), &FamilyTag::MAC);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct ProvisionConfig {
    /// Tag of the family selected when the caller does not name one.
    pub default_family: String,
    /// Attach a logging observer to factories and registries.
    pub observe_creations: bool,
    /// Prefix for messages from the logging observer.
    pub log_prefix: String,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            default_family: "Windows".to_string(),
            observe_creations: false,
            log_prefix: "[ferrous-provision]".to_string(),
        }
    }
}

impl ProvisionConfig {
    /// Reads `PROVISION_DEFAULT_FAMILY`, `PROVISION_OBSERVE` and
    /// `PROVISION_LOG_PREFIX`, falling back to defaults for unset values.
    pub fn from_env() -> Self {
        Self::from_env_with_prefix(DEFAULT_ENV_PREFIX)
    }

    /// Like [`from_env`](Self::from_env) with a custom variable prefix.
    pub fn from_env_with_prefix(prefix: &str) -> Self {
        let prefix = prefix.to_uppercase();
        let var = |name: &str| env::var(format!("{prefix}_{name}")).ok();
        let mut config = Self::default();

        if let Some(family) = var("DEFAULT_FAMILY").filter(|v| !v.trim().is_empty()) {
            config.default_family = family.trim().to_string();
        }
        if let Some(raw) = var("OBSERVE") {
            match parse_flag(&raw) {
                Some(flag) => config.observe_creations = flag,
                None => tracing::warn!(
                    target: "ferrous_provision",
                    value = %raw,
                    "ignoring unrecognised {prefix}_OBSERVE value"
                ),
            }
        }
        if let Some(log_prefix) = var("LOG_PREFIX") {
            config.log_prefix = log_prefix;
        }
        config
    }

    /// Parses options from JSON; missing fields take their defaults.
    #[cfg(feature = "config")]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
