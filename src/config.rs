// src/config.rs
//! Registry configuration.

/// Environment variable consulted by [`RegistryConfig::from_env`].
pub const ALLOW_OVERRIDING_ENV: &str = "ALIAS_REGISTRY_ALLOW_OVERRIDING";

/// Policy knobs for an [`AliasRegistry`](crate::AliasRegistry).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Whether an alias that is already bound may be rebound to another name.
    pub allow_overriding: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            allow_overriding: true,
        }
    }
}

impl RegistryConfig {
    /// Same as [`RegistryConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether bound aliases may be rebound.
    pub fn allow_overriding(mut self, allow: bool) -> Self {
        self.allow_overriding = allow;
        self
    }

    /// Build a config from the process environment, falling back to the
    /// defaults for unset or unparseable values.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(ALLOW_OVERRIDING_ENV) {
            match parse_flag(&raw) {
                Some(allow) => config.allow_overriding = allow,
                None => tracing::warn!(
                    var = ALLOW_OVERRIDING_ENV,
                    value = %raw,
                    "ignoring unrecognised boolean value"
                ),
            }
        }
        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
