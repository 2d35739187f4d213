use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ResourcesConfig {
    /// Upper bound for the health probe round-trip.
    #[serde(default = "default_health_timeout_ms")]
    pub health_timeout_ms: u64,

    /// Include internal error details in 500 responses. Diagnostic mode only.
    #[serde(default)]
    pub expose_error_details: bool,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            health_timeout_ms: default_health_timeout_ms(),
            expose_error_details: false,
        }
    }
}

fn default_health_timeout_ms() -> u64 {
    2000
}
