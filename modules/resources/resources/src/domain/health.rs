use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use super::repo::StoreProbe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthState {
    Ok,
    Degraded,
}

impl HealthState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HealthState::Ok => "ok",
            HealthState::Degraded => "degraded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbState {
    Up,
    Down,
}

impl DbState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DbState::Up => "up",
            DbState::Down => "down",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: HealthState,
    pub db: DbState,
}

impl HealthStatus {
    #[must_use]
    pub fn up() -> Self {
        Self {
            status: HealthState::Ok,
            db: DbState::Up,
        }
    }

    #[must_use]
    pub fn down() -> Self {
        Self {
            status: HealthState::Degraded,
            db: DbState::Down,
        }
    }

    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == HealthState::Ok
    }
}

/// Liveness check against the store. Always yields a status, never an error.
#[derive(Clone)]
pub struct HealthService {
    probe: Arc<dyn StoreProbe>,
    timeout: Duration,
}

impl HealthService {
    #[must_use]
    pub fn new(probe: Arc<dyn StoreProbe>, timeout: Duration) -> Self {
        Self { probe, timeout }
    }

    pub async fn check(&self) -> HealthStatus {
        match tokio::time::timeout(self.timeout, self.probe.ping()).await {
            Ok(Ok(())) => {
                debug!("Store health probe succeeded");
                HealthStatus::up()
            }
            Ok(Err(e)) => {
                warn!(error = ?e, "Store health probe failed");
                HealthStatus::down()
            }
            Err(_) => {
                warn!(
                    timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
                    "Store health probe timed out"
                );
                HealthStatus::down()
            }
        }
    }
}
