//! System health reporting.
//!
//! Embedding UIs show two indicators: the connection mode (a demo banner
//! when unconfigured) and whether the datastore answers. [`SystemHealth`]
//! carries both, stamped with when the check ran.

use crate::config::ConnectionMode;
use crate::datastore::{Datastore, ProfileRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};
use voto_access::ScopeFilter;

/// Whether a service answered its probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// The probe completed.
    Healthy,

    /// The probe failed.
    Error,
}

impl ServiceStatus {
    /// Returns the lowercase string form.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Error => "error",
        }
    }

    /// Returns `true` for [`Healthy`](Self::Healthy).
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point-in-time health report.
///
/// # Example
///
/// ```
/// use voto_runtime::config::ConnectionMode;
/// use voto_runtime::datastore::InMemoryDatastore;
/// use voto_runtime::health::SystemHealth;
///
/// # async fn example() {
/// let datastore = InMemoryDatastore::new();
/// let health = SystemHealth::probe(&datastore, ConnectionMode::Demo).await;
///
/// assert!(health.is_healthy());
/// assert!(health.mode().is_demo());
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemHealth {
    mode: ConnectionMode,
    datastore: ServiceStatus,
    checked_at: DateTime<Utc>,
    detail: Option<String>,
}

impl SystemHealth {
    /// Probes the datastore and assembles a report.
    ///
    /// The probe queries the `profiles` collection under a
    /// match-nothing filter: connectivity is exercised without moving any
    /// records.
    pub async fn probe<D: Datastore>(datastore: &D, mode: ConnectionMode) -> Self {
        let (status, detail) = match datastore
            .find(ProfileRecord::COLLECTION, &ScopeFilter::None)
            .await
        {
            Ok(_) => {
                debug!(%mode, "datastore probe ok");
                (ServiceStatus::Healthy, None)
            }
            Err(error) => {
                warn!(%mode, %error, "datastore probe failed");
                (ServiceStatus::Error, Some(error.to_string()))
            }
        };

        Self {
            mode,
            datastore: status,
            checked_at: Utc::now(),
            detail,
        }
    }

    /// Returns the connection mode at probe time.
    #[must_use]
    pub fn mode(&self) -> ConnectionMode {
        self.mode
    }

    /// Returns the datastore probe outcome.
    #[must_use]
    pub fn datastore(&self) -> ServiceStatus {
        self.datastore
    }

    /// Returns when the probe ran.
    #[must_use]
    pub fn checked_at(&self) -> DateTime<Utc> {
        self.checked_at
    }

    /// Returns the failure message, if the probe failed.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Returns `true` when every probed service answered.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.datastore.is_healthy()
    }
}

impl fmt::Display for SystemHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.datastore, self.mode)
    }
}
