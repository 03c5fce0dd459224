//! ERP connection configuration
//!
//! Connection settings are threaded explicitly through the gateway
//! constructor rather than read from global state, so tests can point the
//! gateway at fake endpoints.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{KivuError, Result};

/// Path of the authentication service on the ERP host.
pub const COMMON_ENDPOINT_PATH: &str = "/xmlrpc/2/common";
/// Path of the generic object-operations service on the ERP host.
pub const OBJECT_ENDPOINT_PATH: &str = "/xmlrpc/2/object";

/// Default per-call timeout. The source this gateway replaces had none and
/// could hang a page render on an unreachable ERP indefinitely.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the remote ERP.
///
/// `base_url` is optional on purpose: a dashboard running without a live ERP
/// (local development) keeps working in a degraded empty-data mode instead of
/// failing construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErpConfig {
    pub base_url: Option<Url>,
    pub database: String,
    pub username: String,
    pub password: String,
    /// Bounded timeout applied to every remote call.
    #[serde(default = "default_timeout")]
    pub timeout: Duration,
    /// Reuse the authenticated user id across calls instead of
    /// re-authenticating per operation. Off by default to match the
    /// behavior of the system this gateway replaces.
    #[serde(default)]
    pub cache_session: bool,
}

fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

impl ErpConfig {
    pub fn new(
        base_url: Option<Url>,
        database: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url,
            database: database.into(),
            username: username.into(),
            password: password.into(),
            timeout: default_timeout(),
            cache_session: false,
        }
    }

    /// A config with no base URL: every read degrades to empty results and
    /// every write fails with a configuration error.
    pub fn unconfigured() -> Self {
        Self::new(None, "", "", "")
    }

    /// Whether a live ERP endpoint is configured.
    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// URL of the authentication service endpoint.
    pub fn common_endpoint(&self) -> Result<Url> {
        self.endpoint(COMMON_ENDPOINT_PATH)
    }

    /// URL of the generic object-operations endpoint.
    pub fn object_endpoint(&self) -> Result<Url> {
        self.endpoint(OBJECT_ENDPOINT_PATH)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self
            .base_url
            .as_ref()
            .ok_or_else(|| KivuError::Config("ERP base URL is not set".to_string()))?;
        base.join(path)
            .map_err(|e| KivuError::Config(format!("Invalid ERP endpoint path {path}: {e}")))
    }
}
