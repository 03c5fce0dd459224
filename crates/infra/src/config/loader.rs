//! Environment-based configuration
//!
//! Reads ERP connection settings from `KIVU_ERP_*` variables, loading a
//! local `.env` file first when one exists. A missing URL is not an error:
//! the gateway runs unconfigured and reads degrade to empty data, which is
//! the intended local-development mode.

use std::env;
use std::time::Duration;

use kivu_domain::{ErpConfig, KivuError, Result, DEFAULT_TIMEOUT_SECS};
use tracing::warn;
use url::Url;

const URL_VAR: &str = "KIVU_ERP_URL";
const DB_VAR: &str = "KIVU_ERP_DB";
const USERNAME_VAR: &str = "KIVU_ERP_USERNAME";
const PASSWORD_VAR: &str = "KIVU_ERP_PASSWORD";
const TIMEOUT_VAR: &str = "KIVU_ERP_TIMEOUT_SECS";
const CACHE_SESSION_VAR: &str = "KIVU_ERP_CACHE_SESSION";

/// Load ERP connection settings from the process environment.
pub fn load_from_env() -> Result<ErpConfig> {
    dotenvy::dotenv().ok();

    let Some(raw_url) = non_empty(URL_VAR) else {
        warn!("{URL_VAR} is not set; running without a live ERP connection");
        return Ok(ErpConfig::unconfigured());
    };

    let base_url = Url::parse(&raw_url)
        .map_err(|e| KivuError::Config(format!("{URL_VAR} is not a valid URL: {e}")))?;

    let database = required(DB_VAR)?;
    let username = required(USERNAME_VAR)?;
    let password = required(PASSWORD_VAR)?;

    let mut config = ErpConfig::new(Some(base_url), database, username, password);

    if let Some(raw) = non_empty(TIMEOUT_VAR) {
        let secs = raw.parse::<u64>().map_err(|_| {
            KivuError::Config(format!("{TIMEOUT_VAR} must be a whole number of seconds"))
        })?;
        config.timeout = Duration::from_secs(if secs == 0 { DEFAULT_TIMEOUT_SECS } else { secs });
    }

    if let Some(raw) = non_empty(CACHE_SESSION_VAR) {
        config.cache_session = matches!(raw.to_lowercase().as_str(), "1" | "true" | "yes");
    }

    Ok(config)
}

fn non_empty(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn required(var: &str) -> Result<String> {
    non_empty(var).ok_or_else(|| {
        KivuError::Config(format!("{var} must be set when {URL_VAR} is configured"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test covers all loader branches: std::env is process-global and
    // cargo runs tests in parallel, so splitting these into separate tests
    // would race on the shared variables.
    #[test]
    fn loads_configs_from_environment() {
        let all_vars =
            [URL_VAR, DB_VAR, USERNAME_VAR, PASSWORD_VAR, TIMEOUT_VAR, CACHE_SESSION_VAR];
        for var in all_vars {
            env::remove_var(var);
        }

        // No URL: unconfigured, not an error.
        let config = load_from_env().expect("unconfigured load");
        assert!(!config.is_configured());

        // URL without credentials: hard error.
        env::set_var(URL_VAR, "https://erp.example.com");
        assert!(matches!(load_from_env(), Err(KivuError::Config(_))));

        // Full configuration with options.
        env::set_var(DB_VAR, "kivu");
        env::set_var(USERNAME_VAR, "service");
        env::set_var(PASSWORD_VAR, "secret");
        env::set_var(TIMEOUT_VAR, "5");
        env::set_var(CACHE_SESSION_VAR, "true");

        let config = load_from_env().expect("configured load");
        assert!(config.is_configured());
        assert_eq!(config.database, "kivu");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.cache_session);

        // Invalid URL: hard error.
        env::set_var(URL_VAR, "not a url");
        assert!(matches!(load_from_env(), Err(KivuError::Config(_))));

        for var in all_vars {
            env::remove_var(var);
        }
    }
}
