use crate::error::{SymantecError, SymantecResult};
use crate::logging::log_debug;
use crate::retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Production partner endpoint.
pub const PRODUCTION_URL: &str = "https://api.geotrust.com/webtrust/partner";

/// Vendor sandbox endpoint used by the functional tests.
pub const SANDBOX_URL: &str = "https://test-api.geotrust.com/webtrust/partner";

pub const ENV_PARTNER_CODE: &str = "SYMANTEC_PARTNER_CODE";
pub const ENV_USERNAME: &str = "SYMANTEC_USERNAME";
pub const ENV_PASSWORD: &str = "SYMANTEC_PASSWORD";
pub const ENV_URL: &str = "SYMANTEC_URL";

/// Partner account configuration
///
/// The partner code and credentials are sent in the header of every
/// request; nothing else about an order is remembered between calls.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct SymantecConfig {
    pub partner_code: String,
    pub username: String,
    pub password: String,
    pub base_url: String,
    pub retry_policy: RetryPolicy,
}

impl fmt::Debug for SymantecConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymantecConfig")
            .field("partner_code", &self.partner_code)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("retry_policy", &self.retry_policy)
            .finish()
    }
}

impl Default for SymantecConfig {
    fn default() -> Self {
        Self {
            partner_code: String::new(),
            username: String::new(),
            password: String::new(),
            base_url: PRODUCTION_URL.to_string(),
            retry_policy: RetryPolicy::default(),
        }
    }
}

impl SymantecConfig {
    /// Create a configuration for the production endpoint
    pub fn new(
        partner_code: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            partner_code: partner_code.into(),
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Same as [`new`](Self::new) but pointed at the vendor sandbox
    pub fn sandbox(
        partner_code: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: SANDBOX_URL.to_string(),
            ..Self::new(partner_code, username, password)
        }
    }

    /// Load configuration from `SYMANTEC_*` environment variables
    ///
    /// `SYMANTEC_URL` is optional and defaults to the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SymantecError::ConfigurationError`] if a required variable
    /// is missing or the resulting configuration fails [`validate`](Self::validate).
    pub fn from_env() -> SymantecResult<Self> {
        Self::env_config(PRODUCTION_URL)
    }

    /// Like [`from_env`](Self::from_env), but `SYMANTEC_URL` defaults to the
    /// vendor sandbox so a missing URL never sends test orders to production.
    pub fn sandbox_from_env() -> SymantecResult<Self> {
        Self::env_config(SANDBOX_URL)
    }

    fn env_config(default_url: &str) -> SymantecResult<Self> {
        let mut config = Self {
            partner_code: required_env(ENV_PARTNER_CODE)?,
            username: required_env(ENV_USERNAME)?,
            password: required_env(ENV_PASSWORD)?,
            base_url: default_url.to_string(),
            retry_policy: RetryPolicy::default(),
        };
        if let Ok(url) = std::env::var(ENV_URL) {
            if !url.is_empty() {
                config = config.with_base_url(url);
            }
        }

        config.validate()?;

        log_debug!(
            partner_code = %config.partner_code,
            base_url = %config.base_url,
            "Loaded partner configuration from environment"
        );

        Ok(config)
    }

    /// Replace the retry policy
    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    /// Replace the endpoint URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Validate the configuration is complete
    ///
    /// # Errors
    ///
    /// Returns [`SymantecError::ConfigurationError`] if the partner code or a
    /// credential is empty, the base URL is not an http(s) URL, or the retry
    /// policy's backoff multiplier is not positive.
    pub fn validate(&self) -> SymantecResult<()> {
        if self.partner_code.trim().is_empty() {
            return Err(SymantecError::configuration_error("Partner code is required"));
        }
        if self.username.is_empty() || self.password.is_empty() {
            return Err(SymantecError::configuration_error(
                "Partner username and password are required",
            ));
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(SymantecError::configuration_error(format!(
                "Base URL must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        self.retry_policy.validate()
    }
}

fn required_env(name: &str) -> SymantecResult<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(SymantecError::configuration_error(format!(
            "Environment variable {name} is required"
        ))),
    }
}
