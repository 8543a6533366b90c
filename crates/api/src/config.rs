use std::time::Duration;

use url::Url;

use crate::error::ApiError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Connection settings for the CRM backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read settings from `CRM_API_URL` and optional `CRM_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ApiError> {
        let raw = std::env::var("CRM_API_URL")
            .map_err(|_| ApiError::Config("CRM_API_URL environment variable not set".to_string()))?;
        let base_url = Url::parse(&raw)
            .map_err(|e| ApiError::Config(format!("CRM_API_URL is not a valid URL: {e}")))?;

        let timeout = match std::env::var("CRM_API_TIMEOUT_SECS") {
            Ok(secs) => {
                let secs: u64 = secs.parse().map_err(|_| {
                    ApiError::Config("CRM_API_TIMEOUT_SECS must be an integer".to_string())
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self { base_url, timeout })
    }
}
