//! HTTP client abstraction for parsing API requests.

use reqwest::Client;
use reqwest::multipart::Form;
use std::time::Duration;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for upload requests in seconds. Statement parsing is
/// slow on the service side, so this is generous.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("parsepoint/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HttpConfig {
    /// Create config with custom timeout
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    config: HttpConfig,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    #[must_use]
    pub fn with_config(config: HttpConfig) -> Self {
        let inner = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { inner, config }
    }

    /// Get the configuration
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Build a multipart POST request with standard headers.
    ///
    /// reqwest sets `multipart/form-data` with the generated boundary.
    pub fn post_multipart(&self, url: &str, form: Form) -> reqwest::RequestBuilder {
        self.inner
            .post(url)
            .header("accept", "application/json")
            .multipart(form)
            .timeout(self.config.timeout)
    }
}
