//! Client configuration

/// Client configuration for connecting to a backend service
///
/// Each administrative surface talks to its own backend, so a separate
/// configuration is built per service root (e.g. the employee service at
/// `http://localhost:8085`, the kitchen service at `http://localhost:8083`).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL (e.g. "http://localhost:8085")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
