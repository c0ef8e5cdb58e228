/// Production endpoint of the MetMetric communications API.
pub const DEFAULT_ENDPOINT: &str = "https://metmetric-coms-api-115347578365.africa-south1.run.app";

/// Endpoint and credentials for an [`ApiClient`](crate::client::ApiClient).
#[derive(Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    /// Sent verbatim as the `Authorization` header.
    pub auth_token: String,
}

impl ClientConfig {
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            auth_token: auth_token.into(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}
