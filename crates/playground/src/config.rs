//! Session configuration

use std::time::Duration;

use serde::Deserialize;

/// Configuration for a playground session.
///
/// Controls the simulated latency, request id formatting and the
/// selection a fresh session starts with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Artificial delay before a run completes, in milliseconds
    pub latency_ms: u64,

    /// Prefix for generated request ids (`rpc-` gives `rpc-7`)
    pub request_id_prefix: String,

    /// Request id shown before any run
    pub initial_request_id: String,

    /// Server template selected at session start
    pub default_server_template: String,

    /// Client framework selected at session start
    pub default_client_framework: String,

    /// Client language selected at session start
    pub default_client_language: String,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            latency_ms: 1500,
            request_id_prefix: "rpc-".to_string(),
            initial_request_id: "rpc-1".to_string(),
            default_server_template: "FastAPI".to_string(),
            default_client_framework: "React".to_string(),
            default_client_language: "TypeScript".to_string(),
        }
    }
}

impl PlaygroundConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the simulated latency (builder pattern).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Select a different starting template (builder pattern).
    pub fn with_selection(
        mut self,
        server_template: impl Into<String>,
        client_framework: impl Into<String>,
        client_language: impl Into<String>,
    ) -> Self {
        self.default_server_template = server_template.into();
        self.default_client_framework = client_framework.into();
        self.default_client_language = client_language.into();
        self
    }

    /// Load a configuration from JSON; missing fields take their defaults.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// The simulated latency as a `Duration`.
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Format the request id for a run.
    pub fn request_id(&self, run_id: u64) -> String {
        format!("{}{}", self.request_id_prefix, run_id)
    }
}
