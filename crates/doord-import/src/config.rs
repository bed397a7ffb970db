use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where and how the forwarder delivers events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwarderConfig {
    pub host: String,
    pub port: u16,
    /// Request path, e.g. `/doord`.
    pub path: String,
    /// Per-request timeout. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for ForwarderConfig {
    fn default() -> Self {
        Self {
            host: "fcfl-access".into(),
            port: 8080,
            path: "/doord".into(),
            timeout: None,
        }
    }
}

impl ForwarderConfig {
    /// Full endpoint URL.
    pub fn url(&self) -> String {
        if self.path.starts_with('/') {
            format!("http://{}:{}{}", self.host, self.port, self.path)
        } else {
            format!("http://{}:{}/{}", self.host, self.port, self.path)
        }
    }
}
