use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SinkConfig {
    pub bind_addr: SocketAddr,
    /// File every accepted body is appended to.
    pub output_path: PathBuf,
    /// Largest `Content-Length` accepted, in bytes.
    pub max_body_size: u64,
    /// Time allowed to receive the whole body.
    pub read_timeout: Duration,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            output_path: PathBuf::from("doord.log"),
            max_body_size: 1024 * 1024,
            read_timeout: Duration::from_secs(30),
        }
    }
}

impl SinkConfig {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = SinkConfig::default();
        assert_eq!(c.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(c.max_body_size, 1024 * 1024);
        assert_eq!(c.read_timeout, Duration::from_secs(30));
    }

    #[test]
    fn new_keeps_defaults() {
        let c = SinkConfig::new("/var/log/doord.log");
        assert_eq!(c.output_path, PathBuf::from("/var/log/doord.log"));
        assert_eq!(c.bind_addr.port(), 8080);
    }
}
