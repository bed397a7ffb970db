use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use doord_import::ForwarderConfig;
use doord_sink::SinkConfig;

#[derive(Parser, Debug)]
#[command(
    name = "doord-import",
    about = "Forward a door controller access log to a doord endpoint, one event per request",
    version,
)]
pub struct ImportCli {
    /// Access log to import (date,time,name,flag rows, no header)
    pub input: PathBuf,

    #[arg(long, default_value = "fcfl-access")]
    pub host: String,

    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    #[arg(long, default_value = "/doord")]
    pub path: String,

    /// Per-request timeout in seconds; waits forever when unset
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(short, long)]
    pub verbose: bool,
}

impl ImportCli {
    pub fn forwarder_config(&self) -> ForwarderConfig {
        ForwarderConfig {
            host: self.host.clone(),
            port: self.port,
            path: self.path.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "doord-listener",
    about = "Append the body of every POST request to a file, one line per request",
    version,
)]
pub struct ListenerCli {
    /// File to append request bodies to
    pub output: PathBuf,

    #[arg(long, default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Largest accepted Content-Length in bytes
    #[arg(long, default_value_t = 1024 * 1024)]
    pub max_body_size: u64,

    /// Seconds allowed to receive a request body
    #[arg(long, default_value_t = 30)]
    pub read_timeout_secs: u64,

    #[arg(short, long)]
    pub verbose: bool,
}

impl ListenerCli {
    pub fn sink_config(&self) -> SinkConfig {
        SinkConfig {
            bind_addr: self.bind,
            output_path: self.output.clone(),
            max_body_size: self.max_body_size,
            read_timeout: Duration::from_secs(self.read_timeout_secs),
        }
    }
}
