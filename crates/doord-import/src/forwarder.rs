use doord_types::{format_wire, AccessEvent};
use reqwest::blocking::Client;
use reqwest::Url;
use tracing::{debug, info};

use crate::config::ForwarderConfig;
use crate::error::{ImportError, ImportResult};

/// Delivery seam between the forwarder and the network.
pub trait EventTransport {
    /// Send one event and return the response status code.
    fn post(&self, event: &AccessEvent) -> ImportResult<u16>;
}

/// Blocking HTTP transport posting JSON bodies to a fixed endpoint.
///
/// One client (and its connection pool) is reused for the whole run.
pub struct HttpTransport {
    client: Client,
    url: Url,
}

impl HttpTransport {
    pub fn new(config: &ForwarderConfig) -> ImportResult<Self> {
        let endpoint = config.url();
        let url = Url::parse(&endpoint)
            .map_err(|e| ImportError::Config(format!("invalid endpoint {endpoint}: {e}")))?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ImportError::Config(e.to_string()))?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl EventTransport for HttpTransport {
    fn post(&self, event: &AccessEvent) -> ImportResult<u16> {
        debug!(url = %self.url, name = %event.name, "posting event");
        let response = self
            .client
            .post(self.url.clone())
            .json(event)
            .send()
            .map_err(|e| ImportError::Transport(e.to_string()))?;
        Ok(response.status().as_u16())
    }
}

/// Sends events one at a time; the first non-2xx response is fatal.
pub struct Forwarder<T> {
    transport: T,
}

impl Forwarder<HttpTransport> {
    /// Forwarder over HTTP for the given endpoint.
    pub fn http(config: &ForwarderConfig) -> ImportResult<Self> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: EventTransport> Forwarder<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Deliver a single event, blocking until the endpoint answers.
    pub fn forward(&self, event: &AccessEvent) -> ImportResult<()> {
        let status = self.transport.post(event)?;
        let timestamp = format_wire(&event.timestamp);
        info!(%timestamp, status, "event posted");
        if !(200..300).contains(&status) {
            return Err(ImportError::Delivery { status, timestamp });
        }
        Ok(())
    }
}
