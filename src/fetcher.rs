use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum FetchError {
    /// DNS, connection, TLS or body read failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with something other than 200 OK
    #[error("Status error: {0}")]
    Status(u16),
}

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Builds a fetcher on the transport defaults: no custom headers,
    /// timeout or redirect policy.
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// Issues one GET for `url` and returns the full body of a 200 response.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!("Fetching feed: {}", url);

        let response = self.client.get(url).send()?;
        let status = response.status();

        if status != StatusCode::OK {
            warn!("Unexpected status {} from {}", status, url);
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response.bytes()?;
        debug!("Read {} bytes from {}", bytes.len(), url);

        Ok(bytes.to_vec())
    }
}

/// Fetches `url` with a default [`Fetcher`].
pub fn fetch(url: &str) -> Result<Vec<u8>, FetchError> {
    Fetcher::new()?.fetch(url)
}
