use anyhow::{anyhow, Context, Result};
use reqwest::{Client, Response, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, info};

use crate::backend::storage::traits::Connection;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// HTTP connection to the marketplace API.
///
/// All endpoints hang off `{base_url}/properties/{property_id}`.
#[derive(Clone)]
pub struct RemoteApiConnection {
    client: Client,
    base_url: Url,
}

impl RemoteApiConnection {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid remote API URL: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("Remote API URL cannot be used as a base: {}", base_url));
        }

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        info!("Using remote availability API at {}", base_url);
        Ok(Self { client, base_url })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base_url}/properties/{segments...}` with each segment percent-encoded
    pub fn property_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("Remote API URL cannot be used as a base: {}", self.base_url))?
            .pop_if_empty()
            .push("properties")
            .extend(segments);
        debug!("Remote endpoint: {}", url);
        Ok(url)
    }
}

/// Split a response into "not found" and success, turning every other status into an error
pub(super) fn found(response: Response) -> Result<Option<Response>> {
    if response.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    let url = response.url().clone();
    let response = response
        .error_for_status()
        .with_context(|| format!("Remote API request to {} failed", url))?;
    Ok(Some(response))
}

impl Connection for RemoteApiConnection {
    type PropertyRepository = super::property_repository::RemotePropertyRepository;
    type AvailabilityRepository = super::availability_repository::RemoteAvailabilityRepository;

    fn create_property_repository(&self) -> Self::PropertyRepository {
        super::property_repository::RemotePropertyRepository::new(self.clone())
    }

    fn create_availability_repository(&self) -> Self::AvailabilityRepository {
        super::availability_repository::RemoteAvailabilityRepository::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_url_encodes_segments() {
        let connection = RemoteApiConnection::new("https://api.example.com/v1/").unwrap();

        let url = connection.property_url(&["villa 7", "availability"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/properties/villa%207/availability");

        let url = connection.property_url(&["../admin"]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/properties/..%2Fadmin");
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(RemoteApiConnection::new("not a url").is_err());
        assert!(RemoteApiConnection::new("mailto:host@example.com").is_err());
    }
}
