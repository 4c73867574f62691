//! HTTP photo source
//!
//! Talks to a jsonplaceholder-style `/photos` API.

use std::io::Read;
use std::time::Duration;

use reqwest::blocking::{Client, Response};

use crate::config::Config;
use crate::error::{PagerError, Result};
use crate::model::Photo;
use crate::protocol::{check_body_size, decode_photos, Request, Status, MAX_BODY_SIZE};

use super::PhotoSource;

/// REST-backed photo source
pub struct HttpPhotoSource {
    /// API root, without the `/photos` segment
    base_url: String,

    client: Client,
}

impl HttpPhotoSource {
    /// Create a source for `base_url`; a zero timeout means no timeout
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Result<Self> {
        let mut builder = Client::builder();
        if timeout_ms > 0 {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        Self::with_client(base_url, builder.build()?)
    }

    /// Create a source around a preconfigured client (proxy, TLS, headers)
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Result<Self> {
        let base_url = base_url.into();
        reqwest::Url::parse(&base_url)
            .map_err(|e| PagerError::Config(format!("Invalid base URL {}: {}", base_url, e)))?;
        Ok(Self { base_url, client })
    }

    /// Create a source from the remote section of a config
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.base_url.clone(), config.request_timeout_ms)
    }

    /// Get the API root
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn send(&self, request: &Request) -> Result<Response> {
        let url = request.url(&self.base_url);
        tracing::debug!("{} {}", request.method().as_str(), url);

        let response = match request {
            Request::ListPhotos => self.client.get(&url).send()?,
            Request::DeletePhoto { .. } => self.client.delete(&url).send()?,
        };

        let code = response.status().as_u16();
        match Status::from_code(code) {
            Status::Ok => Ok(response),
            Status::NotFound => Err(PagerError::Fetch(format!(
                "{} {} returned 404 Not Found",
                request.method().as_str(),
                url
            ))),
            Status::Error => Err(PagerError::Fetch(format!(
                "{} {} returned HTTP {}",
                request.method().as_str(),
                url,
                code
            ))),
        }
    }
}

/// Read a response body, never buffering more than `MAX_BODY_SIZE + 1` bytes
fn read_body(response: Response) -> Result<Vec<u8>> {
    if let Some(declared) = response.content_length() {
        check_body_size(declared)?;
    }

    let mut body = Vec::new();
    response
        .take(MAX_BODY_SIZE as u64 + 1)
        .read_to_end(&mut body)?;
    check_body_size(body.len() as u64)?;
    Ok(body)
}

impl PhotoSource for HttpPhotoSource {
    fn fetch_photos(&self) -> Result<Vec<Photo>> {
        let response = self.send(&Request::ListPhotos)?;
        let body = read_body(response)?;
        let photos = decode_photos(&body)?;
        tracing::debug!("Fetched {} photos from {}", photos.len(), self.base_url);
        Ok(photos)
    }

    fn delete_photo(&self, id: u64) -> Result<()> {
        self.send(&Request::DeletePhoto { id })?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("http:{}", self.base_url)
    }
}
