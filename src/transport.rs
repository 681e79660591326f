use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};

use crate::error::Error;

/// Performs a single GET and hands back the whole body.
///
/// The status code is not interpreted: a 404 page or a 500 body is returned
/// like any other, and whether it decodes is up to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, Error>;
}

#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert("accept", HeaderValue::from_static("application/json"));

        Ok(Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .build()?,
        })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, Error> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "non-success status, body is passed on to the decoder");
        }

        let body = response.bytes().await?;
        tracing::debug!(%status, len = body.len(), "response received");

        Ok(body.to_vec())
    }
}
