//! Client for the HTTP API of the Insights Operator Controller service
//!
//! Every operation is a single request against `<base URL><API prefix>client/...`. Responses
//! are wrapped in a `{"status": ...}` envelope (see [`models::Envelope`]); a status other than
//! `"ok"` is turned into [`Error::RemoteStatus`].
//!
//! The operations are also exposed through the [`ControllerApi`] trait so callers can swap the
//! HTTP client for a different implementation.

pub mod api;
pub mod models;

pub use api::ControllerApi;

use std::time::Duration;

use bytes::Bytes;
use reqwest::{IntoUrl, Method, RequestBuilder, Response, StatusCode};
use tracing::debug;
use url::Url;

use crate::models::{Envelope, StatusResponse};

/// API prefix used when none is configured
pub const DEFAULT_API_PREFIX: &str = "/api/v1/";

/// Primary error type for the [`Client`]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("base URL error: {0}")]
    BaseUrl(#[source] reqwest::Error),

    #[error("failed to build the HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("failed to send {method} {url} request: {source}")]
    Communication {
        method: Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("server responded with unexpected status [{code}]: {message}")]
    UnexpectedStatus { code: StatusCode, message: String },

    #[error("failed to read the API response bytes: {0}")]
    BodyRead(#[source] reqwest::Error),

    #[error("failed to parse JSON response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("controller reported an error: {status}")]
    RemoteStatus { status: String },

    #[error("response does not contain the '{field}' field")]
    MissingPayload { field: &'static str },
}

impl Error {
    fn communication(method: Method, url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Communication {
            method,
            url: url.into(),
            source,
        }
    }

    async fn unexpected_status(code: StatusCode, resp: Response) -> Self {
        Self::UnexpectedStatus {
            code,
            message: resp.text().await.unwrap_or_default(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The Insights Operator Controller client
///
/// For programmatic access to the HTTP API of the controller service
#[derive(Debug, Clone)]
pub struct Client {
    /// The base URL of a running controller service
    base_url: Url,
    /// Path segments placed between the base URL and the resource path
    api_prefix: Vec<String>,
    /// A [`reqwest::Client`] for handling HTTP requests
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new [`Client`] using [`DEFAULT_API_PREFIX`]
    ///
    /// # Example
    /// ```
    /// # use insights_client::Client;
    /// # fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    /// let client = Client::new("http://localhost:8080")?
    ///     .with_api_prefix("/api/v1/");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new<U: IntoUrl>(base_url: U) -> Result<Self> {
        let base_url = base_url.into_url().map_err(Error::BaseUrl)?;
        Ok(Self {
            base_url,
            api_prefix: split_path(DEFAULT_API_PREFIX),
            http_client: reqwest::Client::new(),
        })
    }

    /// Set the prefix placed in front of every resource path, e.g. `/api/v1/`
    pub fn with_api_prefix(mut self, api_prefix: impl AsRef<str>) -> Self {
        self.api_prefix = split_path(api_prefix.as_ref());
        self
    }

    /// Give up on requests that take longer than `timeout`
    ///
    /// Without it the transport defaults apply.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Error::HttpClient)?;
        Ok(self)
    }

    /// The base URL requests are sent to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Compose the URL of a resource from the base URL, the API prefix and `segments`
    ///
    /// Each segment is escaped, so identifiers and names may contain any character.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // only URLs with a host get past `IntoUrl`, and those always have a path
        if let Ok(mut path_segments) = url.path_segments_mut() {
            path_segments
                .pop_if_empty()
                .extend(&self.api_prefix)
                .extend(segments);
        }
        url
    }

    async fn send(&self, method: Method, url: Url, req: RequestBuilder) -> Result<Response> {
        debug!(%method, %url, "sending request to the controller");
        let resp = req
            .send()
            .await
            .map_err(|src| Error::communication(method, url.as_str(), src))?;
        debug!(status = %resp.status(), "controller responded");
        Ok(resp)
    }

    /// Issue a `GET` and return the payload of the `E` envelope
    async fn read<E: Envelope>(&self, segments: &[&str]) -> Result<E::Payload> {
        let url = self.endpoint(segments);
        let req = self.http_client.get(url.clone());
        let resp = self.send(Method::GET, url, req).await?;
        match resp.status() {
            StatusCode::OK => {}
            code => return Err(Error::unexpected_status(code, resp).await),
        }
        let envelope = decode::<E>(resp).await?;
        check_status(&envelope)?;
        envelope.into_payload().ok_or(Error::MissingPayload {
            field: E::PAYLOAD_FIELD,
        })
    }

    /// Issue a state-changing request and check its status envelope
    async fn write(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, &str)],
        body: Option<Bytes>,
    ) -> Result<()> {
        let url = self.endpoint(segments);
        let mut req = self.http_client.request(method.clone(), url.clone());
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.body(body);
        }
        let resp = self.send(method, url, req).await?;
        match resp.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED => {}
            code => return Err(Error::unexpected_status(code, resp).await),
        }
        check_status(&decode::<StatusResponse>(resp).await?)
    }
}

async fn decode<E: Envelope>(resp: Response) -> Result<E> {
    let bytes = resp.bytes().await.map_err(Error::BodyRead)?;
    serde_json::from_slice(&bytes).map_err(Error::Decode)
}

fn check_status<E: Envelope>(envelope: &E) -> Result<()> {
    if envelope.is_ok() {
        Ok(())
    } else {
        Err(Error::RemoteStatus {
            status: envelope.status().to_owned(),
        })
    }
}

fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
