use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::Serialize;

use crate::models::{ChangeListRequest, Credentials, DocumentRequest};
use crate::protocol::{self, AUTH_PATH, CHANGE_LIST_PATH, DEFAULT_SERVER_URL, DOCUMENT_PATH};
use crate::{ChangeBatch, ClientError, Document};

/// Total time budget for one request, from connect until the body is read.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Async client for the judgment open-data API.
///
/// The client holds only immutable transport configuration, so it is cheap to
/// clone and safe to share across tasks. Tokens are threaded through by the
/// caller and never stored.
#[derive(Clone, Debug)]
pub struct JudicialClient {
    base_url: Url,
    timeout: Duration,
    http: reqwest::Client,
}

impl JudicialClient {
    /// Creates a new client with the given base URL.
    ///
    /// The URL is normalized to include a trailing slash, so relative endpoint
    /// paths join correctly.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url.as_ref())
            .map_err(|_| ClientError::InvalidBaseUrl(base_url.as_ref().to_owned()))?;

        Ok(Self {
            base_url: ensure_trailing_slash(parsed),
            timeout: DEFAULT_TIMEOUT,
            http: reqwest::Client::new(),
        })
    }

    /// Creates a client for `https://data.judicial.gov.tw/`.
    pub fn from_default_server() -> Result<Self, ClientError> {
        Self::new(DEFAULT_SERVER_URL)
    }

    /// Returns a new client applying `timeout` to every request.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns a new client sending requests through `http`.
    ///
    /// Useful for proxies or custom TLS settings. The per-request timeout still
    /// applies.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Exchanges credentials for an API token.
    ///
    /// Fails with [`ClientError::Auth`] when the service returns no token.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, password), err))]
    pub async fn authenticate(&self, user: &str, password: &str) -> Result<String, ClientError> {
        let (status, body) = self
            .post_json(AUTH_PATH, &Credentials { user, password })
            .await?;
        protocol::parse_auth(status, body)
    }

    /// Lists the daily batches of changed document identifiers.
    ///
    /// Batches are returned in server order. A rejected token yields
    /// [`ClientError::AuthExpired`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub async fn list_changes(&self, token: &str) -> Result<Vec<ChangeBatch>, ClientError> {
        let (status, body) = self
            .post_json(CHANGE_LIST_PATH, &ChangeListRequest { token })
            .await?;
        protocol::parse_change_list(status, body)
    }

    /// Fetches one judgment document by its comma-delimited identifier.
    ///
    /// The identifier is forwarded as-is.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, token), err))]
    pub async fn get_document(
        &self,
        token: &str,
        identifier: &str,
    ) -> Result<Document, ClientError> {
        let (status, body) = self
            .post_json(DOCUMENT_PATH, &DocumentRequest { token, identifier })
            .await?;
        protocol::parse_document(status, body)
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(StatusCode, String), ClientError> {
        let url = self.build_url(path)?;
        let response = self
            .http
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(self.timeout)
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let payload = response.text().await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(path, %status, bytes = payload.len(), "received response");

        Ok((status, payload))
    }

    fn build_url(&self, path: &str) -> Result<Url, ClientError> {
        let relative = path.trim_start_matches('/');
        self.base_url
            .join(relative)
            .map_err(|_| ClientError::InvalidPath(path.to_owned()))
    }
}

pub(crate) fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let mut path = url.path().to_owned();
        path.push('/');
        url.set_path(&path);
    }
    url
}
