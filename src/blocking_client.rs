use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::Serialize;

use crate::client::{DEFAULT_TIMEOUT, ensure_trailing_slash};
use crate::models::{ChangeListRequest, Credentials, DocumentRequest};
use crate::protocol::{self, AUTH_PATH, CHANGE_LIST_PATH, DEFAULT_SERVER_URL, DOCUMENT_PATH};
use crate::{ChangeBatch, ClientError, Document};

/// Blocking client for the judgment open-data API.
///
/// This is the synchronous counterpart of [`crate::JudicialClient`]. Do not
/// call it from inside an async runtime.
#[derive(Clone, Debug)]
pub struct BlockingJudicialClient {
    base_url: Url,
    timeout: Duration,
    http: reqwest::blocking::Client,
}

impl BlockingJudicialClient {
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
            http: reqwest::blocking::Client::new(),
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
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::blocking::Client) -> Self {
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
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, password), err))]
    pub fn authenticate(&self, user: &str, password: &str) -> Result<String, ClientError> {
        let (status, body) = self.post_json(AUTH_PATH, &Credentials { user, password })?;
        protocol::parse_auth(status, body)
    }

    /// Lists the daily batches of changed document identifiers.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub fn list_changes(&self, token: &str) -> Result<Vec<ChangeBatch>, ClientError> {
        let (status, body) = self.post_json(CHANGE_LIST_PATH, &ChangeListRequest { token })?;
        protocol::parse_change_list(status, body)
    }

    /// Fetches one judgment document by its comma-delimited identifier.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, token), err))]
    pub fn get_document(&self, token: &str, identifier: &str) -> Result<Document, ClientError> {
        let (status, body) =
            self.post_json(DOCUMENT_PATH, &DocumentRequest { token, identifier })?;
        protocol::parse_document(status, body)
    }

    fn post_json<B: Serialize + ?Sized>(
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
            .send()?;
        let status = response.status();
        let payload = response.text()?;

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

#[cfg(test)]
mod tests {
    use super::BlockingJudicialClient;

    #[test]
    fn joins_endpoint_paths_with_trailing_slash_base() {
        let client = BlockingJudicialClient::new("http://127.0.0.1:8080/").expect("valid url");
        let resolved = client.build_url("jdg/api/JDoc").expect("valid path");
        assert_eq!(resolved.as_str(), "http://127.0.0.1:8080/jdg/api/JDoc");
    }
}
