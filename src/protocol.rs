//! Transport-independent interpretation of judicial API responses.
//!
//! Both [`crate::JudicialClient`] and [`crate::BlockingJudicialClient`] read the
//! full response body as text and hand it, together with the HTTP status, to
//! the functions here.

use reqwest::StatusCode;

use crate::ClientError;
use crate::models::{AuthResponse, ChangeBatch, Document, DocumentResponse};

/// Default server for the judgment open-data API.
pub const DEFAULT_SERVER_URL: &str = "https://data.judicial.gov.tw/";

pub(crate) const AUTH_PATH: &str = "jdg/api/Auth";
pub(crate) const CHANGE_LIST_PATH: &str = "jdg/api/JList";
pub(crate) const DOCUMENT_PATH: &str = "jdg/api/JDoc";

/// Phrase the change-list endpoint returns, outside any JSON envelope, when it
/// rejects a token ("verification failed").
pub(crate) const TOKEN_REJECTED_MARKER: &str = "驗證失敗";

pub(crate) fn check_status(status: StatusCode, body: String) -> Result<String, ClientError> {
    if status.is_success() {
        Ok(body)
    } else {
        Err(ClientError::Status { status, body })
    }
}

pub(crate) fn parse_auth(status: StatusCode, body: String) -> Result<String, ClientError> {
    let body = check_status(status, body)?;
    let response: AuthResponse = serde_json::from_str(&body)?;
    if response.token.is_empty() {
        Err(ClientError::Auth(response.error))
    } else {
        Ok(response.token)
    }
}

pub(crate) fn parse_change_list(
    status: StatusCode,
    body: String,
) -> Result<Vec<ChangeBatch>, ClientError> {
    let body = check_status(status, body)?;
    // The rejection is plain text, so it has to be caught before decoding.
    if body.contains(TOKEN_REJECTED_MARKER) {
        return Err(ClientError::AuthExpired);
    }
    Ok(serde_json::from_str(&body)?)
}

pub(crate) fn parse_document(status: StatusCode, body: String) -> Result<Document, ClientError> {
    let body = check_status(status, body)?;
    let response: DocumentResponse = serde_json::from_str(&body)?;
    if response.error.is_empty() {
        Ok(response.document)
    } else {
        Err(ClientError::Fetch(response.error))
    }
}
