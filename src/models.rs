//! Wire types for the three judicial API endpoints.
//!
//! Field names follow the remote service exactly: request fields are lower
//! case, document payload fields are upper case.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /jdg/api/Auth`.
#[derive(Serialize)]
pub(crate) struct Credentials<'a> {
    pub user: &'a str,
    pub password: &'a str,
}

/// Body of `POST /jdg/api/JList`.
#[derive(Serialize)]
pub(crate) struct ChangeListRequest<'a> {
    pub token: &'a str,
}

/// Body of `POST /jdg/api/JDoc`.
#[derive(Serialize)]
pub(crate) struct DocumentRequest<'a> {
    pub token: &'a str,
    #[serde(rename = "j")]
    pub identifier: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AuthResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub error: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DocumentResponse {
    #[serde(flatten)]
    pub document: Document,
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: String,
}

/// One day's changed-document identifiers.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct ChangeBatch {
    /// Day the batch covers, as sent by the server (for example `20240808`).
    #[serde(rename = "DATE", deserialize_with = "null_as_default")]
    pub date: String,
    /// Document identifiers added or modified on `date`, in server order.
    #[serde(rename = "LIST", deserialize_with = "null_as_default")]
    pub list: Vec<String>,
}

/// File attached to a judgment.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct Attachment {
    #[serde(rename = "TITLE", deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "URL", deserialize_with = "null_as_default")]
    pub url: String,
}

/// One rendering of a judgment's full text.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct FullText {
    /// Rendering format reported by the server (for example `file` or `html`).
    #[serde(rename = "JFULLTYPE", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(rename = "JFULLCONTENT", deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(rename = "JFULLPDF", deserialize_with = "null_as_default")]
    pub pdf_url: String,
}

/// Full content of a single judgment document.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct Document {
    /// Document identifier, e.g. `TPBA,113,訴,501,20240808,1`.
    #[serde(rename = "JID", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "JYEAR", deserialize_with = "null_as_default")]
    pub year: String,
    #[serde(rename = "JCASE", deserialize_with = "null_as_default")]
    pub case: String,
    #[serde(rename = "JNO", deserialize_with = "null_as_default")]
    pub number: String,
    #[serde(rename = "JDATE", deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(rename = "JTITLE", deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "ATTACHMENTS", deserialize_with = "null_as_default")]
    pub attachments: Vec<Attachment>,
    #[serde(rename = "JFULLX", deserialize_with = "null_as_default")]
    pub full_text: FullText,
}

// The service sends `null` where Go-style clients expect zero values.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{
        AuthResponse, ChangeListRequest, Credentials, Document, DocumentRequest, DocumentResponse,
    };

    #[test]
    fn request_bodies_use_exact_field_names() {
        let auth = serde_json::to_value(Credentials {
            user: "alice",
            password: "secret",
        })
        .expect("serializes");
        assert_eq!(auth, json!({"user": "alice", "password": "secret"}));

        let list = serde_json::to_value(ChangeListRequest { token: "t0k" }).expect("serializes");
        assert_eq!(list, json!({"token": "t0k"}));

        let doc = serde_json::to_value(DocumentRequest {
            token: "t0k",
            identifier: "TPBA,113,訴,501,20240808,1",
        })
        .expect("serializes");
        assert_eq!(
            doc,
            json!({"token": "t0k", "j": "TPBA,113,訴,501,20240808,1"})
        );
    }

    #[test]
    fn document_decodes_upper_case_fields() {
        let body = json!({
            "ATTACHMENTS": [{"TITLE": "附件一", "URL": "https://example.com/a.pdf"}],
            "JFULLX": {
                "JFULLTYPE": "file",
                "JFULLCONTENT": "臺北高等行政法院判決",
                "JFULLPDF": "https://example.com/full.pdf"
            },
            "JID": "TPBA,113,訴,501,20240808,1",
            "JYEAR": "113",
            "JCASE": "訴",
            "JNO": "501",
            "JDATE": "20240808",
            "JTITLE": "撤銷訴願決定"
        });
        let document: Document = serde_json::from_value(body).expect("decodes");
        assert_eq!(document.id, "TPBA,113,訴,501,20240808,1");
        assert_eq!(document.case, "訴");
        assert_eq!(document.attachments.len(), 1);
        assert_eq!(document.attachments[0].title, "附件一");
        assert_eq!(document.full_text.pdf_url, "https://example.com/full.pdf");
    }

    #[test]
    fn null_and_missing_fields_decode_to_defaults() {
        let response: DocumentResponse =
            serde_json::from_value(json!({"JID": "X", "ATTACHMENTS": null, "JFULLX": null}))
                .expect("decodes");
        assert_eq!(response.document.id, "X");
        assert!(response.document.attachments.is_empty());
        assert!(response.document.full_text.content.is_empty());
        assert!(response.error.is_empty());

        let auth: AuthResponse = serde_json::from_value(json!({"error": null})).expect("decodes");
        assert!(auth.token.is_empty());
        assert!(auth.error.is_empty());
    }
}
