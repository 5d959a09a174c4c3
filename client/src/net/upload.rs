//! Document upload handshake.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend never receives file bytes directly. The browser asks it for a
//! presigned object-storage URL, PUTs the file there, then posts the object
//! key back as document metadata. Each step runs once, in order; the first
//! failure aborts the script.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use percent_encoding::percent_decode_str;

/// Which step of the handshake failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadStep {
    RequestUrl,
    Store,
    Register,
}

impl UploadStep {
    #[must_use]
    pub fn describe(self) -> &'static str {
        match self {
            Self::RequestUrl => "requesting an upload URL",
            Self::Store => "uploading the file",
            Self::Register => "registering the document",
        }
    }
}

/// Derive the storage object key from a presigned URL.
///
/// The key is the URL path without its leading `/`, percent-decoded. Returns
/// `None` when the URL does not parse or has no path.
#[must_use]
pub fn object_key_from_presigned_url(presigned: &str) -> Option<String> {
    let parsed = url::Url::parse(presigned).ok()?;
    let raw = parsed.path().trim_start_matches('/');
    if raw.is_empty() {
        return None;
    }
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    Some(decoded.into_owned())
}

/// Upload one file for `document_id` and return the refreshed application.
///
/// # Errors
///
/// Returns the failing step together with a user-facing message.
#[cfg(feature = "hydrate")]
pub async fn upload_document(
    application_id: i64,
    document_id: i64,
    description: String,
    file: web_sys::File,
) -> Result<crate::net::types::Application, (UploadStep, String)> {
    use super::api::{self, DocumentSubmission};

    let url = api::request_upload_url(application_id, document_id)
        .await
        .map_err(|e| (UploadStep::RequestUrl, e.to_string()))?;
    let key = storage_key(&url)?;
    api::upload_to_storage(&url, &file)
        .await
        .map_err(|e| (UploadStep::Store, e.to_string()))?;
    log::info!("uploaded document {document_id} for application {application_id} as {key}");

    let submission = DocumentSubmission { document_id, description, file: key };
    api::submit_documents(application_id, &[submission])
        .await
        .map_err(|e| (UploadStep::Register, e.to_string()))
}

/// Object key for a presigned URL, checked before any bytes are stored.
///
/// # Errors
///
/// Fails under [`UploadStep::RequestUrl`] when the URL carries no key.
pub fn storage_key(presigned: &str) -> Result<String, (UploadStep, String)> {
    object_key_from_presigned_url(presigned)
        .ok_or_else(|| (UploadStep::RequestUrl, "upload URL has no object key".to_owned()))
}

/// Message shown inline when the handshake fails.
#[must_use]
pub fn failure_message(step: UploadStep, detail: &str) -> String {
    format!("Upload failed while {}: {detail}", step.describe())
}
