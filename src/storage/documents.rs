// HTTP client for the document-storage service
//
// Uploads go to `<base_url>/documents` as multipart/form-data with a single
// `file` part. The response status is not inspected: whatever body comes back
// is parsed as JSON and returned to the caller.

use crate::config::{normalize_base_url, Config};
use crate::storage::DocumentStore;
use crate::types::{UploadFile, UploadResult};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Request};
use tracing::debug;

const DOCUMENTS_PATH: &str = "/documents";

#[derive(Debug, Clone)]
pub struct DocumentUploader {
    client: Client,
    base_url: String,
}

impl DocumentUploader {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Reuse an existing client (and its connection pool).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.service.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn documents_url(&self) -> String {
        format!("{}{}", self.base_url, DOCUMENTS_PATH)
    }

    fn build_form(file: &UploadFile) -> UploadResult<Form> {
        // `Bytes` clones share the buffer, so the payload is not copied here.
        let mut part = Part::stream_with_length(file.content.clone(), file.len() as u64)
            .file_name(file.file_name.clone());

        if let Some(content_type) = &file.content_type {
            part = part.mime_str(content_type)?;
        }

        Ok(Form::new().part("file", part))
    }

    /// The upload request, with the token in a sensitive `Authorization` header.
    pub fn build_request(&self, token: &str, file: &UploadFile) -> UploadResult<Request> {
        let form = Self::build_form(file)?;

        Ok(self
            .client
            .post(self.documents_url())
            .bearer_auth(token)
            .multipart(form)
            .build()?)
    }
}

#[async_trait]
impl DocumentStore for DocumentUploader {
    async fn upload(&self, token: &str, file: &UploadFile) -> UploadResult<serde_json::Value> {
        let request = self.build_request(token, file)?;

        debug!(
            url = %request.url(),
            file_name = %file.file_name,
            size = file.len(),
            "Uploading document"
        );

        let response = self.client.execute(request).await?;

        let status = response.status();
        debug!(status = %status, "Document service responded");

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
