// Document storage client layer

use crate::types::{UploadFile, UploadResult};
use async_trait::async_trait;

pub mod documents;

pub use documents::*;

/// A remote store that accepts uploaded documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Send `file` with `token` as the bearer credential and return the
    /// service's JSON response, whatever its status code.
    async fn upload(&self, token: &str, file: &UploadFile) -> UploadResult<serde_json::Value>;
}
