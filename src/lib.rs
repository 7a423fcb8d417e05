// Docstore Uploader - authenticated multipart uploads to a document-storage service

pub mod config;
pub mod types;
pub mod storage;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use storage::{DocumentStore, DocumentUploader};
pub use types::{UploadError, UploadFile, UploadResult};
