use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use docstore_uploader::{
    config::Config,
    utils::init_logger,
    DocumentStore, DocumentUploader, UploadFile,
};

/// Upload a file to the document-storage service and print its JSON response.
#[derive(Debug, Parser)]
#[command(name = "docstore-upload", version, about)]
struct Cli {
    /// File to upload
    file: PathBuf,

    /// Base URL of the document service; `/documents` is appended
    #[arg(long, env = "DOCSTORE_BASE_URL")]
    base_url: Option<String>,

    /// Bearer token sent in the Authorization header
    #[arg(long, env = "DOCSTORE_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Override the guessed MIME type of the file part
    #[arg(long)]
    content_type: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env feeds RUST_LOG and clap's env fallbacks
    dotenvy::dotenv().ok();
    init_logger();

    let cli = Cli::parse();
    let config = Config::from_env()?.with_overrides(cli.base_url.as_deref(), cli.token);
    let token = config.token()?;

    let mut file = UploadFile::from_path(&cli.file)
        .await
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    if let Some(content_type) = cli.content_type {
        file = file.with_content_type(content_type);
    }

    let uploader = DocumentUploader::from_config(&config);
    info!("Uploading {} ({} bytes) to {}", file.file_name, file.len(), uploader.documents_url());

    let response = uploader
        .upload(token, &file)
        .await
        .context("Upload failed")?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
