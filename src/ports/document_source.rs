use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentSourceError {
    #[error("Failed to download document")]
    FailedToDownload,
    #[error("Document server answered with an error status")]
    ErrorStatus,
    #[error("Failed to read document body")]
    FailedToReadBody,
}

#[async_trait::async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch_text(&self, url: &str) -> error_stack::Result<String, DocumentSourceError>;
}
