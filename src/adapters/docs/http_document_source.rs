use error_stack::ResultExt;
use tracing::instrument;

use crate::ports::document_source::{DocumentSource, DocumentSourceError};

/// Downloads plain-text documents (Google Docs exports) over HTTP.
#[derive(Debug, Clone, Default)]
pub struct HttpDocumentSource {
    client: reqwest::Client,
}

impl HttpDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl DocumentSource for HttpDocumentSource {
    #[instrument(skip(self))]
    async fn fetch_text(&self, url: &str) -> error_stack::Result<String, DocumentSourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .change_context(DocumentSourceError::FailedToDownload)
            .attach_printable_lazy(|| format!("url: {}", url))?
            .error_for_status()
            .change_context(DocumentSourceError::ErrorStatus)
            .attach_printable_lazy(|| format!("url: {}", url))?;

        response
            .text()
            .await
            .change_context(DocumentSourceError::FailedToReadBody)
            .attach_printable_lazy(|| format!("url: {}", url))
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_fetch_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/document/d/doc-1/export"))
            .and(query_param("format", "txt"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("Admin=76561198000000009:Whitelist\r\n"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let body = HttpDocumentSource::new()
            .fetch_text(&format!("{}/document/d/doc-1/export?format=txt", server.uri()))
            .await
            .unwrap();

        assert_eq!(body, "Admin=76561198000000009:Whitelist\r\n");
    }

    #[tokio::test]
    async fn test_error_status_is_a_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = HttpDocumentSource::new()
            .fetch_text(&format!("{}/missing", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(
            err.current_context(),
            DocumentSourceError::ErrorStatus
        ));
    }
}
