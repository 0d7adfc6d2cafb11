use tracing::{error, info, instrument};

use crate::domain::supplemental::{google_doc_export_url, SupplementalSection, ASC_WHITELIST_URL};
use crate::ports::document_source::DocumentSource;

/// Downloads the optional ASC whitelist and every other document, in that order.
///
/// A document that cannot be fetched is logged and left out; this never fails.
#[instrument(skip(documents))]
pub async fn fetch_supplements(
    documents: &dyn DocumentSource,
    include_asc_whitelist: bool,
    other_docs: &[String],
) -> Vec<SupplementalSection> {
    let mut sections = Vec::new();

    if include_asc_whitelist {
        match documents.fetch_text(ASC_WHITELIST_URL).await {
            Ok(body) => {
                info!("downloaded ASC whitelist");
                sections.push(SupplementalSection::verbatim("ASC whitelist", &body));
            }
            Err(report) => error!("Error downloading ASC whitelist: {:?}", report),
        }
    }

    for doc_id in other_docs {
        let url = google_doc_export_url(doc_id);
        match documents.fetch_text(&url).await {
            Ok(body) => {
                info!(doc = %doc_id, "downloaded other doc");
                sections.push(SupplementalSection::without_groups(doc_id.as_str(), &body));
            }
            Err(report) => error!(doc = %doc_id, "Error downloading other doc: {:?}", report),
        }
    }

    sections
}
