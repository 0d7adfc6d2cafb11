pub mod http_document_source;
