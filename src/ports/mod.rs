pub mod document_source;
pub mod routine;
pub mod sheet_source;
