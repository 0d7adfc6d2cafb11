//! In-memory port implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use error_stack::report;

use crate::domain::sheets::a1_notation::{A1Notation, ToA1Notation};
use crate::domain::sheets::ranges::ColumnSpan;
use crate::ports::document_source::{DocumentSource, DocumentSourceError};
use crate::ports::sheet_source::{SheetSource, SheetSourceError};

pub fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|cell| cell.to_string()).collect()
}

#[derive(Debug, Default)]
pub struct FakeSheetSource {
    pub id: String,
    pub titles: Vec<String>,
    pub ranges: HashMap<String, Vec<Vec<String>>>,
    pub unreachable: bool,
    pub requested_ranges: Mutex<Vec<String>>,
}

impl FakeSheetSource {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub fn with_sheet(mut self, title: &str, span: ColumnSpan, rows: Vec<Vec<String>>) -> Self {
        self.titles.push(title.to_string());
        self.ranges
            .insert(span.to_a1_notation(Some(title)).into(), rows);
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn requested_ranges(&self) -> Vec<String> {
        self.requested_ranges
            .lock()
            .map(|ranges| ranges.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl SheetSource for FakeSheetSource {
    fn spreadsheet_id(&self) -> &str {
        &self.id
    }

    async fn sheet_titles(&self) -> error_stack::Result<Vec<String>, SheetSourceError> {
        if self.unreachable {
            return Err(report!(SheetSourceError::FailedToFetchSheetTitles));
        }
        Ok(self.titles.clone())
    }

    async fn read_rows(
        &self,
        range: &A1Notation,
    ) -> error_stack::Result<Vec<Vec<String>>, SheetSourceError> {
        if self.unreachable {
            return Err(report!(SheetSourceError::FailedToFetchRange));
        }
        if let Ok(mut requested) = self.requested_ranges.lock() {
            requested.push(range.to_string());
        }
        Ok(self.ranges.get(range.as_ref()).cloned().unwrap_or_default())
    }
}

/// Serves the registered bodies; every other URL fails to download.
#[derive(Debug, Default)]
pub struct FakeDocumentSource {
    pub documents: HashMap<String, String>,
    pub requested_urls: Mutex<Vec<String>>,
}

impl FakeDocumentSource {
    pub fn with_document(mut self, url: &str, body: &str) -> Self {
        self.documents.insert(url.to_string(), body.to_string());
        self
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested_urls
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl DocumentSource for FakeDocumentSource {
    async fn fetch_text(&self, url: &str) -> error_stack::Result<String, DocumentSourceError> {
        if let Ok(mut requested) = self.requested_urls.lock() {
            requested.push(url.to_string());
        }
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| report!(DocumentSourceError::FailedToDownload))
    }
}
