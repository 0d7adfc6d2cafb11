use thiserror::Error;

use crate::domain::sheets::a1_notation::A1Notation;

#[derive(Error, Debug)]
pub enum SheetSourceError {
    #[error("Failed to authenticate against the Sheets API")]
    Authentication,
    #[error("Failed to fetch sheet titles")]
    FailedToFetchSheetTitles,
    #[error("Failed to fetch range")]
    FailedToFetchRange,
}

#[async_trait::async_trait]
pub trait SheetSource: Send + Sync {
    /// Identifier of the spreadsheet, used for logging.
    fn spreadsheet_id(&self) -> &str;

    /// Titles of every sheet (tab) in the spreadsheet.
    async fn sheet_titles(&self) -> error_stack::Result<Vec<String>, SheetSourceError>;

    /// Rows of a range as cell text. Empty ranges yield no rows; rows are not
    /// padded, so trailing empty cells are absent.
    async fn read_rows(
        &self,
        range: &A1Notation,
    ) -> error_stack::Result<Vec<Vec<String>>, SheetSourceError>;
}
