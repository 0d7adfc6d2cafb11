use error_stack::ResultExt;
use tracing::instrument;

use crate::domain::sheets::a1_notation::A1Notation;
use crate::ports::sheet_source::{SheetSource, SheetSourceError};

use super::{into_rows::IntoRows, spreadsheet_manager::SpreadsheetManager};

#[async_trait::async_trait]
impl SheetSource for SpreadsheetManager {
    fn spreadsheet_id(&self) -> &str {
        &self.config.sheet_id
    }

    #[instrument]
    async fn sheet_titles(&self) -> error_stack::Result<Vec<String>, SheetSourceError> {
        let (_, spreadsheet) = self
            .hub
            .spreadsheets()
            .get(&self.config.sheet_id)
            .param("fields", "sheets.properties.title")
            .doit()
            .await
            .change_context(SheetSourceError::FailedToFetchSheetTitles)
            .attach_printable_lazy(|| format!("spreadsheet: {}", self.config.sheet_id))?;

        let titles = spreadsheet
            .sheets
            .unwrap_or_default()
            .into_iter()
            .filter_map(|sheet| sheet.properties.and_then(|properties| properties.title))
            .collect();

        Ok(titles)
    }

    #[instrument]
    async fn read_rows(
        &self,
        range: &A1Notation,
    ) -> error_stack::Result<Vec<Vec<String>>, SheetSourceError> {
        let (_, value_range) = self
            .hub
            .spreadsheets()
            .values_get(&self.config.sheet_id, range.as_ref())
            .doit()
            .await
            .change_context(SheetSourceError::FailedToFetchRange)
            .attach_printable_lazy(|| format!("Failed to fetch values for range {}", range))?;

        // Sheets omits `values` entirely when the range holds no data.
        Ok(value_range.values.unwrap_or_default().into_rows())
    }
}
