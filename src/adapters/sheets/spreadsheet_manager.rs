use std::fmt::Debug;

use google_sheets4::Sheets;
use tracing::instrument;

use crate::adapters::config::sheets_config::SpreadsheetConfig;
use crate::ports::sheet_source::SheetSourceError;

use super::{
    auth,
    http_client::{self, HttpsConnector},
};

pub struct SpreadsheetManager {
    pub config: SpreadsheetConfig,
    pub(super) hub: Sheets<HttpsConnector>,
}

impl Debug for SpreadsheetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SpreadsheetManager {{ sheet_id: {:?} }}",
            self.config.sheet_id
        )
    }
}

impl SpreadsheetManager {
    #[instrument(name = "SpreadsheetManager::new", skip(config), fields(sheet_id = %config.sheet_id))]
    pub async fn new(config: SpreadsheetConfig) -> error_stack::Result<Self, SheetSourceError> {
        let client = http_client::http_client();
        let auth = auth::auth(&config, client.clone()).await?;
        let hub = Sheets::new(client, auth);

        Ok(SpreadsheetManager { config, hub })
    }
}
