use std::sync::Arc;

use squadsheets::adapters::config::app_config::AppConfig;
use squadsheets::adapters::docs::http_document_source::HttpDocumentSource;
use squadsheets::adapters::sheets::spreadsheet_manager::SpreadsheetManager;
use squadsheets::ports::sheet_source::SheetSourceError;
use squadsheets::{RosterSource, SyncAdminsRoutine, SyncOptions};
use tracing::info;

use crate::cli::Cli;

pub struct SyncAdminsRoutineFactory;

impl SyncAdminsRoutineFactory {
    pub async fn create(
        config: AppConfig,
        cli: &Cli,
    ) -> error_stack::Result<SyncAdminsRoutine, SheetSourceError> {
        let mut sources = Vec::with_capacity(config.google_sheets.len());
        for sheet_config in config.google_sheets {
            info!(sheet_id = %sheet_config.sheet_id, "Initializing Google Sheets client");
            let manager = SpreadsheetManager::new(sheet_config.clone()).await?;
            sources.push(RosterSource::new(sheet_config, Arc::new(manager)));
        }

        Ok(SyncAdminsRoutine::new(
            sources,
            Arc::new(HttpDocumentSource::new()),
            SyncOptions {
                output_dir: cli.config_dir.clone(),
                include_asc_whitelist: cli.whitelist,
                other_docs: config.other_docs.docs,
            },
        ))
    }
}
