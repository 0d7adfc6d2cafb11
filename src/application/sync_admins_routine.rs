use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use error_stack::ResultExt;
use tracing::{info, instrument, Instrument};

use crate::adapters::config::sheets_config::SpreadsheetConfig;
use crate::adapters::output::admins_file_writer::write_admins_file;
use crate::domain::admins_file::render_admins_file;
use crate::domain::roster::Roster;
use crate::ports::document_source::DocumentSource;
use crate::ports::routine::{Routine, RoutineError};
use crate::ports::sheet_source::SheetSource;

use super::roster_collector::collect_roster;
use super::supplemental::fetch_supplements;

/// A configured spreadsheet and the client used to read it.
pub struct RosterSource {
    pub config: SpreadsheetConfig,
    pub sheets: Arc<dyn SheetSource>,
}

impl RosterSource {
    pub fn new(config: SpreadsheetConfig, sheets: Arc<dyn SheetSource>) -> Self {
        Self { config, sheets }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Squad configuration directory receiving `Admins.cfg`.
    pub output_dir: PathBuf,
    pub include_asc_whitelist: bool,
    pub other_docs: Vec<String>,
}

/// Reads every configured spreadsheet, renders the admins file and writes it.
pub struct SyncAdminsRoutine {
    sources: Vec<RosterSource>,
    documents: Arc<dyn DocumentSource>,
    options: SyncOptions,
}

impl std::fmt::Debug for SyncAdminsRoutine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncAdminsRoutine")
            .field("sources", &self.sources.len())
            .field("options", &self.options)
            .finish()
    }
}

impl SyncAdminsRoutine {
    pub fn new(
        sources: Vec<RosterSource>,
        documents: Arc<dyn DocumentSource>,
        options: SyncOptions,
    ) -> Self {
        Self {
            sources,
            documents,
            options,
        }
    }

    /// Sources are read one after another; the first failure aborts.
    ///
    /// The default whitelist group is only added after merging, so an explicit
    /// `Whitelist` row in any source wins over it.
    async fn collect(&self) -> error_stack::Result<Roster, RoutineError> {
        let mut rosters = Vec::with_capacity(self.sources.len());
        for (index, source) in self.sources.iter().enumerate() {
            let roster = collect_roster(source.sheets.as_ref(), &source.config)
                .instrument(tracing::span!(
                    tracing::Level::INFO,
                    "source",
                    index = index,
                    len = self.sources.len()
                ))
                .await
                .change_context(RoutineError::RosterUnavailable {
                    sheet_id: source.config.sheet_id.clone(),
                })?;
            rosters.push(roster);
        }

        let mut roster: Roster = rosters.into_iter().collect();
        roster.roles.ensure_whitelist();
        Ok(roster)
    }

    /// Builds the full file contents without touching the disk.
    #[instrument(skip(self))]
    pub async fn build_admins_file(
        &self,
        generated_at: NaiveDateTime,
    ) -> error_stack::Result<String, RoutineError> {
        let roster = self.collect().await?;

        let supplements = fetch_supplements(
            self.documents.as_ref(),
            self.options.include_asc_whitelist,
            &self.options.other_docs,
        )
        .await;

        Ok(render_admins_file(&roster, &supplements, generated_at))
    }

    #[instrument(skip(self))]
    pub async fn sync(&self, generated_at: NaiveDateTime) -> error_stack::Result<PathBuf, RoutineError> {
        let contents = self.build_admins_file(generated_at).await?;

        let path = write_admins_file(&self.options.output_dir, &contents)
            .await
            .change_context(RoutineError::AdminsFileNotWritten)?;

        info!(path = %path.display(), "admins file written");
        Ok(path)
    }
}

#[async_trait::async_trait]
impl Routine for SyncAdminsRoutine {
    fn name(&self) -> &str {
        "SyncAdminsRoutine"
    }

    async fn run(&self) -> error_stack::Result<(), RoutineError> {
        self.sync(Local::now().naive_local()).await.map(|_| ())
    }
}
