use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoutineError {
    #[error("Unable to retrieve data from spreadsheet {sheet_id}")]
    RosterUnavailable { sheet_id: String },
    #[error("Unable to write the admins file")]
    AdminsFileNotWritten,
}

/// A unit of work the binary runs once per invocation.
#[async_trait::async_trait]
pub trait Routine: Send + Sync {
    fn name(&self) -> &str;

    async fn run(&self) -> error_stack::Result<(), RoutineError>;
}
