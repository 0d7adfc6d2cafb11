// Public API exports
pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod prettyprint;

#[cfg(test)]
pub(crate) mod testing;

// Re-export key types for easy access
pub use application::sync_admins_routine::{RosterSource, SyncAdminsRoutine, SyncOptions};
pub use domain::roster::{AdminRole, AdminRoles, Roster, User};
pub use ports::routine::{Routine, RoutineError};
