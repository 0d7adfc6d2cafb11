pub mod roster_collector;
pub mod supplemental;
pub mod sync_admins_routine;
