pub mod admins_file;
pub mod roster;
pub mod row_mapping;
pub mod sheets;
pub mod supplemental;

// Re-export commonly used types
pub use roster::*;
