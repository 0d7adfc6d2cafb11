pub mod config;
pub mod docs;
pub mod output;
pub mod sheets;
