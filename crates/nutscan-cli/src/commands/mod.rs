pub mod analyze;
pub mod config;
pub mod show;
pub mod strings;
