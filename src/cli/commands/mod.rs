pub mod analyze;
pub mod config;
pub mod search;
pub mod tables;
pub mod tool;
