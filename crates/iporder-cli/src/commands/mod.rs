//! CLI command implementations.

pub mod config;
pub mod export;
pub mod init;
pub mod reorder;
pub mod version;
