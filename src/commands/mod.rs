//! CLI subcommands

pub mod init;
pub mod query;
pub mod render;
