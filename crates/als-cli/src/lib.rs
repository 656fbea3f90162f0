//! Library components of the `als` command line tool.

pub mod commands;
pub mod logging;
pub mod summary;
