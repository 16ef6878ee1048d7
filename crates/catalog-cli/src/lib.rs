//! Command-line front end for the brand catalog cleaner.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
