//! Wire records and configuration models.

pub mod blog;
pub mod comment;
#[cfg(feature = "app")]
pub mod config;
pub mod data_file;
