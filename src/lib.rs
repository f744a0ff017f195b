//! Blog front-end core: the public listing engine, admin use cases and the
//! contracts of the data source and presentation collaborators.

pub mod context;
pub mod domain;
pub mod listing;
pub mod models;
pub mod pagination;
pub mod ui;

#[cfg(feature = "app")]
pub mod dto;
#[cfg(feature = "app")]
pub mod error_conversions;
#[cfg(feature = "app")]
pub mod forms;
#[cfg(feature = "app")]
pub mod repository;
#[cfg(feature = "app")]
pub mod services;
