//! Domain aggregates exposed by the blog service layer.

pub mod auth;
pub mod blog;
pub mod category;
pub mod comment;
pub mod types;
