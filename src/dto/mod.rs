//! DTO modules that bridge services with the render layer.

pub mod blog;
pub mod comments;
