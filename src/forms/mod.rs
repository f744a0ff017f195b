//! Form definitions backing the blog screens.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod auth;
pub mod blog;
pub mod comment;
pub mod newsletter;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid blog id")]
    InvalidBlogId,

    #[error("invalid title")]
    InvalidTitle,

    #[error("invalid subtitle")]
    InvalidSubTitle,

    #[error("invalid description")]
    InvalidDescription,

    #[error("invalid category")]
    InvalidCategory,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid comment")]
    InvalidContent,

    #[error("password is required")]
    EmptyPassword,

    /// Rejected thumbnail; the message is shown to the user as is.
    #[error("{0}")]
    Image(TypeConstraintError),
}
