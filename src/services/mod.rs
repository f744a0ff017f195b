//! Use cases of the public blog and the admin panel.
//!
//! Services talk to the data source through the repository traits and report
//! outcomes to the user through the [`crate::ui`] collaborators.

use thiserror::Error;

use crate::context::AppContext;
use crate::repository::errors::RepositoryError;

pub mod auth;
pub mod blog;
pub mod comments;
pub mod listing;
pub mod newsletter;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("form error: {0}")]
    Form(String),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("{0}")]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Admin screens require a token in the shared context.
fn ensure_authenticated(ctx: &AppContext) -> ServiceResult<()> {
    if ctx.is_authenticated() {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}
