use crate::domain::types::{AdminEmail, TypeConstraintError};

/// Admin login credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: AdminEmail,
    pub password: String,
}

impl Credentials {
    /// Passwords are kept verbatim, only emptiness is rejected.
    pub fn new(email: &str, password: impl Into<String>) -> Result<Self, TypeConstraintError> {
        let password = password.into();
        if password.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self {
            email: AdminEmail::new(email)?,
            password,
        })
    }
}
