use serde::Deserialize;
use validator::Validate;

use crate::domain::auth::Credentials;
use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Admin sign-in form.
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl TryFrom<LoginForm> for Credentials {
    type Error = FormError;

    fn try_from(form: LoginForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Credentials::new(&form.email, form.password).map_err(|err| match err {
            TypeConstraintError::EmptyString => FormError::EmptyPassword,
            _ => FormError::InvalidEmail,
        })
    }
}
