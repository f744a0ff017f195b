use serde::Deserialize;
use validator::Validate;

use crate::domain::types::SubscriberEmail;
use crate::forms::FormError;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Newsletter subscription form.
pub struct SubscribeForm {
    #[validate(email)]
    pub email: String,
}

impl TryFrom<SubscribeForm> for SubscriberEmail {
    type Error = FormError;

    fn try_from(form: SubscribeForm) -> Result<Self, Self::Error> {
        form.validate()?;
        SubscriberEmail::new(form.email).map_err(|_| FormError::InvalidEmail)
    }
}
