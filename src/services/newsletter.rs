use crate::domain::types::SubscriberEmail;
use crate::forms::newsletter::SubscribeForm;
use crate::repository::SubscriberWriter;
use crate::services::ServiceResult;
use crate::ui::Notifier;

pub fn subscribe<R>(repo: &R, notifier: &dyn Notifier, form: SubscribeForm) -> ServiceResult<()>
where
    R: SubscriberWriter + ?Sized,
{
    let email = SubscriberEmail::try_from(form).map_err(|err| {
        log::error!("Failed to validate subscription form: {err}");
        notifier.error("Please enter a valid email address");
        err
    })?;

    match repo.subscribe(&email) {
        Ok(message) => {
            notifier.success(&message);
            Ok(())
        }
        Err(err) => {
            log::error!("Failed to subscribe {email}: {err}");
            notifier.error(err.user_message("Subscription failed. Please try again."));
            Err(err.into())
        }
    }
}
