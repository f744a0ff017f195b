use crate::context::AppContext;
use crate::domain::auth::Credentials;
use crate::forms::auth::LoginForm;
use crate::repository::AuthGateway;
use crate::services::ServiceResult;
use crate::ui::{ADMIN_ROUTE, HOME_ROUTE, Navigator, Notifier};

/// Exchanges the admin credentials for a token and opens the dashboard.
pub fn login<R>(
    ctx: &AppContext,
    repo: &R,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
    form: LoginForm,
) -> ServiceResult<()>
where
    R: AuthGateway + ?Sized,
{
    let credentials = Credentials::try_from(form).map_err(|err| {
        log::error!("Failed to validate login form: {err}");
        notifier.error(&err.to_string());
        err
    })?;

    match repo.login(&credentials) {
        Ok(token) => {
            ctx.set_token(token);
            navigator.navigate(ADMIN_ROUTE);
            Ok(())
        }
        Err(err) => {
            log::error!("Failed to log in {}: {err}", credentials.email);
            notifier.error(err.user_message("Login failed"));
            Err(err.into())
        }
    }
}

/// Drops the token and returns to the public home page.
pub fn logout(ctx: &AppContext, navigator: &dyn Navigator) {
    ctx.clear_token();
    navigator.navigate(HOME_ROUTE);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::domain::types::AuthToken;
    use crate::repository::errors::{RepositoryError, RepositoryResult};
    use crate::services::ServiceError;

    #[derive(Default)]
    struct Recorder {
        errors: RefCell<Vec<String>>,
        routes: RefCell<Vec<String>>,
    }

    impl Notifier for Recorder {
        fn success(&self, _message: &str) {}

        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    impl Navigator for Recorder {
        fn navigate(&self, route: &str) {
            self.routes.borrow_mut().push(route.to_string());
        }
    }

    struct Gateway;

    impl AuthGateway for Gateway {
        fn login(&self, credentials: &Credentials) -> RepositoryResult<AuthToken> {
            if credentials.password == "secret" {
                Ok(AuthToken::new("token-1").unwrap())
            } else {
                Err(RepositoryError::Api("Invalid Credentials".to_string()))
            }
        }
    }

    fn form(password: &str) -> LoginForm {
        LoginForm {
            email: "admin@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn login_stores_token_and_opens_dashboard() {
        let ctx = AppContext::new();
        let recorder = Recorder::default();

        login(&ctx, &Gateway, &recorder, &recorder, form("secret")).unwrap();

        assert_eq!(ctx.token().unwrap().as_str(), "token-1");
        assert_eq!(recorder.routes.borrow().as_slice(), [ADMIN_ROUTE.to_string()]);
    }

    #[test]
    fn rejected_login_shows_api_message() {
        let ctx = AppContext::new();
        let recorder = Recorder::default();

        let result = login(&ctx, &Gateway, &recorder, &recorder, form("wrong"));

        assert!(matches!(result, Err(ServiceError::Repository(_))));
        assert!(!ctx.is_authenticated());
        assert!(recorder.routes.borrow().is_empty());
        assert_eq!(
            recorder.errors.borrow().as_slice(),
            ["Invalid Credentials".to_string()]
        );
    }

    #[test]
    fn logout_clears_token() {
        let ctx = AppContext::new();
        ctx.set_token(AuthToken::new("token-1").unwrap());
        let recorder = Recorder::default();

        logout(&ctx, &recorder);

        assert!(!ctx.is_authenticated());
        assert_eq!(recorder.routes.borrow().as_slice(), [HOME_ROUTE.to_string()]);
    }
}
