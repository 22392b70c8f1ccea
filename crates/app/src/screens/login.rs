//! Login screen.

use std::sync::Arc;

use auth_service_lib::service::AuthService;
use common::AppError;
use domain::LoginForm;

use super::Alert;
use crate::navigation::{Navigator, Screen};

/// Checks credentials and hands the username to the home screen.
pub struct LoginScreen {
    auth: Arc<dyn AuthService>,
}

impl LoginScreen {
    pub const TITLE: &'static str = "Login";
    pub const REGISTER_LINK: &'static str = "Don't have an account? Register here";

    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        Self { auth }
    }

    /// Log in; on success go to `Home` with the username, otherwise alert.
    pub async fn submit(&self, form: LoginForm, nav: &mut dyn Navigator) -> Option<Alert> {
        match self.auth.login(form).await {
            Ok(handoff) => {
                nav.navigate(Screen::Home {
                    username: handoff.username,
                });
                None
            }
            Err(e) => Some(Alert::Error(AppError::from(e).user_message())),
        }
    }

    /// Follow the register link
    pub fn go_to_register(nav: &mut dyn Navigator) {
        nav.navigate(Screen::Register);
    }
}
