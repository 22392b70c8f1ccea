//! Registration screen.

use std::sync::Arc;

use auth_service_lib::service::AuthService;
use common::AppError;
use domain::{RegisterForm, REGISTRATION_SUCCESS_MESSAGE};

use super::Alert;
use crate::navigation::{Navigator, Screen};

/// Collects a new user's details and registers them.
pub struct RegisterScreen {
    auth: Arc<dyn AuthService>,
}

impl RegisterScreen {
    pub const TITLE: &'static str = "Register";

    pub fn new(auth: Arc<dyn AuthService>) -> Self {
        Self { auth }
    }

    /// Register the form; on success go to the login screen.
    ///
    /// The store write finishes before navigation happens.
    pub async fn submit(&self, form: RegisterForm, nav: &mut dyn Navigator) -> Alert {
        match self.auth.register(form).await {
            Ok(()) => {
                nav.navigate(Screen::Login);
                Alert::Success(REGISTRATION_SUCCESS_MESSAGE.to_string())
            }
            Err(e) => Alert::Error(AppError::from(e).user_message()),
        }
    }
}
