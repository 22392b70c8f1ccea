//! Splash screen.

use crate::navigation::{Navigator, Screen};

/// Welcome screen with a single "Get Started" action.
pub struct GetStartedScreen;

impl GetStartedScreen {
    pub const TITLE: &'static str = "Welcome to Fitness App!";

    /// Continue to the login screen
    pub fn get_started(nav: &mut dyn Navigator) {
        nav.navigate(Screen::Login);
    }
}
