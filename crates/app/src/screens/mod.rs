//! Screen controllers.
//!
//! Each controller owns its screen's logic and talks to the navigator; the
//! console front end only collects input and prints what they return.

mod get_started;
mod home;
mod login;
mod register;

pub use get_started::GetStartedScreen;
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use register::RegisterScreen;

/// Message shown to the user after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Success(String),
    Error(String),
}

impl Alert {
    /// True for error alerts
    pub fn is_error(&self) -> bool {
        matches!(self, Alert::Error(_))
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alert::Success(msg) => write!(f, "Success: {}", msg),
            Alert::Error(msg) => write!(f, "Error: {}", msg),
        }
    }
}
