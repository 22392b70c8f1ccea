//! Home screen business logic.

mod session_display;

pub use session_display::{DisplayState, SessionDisplay};
