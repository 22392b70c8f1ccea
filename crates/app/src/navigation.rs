//! Navigation controller: a stack of screens with typed parameters.

use std::mem::discriminant;

use tracing::debug;

/// Screens of the application and the parameters each one requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    GetStarted,
    Register,
    Login,
    Home { username: String },
}

impl Screen {
    /// Route name
    pub fn name(&self) -> &'static str {
        match self {
            Screen::GetStarted => "GetStarted",
            Screen::Register => "Register",
            Screen::Login => "Login",
            Screen::Home { .. } => "Home",
        }
    }

    fn same_route(&self, other: &Screen) -> bool {
        discriminant(self) == discriminant(other)
    }
}

/// Receives navigation directives from screens.
pub trait Navigator {
    /// Transition to `screen` immediately.
    fn navigate(&mut self, screen: Screen);
}

/// Stack navigator.
///
/// Navigating to a route already on the stack pops back to it and replaces
/// its parameters; any other route is pushed.
#[derive(Debug, Clone)]
pub struct NavigationStack {
    stack: Vec<Screen>,
}

impl NavigationStack {
    /// Create a stack with `initial` as its only entry
    pub fn new(initial: Screen) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    /// Screen currently shown
    pub fn current(&self) -> &Screen {
        // The stack is never emptied: `back` keeps the root entry
        &self.stack[self.stack.len() - 1]
    }

    /// Number of entries on the stack
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Pop the current screen unless it is the root. Returns true if popped.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Screen::GetStarted)
    }
}

impl Navigator for NavigationStack {
    fn navigate(&mut self, screen: Screen) {
        debug!("Navigating to {}", screen.name());

        match self.stack.iter().position(|s| s.same_route(&screen)) {
            Some(index) => {
                self.stack.truncate(index);
                self.stack.push(screen);
            }
            None => self.stack.push(screen),
        }
    }
}
