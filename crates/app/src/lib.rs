//! Fitness Gate application library.
//!
//! Wires the auth and exercise services into four screens joined by a
//! navigation stack, and exposes them through a terminal front end.
//!
//! # Layers
//!
//! - **navigation**: screen routes and the stack navigator
//! - **screens**: per-screen controllers (GetStarted, Register, Login, Home)
//! - **runner**: interactive loop over the navigation stack
//! - **console**: line-oriented terminal I/O
//! - **cli** / **commands**: argument parsing and one-shot commands
//! - **config** / **state**: configuration and service wiring
//!
//! # CLI Usage
//!
//! ```bash
//! # Interactive app
//! cargo run -p app -- run
//!
//! # One-shot register and login
//! cargo run -p app -- register --username alice --email a@b.com \
//!     --password secret --confirm-password secret
//! cargo run -p app -- login --username alice --password secret
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod navigation;
pub mod runner;
pub mod screens;
pub mod state;

// Re-export commonly used types at crate root
pub use config::AppConfig;
pub use navigation::{NavigationStack, Navigator, Screen};
pub use runner::App;
pub use state::AppState;
