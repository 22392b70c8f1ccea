//! CLI command implementations.
//!
//! One-shot commands reuse the screen controllers, so validation and
//! messages match the interactive app. They return `Ok(false)` when the
//! action was rejected and its alert has already been shown.

use common::{AppError, AppResult};
use domain::{LoginForm, RegisterForm, SessionHandoff};

use crate::cli::{ExercisesArgs, LoginArgs, RegisterArgs};
use crate::console::Console;
use crate::navigation::{NavigationStack, Screen};
use crate::runner::App;
use crate::screens::{HomeScreen, LoginScreen, RegisterScreen};
use crate::state::AppState;

/// Run the interactive app until the user quits.
pub async fn run<C: Console>(state: AppState, console: C) -> AppResult<()> {
    App::new(state, console).run().await
}

/// Register from command-line arguments.
pub async fn register<C: Console>(
    state: AppState,
    args: RegisterArgs,
    console: &mut C,
) -> AppResult<bool> {
    let form = RegisterForm {
        username: args.username,
        email: args.email,
        password: args.password,
        confirm_password: args.confirm_password,
    };

    let mut nav = NavigationStack::new(Screen::Register);
    let alert = RegisterScreen::new(state.auth).submit(form, &mut nav).await;
    console.print(&alert.to_string()).await?;

    Ok(!alert.is_error())
}

/// Log in from command-line arguments and show the home screen once.
pub async fn login<C: Console>(
    state: AppState,
    args: LoginArgs,
    console: &mut C,
) -> AppResult<bool> {
    let mut nav = NavigationStack::new(Screen::Login);
    let screen = LoginScreen::new(state.auth.clone());

    if let Some(alert) = screen
        .submit(LoginForm::new(args.username, args.password), &mut nav)
        .await
    {
        console.print(&alert.to_string()).await?;
        return Ok(false);
    }

    match nav.current().clone() {
        Screen::Home { username } => {
            show_home(state, SessionHandoff::new(username), console).await
        }
        other => Err(AppError::internal(format!(
            "Login finished on unexpected screen {}",
            other.name()
        ))),
    }
}

/// Show the home screen for a username without a credential check.
pub async fn exercises<C: Console>(
    state: AppState,
    args: ExercisesArgs,
    console: &mut C,
) -> AppResult<bool> {
    show_home(state, SessionHandoff::new(args.username), console).await
}

async fn show_home<C: Console>(
    state: AppState,
    session: SessionHandoff,
    console: &mut C,
) -> AppResult<bool> {
    let mut home = HomeScreen::new(session, state.exercises);

    console.print(HomeScreen::LOADING).await?;
    for line in home.render().await {
        console.print(&line).await?;
    }

    Ok(!home.is_failed())
}
