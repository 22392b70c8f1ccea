//! End-to-end screen flows driven through a scripted console.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;

use app_lib::cli::{LoginArgs, RegisterArgs};
use app_lib::console::Console;
use app_lib::{commands, App, AppState, Screen};
use auth_service_lib::registry::ReservedNames;
use auth_service_lib::service::Authenticator;
use auth_service_lib::store::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
use common::{AppError, AppResult};
use domain::{Exercise, UserRecord, FETCH_FAILED_MESSAGE};
use exercise_service_lib::client::MockExerciseSource;

/// Console that replays fixed input and records everything printed.
#[derive(Default)]
struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            output: Vec::new(),
        }
    }

    fn printed(&self, line: &str) -> bool {
        self.output.iter().any(|l| l == line)
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn read_line(&mut self, _prompt: &str) -> AppResult<Option<String>> {
        Ok(self.input.pop_front())
    }

    async fn print(&mut self, line: &str) -> AppResult<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}

fn exercises(count: usize) -> MockExerciseSource {
    let mut source = MockExerciseSource::new();
    source.expect_list_exercises().returning(move || {
        Ok((0..count)
            .map(|i| Exercise {
                id: i.to_string(),
                name: Some(format!("exercise {}", i)),
                body_part: Some("chest".into()),
                target: Some("pectorals".into()),
                gif_url: None,
            })
            .collect())
    });
    source
}

fn state(store: Arc<dyn CredentialStore>, source: MockExerciseSource) -> AppState {
    let auth = Authenticator::new(store, Arc::new(ReservedNames::default()));
    AppState::new(Arc::new(auth), Arc::new(source))
}

#[tokio::test]
async fn test_full_journey() {
    let store = Arc::new(MemoryCredentialStore::new());
    let console = ScriptedConsole::new(&[
        // GetStarted
        "",
        // Login: follow the register link
        "r",
        // Register: mismatch first, then valid
        "", "alice", "a@b.com", "secret", "other",
        "", "alice", "a@b.com", "secret", "secret",
        // Login: wrong password, then correct
        "", "alice", "wrong",
        "", "alice", "secret",
        // Home: open the second card, then log out
        "2",
        "o",
        // Login: quit
        "q",
    ]);

    let mut app = App::new(state(store.clone(), exercises(3)), console);
    app.run().await.unwrap();

    assert_eq!(app.navigation().current(), &Screen::Login);
    assert_eq!(
        store.get().await.unwrap(),
        Some(UserRecord::new("alice", "secret"))
    );

    let console = app.into_console();
    assert!(console.printed("Welcome to Fitness App!"));
    assert!(console.printed("Error: Passwords do not match"));
    assert!(console.printed("Success: Registration Successful"));
    assert!(console.printed("Error: Invalid credentials"));
    assert!(console.printed("Welcome, alice!  [Log Out]"));
    assert!(console.printed(" 3. exercise 2"));
    assert!(console.printed("exercise 1 (Clicks: 1)"));
}

#[tokio::test]
async fn test_login_without_registration() {
    let console = ScriptedConsole::new(&["", "", "alice", "secret"]);

    let mut app = App::new(
        state(Arc::new(MemoryCredentialStore::new()), exercises(1)),
        console,
    );
    app.run().await.unwrap();

    let console = app.into_console();
    assert!(console.printed("Error: No user found. Please register first."));
}

#[tokio::test]
async fn test_reserved_username_rejected() {
    let store = Arc::new(MemoryCredentialStore::new());
    let console = ScriptedConsole::new(&["", "r", "", "user1", "a@b.com", "pw", "pw"]);

    let mut app = App::new(state(store.clone(), exercises(1)), console);
    app.run().await.unwrap();

    assert!(store.get().await.unwrap().is_none());
    assert_eq!(app.navigation().current(), &Screen::Register);
    assert!(app.into_console().printed("Error: Username already exists"));
}

#[tokio::test]
async fn test_menu_letters_are_valid_usernames() {
    let store = Arc::new(MemoryCredentialStore::new());
    let console = ScriptedConsole::new(&[
        "",
        // Register a user literally named "r"
        "r",
        "", "r", "r@b.com", "secret", "secret",
        // Log in as "r"
        "", "r", "secret",
    ]);

    let mut app = App::new(state(store.clone(), exercises(1)), console);
    app.run().await.unwrap();

    assert_eq!(
        app.navigation().current(),
        &Screen::Home {
            username: "r".into()
        }
    );
    assert!(app.into_console().printed("Welcome, r!  [Log Out]"));
}

#[tokio::test]
async fn test_login_as_user_named_q() {
    let store = Arc::new(MemoryCredentialStore::with_record(UserRecord::new(
        "q", "secret",
    )));
    let console = ScriptedConsole::new(&["", "", "q", "secret"]);

    let mut app = App::new(state(store, exercises(1)), console);
    app.run().await.unwrap();

    assert_eq!(
        app.navigation().current(),
        &Screen::Home {
            username: "q".into()
        }
    );
}

#[tokio::test]
async fn test_register_back_returns_to_login() {
    let console = ScriptedConsole::new(&["", "r", "b"]);

    let mut app = App::new(
        state(Arc::new(MemoryCredentialStore::new()), exercises(1)),
        console,
    );
    app.run().await.unwrap();

    assert_eq!(app.navigation().current(), &Screen::Login);
    assert_eq!(app.navigation().depth(), 2);
}

#[tokio::test]
async fn test_home_failure_fetches_once() {
    let store = Arc::new(MemoryCredentialStore::with_record(UserRecord::new(
        "alice", "secret",
    )));
    let mut source = MockExerciseSource::new();
    source
        .expect_list_exercises()
        .times(1)
        .returning(|| Err(AppError::network("unreachable")));

    let console = ScriptedConsole::new(&["", "", "alice", "secret", "1", "1"]);
    let mut app = App::new(state(store, source), console);
    app.run().await.unwrap();

    let console = app.into_console();
    assert!(console.printed(FETCH_FAILED_MESSAGE));
    assert!(!console.output.iter().any(|l| l.starts_with("Welcome,")));
}

#[tokio::test]
async fn test_one_shot_commands_share_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn CredentialStore> = Arc::new(FileCredentialStore::new(dir.path()));

    let mut console = ScriptedConsole::default();
    let registered = commands::register(
        state(store.clone(), exercises(0)),
        RegisterArgs {
            username: "alice".into(),
            email: "a.b@c-d.com".into(),
            password: "secret".into(),
            confirm_password: "secret".into(),
        },
        &mut console,
    )
    .await
    .unwrap();
    assert!(registered);

    let logged_in = commands::login(
        state(store.clone(), exercises(12)),
        LoginArgs {
            username: "alice".into(),
            password: "secret".into(),
        },
        &mut console,
    )
    .await
    .unwrap();
    assert!(logged_in);
    assert!(console.printed("10. exercise 9"));
    assert!(!console.printed("11. exercise 10"));

    let rejected = commands::login(
        state(store, exercises(0)),
        LoginArgs {
            username: "alice".into(),
            password: "Secret".into(),
        },
        &mut console,
    )
    .await
    .unwrap();
    assert!(!rejected);
    assert!(console.printed("Error: Invalid credentials"));
}
