//! Interactive front end: drives the screens from the navigation stack.

use tracing::debug;

use common::AppResult;
use domain::{LoginForm, RegisterForm, SessionHandoff};

use crate::console::Console;
use crate::navigation::{NavigationStack, Screen};
use crate::screens::{GetStartedScreen, HomeScreen, LoginScreen, RegisterScreen};
use crate::state::AppState;

/// Whether the loop keeps going after a screen has run
enum Flow {
    Continue,
    Quit,
}

/// Interactive application bound to a console.
pub struct App<C: Console> {
    state: AppState,
    nav: NavigationStack,
    console: C,
}

impl<C: Console> App<C> {
    /// Create an app starting at the GetStarted screen
    pub fn new(state: AppState, console: C) -> Self {
        Self {
            state,
            nav: NavigationStack::default(),
            console,
        }
    }

    /// Current navigation stack
    pub fn navigation(&self) -> &NavigationStack {
        &self.nav
    }

    /// Give back the console (used to inspect scripted output)
    pub fn into_console(self) -> C {
        self.console
    }

    /// Run screens until the user quits or input ends.
    pub async fn run(&mut self) -> AppResult<()> {
        loop {
            let screen = self.nav.current().clone();
            debug!("Showing {} (stack depth {})", screen.name(), self.nav.depth());

            let flow = match screen {
                Screen::GetStarted => self.get_started().await?,
                Screen::Register => self.register().await?,
                Screen::Login => self.login().await?,
                Screen::Home { username } => self.home(SessionHandoff::new(username)).await?,
            };

            if let Flow::Quit = flow {
                return Ok(());
            }
        }
    }

    async fn get_started(&mut self) -> AppResult<Flow> {
        self.console.print(GetStartedScreen::TITLE).await?;
        match self.prompt("Press Enter to get started, q to quit").await? {
            Some(_) => {
                GetStartedScreen::get_started(&mut self.nav);
                Ok(Flow::Continue)
            }
            None => Ok(Flow::Quit),
        }
    }

    async fn register(&mut self) -> AppResult<Flow> {
        self.console.print(RegisterScreen::TITLE).await?;

        match self.prompt("Enter to fill in the form, b to go back, q to quit").await? {
            None => return Ok(Flow::Quit),
            Some(choice) if choice.trim() == "b" => {
                self.nav.back();
                return Ok(Flow::Continue);
            }
            Some(_) => {}
        }

        let Some(username) = self.field("Username").await? else {
            return Ok(Flow::Quit);
        };
        let Some(email) = self.field("Email").await? else {
            return Ok(Flow::Quit);
        };
        let Some(password) = self.field("Password").await? else {
            return Ok(Flow::Quit);
        };
        let Some(confirm_password) = self.field("Confirm Password").await? else {
            return Ok(Flow::Quit);
        };
        let form = RegisterForm {
            username,
            email,
            password,
            confirm_password,
        };

        let screen = RegisterScreen::new(self.state.auth.clone());
        let alert = screen.submit(form, &mut self.nav).await;
        self.console.print(&alert.to_string()).await?;
        Ok(Flow::Continue)
    }

    async fn login(&mut self) -> AppResult<Flow> {
        self.console.print(LoginScreen::TITLE).await?;
        self.console
            .print(&format!("r: {}", LoginScreen::REGISTER_LINK))
            .await?;

        match self.prompt("Enter to log in, r to register, q to quit").await? {
            None => return Ok(Flow::Quit),
            Some(choice) if choice.trim() == "r" => {
                LoginScreen::go_to_register(&mut self.nav);
                return Ok(Flow::Continue);
            }
            Some(_) => {}
        }

        let Some(username) = self.field("Username").await? else {
            return Ok(Flow::Quit);
        };
        let Some(password) = self.field("Password").await? else {
            return Ok(Flow::Quit);
        };

        let screen = LoginScreen::new(self.state.auth.clone());
        if let Some(alert) = screen
            .submit(LoginForm::new(username, password), &mut self.nav)
            .await
        {
            self.console.print(&alert.to_string()).await?;
        }
        Ok(Flow::Continue)
    }

    async fn home(&mut self, session: SessionHandoff) -> AppResult<Flow> {
        let mut home = HomeScreen::new(session, self.state.exercises.clone());

        self.console.print(HomeScreen::LOADING).await?;
        for line in home.render().await {
            self.console.print(&line).await?;
        }

        loop {
            let prompt = if home.is_failed() {
                "o to log out, q to quit"
            } else {
                "Number to open an exercise, o to log out, q to quit"
            };

            match self.prompt(prompt).await? {
                None => return Ok(Flow::Quit),
                Some(input) if input == "o" => {
                    home.logout(&mut self.nav);
                    return Ok(Flow::Continue);
                }
                Some(input) => {
                    let selected = input.trim().parse::<usize>().ok().and_then(|n| home.select(n));
                    if let Some(line) = selected {
                        self.console.print(&line).await?;
                    }
                }
            }
        }
    }

    /// Read a form field verbatim; only end of input means quit.
    async fn field(&mut self, label: &str) -> AppResult<Option<String>> {
        self.console.read_line(label).await
    }

    /// Read a menu choice; `q` and end of input both mean quit.
    ///
    /// Menus come before form fields, so any text is a valid field value.
    async fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        let line = self.console.read_line(label).await?;
        Ok(line.filter(|l| l.trim() != "q"))
    }
}
