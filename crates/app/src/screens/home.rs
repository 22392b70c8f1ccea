//! Home screen: greeting, exercise list and logout.

use std::sync::Arc;

use domain::SessionHandoff;
use exercise_service_lib::client::ExerciseSource;
use exercise_service_lib::service::{DisplayState, SessionDisplay};

use crate::navigation::{Navigator, Screen};

/// Home screen for a logged-in user.
pub struct HomeScreen {
    display: SessionDisplay,
}

impl HomeScreen {
    pub const HEADER: &'static str = "Fitness Exercises";
    pub const LOADING: &'static str = "Loading Exercises...";

    /// Enter the screen with the username handed over by login
    pub fn new(session: SessionHandoff, source: Arc<dyn ExerciseSource>) -> Self {
        Self {
            display: SessionDisplay::new(session, source),
        }
    }

    /// Fetch (first call only) and render the screen as lines of text.
    pub async fn render(&mut self) -> Vec<String> {
        self.display.load().await;
        self.lines()
    }

    fn lines(&self) -> Vec<String> {
        match self.display.state() {
            DisplayState::Loading => vec![Self::LOADING.to_string()],
            DisplayState::Failed(message) => vec![message.clone()],
            DisplayState::Loaded(cards) => {
                let mut lines = vec![
                    format!("{}  [Log Out]", self.display.greeting()),
                    Self::HEADER.to_string(),
                ];
                for (index, card) in cards.iter().enumerate() {
                    lines.push(format!("{:>2}. {}", index + 1, card.name));
                    lines.push(format!("    {}", card.display_category()));
                    lines.push(format!("    {}", card.description()));
                    lines.push(format!("    {}", card.image));
                }
                lines.push(format!("Clicks: {}", self.display.clicks()));
                lines
            }
        }
    }

    /// Tap the card at a 1-based position; returns the updated click line.
    pub fn select(&mut self, position: usize) -> Option<String> {
        let index = position.checked_sub(1)?;
        let name = self.display.select(index)?.name.clone();
        Some(format!("{} (Clicks: {})", name, self.display.clicks()))
    }

    /// True once the fetch has failed
    pub fn is_failed(&self) -> bool {
        matches!(self.display.state(), DisplayState::Failed(_))
    }

    /// Leave the screen and return to login; storage is untouched.
    pub fn logout(self, nav: &mut dyn Navigator) {
        self.display.logout();
        nav.navigate(Screen::Login);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use domain::{Exercise, FETCH_FAILED_MESSAGE};
    use exercise_service_lib::client::MockExerciseSource;

    use crate::navigation::NavigationStack;

    fn squat() -> Exercise {
        Exercise {
            id: "1".into(),
            name: Some("squat".into()),
            body_part: Some("upper legs".into()),
            target: Some("glutes".into()),
            gif_url: None,
        }
    }

    fn home(source: MockExerciseSource) -> HomeScreen {
        HomeScreen::new(SessionHandoff::new("alice"), Arc::new(source))
    }

    #[tokio::test]
    async fn test_render_loaded() {
        let mut source = MockExerciseSource::new();
        source
            .expect_list_exercises()
            .times(1)
            .returning(|| Ok(vec![squat()]));

        let mut screen = home(source);
        let lines = screen.render().await;

        assert_eq!(lines[0], "Welcome, alice!  [Log Out]");
        assert_eq!(lines[1], "Fitness Exercises");
        assert_eq!(lines[2], " 1. squat");
        assert_eq!(lines[3], "    Upper legs");
        assert_eq!(lines[4], "    Target muscle: glutes");
        assert_eq!(lines[5], "    https://via.placeholder.com/150");
        assert_eq!(lines.last().map(String::as_str), Some("Clicks: 0"));

        // Rendering again does not fetch again
        screen.render().await;
    }

    #[tokio::test]
    async fn test_render_failure() {
        let mut source = MockExerciseSource::new();
        source
            .expect_list_exercises()
            .times(1)
            .returning(|| Err(AppError::network("timeout")));

        let mut screen = home(source);

        assert_eq!(screen.render().await, vec![FETCH_FAILED_MESSAGE.to_string()]);
        assert!(screen.is_failed());
        assert_eq!(screen.render().await, vec![FETCH_FAILED_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn test_select_is_one_based() {
        let mut source = MockExerciseSource::new();
        source.expect_list_exercises().returning(|| Ok(vec![squat()]));

        let mut screen = home(source);
        screen.render().await;

        assert!(screen.select(0).is_none());
        assert_eq!(screen.select(1), Some("squat (Clicks: 1)".to_string()));
        assert!(screen.select(2).is_none());
    }

    #[tokio::test]
    async fn test_logout_returns_to_login() {
        let mut source = MockExerciseSource::new();
        source.expect_list_exercises().never();

        let mut nav = NavigationStack::default();
        nav.navigate(Screen::Login);
        nav.navigate(Screen::Home {
            username: "alice".into(),
        });

        home(source).logout(&mut nav);

        assert_eq!(nav.current(), &Screen::Login);
    }
}
