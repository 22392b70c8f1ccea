//! Home screen state: the logged-in user's exercise list.
//!
//! The display fetches once. After the fetch settles it stays in that state
//! for the rest of its life; there is no refresh and no retry.

use std::sync::Arc;

use tracing::{info, warn};

use domain::{ExerciseCard, SessionHandoff, EXERCISE_DISPLAY_LIMIT, FETCH_FAILED_MESSAGE};

use crate::client::ExerciseSource;

/// Lifecycle of the exercise list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    /// Fetch not yet settled
    Loading,
    /// Fetch failed; holds the message to show
    Failed(String),
    /// Fetch succeeded; holds at most ten cards
    Loaded(Vec<ExerciseCard>),
}

/// Per-login view over the exercise list.
pub struct SessionDisplay {
    session: SessionHandoff,
    source: Arc<dyn ExerciseSource>,
    state: DisplayState,
    clicks: u32,
}

impl SessionDisplay {
    /// Create a display for a logged-in user. Nothing is fetched yet.
    pub fn new(session: SessionHandoff, source: Arc<dyn ExerciseSource>) -> Self {
        Self {
            session,
            source,
            state: DisplayState::Loading,
            clicks: 0,
        }
    }

    /// Fetch the list on first call; later calls return the settled state.
    pub async fn load(&mut self) -> &DisplayState {
        if self.state != DisplayState::Loading {
            return &self.state;
        }

        self.state = match self.source.list_exercises().await {
            Ok(exercises) => {
                let cards: Vec<ExerciseCard> = exercises
                    .into_iter()
                    .take(EXERCISE_DISPLAY_LIMIT)
                    .map(ExerciseCard::from)
                    .collect();
                info!("Loaded {} exercises for {}", cards.len(), self.session.username);
                DisplayState::Loaded(cards)
            }
            Err(e) => {
                warn!("Exercise fetch failed ({}): {}", e.code(), e);
                DisplayState::Failed(FETCH_FAILED_MESSAGE.to_string())
            }
        };

        &self.state
    }

    /// Current state
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Username handed over by login
    pub fn username(&self) -> &str {
        &self.session.username
    }

    /// Greeting line for the header
    pub fn greeting(&self) -> String {
        format!("Welcome, {}!", self.session.username)
    }

    /// Record a tap on a card; returns the card if the index is valid.
    pub fn select(&mut self, index: usize) -> Option<&ExerciseCard> {
        let DisplayState::Loaded(cards) = &self.state else {
            return None;
        };
        let card = cards.get(index)?;
        self.clicks += 1;
        Some(card)
    }

    /// Number of card taps during this display's lifetime
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    /// End the display. Storage is left untouched.
    pub fn logout(self) {
        info!("User {} logged out", self.session.username);
    }
}
