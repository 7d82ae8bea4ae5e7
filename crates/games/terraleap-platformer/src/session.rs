use serde::{Deserialize, Serialize};

use terraleap_core::game_trait::{GameEvent, LifeLossCause, Outcome};

use crate::camera::Camera;

/// Per-run bookkeeping: lives, score, outcome and scroll position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub lives: u32,
    pub score: u32,
    pub game_over: bool,
    pub outcome: Outcome,
    pub camera: Camera,
}

impl SessionState {
    pub fn new(starting_lives: u32) -> Self {
        Self {
            lives: starting_lives,
            score: 0,
            game_over: false,
            outcome: Outcome::Playing,
            camera: Camera::default(),
        }
    }

    /// Take one life. Running out ends the session as lost.
    pub fn lose_life(&mut self, cause: LifeLossCause) -> Vec<GameEvent> {
        self.lives = self.lives.saturating_sub(1);
        tracing::debug!(?cause, lives = self.lives, "life lost");
        let mut events = vec![GameEvent::LifeLost {
            cause,
            lives_left: self.lives,
        }];
        if self.lives == 0 {
            events.extend(self.finish(Outcome::Lost));
        }
        events
    }

    pub fn add_score(&mut self, points: u32) -> u32 {
        self.score = self.score.saturating_add(points);
        self.score
    }

    /// End the session. Has no effect once it is already over.
    pub fn finish(&mut self, outcome: Outcome) -> Vec<GameEvent> {
        if self.game_over {
            return Vec::new();
        }
        self.game_over = true;
        self.outcome = outcome;
        tracing::info!(?outcome, score = self.score, lives = self.lives, "game over");
        vec![GameEvent::GameOver { outcome }]
    }

    pub fn reset(&mut self, starting_lives: u32) {
        *self = Self::new(starting_lives);
    }
}
