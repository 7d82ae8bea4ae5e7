use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::input::TickInput;
use crate::render::Renderer;

/// Contract between a game simulation and the loop driving it.
///
/// The driver owns timing, input sampling and presentation; the game owns
/// every piece of mutable play state.
pub trait Game {
    fn metadata(&self) -> GameMetadata;

    /// Simulation tick rate in Hz.
    fn tick_rate(&self) -> u32 {
        60
    }

    /// Advance one fixed tick. Returns what happened during the tick.
    fn update(&mut self, input: &TickInput) -> Vec<GameEvent>;

    /// Draw the current state. The driver calls `present` afterwards.
    fn render(&self, renderer: &mut dyn Renderer);

    /// Draw the victory banner over an already rendered frame.
    fn render_win_banner(&self, renderer: &mut dyn Renderer);

    /// How long the driver holds the victory banner on screen.
    fn win_display_delay(&self) -> Duration;

    fn is_game_over(&self) -> bool;
}

/// Static description used for window setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetadata {
    pub title: String,
    pub window_width: u32,
    pub window_height: u32,
}

/// How a session ended, or that it is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Playing,
    Won,
    Lost,
}

/// Why a life was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeLossCause {
    Hazard,
    OutOfBounds,
}

/// Events emitted by a game during `update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped { jump_count: u8 },
    LifeLost { cause: LifeLossCause, lives_left: u32 },
    CoinCollected { score: u32 },
    GoalReached,
    GameOver { outcome: Outcome },
    Restarted,
}
