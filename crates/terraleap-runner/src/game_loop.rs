use serde::Serialize;

use terraleap_core::game_trait::{Game, GameEvent, Outcome};
use terraleap_core::input::{InputSource, InputState, Key, TickInput};
use terraleap_core::render::Renderer;
use terraleap_core::time::FrameClock;

/// What happened over a run, tallied from the game's events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoopSummary {
    pub ticks: u64,
    pub jumps: u32,
    pub coins: u32,
    pub lives_lost: u32,
    pub wins: u32,
    pub losses: u32,
    pub restarts: u32,
    /// The run ended on a quit request rather than the tick limit.
    pub quit: bool,
}

impl LoopSummary {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Jumped { .. } => self.jumps += 1,
            GameEvent::CoinCollected { .. } => self.coins += 1,
            GameEvent::LifeLost { .. } => self.lives_lost += 1,
            GameEvent::GameOver {
                outcome: Outcome::Won,
            } => self.wins += 1,
            GameEvent::GameOver { .. } => self.losses += 1,
            GameEvent::Restarted => self.restarts += 1,
            GameEvent::GoalReached => {},
        }
    }
}

/// Drive `game` at its tick rate until quit or `max_ticks`.
///
/// Each tick: pump input, sample it, update, render, present, then wait for
/// the next tick boundary. A winning tick also draws the victory banner and
/// holds it for the game's win display delay before continuing.
pub fn run_game_loop(
    game: &mut dyn Game,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
    clock: &mut dyn FrameClock,
    max_ticks: Option<u64>,
) -> LoopSummary {
    let mut state = InputState::new();
    let mut summary = LoopSummary::default();
    let tick_rate = game.tick_rate();

    while max_ticks.is_none_or(|max| summary.ticks < max) {
        input.pump(&mut state);
        if state.quit_requested || state.is_key_just_pressed(Key::Escape) {
            tracing::info!(tick = summary.ticks, "quit requested");
            summary.quit = true;
            break;
        }

        let tick = TickInput::sample(&state);
        state.end_frame();
        let events = game.update(&tick);

        let mut won = false;
        for event in &events {
            tracing::debug!(tick = summary.ticks, ?event, "game event");
            won |= matches!(
                event,
                GameEvent::GameOver {
                    outcome: Outcome::Won
                }
            );
            summary.record(event);
        }

        game.render(renderer);
        if won {
            game.render_win_banner(renderer);
        }
        renderer.present();
        if won {
            clock.sleep(game.win_display_delay());
        }

        summary.ticks += 1;
        clock.wait_for_tick(tick_rate);
    }

    summary
}
