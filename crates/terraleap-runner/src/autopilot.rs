//! Input sources that stand in for a keyboard.

use terraleap_core::input::{InputSource, InputState, Key};

/// One keyboard or window event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Down(Key),
    Up(Key),
    Quit,
}

/// Replays a fixed list of `(tick, action)` events. Tick `n` is the `n`-th
/// call to `pump`, counting from zero.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    tick: u64,
    events: Vec<(u64, KeyAction)>,
}

impl ScriptedInput {
    pub fn new(mut events: Vec<(u64, KeyAction)>) -> Self {
        events.sort_by_key(|(t, _)| *t);
        Self { tick: 0, events }
    }

    /// Press and release `key` on the same tick.
    pub fn tap(mut self, tick: u64, key: Key) -> Self {
        self.events.push((tick, KeyAction::Down(key)));
        self.events.push((tick, KeyAction::Up(key)));
        self.events.sort_by_key(|(t, _)| *t);
        self
    }
}

impl InputSource for ScriptedInput {
    fn pump(&mut self, state: &mut InputState) {
        let now = self.tick;
        self.tick += 1;
        for (_, action) in self.events.iter().filter(|(t, _)| *t == now) {
            match action {
                KeyAction::Down(key) => state.on_key_down(*key),
                KeyAction::Up(key) => state.on_key_up(*key),
                KeyAction::Quit => state.on_quit(),
            }
        }
    }
}

/// Runs right, hops every `jump_period` ticks and presses restart every
/// `restart_period` ticks (ignored by the game unless it is over).
#[derive(Debug)]
pub struct Autopilot {
    tick: u64,
    pub jump_period: u64,
    pub restart_period: u64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            tick: 0,
            jump_period: 45,
            restart_period: 300,
        }
    }
}

impl InputSource for Autopilot {
    fn pump(&mut self, state: &mut InputState) {
        self.tick += 1;
        state.on_key_down(Key::Right);
        for (key, period) in [(Key::Space, self.jump_period), (Key::R, self.restart_period)] {
            if period > 0 && self.tick % period == 0 {
                state.on_key_down(key);
            } else {
                state.on_key_up(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use terraleap_core::input::TickInput;

    use super::*;

    #[test]
    fn script_fires_on_its_tick() {
        let mut src = ScriptedInput::new(vec![(2, KeyAction::Down(Key::Left))]).tap(1, Key::Space);
        let mut state = InputState::new();

        src.pump(&mut state);
        assert_eq!(TickInput::sample(&state), TickInput::default());
        state.end_frame();

        src.pump(&mut state);
        assert!(TickInput::sample(&state).jump);
        assert!(!state.is_key_down(Key::Space));
        state.end_frame();

        src.pump(&mut state);
        assert!(TickInput::sample(&state).left);
    }

    #[test]
    fn script_quit() {
        let mut src = ScriptedInput::new(vec![(0, KeyAction::Quit)]);
        let mut state = InputState::new();
        src.pump(&mut state);
        assert!(state.quit_requested);
    }

    #[test]
    fn autopilot_holds_right_and_hops() {
        let mut pilot = Autopilot {
            jump_period: 3,
            ..Autopilot::default()
        };
        let mut state = InputState::new();
        let mut jumps = 0;
        for _ in 0..9 {
            pilot.pump(&mut state);
            let tick = TickInput::sample(&state);
            assert!(tick.right);
            if tick.jump {
                jumps += 1;
            }
            state.end_frame();
        }
        assert_eq!(jumps, 3);
    }
}
