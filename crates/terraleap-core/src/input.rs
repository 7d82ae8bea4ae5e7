use std::collections::HashSet;

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Space,
    R,
    Escape,
}

/// Keyboard state, fed by the platform layer between ticks and sampled
/// once per tick.
pub struct InputState {
    /// Keys currently held down.
    pub keys_down: HashSet<Key>,
    /// Keys pressed since the last `end_frame`.
    pub keys_just_pressed: HashSet<Key>,
    /// Window close or equivalent was requested.
    pub quit_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            keys_just_pressed: HashSet::new(),
            quit_requested: false,
        }
    }

    /// Register a key down event. Auto-repeat of a held key is not a new press.
    pub fn on_key_down(&mut self, key: Key) {
        if self.keys_down.insert(key) {
            self.keys_just_pressed.insert(key);
        }
    }

    pub fn on_key_up(&mut self, key: Key) {
        self.keys_down.remove(&key);
    }

    pub fn on_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn is_key_just_pressed(&self, key: Key) -> bool {
        self.keys_just_pressed.contains(&key)
    }

    /// Clear per-tick state. Call after the tick has sampled its input.
    pub fn end_frame(&mut self) {
        self.keys_just_pressed.clear();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-tick input snapshot handed to the simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held: walk left.
    pub left: bool,
    /// Held: walk right.
    pub right: bool,
    /// One-shot: jump pressed this tick.
    pub jump: bool,
    /// One-shot: restart pressed this tick.
    pub restart: bool,
}

impl TickInput {
    pub fn sample(state: &InputState) -> Self {
        Self {
            left: state.is_key_down(Key::Left),
            right: state.is_key_down(Key::Right),
            jump: state.is_key_just_pressed(Key::Space),
            restart: state.is_key_just_pressed(Key::R),
        }
    }
}

/// Platform layer that feeds key events into an [`InputState`].
pub trait InputSource {
    /// Deliver all events that arrived since the previous call.
    fn pump(&mut self, state: &mut InputState);
}
