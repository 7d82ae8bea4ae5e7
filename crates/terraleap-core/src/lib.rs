pub mod asset;
pub mod game_trait;
pub mod geometry;
pub mod input;
pub mod mask;
pub mod procedural;
pub mod render;
pub mod time;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use std::time::Duration;

    use crate::asset::Frame;
    use crate::game_trait::{Game, GameEvent};
    use crate::geometry::Rect;
    use crate::input::TickInput;
    use crate::mask::Mask;
    use crate::render::{Color, Renderer, TextStyle};
    use crate::time::FrameClock;

    /// Fully opaque frame of the given size.
    pub fn solid_frame(image: u32, width: u32, height: u32) -> Frame {
        Frame::new(image, Mask::filled(width, height))
    }

    /// Run `n` ticks with the same input, returning all accumulated events.
    pub fn run_game_ticks(game: &mut dyn Game, n: usize, input: TickInput) -> Vec<GameEvent> {
        let mut all_events = Vec::new();
        for _ in 0..n {
            all_events.extend(game.update(&input));
        }
        all_events
    }

    /// Clock that never blocks and records what it was asked to do.
    #[derive(Debug, Default)]
    pub struct ManualClock {
        pub ticks: u64,
        pub sleeps: Vec<Duration>,
    }

    impl FrameClock for ManualClock {
        fn wait_for_tick(&mut self, _tick_rate: u32) {
            self.ticks += 1;
        }

        fn sleep(&mut self, duration: Duration) {
            self.sleeps.push(duration);
        }
    }

    /// A single recorded draw call.
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Frame { image: u32, x: i32, y: i32 },
        Rect { rect: Rect, color: Color },
        Text { text: String, x: i32, y: i32, style: TextStyle },
        Present,
    }

    /// Renderer that stores every call for later assertions.
    #[derive(Debug, Default)]
    pub struct RecordingRenderer {
        pub calls: Vec<DrawCall>,
    }

    impl RecordingRenderer {
        pub fn texts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    DrawCall::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn frames_with_image(&self, image: u32) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, DrawCall::Frame { image: i, .. } if *i == image))
                .count()
        }

        pub fn presents(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, DrawCall::Present))
                .count()
        }
    }

    impl Renderer for RecordingRenderer {
        fn draw_frame(&mut self, frame: &Frame, screen_x: i32, screen_y: i32) {
            self.calls.push(DrawCall::Frame {
                image: frame.image,
                x: screen_x,
                y: screen_y,
            });
        }

        fn draw_rect(&mut self, rect: Rect, color: Color) {
            self.calls.push(DrawCall::Rect { rect, color });
        }

        fn draw_text(&mut self, text: &str, x: i32, y: i32, style: TextStyle) {
            self.calls.push(DrawCall::Text {
                text: text.to_string(),
                x,
                y,
                style,
            });
        }

        fn present(&mut self) {
            self.calls.push(DrawCall::Present);
        }
    }
}
