use terraleap_core::asset::Frame;
use terraleap_core::geometry::Rect;
use terraleap_core::render::{Color, Renderer, TextStyle};

/// Renderer with no display. Counts draw calls per frame and reports each
/// presented frame at trace level.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    /// Frames presented so far.
    pub frames: u64,
    sprites: usize,
    rects: usize,
    texts: Vec<String>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for HeadlessRenderer {
    fn draw_frame(&mut self, _frame: &Frame, _screen_x: i32, _screen_y: i32) {
        self.sprites += 1;
    }

    fn draw_rect(&mut self, _rect: Rect, _color: Color) {
        self.rects += 1;
    }

    fn draw_text(&mut self, text: &str, _x: i32, _y: i32, _style: TextStyle) {
        self.texts.push(text.to_string());
    }

    fn present(&mut self) {
        self.frames += 1;
        tracing::trace!(
            frame = self.frames,
            sprites = self.sprites,
            rects = self.rects,
            texts = ?self.texts,
            "present"
        );
        self.sprites = 0;
        self.rects = 0;
        self.texts.clear();
    }
}
